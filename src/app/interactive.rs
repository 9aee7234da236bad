use crate::app::render::{render_error, render_outcome};
use crate::core::client::BestiaryClient;
use crate::domain::model::SearchCriteria;
use crate::domain::ports::Transport;
use crate::utils::error::Result;
use std::io::{BufRead, Write};

const MENU: &str = concat!(
    "\n--- Bestiary SOAP client ---\n",
    "1. Search classes\n",
    "2. List all classes\n",
    "3. Exit\n",
);
const NAME_PROMPT: &str = "Name (or leave blank): ";
const ATTRIBUTE_PROMPT: &str = "Primary attribute (or leave blank): ";

/// Menu loop over any line source. Ends on "3" or end of input, including
/// end of input halfway through the search prompts.
///
/// A failed call is reported and the loop keeps going.
pub async fn run_interactive<T, R, W>(
    client: &BestiaryClient<T>,
    mut input: R,
    mut output: W,
) -> Result<()>
where
    T: Transport,
    R: BufRead,
    W: Write,
{
    loop {
        write!(output, "{}Choose an option: ", MENU)?;
        output.flush()?;

        let Some(choice) = read_line(&mut input)? else {
            writeln!(output)?;
            break;
        };

        let result = match choice.as_str() {
            "1" => {
                let Some(name) = prompt(&mut input, &mut output, NAME_PROMPT)? else {
                    writeln!(output)?;
                    break;
                };
                let Some(attribute) = prompt(&mut input, &mut output, ATTRIBUTE_PROMPT)? else {
                    writeln!(output)?;
                    break;
                };
                client.search(SearchCriteria::new(name, attribute)).await
            }
            "2" => client.list_all().await,
            "3" => {
                writeln!(output, "Exiting.")?;
                break;
            }
            other => {
                tracing::debug!("Invalid menu choice: {:?}", other);
                writeln!(output, "Invalid option. Try again.")?;
                continue;
            }
        };

        match result {
            Ok(outcome) => write!(output, "{}", render_outcome(&outcome))?,
            Err(e) => {
                tracing::error!("Call failed: {}", e);
                write!(output, "{}", render_error(&e))?;
            }
        }
    }
    Ok(())
}

fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> Result<Option<String>> {
    write!(output, "{}", label)?;
    output.flush()?;
    read_line(input)
}
