use anyhow::Context;
use bestiary_soap::app::interactive::run_interactive;
use bestiary_soap::app::render::{render_error, render_json, render_outcome};
use bestiary_soap::config::{Command, LogFormat};
use bestiary_soap::utils::error::ErrorCategory;
use bestiary_soap::utils::{logger, validation::Validate};
use bestiary_soap::{BestiaryClient, CliConfig, SearchCriteria, SoapError};
use clap::Parser;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    match cli.log_format {
        LogFormat::Pretty => logger::init_cli_logger(cli.verbose),
        LogFormat::Json => logger::init_json_logger(cli.verbose),
    }

    tracing::info!("Starting bestiary SOAP client v{}", env!("CARGO_PKG_VERSION"));

    let config = match cli.resolve().and_then(|c| c.validate().map(|_| c)) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {}", e);
            eprint!("{}", render_error(&e));
            std::process::exit(exit_code(&e));
        }
    };
    tracing::info!(
        endpoint = %config.service.endpoint,
        timeout_seconds = config.service.timeout_seconds,
        "Configuration loaded"
    );

    let client = BestiaryClient::from_config(&config);

    let (result, json) = match cli.command() {
        Command::Search {
            name,
            attribute,
            json,
        } => (client.search(SearchCriteria::new(name, attribute)).await, json),
        Command::List { json } => (client.list_all().await, json),
        Command::Interactive => {
            let stdin = std::io::stdin();
            run_interactive(&client, stdin.lock(), std::io::stdout())
                .await
                .context("interactive session failed")?;
            return Ok(());
        }
    };

    match result {
        Ok(outcome) if json => println!("{}", render_json(&outcome)?),
        Ok(outcome) => print!("{}", render_outcome(&outcome)),
        Err(e) => {
            tracing::error!("❌ Call failed: {} (Category: {:?})", e, e.category());
            eprint!("{}", render_error(&e));
            std::process::exit(exit_code(&e));
        }
    }

    Ok(())
}

fn exit_code(err: &SoapError) -> i32 {
    match err.category() {
        ErrorCategory::Configuration => 1,
        ErrorCategory::Transport => 2,
        ErrorCategory::Protocol => 3,
        ErrorCategory::System => 4,
    }
}
