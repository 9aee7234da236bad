use crate::domain::model::CallOutcome;
use crate::utils::error::{Result, SoapError};
use std::fmt::Write;

/// Human-readable report of one call.
pub fn render_outcome(outcome: &CallOutcome) -> String {
    let mut out = String::new();
    match outcome {
        CallOutcome::Records { records } if records.is_empty() => {
            out.push_str("No classes found in the response.\n");
        }
        CallOutcome::Records { records } => {
            out.push_str("Classes found:\n");
            for (i, record) in records.iter().enumerate() {
                let _ = writeln!(out, "--- Class {} ---", i + 1);
                let _ = writeln!(out, "  Name: {}", record.name);
                let _ = writeln!(out, "  Life die: {}", record.life_die);
                let _ = writeln!(out, "  Primary attribute: {}", record.primary_attribute);
                let _ = writeln!(out, "  Focus: {}", record.focus);
            }
        }
        CallOutcome::Fault(fault) => match &fault.message {
            Some(message) => {
                let _ = writeln!(out, "Server error (HTTP {}): {}", fault.status, message);
            }
            None => {
                let _ = writeln!(
                    out,
                    "The server returned an error (HTTP {}), but no <faultstring> was found.",
                    fault.status
                );
            }
        },
    }
    out
}

pub fn render_error(err: &SoapError) -> String {
    let mut out = format!(
        "❌ {}\n💡 {}\n",
        err.user_friendly_message(),
        err.recovery_suggestion()
    );
    if let Some(raw) = err.raw_response() {
        let _ = writeln!(out, "Raw XML:\n{}", raw);
    }
    out
}

pub fn render_json(outcome: &CallOutcome) -> Result<String> {
    Ok(serde_json::to_string_pretty(outcome)?)
}
