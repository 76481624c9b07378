use std::path::Path;
use std::process;

use submit_guard_core::{CollectingNotifier, Outcome, RecordedSubmit, SelectableInput, SubmitGuard};

use crate::config_file::load_config;
use crate::{report_error, OutputFormat, EXIT_BLOCKED, EXIT_INVALID};

pub(crate) fn cmd_check(config_path: &Path, inputs_path: &Path, output: OutputFormat, quiet: bool) {
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(msg) => {
            report_error(&msg, output, quiet);
            process::exit(EXIT_INVALID);
        }
    };

    let inputs_str = match std::fs::read_to_string(inputs_path) {
        Ok(s) => s,
        Err(e) => {
            let msg = format!("error reading inputs '{}': {}", inputs_path.display(), e);
            report_error(&msg, output, quiet);
            process::exit(EXIT_INVALID);
        }
    };

    let inputs = match SelectableInput::list_from_json_str(&inputs_str) {
        Ok(i) => i,
        Err(e) => {
            let msg = format!("error in '{}': {}", inputs_path.display(), e);
            report_error(&msg, output, quiet);
            process::exit(EXIT_INVALID);
        }
    };

    let mut guard = SubmitGuard::new(config, inputs, CollectingNotifier::new());
    let mut event = RecordedSubmit::new();
    let outcome = guard.handle_submit(&mut event);

    match output {
        OutputFormat::Json => {
            let mut json = outcome.to_json();
            json["cancelled"] = serde_json::Value::Bool(event.is_cancelled());
            println!(
                "{}",
                serde_json::to_string_pretty(&json).unwrap_or_else(|_| json.to_string())
            );
        }
        OutputFormat::Text => {
            if !quiet {
                match &outcome {
                    Outcome::Allow { distinct, required } => {
                        println!(
                            "allow: {} distinct card(s) selected, {} required",
                            distinct, required
                        );
                    }
                    Outcome::Block {
                        distinct, required, ..
                    } => {
                        println!(
                            "block: {} distinct card(s) selected, {} required",
                            distinct, required
                        );
                        for message in guard.notifier().messages() {
                            println!("{}", message);
                        }
                    }
                }
            }
        }
    }

    if !outcome.is_allowed() {
        process::exit(EXIT_BLOCKED);
    }
}
