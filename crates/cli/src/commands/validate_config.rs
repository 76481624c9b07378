use std::path::Path;
use std::process;

use crate::config_file::load_config;
use crate::{report_error, OutputFormat, EXIT_INVALID};

pub(crate) fn cmd_validate_config(config_path: &Path, output: OutputFormat, quiet: bool) {
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(msg) => {
            report_error(&msg, output, quiet);
            process::exit(EXIT_INVALID);
        }
    };

    match output {
        OutputFormat::Json => {
            let json = serde_json::json!({
                "valid": true,
                "required_count": config.required_count(),
                "category": config.category(),
                "message": config.message_template(),
                "notification": config.notification(),
            });
            println!(
                "{}",
                serde_json::to_string_pretty(&json).unwrap_or_else(|_| json.to_string())
            );
        }
        OutputFormat::Text => {
            if !quiet {
                println!("Valid guard configuration: {}", config_path.display());
                println!("  required count: {}", config.required_count());
                println!("  category:       {}", config.category());
                println!("  notification:   {}", config.notification());
            }
        }
    }
}
