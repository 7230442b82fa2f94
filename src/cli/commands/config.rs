use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::fs;

pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        if *print_config {
            let path = Config::config_file();
            let content = fs::read_to_string(&path)
                .map_err(|_| AppError::Config(format!("cannot read {}", path.display())))?;
            info(format!("Configuration file: {}", path.display()));
            println!("{content}");
        }

        if *check {
            let missing = Config::check_file()?;
            if missing.is_empty() {
                success("Configuration file is complete.");
            } else {
                for field in missing {
                    warning(format!("Missing field: {field}"));
                }
            }
        }
    }
    Ok(())
}
