use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Create the configuration file and an empty dataset directory.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let data_dir = match &cli.command {
        Commands::Init { data_dir } => data_dir.clone(),
        _ => None,
    };

    let created = Config::init_all(data_dir, cli.test)?;

    if !cli.test {
        success(format!("Config file: {}", Config::config_file().display()));
    }
    success(format!("Dataset directory: {}", created.display()));

    Ok(())
}
