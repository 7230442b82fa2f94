use crate::cli::parser::Commands;
use crate::config::Config;
use crate::dataset::Dataset;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        columns,
        user,
        force,
    } = cmd
    {
        let dataset = Dataset::load(Path::new(&cfg.data_dir), cfg)?;
        ExportLogic::export(
            &dataset,
            format.clone(),
            file,
            range,
            columns,
            *user,
            *force,
        )?;
    }
    Ok(())
}
