use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::{Core, DeriveContext};
use crate::core::overtime::validate_request;
use crate::dataset::Dataset;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use crate::utils::formatting::mins2readable;
use serde_json::json;
use std::path::Path;

/// Validate a prospective overtime request against the ceiling the engine
/// computes for the log. Submission itself is the backend's business; on
/// success this prints the request payload that would be posted.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Overtime { log, hours, reason } = cmd {
        let dataset = Dataset::load(Path::new(&cfg.data_dir), cfg)?;
        let time_log = dataset.find_log(*log)?;

        if time_log.time_out.is_none() {
            return Err(AppError::LogStillActive(*log));
        }

        let resolver = dataset.schedule_resolver();
        let ctx = DeriveContext {
            settings: &dataset.settings,
            resolver: resolver.as_ref(),
            overtime_requests: &dataset.overtime_requests,
        };
        let metrics = Core::derive(time_log, &ctx);

        info(format!(
            "Computed overtime ceiling for log {}: {}",
            log,
            mins2readable(metrics.raw_overtime_minutes, false, false)
        ));

        validate_request(metrics.raw_overtime_minutes, *hours, reason.as_deref())?;

        let payload = json!({
            "timeLogId": log,
            "requestedHours": hours,
            "requesterReason": reason,
        });
        success("Request is within the ceiling. Payload to submit:");
        println!("{}", serde_json::to_string_pretty(&payload)?);
    }
    Ok(())
}
