//! High-level export flow: derive metrics for the selected window, map them
//! to flat rows, and hand off to the format writer.

use crate::core::logic::{Core, DeriveContext};
use crate::dataset::Dataset;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::csv_out::export_csv;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_out::export_json;
use crate::export::model::{Column, MetricsExport};
use crate::export::pdf_export::export_pdf;
use crate::ui::messages::warning;
use crate::utils::date::parse_period;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Export derived metrics.
    ///
    /// - `range`: `None`, `all`, or a period expression (`YYYY`, `YYYY-MM`,
    ///   `YYYY-MM-DD`, `start:end`)
    /// - `columns`: optional comma-separated visibility list (CSV only; PDF
    ///   keeps its fixed subset, JSON always carries the full shape)
    /// - `user`: restrict to one user id
    #[allow(clippy::too_many_arguments)]
    pub fn export(
        dataset: &Dataset,
        format: ExportFormat,
        file: &str,
        range: &Option<String>,
        columns: &Option<String>,
        user: Option<i64>,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);
        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }
        ensure_writable(path, force)?;

        let bounds = match range {
            None => None,
            Some(r) => parse_period(r)?,
        };

        let resolver = dataset.schedule_resolver();
        let ctx = DeriveContext {
            settings: &dataset.settings,
            resolver: resolver.as_ref(),
            overtime_requests: &dataset.overtime_requests,
        };

        let rows: Vec<MetricsExport> = dataset
            .time_logs
            .iter()
            .filter(|log| user.is_none_or(|u| log.user_id == u))
            .filter(|log| {
                bounds.is_none_or(|(start, end)| {
                    let d = log.work_date();
                    start <= d && d <= end
                })
            })
            .map(|log| MetricsExport::from_metrics(&Core::derive(log, &ctx)))
            .collect();

        if rows.is_empty() {
            warning("No time logs found for the selected range.");
            return Ok(());
        }

        let visible = Column::parse_list(columns.as_deref())?;

        match format {
            ExportFormat::Csv => export_csv(&rows, &visible, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
            ExportFormat::Pdf => {
                let title = build_title(range);
                export_pdf(&rows, path, &title)?;
            }
        }

        Ok(())
    }
}

fn build_title(range: &Option<String>) -> String {
    match range {
        Some(r) if !r.eq_ignore_ascii_case("all") => format!("Punch log metrics - {r}"),
        _ => "Punch log metrics".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pdf_title_reflects_range() {
        assert_eq!(build_title(&None), "Punch log metrics");
        assert_eq!(build_title(&Some("all".into())), "Punch log metrics");
        assert_eq!(
            build_title(&Some("2025-01".into())),
            "Punch log metrics - 2025-01"
        );
    }
}
