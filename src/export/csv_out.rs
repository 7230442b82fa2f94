use crate::errors::AppResult;
use crate::export::model::{Column, MetricsExport, headers, to_row};
use crate::export::notify_export_success;
use crate::ui::messages::info;
use std::path::Path;

/// CSV export honoring the caller's column visibility set. Records are
/// written manually (not via serde) because the column set is dynamic.
pub(crate) fn export_csv(rows: &[MetricsExport], columns: &[Column], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(headers(columns))?;
    for row in rows {
        wtr.write_record(to_row(row, columns))?;
    }
    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
