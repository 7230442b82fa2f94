mod csv_out;
mod fs_utils;
mod json_out;
pub mod logic;
mod model;
mod pdf;
mod pdf_export;

pub use logic::ExportLogic;
pub use model::{Column, MetricsExport, PDF_COLUMNS};

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Shared completion message for every export format.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Pdf,
}
