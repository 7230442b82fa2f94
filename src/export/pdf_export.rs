use crate::errors::{AppError, AppResult};
use crate::export::model::{MetricsExport, PDF_COLUMNS, headers, to_table};
use crate::export::notify_export_success;
use crate::export::pdf::PdfReport;
use crate::ui::messages::info;
use std::path::Path;

/// PDF export, fixed narrow column subset.
pub(crate) fn export_pdf(rows: &[MetricsExport], path: &Path, title: &str) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let mut pdf = PdfReport::new();
    pdf.add_table(title, &headers(PDF_COLUMNS), &to_table(rows, PDF_COLUMNS));

    pdf.save(path)
        .map_err(|e| AppError::Export(format!("PDF export error: {e}")))?;

    notify_export_success("PDF", path);
    Ok(())
}
