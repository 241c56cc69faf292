use std::path::Path;

use chrono::{DateTime, Local};
use tokio::io::{AsyncWriteExt, BufWriter};

use crate::error::{AppError, AppResult, ExportError};
use crate::metrics::MetricRecord;

pub const CSV_HEADER: &str = "scenario,treatment,iteration,response_time_ms,response_size_bytes";

/// Results filename for a run, suffixed with the run-start timestamp.
#[must_use]
pub fn results_file_name(started_at: &DateTime<Local>) -> String {
    format!("results_{}.csv", started_at.format("%Y%m%d_%H%M%S"))
}

/// Writes the ungrouped record set as CSV. An empty record set produces a
/// valid header-only file.
///
/// # Errors
///
/// Returns an error when the file cannot be created or written.
pub async fn export_csv(path: &Path, records: &[MetricRecord]) -> AppResult<()> {
    let write_err = |source| {
        AppError::export(ExportError::WriteFile {
            path: path.to_path_buf(),
            source,
        })
    };

    let file = tokio::fs::File::create(path).await.map_err(|source| {
        AppError::export(ExportError::CreateFile {
            path: path.to_path_buf(),
            source,
        })
    })?;
    let mut writer = BufWriter::new(file);

    writer
        .write_all(CSV_HEADER.as_bytes())
        .await
        .map_err(write_err)?;
    writer.write_all(b"\n").await.map_err(write_err)?;

    for record in records {
        let line = format!(
            "{},{},{},{},{}\n",
            record.scenario,
            record.treatment,
            record.iteration,
            record.response_time_ms,
            record.response_size_bytes
        );
        writer.write_all(line.as_bytes()).await.map_err(write_err)?;
    }

    writer.flush().await.map_err(write_err)?;
    Ok(())
}
