use crate::domain::model::Dataset;
use crate::utils::error::{EtlError, Result};
use csv::{Terminator, WriterBuilder};
use std::fs::File;
use std::path::Path;

/// Write every row to `path`, quoting fields only where the reader needs it.
pub fn write_csv<P: AsRef<Path>>(path: P, dataset: &Dataset) -> Result<()> {
    let path = path.as_ref();
    let shown = path.display().to_string();
    let write_error = |source: csv::Error| EtlError::WriteError {
        path: shown.clone(),
        source,
    };

    let file = File::create(path).map_err(|e| write_error(e.into()))?;
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(file);

    for row in dataset.rows() {
        writer.write_record(row).map_err(write_error)?;
    }
    writer.flush().map_err(|e| write_error(e.into()))?;

    tracing::debug!("Wrote {} row(s) to {}", dataset.len(), shown);
    Ok(())
}

/// `<prefix>_<unix seconds>.csv`
pub fn output_file_name(prefix: &str, timestamp: i64) -> String {
    format!("{}_{}.csv", prefix, timestamp)
}
