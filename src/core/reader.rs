use crate::domain::model::{Dataset, Row};
use crate::utils::error::{EtlError, Result};
use csv::ReaderBuilder;
use std::fs::File;
use std::path::Path;

/// Read a whole comma-delimited file into memory.
///
/// Every record, header included, becomes a [`Row`]. Records with a different
/// field count than the first one are rejected by the CSV parser. Bytes that
/// are not valid UTF-8 are replaced with U+FFFD instead of failing the run.
pub fn read_csv<P: AsRef<Path>>(path: P) -> Result<Dataset> {
    let path = path.as_ref();
    let shown = path.display().to_string();

    let file = File::open(path).map_err(|source| EtlError::ReadError {
        path: shown.clone(),
        source,
    })?;

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(false)
        .from_reader(file);

    let mut rows: Vec<Row> = Vec::new();
    for result in reader.byte_records() {
        let record = result.map_err(|source| EtlError::ParseError {
            path: shown.clone(),
            source,
        })?;
        rows.push(
            record
                .iter()
                .map(|field| String::from_utf8_lossy(field).into_owned())
                .collect(),
        );
    }

    if rows.is_empty() {
        return Err(EtlError::EmptyInput { path: shown });
    }

    tracing::debug!("Read {} row(s) from {}", rows.len(), shown);
    Ok(Dataset::new(rows))
}
