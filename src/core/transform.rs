use crate::domain::model::{CanonicalField, ColumnIndexMap, Dataset, Row};
use crate::utils::error::{EtlError, Result};

/// Header row of every converted file.
pub fn output_header() -> Row {
    CanonicalField::ALL
        .iter()
        .map(|field| field.canonical_name().to_string())
        .collect()
}

/// Reproject data rows (header excluded) into Date, Payee, Memo, Amount order.
///
/// The result starts with [`output_header`] and keeps one row per input row,
/// in the same order. A row must reach the highest mapped column; `row` in the
/// out-of-range error is 1-based and counts data rows only.
pub fn transform_rows(indices: &ColumnIndexMap, rows: &[Row]) -> Result<Dataset> {
    let mut output = Vec::with_capacity(rows.len() + 1);
    output.push(output_header());

    let max_index = indices.max_index();
    for (position, record) in rows.iter().enumerate() {
        if record.len() <= max_index {
            return Err(EtlError::IndexOutOfRangeError {
                row: position + 1,
                index: max_index,
                len: record.len(),
            });
        }
        output.push(
            indices
                .iter()
                .map(|(_, index)| record[index].clone())
                .collect(),
        );
    }

    Ok(Dataset::new(output))
}
