use crate::domain::model::{CanonicalField, ColumnIndexMap};
use crate::utils::error::{EtlError, Result};

/// Locate every required source column in the header row.
///
/// The first exact (case-sensitive, untrimmed) match wins. Unknown columns are
/// ignored; any missing source column fails the whole mapping.
pub fn map_columns<S: AsRef<str>>(header: &[S]) -> Result<ColumnIndexMap> {
    let mut indices = [0usize; 4];
    let mut missing = Vec::new();

    for (slot, field) in indices.iter_mut().zip(CanonicalField::ALL) {
        match header
            .iter()
            .position(|name| name.as_ref() == field.source_name())
        {
            Some(index) => *slot = index,
            None => missing.push(field.source_name().to_string()),
        }
    }

    if !missing.is_empty() {
        tracing::debug!("Header row is missing {:?}", missing);
        return Err(EtlError::MissingColumnError { columns: missing });
    }

    Ok(ColumnIndexMap::from_indices(indices))
}
