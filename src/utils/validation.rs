use crate::utils::error::{EtlError, Result};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &Path) -> Result<()> {
    let value = path.to_string_lossy();
    if value.is_empty() {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if value.contains('\0') {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// The prefix becomes part of a file name, so it may not leave the output directory.
pub fn validate_file_prefix(field_name: &str, prefix: &str) -> Result<()> {
    validate_non_empty_string(field_name, prefix)?;

    if prefix.contains(['/', '\\', '\0']) || prefix == "." || prefix == ".." {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: prefix.to_string(),
            reason: "Prefix must be a plain file name without path separators".to_string(),
        });
    }
    Ok(())
}
