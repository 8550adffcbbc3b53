use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("opening {path}: {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("parsing {path}: {source}")]
    ParseError {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("{path} contains no header row")]
    EmptyInput { path: String },

    #[error("missing required column(s): {}", .columns.join(", "))]
    MissingColumnError { columns: Vec<String> },

    #[error("row {row} has {len} field(s), column index {index} is out of range")]
    IndexOutOfRangeError { row: usize, index: usize, len: usize },

    #[error("writing {path}: {source}")]
    WriteError {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

/// Which step of a run an error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorPhase {
    Config,
    Read,
    Map,
    Transform,
    Write,
}

impl EtlError {
    pub fn phase(&self) -> ErrorPhase {
        match self {
            EtlError::ReadError { .. } | EtlError::ParseError { .. } | EtlError::EmptyInput { .. } => {
                ErrorPhase::Read
            }
            EtlError::MissingColumnError { .. } => ErrorPhase::Map,
            EtlError::IndexOutOfRangeError { .. } => ErrorPhase::Transform,
            EtlError::WriteError { .. } => ErrorPhase::Write,
            EtlError::ConfigValidationError { .. } | EtlError::InvalidConfigValueError { .. } => {
                ErrorPhase::Config
            }
        }
    }

    /// 給使用者看的前綴訊息
    pub fn user_friendly_message(&self) -> String {
        let prefix = match self.phase() {
            ErrorPhase::Config => "Error in configuration",
            ErrorPhase::Read => "Error reading CSV file",
            ErrorPhase::Map => "Error mapping columns",
            ErrorPhase::Transform => "Error transforming rows",
            ErrorPhase::Write => "Error writing to CSV file",
        };
        format!("{}: {}", prefix, self)
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_column_message_lists_all_columns() {
        let err = EtlError::MissingColumnError {
            columns: vec!["Omschrijving-1".to_string(), "Bedrag".to_string()],
        };
        assert_eq!(err.phase(), ErrorPhase::Map);
        assert_eq!(
            err.user_friendly_message(),
            "Error mapping columns: missing required column(s): Omschrijving-1, Bedrag"
        );
    }

    #[test]
    fn test_read_error_prefix() {
        let err = EtlError::ReadError {
            path: "missing.csv".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.phase(), ErrorPhase::Read);
        assert!(err
            .user_friendly_message()
            .starts_with("Error reading CSV file: opening missing.csv"));
    }
}
