use super::{ErrorCode, FixerError};
use std::io;
use std::path::Path;

/// Extension trait for convenient error conversion
pub trait ErrorExt<T> {
    fn to_config_error(self, message: impl Into<String>) -> Result<T, FixerError>;
    fn to_input_error(self, message: impl Into<String>) -> Result<T, FixerError>;
    fn to_output_error(self, message: impl Into<String>) -> Result<T, FixerError>;
}

impl<T, E> ErrorExt<T> for Result<T, E>
where
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    fn to_config_error(self, message: impl Into<String>) -> Result<T, FixerError> {
        self.map_err(|e| FixerError::config(message).with_source(e))
    }

    fn to_input_error(self, message: impl Into<String>) -> Result<T, FixerError> {
        self.map_err(|e| FixerError::input(message).with_source(e))
    }

    fn to_output_error(self, message: impl Into<String>) -> Result<T, FixerError> {
        self.map_err(|e| FixerError::output(message).with_source(e))
    }
}

/// Helper functions for common error scenarios
pub mod common {
    use super::*;

    /// Map a failure to open the input file onto a coded input error
    pub fn input_open_failed(path: &Path, err: io::Error) -> FixerError {
        let code = match err.kind() {
            io::ErrorKind::NotFound => ErrorCode::INPUT_NOT_FOUND,
            io::ErrorKind::PermissionDenied => ErrorCode::INPUT_PERMISSION_DENIED,
            _ => ErrorCode::INPUT_GENERIC,
        };
        FixerError::input_with_code(code, "failed to open file", Some(path.to_path_buf()))
            .with_source(err)
    }

    /// Map a CSV reader failure onto a coded input error
    pub fn input_parse_failed(path: &Path, err: csv::Error) -> FixerError {
        let message = match err.position() {
            Some(pos) => format!("invalid record at line {}", pos.line()),
            None => "invalid record".to_string(),
        };
        FixerError::input_with_code(
            ErrorCode::INPUT_PARSE_ERROR,
            message,
            Some(path.to_path_buf()),
        )
        .with_source(err)
    }

    /// Input with no records at all, not even a header line
    pub fn missing_header(path: &Path) -> FixerError {
        FixerError::input_with_code(
            ErrorCode::INPUT_MISSING_HEADER,
            "file is empty, expected a header row",
            Some(path.to_path_buf()),
        )
    }

    /// Map a failure to create the output file onto a coded output error
    pub fn output_create_failed(path: &Path, err: io::Error) -> FixerError {
        let code = match err.kind() {
            io::ErrorKind::PermissionDenied => ErrorCode::OUTPUT_PERMISSION_DENIED,
            _ => ErrorCode::OUTPUT_CREATE_FAILED,
        };
        FixerError::output_with_code(code, "failed to create file", Some(path.to_path_buf()))
            .with_source(err)
    }

    /// Map a failure while writing lines onto a coded output error
    pub fn output_write_failed(path: &Path, err: io::Error) -> FixerError {
        FixerError::output_with_code(
            ErrorCode::OUTPUT_WRITE_FAILED,
            "failed to write file",
            Some(path.to_path_buf()),
        )
        .with_source(err)
    }

    /// Configuration file named explicitly but absent
    pub fn config_not_found(path: &Path) -> FixerError {
        FixerError::config_with_code(
            ErrorCode::CONFIG_NOT_FOUND,
            "configuration file not found",
            Some(path.to_path_buf()),
        )
    }
}
