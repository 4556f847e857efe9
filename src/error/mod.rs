use std::path::PathBuf;
use thiserror::Error;

pub mod codes;
pub mod helpers;

pub use codes::{describe_error_code, ErrorCode};
pub use helpers::{common, ErrorExt};

/// The unified error type for fixer
#[derive(Error, Debug)]
pub enum FixerError {
    #[error("[E{code:04}] Configuration error: {message}")]
    Config {
        code: u16,
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("[E{code:04}] Input error: {message}")]
    Input {
        code: u16,
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// `row` is 1-based and counts data rows only, the header is excluded.
    #[error("[E{code:04}] Malformed row {row}: found {found} field(s), need at least {required}")]
    MalformedRow {
        code: u16,
        row: usize,
        found: usize,
        required: usize,
    },

    #[error("[E{code:04}] Output error: {message}")]
    Output {
        code: u16,
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl FixerError {
    /// Create a configuration error with default code
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            code: ErrorCode::CONFIG_GENERIC,
            message: message.into(),
            path: None,
            source: None,
        }
    }

    /// Create a configuration error with specific code and path
    pub fn config_with_code(code: u16, message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::Config {
            code,
            message: message.into(),
            path,
            source: None,
        }
    }

    /// Create an input error with default code
    pub fn input(message: impl Into<String>) -> Self {
        Self::Input {
            code: ErrorCode::INPUT_GENERIC,
            message: message.into(),
            path: None,
            source: None,
        }
    }

    /// Create an input error with specific code and path
    pub fn input_with_code(code: u16, message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::Input {
            code,
            message: message.into(),
            path,
            source: None,
        }
    }

    /// Create a malformed row error for the given 1-based data row
    pub fn malformed_row(row: usize, found: usize, required: usize) -> Self {
        Self::MalformedRow {
            code: ErrorCode::ROW_TOO_FEW_FIELDS,
            row,
            found,
            required,
        }
    }

    /// Create an output error with default code
    pub fn output(message: impl Into<String>) -> Self {
        Self::Output {
            code: ErrorCode::OUTPUT_GENERIC,
            message: message.into(),
            path: None,
            source: None,
        }
    }

    /// Create an output error with specific code and path
    pub fn output_with_code(code: u16, message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::Output {
            code,
            message: message.into(),
            path,
            source: None,
        }
    }

    /// Add a source error to this error
    pub fn with_source(
        mut self,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        match &mut self {
            Self::Config { source: src, .. }
            | Self::Input { source: src, .. }
            | Self::Output { source: src, .. } => {
                *src = Some(source.into());
            }
            Self::MalformedRow { .. } => {}
        }
        self
    }

    /// Attach the path the failing operation was working on
    pub fn with_path(mut self, new_path: impl Into<PathBuf>) -> Self {
        match &mut self {
            Self::Config { path, .. } | Self::Input { path, .. } | Self::Output { path, .. } => {
                *path = Some(new_path.into());
            }
            Self::MalformedRow { .. } => {}
        }
        self
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config { .. } => 2,
            Self::Input { .. } => 3,
            Self::MalformedRow { .. } => 4,
            Self::Output { .. } => 5,
        }
    }

    /// Get the error code
    pub fn code(&self) -> u16 {
        match self {
            Self::Config { code, .. }
            | Self::Input { code, .. }
            | Self::MalformedRow { code, .. }
            | Self::Output { code, .. } => *code,
        }
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Config { message, path, .. } => match path {
                Some(p) => format!("Configuration problem in {}: {}", p.display(), message),
                None => format!("Configuration problem: {}", message),
            },
            Self::Input { message, path, .. } => match path {
                Some(p) => format!("Cannot read input {}: {}", p.display(), message),
                None => format!("Cannot read input: {}", message),
            },
            Self::MalformedRow {
                row,
                found,
                required,
                ..
            } => format!(
                "Data row {} has {} field(s) but at least {} are required",
                row, found, required
            ),
            Self::Output { message, path, .. } => match path {
                Some(p) => format!("Cannot write output {}: {}", p.display(), message),
                None => format!("Cannot write output: {}", message),
            },
        }
    }

    /// Get a developer-friendly error message with full chain
    pub fn developer_message(&self) -> String {
        let mut msg = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            msg.push_str(&format!("\n  caused by: {}", cause));
            source = cause.source();
        }
        msg
    }
}

/// Type alias for Results using FixerError
pub type Result<T> = std::result::Result<T, FixerError>;
