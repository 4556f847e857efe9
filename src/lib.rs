//! # fixer
//!
//! Reads a CSV file, drops its header row and writes fields 1 and 4 of every
//! remaining row as `"<field 1>, <field 4>"` lines.
//!
//! ## Usage
//!
//! ```bash
//! fixer [-i data.csv] [-o data_fixed.csv] [-c fixer.toml] [-v...]
//! ```
//!
//! ## Modules
//!
//! - `app` - Logging setup and fatal error reporting for the binary
//! - `cli` - Argument parsing and configuration resolution
//! - `config` - Layered configuration (defaults, `fixer.toml`, environment)
//! - `error` - Coded error type shared by every module
//! - `projector` - Load, project and write pipeline
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod projector;

pub use config::ProjectorConfig;
pub use error::{FixerError, Result};
pub use projector::{run, RunSummary};
