//! CSV column projection.
//!
//! The pipeline is strictly linear:
//!
//! ```text
//! input file ─▶ load ─▶ (header, rows) ─▶ project ─▶ lines ─▶ write ─▶ output file
//! ```
//!
//! Every row is loaded and projected before the output file is opened, so a
//! malformed row aborts the run without creating or truncating the output.

use crate::config::ProjectorConfig;
use crate::error::Result;
use std::fmt;
use tracing::debug;

pub mod project;
pub mod reader;
pub mod writer;

pub use project::project;
pub use reader::{load, load_from_reader, LoadedInput};
pub use writer::{write, write_to};

/// One parsed row of input.
pub type Record = csv::StringRecord;

/// The two zero-based field positions kept from every data row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldIndexPair {
    pub first: usize,
    pub second: usize,
}

impl FieldIndexPair {
    /// Minimum number of fields a row needs for both positions to exist
    pub const fn required_len(&self) -> usize {
        let max = if self.first > self.second {
            self.first
        } else {
            self.second
        };
        max + 1
    }
}

/// Fields 1 and 4 of each row. Not configurable.
pub const PROJECTED_FIELDS: FieldIndexPair = FieldIndexPair {
    first: 1,
    second: 4,
};

/// Separator placed between the two projected fields.
pub const FIELD_SEPARATOR: &str = ", ";

/// A projected row, `"<field[1]>, <field[4]>"`.
///
/// Fields are concatenated verbatim. No CSV quoting is applied, so a field
/// holding a comma or quote appears as-is in the line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLine(String);

impl OutputLine {
    pub fn from_fields(first: &str, second: &str) -> Self {
        Self(format!("{}{}{}", first, FIELD_SEPARATOR, second))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OutputLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What a completed run produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Data rows read, header excluded
    pub rows_read: usize,
    /// Lines written to the output file
    pub lines_written: usize,
}

/// Run the full pipeline for the given configuration.
pub fn run(config: &ProjectorConfig) -> Result<RunSummary> {
    config.validate()?;

    let input = load(&config.input_path)?;
    debug!(
        "Header has {} field(s); {} data row(s) follow",
        input.header.len(),
        input.rows.len()
    );

    let lines = project(&input.rows)?;
    write(&config.output_path, &lines)?;

    let summary = RunSummary {
        rows_read: input.rows.len(),
        lines_written: lines.len(),
    };
    debug!(
        "Projected {} row(s) from {} into {}",
        summary.lines_written,
        config.input_path.display(),
        config.output_path.display()
    );
    Ok(summary)
}
