use super::{OutputLine, Record, PROJECTED_FIELDS};
use crate::error::{FixerError, Result};
use tracing::trace;

/// Project every row onto fields 1 and 4, preserving order.
///
/// Fails on the first row with fewer than five fields. Row numbers in the
/// error are 1-based and count data rows only.
pub fn project(rows: &[Record]) -> Result<Vec<OutputLine>> {
    rows.iter()
        .enumerate()
        .map(|(idx, record)| project_record(idx + 1, record))
        .collect()
}

fn project_record(row: usize, record: &Record) -> Result<OutputLine> {
    match (
        record.get(PROJECTED_FIELDS.first),
        record.get(PROJECTED_FIELDS.second),
    ) {
        (Some(first), Some(second)) => {
            trace!("row {}: {:?} -> ({:?}, {:?})", row, record, first, second);
            Ok(OutputLine::from_fields(first, second))
        }
        _ => Err(FixerError::malformed_row(
            row,
            record.len(),
            PROJECTED_FIELDS.required_len(),
        )),
    }
}
