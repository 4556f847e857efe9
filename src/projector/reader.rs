use super::Record;
use crate::error::{common, ErrorExt, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Fully materialized input: the header record and every data row after it.
#[derive(Debug, Clone, Default)]
pub struct LoadedInput {
    pub header: Record,
    pub rows: Vec<Record>,
}

/// Open `path` and load every record in it.
///
/// The file handle is dropped before this returns.
pub fn load(path: &Path) -> Result<LoadedInput> {
    debug!("Reading input from {}", path.display());
    let file = File::open(path).map_err(|e| common::input_open_failed(path, e))?;
    load_from_reader(file, path)
}

/// Parse comma-delimited records from `reader`.
///
/// `source` only labels errors. Rows may differ in length; field counts are
/// checked later by [`super::project`]. A blank line is a record with no
/// fields, so a leading blank line becomes the header and a blank line after
/// it becomes a data row that projection rejects.
pub fn load_from_reader<R: Read>(mut reader: R, source: &Path) -> Result<LoadedInput> {
    let mut data = Vec::new();
    reader
        .read_to_end(&mut data)
        .to_input_error("failed to read file")
        .map_err(|e| e.with_path(source))?;

    let mut records = parse_records(&data)
        .map_err(|e| common::input_parse_failed(source, e))?
        .into_iter();

    let header = records
        .next()
        .ok_or_else(|| common::missing_header(source))?;

    Ok(LoadedInput {
        header,
        rows: records.collect(),
    })
}

/// Parse every record and put back an empty record for each blank line.
///
/// The csv reader skips empty lines, so they are recovered from the line
/// breaks between the end of one record's text and the start of the next.
fn parse_records(data: &[u8]) -> csv::Result<Vec<Record>> {
    let parsed = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(data)
        .records()
        .collect::<csv::Result<Vec<Record>>>()?;

    let starts: Vec<usize> = parsed
        .iter()
        .map(|record| content_start(data, record))
        .collect();

    let mut records = Vec::with_capacity(parsed.len());
    let first = starts.first().copied().unwrap_or(data.len());
    push_blank_records(&mut records, line_breaks(&data[..first]));

    for (idx, record) in parsed.into_iter().enumerate() {
        let end = starts.get(idx + 1).copied().unwrap_or(data.len());
        // The first break after the text terminates the record itself.
        let blanks = line_breaks(trailing_breaks(&data[starts[idx]..end])).saturating_sub(1);
        records.push(record);
        push_blank_records(&mut records, blanks);
    }

    Ok(records)
}

/// Offset of the first byte of a record's text, past any line breaks.
fn content_start(data: &[u8], record: &Record) -> usize {
    let pos = record
        .position()
        .map_or(0, |p| p.byte() as usize)
        .min(data.len());
    pos + data[pos..].iter().take_while(|b| is_break(**b)).count()
}

fn trailing_breaks(segment: &[u8]) -> &[u8] {
    let text_end = segment
        .iter()
        .rposition(|b| !is_break(*b))
        .map_or(0, |i| i + 1);
    &segment[text_end..]
}

/// Count line endings, treating `\r\n` as one.
fn line_breaks(bytes: &[u8]) -> usize {
    bytes
        .iter()
        .enumerate()
        .filter(|&(i, &b)| b == b'\n' || (b == b'\r' && bytes.get(i + 1) != Some(&b'\n')))
        .count()
}

fn is_break(b: u8) -> bool {
    b == b'\r' || b == b'\n'
}

fn push_blank_records(records: &mut Vec<Record>, count: usize) {
    records.extend(std::iter::repeat_with(Record::new).take(count));
}
