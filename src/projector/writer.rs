use super::OutputLine;
use crate::error::{common, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Create or truncate `path` and write one line per entry.
///
/// A failure part way through leaves whatever was written in place.
pub fn write(path: &Path, lines: &[OutputLine]) -> Result<()> {
    debug!("Writing {} line(s) to {}", lines.len(), path.display());
    let file = File::create(path).map_err(|e| common::output_create_failed(path, e))?;

    let mut out = BufWriter::new(file);
    write_to(&mut out, lines)
        .and_then(|_| out.flush())
        .map_err(|e| common::output_write_failed(path, e))
}

/// Write each line followed by a single `\n`.
pub fn write_to<W: Write>(out: &mut W, lines: &[OutputLine]) -> io::Result<()> {
    for line in lines {
        out.write_all(line.as_str().as_bytes())?;
        out.write_all(b"\n")?;
    }
    Ok(())
}
