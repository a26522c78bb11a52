//! File I/O utilities for `;`-delimited data with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure. The data
//! format has no header row and no quoting: every line is a plain list of
//! fields separated by `;`.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, ErrorKind, Read, Write};
use std::path::{Path, PathBuf};

use csv::{QuoteStyle, Terminator, WriterBuilder};
use serde::Serialize;

use crate::error::TravelError;

/// Field separator of the data file
pub const DELIMITER: u8 = b';';

/// One line of a delimited file, split into fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelimitedLine {
    /// 1-based line number in the file
    pub line: u64,
    pub fields: Vec<String>,
}

impl DelimitedLine {
    /// The line as it appeared in the file
    pub fn text(&self) -> String {
        self.fields.join(";")
    }

    /// Borrow the fields as string slices
    pub fn field_refs(&self) -> Vec<&str> {
        self.fields.iter().map(String::as_str).collect()
    }
}

/// Read one line, without its `\n` or `\r\n` ending
///
/// Invalid UTF-8 is replaced rather than rejected. Returns `None` at end of
/// input.
pub fn read_line_lossy<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
    let mut buf = Vec::new();
    if reader.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }

    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }

    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}

/// Read every line from a delimited source
///
/// Lines may have any number of fields. A blank line is kept as a single
/// empty field so callers can report it. Invalid UTF-8 is replaced rather
/// than rejected so one bad line cannot hide the rest of the file.
pub fn read_delimited<R: Read>(source: R) -> Result<Vec<DelimitedLine>, TravelError> {
    let mut reader = BufReader::new(source);
    let mut lines = Vec::new();

    while let Some(text) = read_line_lossy(&mut reader)
        .map_err(|e| TravelError::Storage(format!("Failed to read data: {}", e)))?
    {
        lines.push(DelimitedLine {
            line: lines.len() as u64 + 1,
            fields: text.split(DELIMITER as char).map(String::from).collect(),
        });
    }

    Ok(lines)
}

/// Read a delimited file, returning `None` if the file doesn't exist
pub fn read_delimited_file<P: AsRef<Path>>(
    path: P,
) -> Result<Option<Vec<DelimitedLine>>, TravelError> {
    let path = path.as_ref();

    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(TravelError::Storage(format!(
                "Failed to open {}: {}",
                path.display(),
                e
            )))
        }
    };

    read_delimited(file).map(Some)
}

/// Write rows as delimited lines (no header, no quoting, `\n` endings)
pub fn write_delimited<W: Write, T: Serialize>(sink: W, rows: &[T]) -> Result<W, TravelError> {
    let mut writer = WriterBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(false)
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(sink);

    for row in rows {
        writer
            .serialize(row)
            .map_err(|e| TravelError::Storage(format!("Failed to serialize data: {}", e)))?;
    }

    writer
        .into_inner()
        .map_err(|e| TravelError::Storage(format!("Failed to flush data: {}", e)))
}

/// Write rows to a file atomically (write to temp, then rename)
///
/// This ensures that the file is either completely written or not modified at all,
/// preventing corruption on crashes or power failures.
pub fn write_delimited_atomic<P, T>(path: P, rows: &[T]) -> Result<(), TravelError>
where
    P: AsRef<Path>,
    T: Serialize,
{
    let path = path.as_ref();

    // Ensure parent directory exists
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            TravelError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Create temp file in same directory (important for atomic rename)
    let temp_path = temp_path_for(path);

    let file = File::create(&temp_path)
        .map_err(|e| TravelError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = write_delimited(BufWriter::new(file), rows)?;

    writer
        .flush()
        .map_err(|e| TravelError::Storage(format!("Failed to flush data: {}", e)))?;

    // Sync to disk before rename
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| TravelError::Storage(format!("Failed to sync data: {}", e)))?;

    drop(writer);

    // Atomic rename
    fs::rename(&temp_path, path).map_err(|e| {
        // Try to clean up temp file if rename fails
        let _ = fs::remove_file(&temp_path);
        TravelError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

/// `db.csv` -> `db.csv.tmp`, next to the target
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("data"));
    name.push(".tmp");
    path.with_file_name(name)
}
