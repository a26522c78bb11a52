//! Travel file adapter
//!
//! Translates between the data file and travel records. Loading is best
//! effort: bad lines are collected in the [`LoadReport`] and skipped, and the
//! file is left as it is until the next save rewrites it.

use std::fmt;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::error::{CommandError, TravelError};
use crate::models::{Travel, TravelId};

use super::file_io::{read_delimited_file, write_delimited_atomic, DelimitedLine};

/// Number of fields on every data line
pub const FIELD_COUNT: usize = 6;

/// Why a line of the data file was not loaded
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Not exactly six fields
    WrongFieldCount(usize),
    /// Six fields, but one of them does not validate
    InvalidField(CommandError),
    /// Same id as an earlier line
    DuplicateId(TravelId),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongFieldCount(n) => write!(f, "expected {} fields, found {}", FIELD_COUNT, n),
            Self::InvalidField(e) => write!(f, "{}", e),
            Self::DuplicateId(id) => write!(f, "duplicate id {}", id),
        }
    }
}

/// A data line that was skipped during load
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    pub line: u64,
    pub text: String,
    pub reason: SkipReason,
}

/// Result of reading an existing data file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Accepted travels, in file order
    pub travels: Vec<Travel>,
    pub skipped: Vec<SkippedLine>,
}

/// What was found at the data file path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// No file at the path yet
    Missing,
    Loaded(LoadReport),
}

/// The on-disk mirror of the travel collection
#[derive(Debug, Clone)]
pub struct TravelFile {
    path: PathBuf,
}

impl TravelFile {
    /// Create an adapter for the data file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the data file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load travels from disk
    pub fn load(&self) -> Result<LoadOutcome, TravelError> {
        let Some(lines) = read_delimited_file(&self.path)? else {
            debug!("No data file at {}", self.path.display());
            return Ok(LoadOutcome::Missing);
        };

        let report = parse_lines(lines);
        for skipped in &report.skipped {
            warn!(
                "Skipping line {} of {} ({}): {}",
                skipped.line,
                self.path.display(),
                skipped.reason,
                skipped.text
            );
        }
        debug!(
            "Loaded {} travels from {}",
            report.travels.len(),
            self.path.display()
        );

        Ok(LoadOutcome::Loaded(report))
    }

    /// Replace the file content with the given travels
    pub fn save(&self, travels: &[Travel]) -> Result<(), TravelError> {
        write_delimited_atomic(&self.path, travels)?;
        debug!("Saved {} travels to {}", travels.len(), self.path.display());
        Ok(())
    }
}

/// Turn raw lines into travels, keeping the first occurrence of each id
fn parse_lines(lines: Vec<DelimitedLine>) -> LoadReport {
    let mut report = LoadReport::default();

    for line in lines {
        let reason = if line.fields.len() != FIELD_COUNT {
            Some(SkipReason::WrongFieldCount(line.fields.len()))
        } else {
            match Travel::from_fields(&line.field_refs()) {
                Ok(travel) if report.travels.iter().any(|t| t.id == travel.id) => {
                    Some(SkipReason::DuplicateId(travel.id))
                }
                Ok(travel) => {
                    report.travels.push(travel);
                    None
                }
                Err(e) => Some(SkipReason::InvalidField(e)),
            }
        };

        if let Some(reason) = reason {
            report.skipped.push(SkippedLine {
                line: line.line,
                text: line.text(),
                reason,
            });
        }
    }

    report
}
