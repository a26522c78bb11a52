//! Travel identifier
//!
//! Ids are always exactly three decimal digits. The newtype keeps them from
//! being mixed up with day counts or other small integers.

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::CommandError;

/// A three-digit travel id
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TravelId(u16);

impl TravelId {
    /// Parse an id from user or file text
    ///
    /// Accepts exactly three ASCII digits, nothing else (no sign, no spaces).
    pub fn parse(s: &str) -> Result<Self, CommandError> {
        if s.len() != 3 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CommandError::WrongId);
        }
        s.parse::<u16>()
            .map(Self)
            .map_err(|_| CommandError::WrongId)
    }

    /// Get the numeric value
    pub const fn value(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for TravelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:03}", self.0)
    }
}

impl FromStr for TravelId {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for TravelId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
