//! Vehicle kinds a travel can use

use serde::Serialize;
use std::fmt;

use crate::error::CommandError;

/// Means of transport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Vehicle {
    Plane,
    Bus,
    Train,
    Boat,
}

impl Vehicle {
    /// All vehicle kinds, in declaration order
    pub const ALL: [Vehicle; 4] = [Self::Plane, Self::Bus, Self::Train, Self::Boat];

    /// Parse a vehicle from text (case-insensitive)
    pub fn parse(s: &str) -> Result<Self, CommandError> {
        match s.to_lowercase().as_str() {
            "plane" => Ok(Self::Plane),
            "bus" => Ok(Self::Bus),
            "train" => Ok(Self::Train),
            "boat" => Ok(Self::Boat),
            _ => Err(CommandError::WrongVehicle),
        }
    }

    /// The upper-case name used in the data file and tables
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Plane => "PLANE",
            Self::Bus => "BUS",
            Self::Train => "TRAIN",
            Self::Boat => "BOAT",
        }
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
