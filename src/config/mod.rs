//! Configuration module for the travels manager
//!
//! Resolves where the data file lives. There is no settings file: the only
//! knob is the data file location.

pub mod paths;

pub use paths::TravelPaths;
