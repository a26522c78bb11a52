//! Core data models for the travels manager
//!
//! This module contains the travel record and the typed values it is made
//! of, together with the parsers that turn raw field text into them.

pub mod fields;
pub mod ids;
pub mod price;
pub mod travel;
pub mod vehicle;

pub use ids::TravelId;
pub use price::Price;
pub use travel::{Travel, TravelChanges};
pub use vehicle::Vehicle;
