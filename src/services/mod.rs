//! Service layer for the travels manager
//!
//! The service layer provides business logic on top of the storage layer,
//! handling referential checks and persistence after each change.

pub mod travel;

pub use travel::TravelService;
