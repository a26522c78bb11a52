//! Travels - interactive manager for travel records
//!
//! This library provides the core functionality for the `travels` command
//! line program. It keeps a small ordered collection of travel records in
//! memory and mirrors it to a `;`-delimited text file after every change.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data file path resolution
//! - `error`: Custom error types
//! - `models`: Travel record and field validators
//! - `storage`: Delimited file storage and the in-memory collection
//! - `services`: Business logic layer
//! - `cli`: Command parsing and the interactive session
//! - `display`: Tables, responses and the command menu
//!
//! # Example
//!
//! ```rust,no_run
//! use travels::cli::Session;
//! use travels::config::TravelPaths;
//! use travels::storage::Storage;
//!
//! let (storage, _notices) = Storage::open(TravelPaths::new());
//! let mut session = Session::new(storage);
//! let response = session.execute("avg");
//! println!("{}", travels::display::format_response(&response));
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::TravelError;
