//! Display formatting for terminal output
//!
//! Provides utilities for formatting travels, command responses and the
//! command menu for terminal display.

pub mod menu;
pub mod travel;

pub use menu::format_menu;
pub use travel::{format_notice, format_response, format_travel_table};
