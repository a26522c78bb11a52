//! Interactive command interpreter
//!
//! This module turns input lines into validated commands and runs them
//! against the storage through the service layer.

pub mod command;
pub mod session;

pub use command::{Command, CommandName};
pub use session::{Response, Session, Status};
