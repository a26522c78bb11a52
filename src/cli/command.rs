//! Command line parsing
//!
//! A raw input line is decoded once into a [`Command`] that carries fully
//! validated arguments. Handlers never look at raw text again.

use std::fmt;

use crate::error::CommandError;
use crate::models::{Price, Travel, TravelChanges, TravelId};
use crate::storage::TravelStore;

/// Separator between the arguments of a command
pub const ARGUMENT_SEPARATOR: char = ';';

/// The name of an interactive command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandName {
    Print,
    Add,
    Del,
    Edit,
    Sort,
    Find,
    Avg,
    Exit,
}

impl CommandName {
    /// All commands, in menu order
    pub const ALL: [CommandName; 8] = [
        Self::Print,
        Self::Add,
        Self::Del,
        Self::Edit,
        Self::Sort,
        Self::Find,
        Self::Avg,
        Self::Exit,
    ];

    /// Parse a lower-case command token
    pub fn parse(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|name| name.as_str() == token)
    }

    /// The command token as typed
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Print => "print",
            Self::Add => "add",
            Self::Del => "del",
            Self::Edit => "edit",
            Self::Sort => "sort",
            Self::Find => "find",
            Self::Avg => "avg",
            Self::Exit => "exit",
        }
    }

    /// Argument layout shown in the menu
    pub const fn arguments(&self) -> &'static str {
        match self {
            Self::Add | Self::Edit => "id;city;date;days;price;vehicle",
            Self::Del => "id",
            Self::Find => "price",
            Self::Print | Self::Sort | Self::Avg | Self::Exit => "",
        }
    }

    /// One-line description shown in the menu
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Print => "View travels",
            Self::Add => "Add new travel",
            Self::Del => "Delete travel",
            Self::Edit => "Update travel",
            Self::Sort => "Sort travels by date",
            Self::Find => "Filter travels by price",
            Self::Avg => "Calculate average price",
            Self::Exit => "Exit",
        }
    }
}

impl fmt::Display for CommandName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A decoded command with validated arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Print,
    Add(Travel),
    Del(TravelId),
    Edit { id: TravelId, changes: TravelChanges },
    Sort,
    Find(Price),
    Avg,
    Exit,
}

impl Command {
    /// Decode one input line
    ///
    /// The line is trimmed and lower-cased, then split into a command token
    /// and a remainder at the first run of whitespace. The remainder is split
    /// on `;` into arguments; trailing empty arguments are dropped except for
    /// `edit`, where an empty field means "leave unchanged". Argument counts
    /// are checked before any field, and fields are checked in order; the
    /// first problem is returned.
    ///
    /// `store` is consulted for id existence: `add` needs a fresh id while
    /// `del` and `edit` need an existing one.
    pub fn parse(line: &str, store: &TravelStore) -> Result<Self, CommandError> {
        let line = line.trim().to_lowercase();

        let (token, remainder) = match line.split_once(char::is_whitespace) {
            Some((token, remainder)) => (token, remainder.trim_start()),
            None => (line.as_str(), ""),
        };

        let args: Vec<&str> = if remainder.is_empty() {
            Vec::new()
        } else {
            remainder.split(ARGUMENT_SEPARATOR).collect()
        };

        let name = CommandName::parse(token).ok_or(CommandError::WrongCommand)?;

        match name {
            CommandName::Print => Ok(Self::Print),
            CommandName::Sort => Ok(Self::Sort),
            CommandName::Avg => Ok(Self::Avg),
            CommandName::Exit => Ok(Self::Exit),
            CommandName::Add => parse_add(without_trailing_empty(&args), store),
            CommandName::Del => parse_del(without_trailing_empty(&args), store),
            CommandName::Edit => parse_edit(&args, store),
            CommandName::Find => parse_find(without_trailing_empty(&args)),
        }
    }

    /// The name of this command
    pub fn name(&self) -> CommandName {
        match self {
            Self::Print => CommandName::Print,
            Self::Add(_) => CommandName::Add,
            Self::Del(_) => CommandName::Del,
            Self::Edit { .. } => CommandName::Edit,
            Self::Sort => CommandName::Sort,
            Self::Find(_) => CommandName::Find,
            Self::Avg => CommandName::Avg,
            Self::Exit => CommandName::Exit,
        }
    }
}

/// `add id;city;date;days;price;vehicle`, all six required and non-empty
fn parse_add(args: &[&str], store: &TravelStore) -> Result<Command, CommandError> {
    if args.len() != 6 || args.iter().any(|arg| arg.is_empty()) {
        return Err(CommandError::WrongFieldCount);
    }

    let id = TravelId::parse(args[0])?;
    if store.contains(id) {
        return Err(CommandError::WrongId);
    }

    Travel::from_fields(args).map(Command::Add)
}

/// `del id`
fn parse_del(args: &[&str], store: &TravelStore) -> Result<Command, CommandError> {
    let [id] = args else {
        return Err(CommandError::WrongFieldCount);
    };

    existing_id(id, store).map(Command::Del)
}

/// `edit id;[city];[date];[days];[price];[vehicle]`
///
/// Between two and seven arguments; empty ones leave the field unchanged and
/// a seventh is ignored.
fn parse_edit(args: &[&str], store: &TravelStore) -> Result<Command, CommandError> {
    if !(2..=7).contains(&args.len()) {
        return Err(CommandError::WrongFieldCount);
    }

    let id = existing_id(args[0], store)?;
    let changes = TravelChanges::from_fields(&args[1..])?;

    Ok(Command::Edit { id, changes })
}

/// `find maxPrice`
fn parse_find(args: &[&str]) -> Result<Command, CommandError> {
    let [max_price] = args else {
        return Err(CommandError::WrongFieldCount);
    };

    Price::parse_threshold(max_price).map(Command::Find)
}

/// `del 101;` is the same as `del 101`
fn without_trailing_empty<'a, 'b>(args: &'a [&'b str]) -> &'a [&'b str] {
    let len = args
        .iter()
        .rposition(|arg| !arg.is_empty())
        .map_or(0, |last| last + 1);
    &args[..len]
}

fn existing_id(text: &str, store: &TravelStore) -> Result<TravelId, CommandError> {
    let id = TravelId::parse(text)?;
    if !store.contains(id) {
        return Err(CommandError::WrongId);
    }
    Ok(id)
}
