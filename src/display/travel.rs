//! Travel display formatting
//!
//! Formats travels, command responses and startup notices for terminal
//! output. Every function returns the text without a trailing newline.

use crate::cli::session::Response;
use crate::models::fields::format_date;
use crate::models::{Price, Travel};
use crate::storage::StartupNotice;

/// Width of the table dividers
const TABLE_WIDTH: usize = 60;

/// Printed when the data file exists but cannot be read
pub const READ_FAILED: &str = "Error reading file.";

/// Printed when the default data file cannot be written
pub const SEED_FAILED: &str = "Error creating file.";

/// Printed when a change could not be saved
pub const SAVE_FAILED: &str = "Error updating file.";

/// Format travels as a fixed-width table
///
/// The header and both dividers are printed even when there are no rows.
pub fn format_travel_table(travels: &[Travel]) -> String {
    let divider = "-".repeat(TABLE_WIDTH);
    let mut lines = Vec::with_capacity(travels.len() + 4);

    lines.push(divider.clone());
    lines.push(format!(
        "{:<4}{:<21}{:<11}{:<6}{:<10}{:<9}",
        "ID", "City", "Date", "Days", "Price", " Vehicle"
    ));
    lines.push(divider.clone());

    for travel in travels {
        lines.push(format_travel_row(travel));
    }

    lines.push(divider);
    lines.join("\n")
}

/// Format a single table row
pub fn format_travel_row(travel: &Travel) -> String {
    format!(
        "{:<4}{:<21}{:<11}{:>6}{:>10}{:<9}",
        travel.id.to_string(),
        travel.city,
        format_date(&travel.date),
        travel.days,
        travel.price.to_string(),
        format!(" {}", travel.vehicle),
    )
}

/// Format the result of the `avg` command
pub fn format_average(price: Price) -> String {
    format!("average={}", price)
}

/// Format the response to one input line
pub fn format_response(response: &Response) -> String {
    match response {
        Response::Table(travels) => format_travel_table(travels),
        Response::Done(status) => status.to_string(),
        Response::Unsaved(status) => format!("{}\n{}", SAVE_FAILED, status),
        Response::Average(price) => format_average(*price),
        Response::Rejected(e) => e.to_string(),
        Response::Exit => String::new(),
    }
}

/// Format a problem found while opening storage
pub fn format_notice(notice: &StartupNotice) -> String {
    match notice {
        StartupNotice::SkippedLine(skipped) => format!("Invalid data format: {}", skipped.text),
        StartupNotice::ReadFailed(_) => READ_FAILED.to_string(),
        StartupNotice::SeedFailed(_) => SEED_FAILED.to_string(),
    }
}
