//! Storage initialization
//!
//! Handles first-run setup: when there is no data file yet, it is created
//! with a fixed starter set of travels.

use log::info;

use crate::error::TravelError;
use crate::models::Travel;

use super::travels::TravelFile;

/// The starter data set, exactly as it is written to disk
pub const DEFAULT_DATA: &str = "\
101;Daugavpils;03/07/2021;5;150.50;TRAIN
102;Rome;15/05/2021;7;300.00;BUS
103;Hamburg;15/09/2021;10;500.50;PLANE
104;Helsinki;10/06/2021;3;250.00;BOAT
105;New York;16/08/2021;5;1000.00;PLANE
";

/// The starter travels, in file order
pub fn default_travels() -> Vec<Travel> {
    DEFAULT_DATA
        .lines()
        .map(|line| {
            let fields: Vec<&str> = line.split(';').collect();
            Travel::from_fields(&fields).expect("built-in travel data is valid")
        })
        .collect()
}

/// Write the starter travels to a fresh data file
///
/// Returns the travels so the caller can use them even if writing failed.
pub fn initialize_storage(file: &TravelFile) -> (Vec<Travel>, Result<(), TravelError>) {
    let travels = default_travels();
    info!(
        "Creating {} with {} default travels",
        file.path().display(),
        travels.len()
    );
    let saved = file.save(&travels);
    (travels, saved)
}
