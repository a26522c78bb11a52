//! Storage layer for the travels manager
//!
//! The in-memory [`TravelStore`] is the working copy; the [`TravelFile`] is
//! its on-disk mirror, rewritten in full after every change. [`Storage`]
//! owns both so nothing else can touch the file.

pub mod file_io;
pub mod init;
pub mod store;
pub mod travels;

pub use file_io::{read_delimited_file, write_delimited_atomic};
pub use init::initialize_storage;
pub use store::TravelStore;
pub use travels::{LoadOutcome, LoadReport, SkipReason, SkippedLine, TravelFile};

use log::{error, info};

use crate::config::paths::TravelPaths;
use crate::error::TravelError;

/// Something worth telling the user that happened while opening storage
#[derive(Debug)]
pub enum StartupNotice {
    /// A data line was not loaded
    SkippedLine(SkippedLine),
    /// The data file exists but could not be read; defaults were used
    ReadFailed(TravelError),
    /// The default data could not be written
    SeedFailed(TravelError),
}

/// Main storage coordinator owning the travel collection and its file
pub struct Storage {
    paths: TravelPaths,
    file: TravelFile,
    store: TravelStore,
}

impl Storage {
    /// Open storage, seeding the default travels if there is no data file
    ///
    /// Never fails: problems are returned as notices and the collection falls
    /// back to the defaults when the file cannot be used.
    pub fn open(paths: TravelPaths) -> (Self, Vec<StartupNotice>) {
        let file = TravelFile::new(paths.data_file());
        let mut notices = Vec::new();

        let store = match file.load() {
            Ok(LoadOutcome::Loaded(report)) => {
                info!(
                    "Loaded {} travels from {}",
                    report.travels.len(),
                    file.path().display()
                );
                notices.extend(report.skipped.into_iter().map(StartupNotice::SkippedLine));
                TravelStore::from_travels(report.travels)
            }
            Ok(LoadOutcome::Missing) => Self::seed(&file, &mut notices),
            Err(e) => {
                error!("Failed to read {}: {}", file.path().display(), e);
                notices.push(StartupNotice::ReadFailed(e));
                Self::seed(&file, &mut notices)
            }
        };

        (Self { paths, file, store }, notices)
    }

    fn seed(file: &TravelFile, notices: &mut Vec<StartupNotice>) -> TravelStore {
        let (travels, saved) = initialize_storage(file);
        if let Err(e) = saved {
            error!("Failed to create {}: {}", file.path().display(), e);
            notices.push(StartupNotice::SeedFailed(e));
        }
        TravelStore::from_travels(travels)
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &TravelPaths {
        &self.paths
    }

    /// The current travel collection
    pub fn store(&self) -> &TravelStore {
        &self.store
    }

    /// Mutable access to the collection; call [`Storage::save`] afterwards
    pub fn store_mut(&mut self) -> &mut TravelStore {
        &mut self.store
    }

    /// Rewrite the data file from the in-memory collection
    pub fn save(&self) -> Result<(), TravelError> {
        self.file.save(self.store.as_slice()).map_err(|e| {
            error!("Failed to update {}: {}", self.file.path().display(), e);
            e
        })
    }
}
