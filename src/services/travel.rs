//! Travel service
//!
//! Provides the operations behind each interactive command. Mutating
//! operations check references first, then change the collection, then
//! rewrite the data file.
//!
//! Error contract: `TravelError::Rejected` means nothing changed. Any other
//! error comes from the final save, after the in-memory change was applied.

use log::debug;

use crate::error::{CommandError, TravelError, TravelResult};
use crate::models::{Price, Travel, TravelChanges, TravelId};
use crate::storage::Storage;

/// Service for travel management
pub struct TravelService<'a> {
    storage: &'a mut Storage,
}

impl<'a> TravelService<'a> {
    /// Create a new travel service
    pub fn new(storage: &'a mut Storage) -> Self {
        Self { storage }
    }

    /// All travels in their current order
    pub fn list(&self) -> &[Travel] {
        self.storage.store().as_slice()
    }

    /// Get a travel by id
    pub fn get(&self, id: TravelId) -> Option<&Travel> {
        self.storage.store().find_by_id(id)
    }

    /// Add a travel, keeping it in id order relative to its neighbours
    pub fn add(&mut self, travel: Travel) -> TravelResult<()> {
        if self.storage.store().contains(travel.id) {
            return Err(CommandError::WrongId.into());
        }

        debug!("Adding travel {}", travel);
        self.storage.store_mut().insert_sorted(travel);
        self.storage.save()
    }

    /// Delete a travel by id
    pub fn delete(&mut self, id: TravelId) -> TravelResult<()> {
        if !self.storage.store_mut().remove_by_id(id) {
            return Err(CommandError::WrongId.into());
        }

        debug!("Deleted travel {}", id);
        self.storage.save()
    }

    /// Replace a travel with a copy that has the given changes applied
    ///
    /// Returns the new record.
    pub fn edit(&mut self, id: TravelId, changes: &TravelChanges) -> TravelResult<Travel> {
        let updated = self
            .get(id)
            .map(|current| current.with_changes(changes))
            .ok_or(TravelError::Rejected(CommandError::WrongId))?;

        if changes.is_empty() {
            debug!("Edit of travel {} changes nothing", id);
        }

        self.storage.store_mut().replace(id, updated.clone());
        self.storage.save()?;
        Ok(updated)
    }

    /// Sort all travels by date and persist the new order
    pub fn sort_by_date(&mut self) -> TravelResult<()> {
        self.storage.store_mut().sort_by_date();
        self.storage.save()
    }

    /// Travels costing at most `max_price`
    pub fn find(&self, max_price: Price) -> Vec<Travel> {
        self.storage.store().filter_by_max_price(max_price)
    }

    /// Average price of all travels
    pub fn average_price(&self) -> Result<Price, CommandError> {
        self.storage
            .store()
            .average_price()
            .ok_or(CommandError::NoTravels)
    }
}
