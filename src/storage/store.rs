//! In-memory travel collection
//!
//! Keeps travels in an ordered `Vec`. Order is meaningful: it is the order
//! records are printed and written back to the file. Only `add` (through
//! [`TravelStore::insert_sorted`]) and `sort` change it deliberately.

use crate::models::{Price, Travel, TravelId};

/// Ordered collection of travels with unique ids
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TravelStore {
    travels: Vec<Travel>,
}

impl TravelStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store from records in their existing order
    ///
    /// The caller is responsible for the ids being unique.
    pub fn from_travels(travels: Vec<Travel>) -> Self {
        Self { travels }
    }

    /// Insert before the first travel with a greater id, or at the end
    ///
    /// The id must not already be present.
    pub fn insert_sorted(&mut self, travel: Travel) {
        debug_assert!(!self.contains(travel.id));
        let index = self
            .travels
            .iter()
            .position(|t| t.id > travel.id)
            .unwrap_or(self.travels.len());
        self.travels.insert(index, travel);
    }

    /// Get a travel by id
    pub fn find_by_id(&self, id: TravelId) -> Option<&Travel> {
        self.travels.iter().find(|t| t.id == id)
    }

    /// Check if a travel with this id exists
    pub fn contains(&self, id: TravelId) -> bool {
        self.find_by_id(id).is_some()
    }

    /// Replace the travel with this id, keeping its position
    ///
    /// Returns false if there is no such travel.
    pub fn replace(&mut self, id: TravelId, travel: Travel) -> bool {
        match self.travels.iter_mut().find(|t| t.id == id) {
            Some(slot) => {
                *slot = travel;
                true
            }
            None => false,
        }
    }

    /// Remove the travel with this id
    pub fn remove_by_id(&mut self, id: TravelId) -> bool {
        let before = self.travels.len();
        self.travels.retain(|t| t.id != id);
        self.travels.len() != before
    }

    /// Sort ascending by date; travels on the same date keep their order
    pub fn sort_by_date(&mut self) {
        self.travels.sort_by_key(|t| t.date);
    }

    /// Snapshot of travels costing at most `threshold`, in current order
    pub fn filter_by_max_price(&self, threshold: Price) -> Vec<Travel> {
        self.travels
            .iter()
            .filter(|t| t.price <= threshold)
            .cloned()
            .collect()
    }

    /// Mean price, or `None` when there are no travels
    pub fn average_price(&self) -> Option<Price> {
        Price::average(self.travels.iter().map(|t| t.price))
    }

    /// All travels in order
    pub fn as_slice(&self) -> &[Travel] {
        &self.travels
    }

    /// Iterate over travels in order
    pub fn iter(&self) -> impl Iterator<Item = &Travel> {
        self.travels.iter()
    }

    /// Number of travels
    pub fn len(&self) -> usize {
        self.travels.len()
    }

    /// Check if there are no travels
    pub fn is_empty(&self) -> bool {
        self.travels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::init::default_travels;

    fn id(s: &str) -> TravelId {
        TravelId::parse(s).unwrap()
    }

    fn travel(id: &str, date: &str, price: &str) -> Travel {
        Travel::from_fields(&[id, "Riga", date, "1", price, "bus"]).unwrap()
    }

    fn ids(store: &TravelStore) -> Vec<u16> {
        store.iter().map(|t| t.id.value()).collect()
    }

    #[test]
    fn test_insert_sorted_middle() {
        let mut store = TravelStore::from_travels(vec![
            travel("101", "01/01/2022", "1"),
            travel("105", "01/01/2022", "1"),
        ]);
        store.insert_sorted(travel("103", "01/01/2022", "1"));
        assert_eq!(ids(&store), vec![101, 103, 105]);
    }

    #[test]
    fn test_insert_sorted_ends() {
        let mut store = TravelStore::from_travels(default_travels());
        store.insert_sorted(travel("100", "01/01/2022", "1"));
        store.insert_sorted(travel("200", "01/01/2022", "1"));
        assert_eq!(ids(&store), vec![100, 101, 102, 103, 104, 105, 200]);

        let mut empty = TravelStore::new();
        empty.insert_sorted(travel("150", "01/01/2022", "1"));
        assert_eq!(ids(&empty), vec![150]);
    }

    #[test]
    fn test_insert_sorted_only_looks_for_first_greater_id() {
        // Unsorted input: the new record lands before the first greater id
        // and the rest of the order is untouched.
        let mut store = TravelStore::from_travels(vec![
            travel("300", "01/01/2022", "1"),
            travel("100", "01/01/2022", "1"),
        ]);
        store.insert_sorted(travel("200", "01/01/2022", "1"));
        assert_eq!(ids(&store), vec![200, 300, 100]);
    }

    #[test]
    fn test_find_and_contains() {
        let store = TravelStore::from_travels(default_travels());
        assert_eq!(store.find_by_id(id("102")).unwrap().city, "Rome");
        assert!(store.contains(id("105")));
        assert!(!store.contains(id("106")));
        assert!(store.find_by_id(id("999")).is_none());
    }

    #[test]
    fn test_replace_keeps_position() {
        let mut store = TravelStore::from_travels(default_travels());
        let replacement = travel("103", "01/01/2022", "1");

        assert!(store.replace(id("103"), replacement.clone()));
        assert_eq!(store.as_slice()[2], replacement);
        assert_eq!(store.len(), 5);

        assert!(!store.replace(id("999"), travel("999", "01/01/2022", "1")));
        assert_eq!(store.len(), 5);
    }

    #[test]
    fn test_remove_by_id() {
        let mut store = TravelStore::from_travels(default_travels());
        assert!(store.remove_by_id(id("102")));
        assert_eq!(ids(&store), vec![101, 103, 104, 105]);
        assert!(!store.remove_by_id(id("102")));
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn test_sort_by_date() {
        let mut store = TravelStore::from_travels(default_travels());
        store.sort_by_date();
        let cities: Vec<_> = store.iter().map(|t| t.city.as_str()).collect();
        assert_eq!(
            cities,
            vec!["Rome", "Helsinki", "Daugavpils", "New York", "Hamburg"]
        );
    }

    #[test]
    fn test_sort_by_date_is_stable() {
        let mut store = TravelStore::from_travels(vec![
            travel("103", "02/01/2022", "1"),
            travel("102", "01/01/2022", "1"),
            travel("101", "02/01/2022", "1"),
            travel("104", "01/01/2022", "1"),
        ]);
        store.sort_by_date();
        assert_eq!(ids(&store), vec![102, 104, 103, 101]);

        let sorted = store.clone();
        store.sort_by_date();
        assert_eq!(store, sorted);
    }

    #[test]
    fn test_filter_by_max_price() {
        let store = TravelStore::from_travels(default_travels());
        let found = store.filter_by_max_price(Price::parse("300.00").unwrap());
        let cities: Vec<_> = found.iter().map(|t| t.city.as_str()).collect();
        assert_eq!(cities, vec!["Daugavpils", "Rome", "Helsinki"]);

        assert!(store
            .filter_by_max_price(Price::parse_threshold("-1").unwrap())
            .is_empty());
    }

    #[test]
    fn test_average_price() {
        let store = TravelStore::from_travels(default_travels());
        assert_eq!(store.average_price().unwrap().to_string(), "440.20");
        assert_eq!(TravelStore::new().average_price(), None);
    }
}
