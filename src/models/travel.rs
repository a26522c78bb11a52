//! Travel model
//!
//! A travel is one trip: where, when, for how long, at what price and by
//! which vehicle. Records are immutable values; an edit builds a new record
//! from an existing one plus a set of changes.

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

use super::fields::{self, date_format};
use super::ids::TravelId;
use super::price::Price;
use super::vehicle::Vehicle;
use crate::error::CommandError;

/// A single travel record
///
/// Field order matches the column order of the data file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Travel {
    pub id: TravelId,

    /// Normalized city name (see [`fields::format_city`])
    pub city: String,

    #[serde(with = "date_format")]
    pub date: NaiveDate,

    /// Trip length in days, always positive
    pub days: u32,

    /// Never negative
    pub price: Price,

    pub vehicle: Vehicle,
}

impl Travel {
    /// Create a travel record, normalizing the city name
    pub fn new(
        id: TravelId,
        city: &str,
        date: NaiveDate,
        days: u32,
        price: Price,
        vehicle: Vehicle,
    ) -> Self {
        Self {
            id,
            city: fields::format_city(city),
            date,
            days,
            price,
            vehicle,
        }
    }

    /// Build a record from its six text fields, in file/command order
    ///
    /// Fields are checked left to right and the first failure is returned.
    pub fn from_fields(parts: &[&str]) -> Result<Self, CommandError> {
        let [id, city, date, days, price, vehicle] = parts else {
            return Err(CommandError::WrongFieldCount);
        };

        let id = TravelId::parse(id)?;
        let date = fields::parse_date(date)?;
        let days = fields::parse_days(days)?;
        let price = Price::parse(price)?;
        let vehicle = Vehicle::parse(vehicle)?;

        Ok(Self::new(id, city, date, days, price, vehicle))
    }

    /// Produce a new record with the given changes applied
    ///
    /// The id is never changed.
    pub fn with_changes(&self, changes: &TravelChanges) -> Self {
        Self {
            id: self.id,
            city: changes.city.clone().unwrap_or_else(|| self.city.clone()),
            date: changes.date.unwrap_or(self.date),
            days: changes.days.unwrap_or(self.days),
            price: changes.price.unwrap_or(self.price),
            vehicle: changes.vehicle.unwrap_or(self.vehicle),
        }
    }
}

impl fmt::Display for Travel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({}, {} days, {}, {})",
            self.id,
            self.city,
            fields::format_date(&self.date),
            self.days,
            self.price,
            self.vehicle
        )
    }
}

/// The optional fields of an edit; `None` leaves the field unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TravelChanges {
    pub city: Option<String>,
    pub date: Option<NaiveDate>,
    pub days: Option<u32>,
    pub price: Option<Price>,
    pub vehicle: Option<Vehicle>,
}

impl TravelChanges {
    /// Parse edit fields `[city, date, days, price, vehicle]`
    ///
    /// Missing or empty fields stay `None`. Anything past the fifth field is
    /// ignored.
    pub fn from_fields(parts: &[&str]) -> Result<Self, CommandError> {
        let field = |i: usize| parts.get(i).copied().filter(|s| !s.is_empty());

        Ok(Self {
            city: field(0).map(fields::format_city),
            date: field(1).map(fields::parse_date).transpose()?,
            days: field(2).map(fields::parse_days).transpose()?,
            price: field(3).map(Price::parse).transpose()?,
            vehicle: field(4).map(Vehicle::parse).transpose()?,
        })
    }

    /// Check if no field would change
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn daugavpils() -> Travel {
        Travel::from_fields(&["101", "Daugavpils", "03/07/2021", "5", "150.50", "TRAIN"]).unwrap()
    }

    #[test]
    fn test_from_fields() {
        let travel = daugavpils();
        assert_eq!(travel.id, TravelId::parse("101").unwrap());
        assert_eq!(travel.city, "Daugavpils");
        assert_eq!(travel.date, NaiveDate::from_ymd_opt(2021, 7, 3).unwrap());
        assert_eq!(travel.days, 5);
        assert_eq!(travel.price, Price::from_cents(15050));
        assert_eq!(travel.vehicle, Vehicle::Train);
    }

    #[test]
    fn test_from_fields_normalizes_city() {
        let travel =
            Travel::from_fields(&["106", "new-york", "01/01/2022", "2", "10", "plane"]).unwrap();
        assert_eq!(travel.city, "New York");
        assert_eq!(travel.vehicle, Vehicle::Plane);
    }

    #[test]
    fn test_from_fields_first_failure_wins() {
        let result = Travel::from_fields(&["12", "Riga", "bad", "0", "-1", "car"]);
        assert_eq!(result, Err(CommandError::WrongId));

        let result = Travel::from_fields(&["120", "Riga", "01/01/2022", "0", "-1", "car"]);
        assert_eq!(result, Err(CommandError::WrongDayCount));

        let result = Travel::from_fields(&["120", "Riga", "01/01/2022", "1", "1", "car"]);
        assert_eq!(result, Err(CommandError::WrongVehicle));
    }

    #[test]
    fn test_from_fields_wrong_count() {
        let result = Travel::from_fields(&["101", "Riga"]);
        assert_eq!(result, Err(CommandError::WrongFieldCount));
    }

    #[test]
    fn test_with_changes_keeps_unchanged_fields() {
        let travel = daugavpils();
        let changes = TravelChanges {
            days: Some(9),
            vehicle: Some(Vehicle::Bus),
            ..Default::default()
        };

        let edited = travel.with_changes(&changes);
        assert_eq!(edited.id, travel.id);
        assert_eq!(edited.city, travel.city);
        assert_eq!(edited.date, travel.date);
        assert_eq!(edited.days, 9);
        assert_eq!(edited.price, travel.price);
        assert_eq!(edited.vehicle, Vehicle::Bus);
    }

    #[test]
    fn test_empty_changes_are_identity() {
        let travel = daugavpils();
        let changes = TravelChanges::from_fields(&["", "", "", "", ""]).unwrap();
        assert!(changes.is_empty());
        assert_eq!(travel.with_changes(&changes), travel);
    }

    #[test]
    fn test_changes_from_fields() {
        let changes = TravelChanges::from_fields(&["riga", "", "4"]).unwrap();
        assert_eq!(changes.city.as_deref(), Some("Riga"));
        assert_eq!(changes.date, None);
        assert_eq!(changes.days, Some(4));
        assert_eq!(changes.price, None);

        assert_eq!(
            TravelChanges::from_fields(&["", "", "", "", "car"]),
            Err(CommandError::WrongVehicle)
        );
        assert_eq!(
            TravelChanges::from_fields(&["", "", "0"]),
            Err(CommandError::WrongDayCount)
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(
            daugavpils().to_string(),
            "101 Daugavpils (03/07/2021, 5 days, 150.50, TRAIN)"
        );
    }
}
