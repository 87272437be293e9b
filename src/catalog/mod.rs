//! Flight catalog
//!
//! This module provides the read-only collection of flight offers and the
//! sources it can be loaded from:
//! - Remote JSON feed over HTTP
//! - Local JSON file
//! - In-memory list (tests and demos)

pub mod loader;
pub mod source;

pub use loader::CatalogLoader;
pub use source::{
    ConfiguredSource, FileFlightSource, FlightSource, HttpFlightSource, StaticFlightSource,
    parse_offers,
};

use std::collections::BTreeSet;

use crate::models::{FlightClass, FlightOffer};

/// Most destination suggestions offered for a partial input
pub const MAX_SUGGESTIONS: usize = 8;

/// Flight offers fetched once per session
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlightCatalog {
    offers: Vec<FlightOffer>,
}

impl FlightCatalog {
    #[must_use]
    pub fn new(offers: Vec<FlightOffer>) -> Self {
        Self { offers }
    }

    #[must_use]
    pub fn offers(&self) -> &[FlightOffer] {
        &self.offers
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.offers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.offers.is_empty()
    }

    /// Sorted unique destination names, deduplicated exactly as fetched
    #[must_use]
    pub fn destinations(&self) -> Vec<String> {
        self.offers
            .iter()
            .map(|offer| offer.destination.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// All offers for a destination, ignoring case
    #[must_use]
    pub fn flights_for(&self, destination: &str) -> Vec<&FlightOffer> {
        self.offers
            .iter()
            .filter(|offer| offer.serves(destination))
            .collect()
    }

    /// The offer priced for a destination and class, if the catalog has one
    #[must_use]
    pub fn find_offer(&self, destination: &str, class: FlightClass) -> Option<&FlightOffer> {
        self.offers
            .iter()
            .find(|offer| offer.class == Some(class) && offer.serves(destination))
    }

    /// Destinations containing `query` (case-insensitive), capped at `limit`
    #[must_use]
    pub fn suggestions(&self, query: &str, limit: usize) -> Vec<String> {
        if query.is_empty() {
            return Vec::new();
        }
        let needle = query.to_lowercase();
        self.destinations()
            .into_iter()
            .filter(|destination| destination.to_lowercase().contains(&needle))
            .take(limit)
            .collect()
    }

    /// Price of every class offered for a destination, in class order
    #[must_use]
    pub fn class_prices(&self, destination: &str) -> Vec<(FlightClass, f64)> {
        FlightClass::ALL
            .iter()
            .filter_map(|class| {
                self.find_offer(destination, *class)
                    .map(|offer| (*class, offer.price_usd))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> FlightCatalog {
        FlightCatalog::new(vec![
            FlightOffer::new("Paris", FlightClass::Economy, 650.0),
            FlightOffer::new("Paris", FlightClass::Business, 1200.0),
            FlightOffer::new("Tokyo", FlightClass::First, 3400.0),
            FlightOffer::new("Buenos Aires", FlightClass::Economy, 480.0),
            FlightOffer::new("paris", FlightClass::First, 2100.0),
        ])
    }

    #[test]
    fn test_destinations_sorted_and_unique() {
        let destinations = sample_catalog().destinations();
        // Case-sensitive dedup keeps both spellings of Paris
        assert_eq!(destinations, vec!["Buenos Aires", "Paris", "Tokyo", "paris"]);
    }

    #[test]
    fn test_flights_for_ignores_case() {
        let catalog = sample_catalog();
        let flights = catalog.flights_for("PARIS");
        assert_eq!(flights.len(), 3);
        assert!(catalog.flights_for("Lima").is_empty());
    }

    #[test]
    fn test_find_offer_matches_destination_and_class() {
        let catalog = sample_catalog();
        let offer = catalog.find_offer("paris", FlightClass::Business).unwrap();
        assert_eq!(offer.price_usd, 1200.0);
        assert!(catalog.find_offer("Tokyo", FlightClass::Economy).is_none());
    }

    #[test]
    fn test_suggestions() {
        let catalog = sample_catalog();
        assert_eq!(catalog.suggestions("ar", MAX_SUGGESTIONS), vec!["Paris", "paris"]);
        assert_eq!(catalog.suggestions("AIRES", MAX_SUGGESTIONS), vec!["Buenos Aires"]);
        assert!(catalog.suggestions("", MAX_SUGGESTIONS).is_empty());
        assert_eq!(catalog.suggestions("a", 1).len(), 1);
    }

    #[test]
    fn test_class_prices() {
        let catalog = sample_catalog();
        let prices = catalog.class_prices("Paris");
        assert_eq!(
            prices,
            vec![
                (FlightClass::Economy, 650.0),
                (FlightClass::Business, 1200.0),
                (FlightClass::First, 2100.0),
            ]
        );
    }

    #[test]
    fn test_unclassified_offers_are_listed_but_not_priced() {
        let catalog = FlightCatalog::new(vec![
            FlightOffer::new("Paris", FlightClass::Economy, 650.0),
            FlightOffer::unclassified("Lima", 900.0),
        ]);
        assert_eq!(catalog.destinations(), vec!["Lima", "Paris"]);
        assert_eq!(catalog.flights_for("lima").len(), 1);
        assert!(catalog.class_prices("Lima").is_empty());
        assert!(FlightClass::ALL
            .iter()
            .all(|class| catalog.find_offer("Lima", *class).is_none()));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = FlightCatalog::default();
        assert!(catalog.is_empty());
        assert!(catalog.destinations().is_empty());
        assert!(catalog.class_prices("Paris").is_empty());
    }
}
