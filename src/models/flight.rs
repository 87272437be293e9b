//! Flight offer model as published by the flight catalog

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::GlobetrotterError;

/// Cabin class of a flight offer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FlightClass {
    #[default]
    Economy,
    Business,
    #[serde(rename = "First Class")]
    First,
}

impl FlightClass {
    /// All classes in display order
    pub const ALL: [FlightClass; 3] = [FlightClass::Economy, FlightClass::Business, FlightClass::First];

    /// Class for an exact catalog feed name; feed names are not normalized
    #[must_use]
    pub fn from_wire(name: &str) -> Option<FlightClass> {
        FlightClass::ALL
            .into_iter()
            .find(|class| class.label() == name)
    }

    /// Label shown to travelers, identical to the catalog feed name
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            FlightClass::Economy => "Economy",
            FlightClass::Business => "Business",
            FlightClass::First => "First Class",
        }
    }
}

impl fmt::Display for FlightClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FlightClass {
    type Err = GlobetrotterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "economy" => Ok(FlightClass::Economy),
            "business" => Ok(FlightClass::Business),
            "first" | "first class" => Ok(FlightClass::First),
            other => Err(GlobetrotterError::validation(format!(
                "Unknown flight class '{other}'. Must be one of: economy, business, first"
            ))),
        }
    }
}

/// A flight offer as fetched. Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightOffer {
    pub destination: String,
    /// `None` when the feed names a class that is not sold; such offers are
    /// listed but never priced
    #[serde(rename = "class")]
    pub class: Option<FlightClass>,
    #[serde(rename = "priceUSD")]
    pub price_usd: f64,
}

impl FlightOffer {
    #[must_use]
    pub fn new(destination: impl Into<String>, class: FlightClass, price_usd: f64) -> Self {
        Self {
            destination: destination.into(),
            class: Some(class),
            price_usd,
        }
    }

    #[must_use]
    pub fn unclassified(destination: impl Into<String>, price_usd: f64) -> Self {
        Self {
            destination: destination.into(),
            class: None,
            price_usd,
        }
    }

    /// Case-insensitive destination match
    #[must_use]
    pub fn serves(&self, destination: &str) -> bool {
        self.destination.to_lowercase() == destination.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Economy", FlightClass::Economy)]
    #[case("business", FlightClass::Business)]
    #[case("First Class", FlightClass::First)]
    #[case(" first ", FlightClass::First)]
    fn test_flight_class_from_str(#[case] input: &str, #[case] expected: FlightClass) {
        assert_eq!(input.parse::<FlightClass>().unwrap(), expected);
    }

    #[test]
    fn test_unknown_flight_class_is_rejected() {
        let err = "premium".parse::<FlightClass>().unwrap_err();
        assert!(err.to_string().contains("Unknown flight class"));
    }

    #[test]
    fn test_offer_wire_format() {
        let offer: FlightOffer =
            serde_json::from_str(r#"{"destination":"Tokyo","class":"First Class","priceUSD":3400}"#)
                .unwrap();
        assert_eq!(offer.destination, "Tokyo");
        assert_eq!(offer.class, Some(FlightClass::First));
        assert_eq!(offer.price_usd, 3400.0);
    }

    #[rstest]
    #[case("Economy", Some(FlightClass::Economy))]
    #[case("Business", Some(FlightClass::Business))]
    #[case("First Class", Some(FlightClass::First))]
    #[case("business", None)]
    #[case("First", None)]
    #[case("Premium Economy", None)]
    fn test_from_wire_is_exact(#[case] name: &str, #[case] expected: Option<FlightClass>) {
        assert_eq!(FlightClass::from_wire(name), expected);
    }

    #[test]
    fn test_serves_ignores_case() {
        let offer = FlightOffer::new("Paris", FlightClass::Business, 1200.0);
        assert!(offer.serves("paris"));
        assert!(offer.serves("PARIS"));
        assert!(!offer.serves("Paris, TX"));
    }
}
