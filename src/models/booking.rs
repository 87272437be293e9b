//! Booking form aggregate and its partial update

use serde::{Deserialize, Serialize};

use super::flight::FlightClass;
use super::traveler::Traveler;

pub const MIN_TRAVELERS: u32 = 1;
pub const MAX_TRAVELERS: u32 = 10;
/// Most pets, or extra bags, on one booking
pub const MAX_EXTRA_ITEMS: u32 = 10;
/// Longest assistance note kept, in characters
pub const ASSISTANCE_NOTE_LIMIT: usize = 200;

/// Everything the wizard collects. One instance per session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingForm {
    // Trip
    pub destination: String,
    pub departure_date: String,
    pub return_date: String,
    pub flight_class: FlightClass,

    // Travelers; `travelers.len() == number_of_travelers` at all times
    pub number_of_travelers: u32,
    pub travelers: Vec<Traveler>,

    // Extras; counts are 0 exactly when the flag is off
    pub has_pets: bool,
    pub number_of_pets: u32,
    pub has_extra_luggage: bool,
    pub number_of_extra_luggage: u32,

    // Services
    pub travel_insurance: bool,
    pub preferred_seats: bool,
    pub special_assistance: bool,
    pub assistance_note: String,
}

impl BookingForm {
    /// Default form holding the given first traveler
    #[must_use]
    pub fn with_first_traveler(traveler: Traveler) -> Self {
        Self {
            destination: String::new(),
            departure_date: String::new(),
            return_date: String::new(),
            flight_class: FlightClass::default(),
            number_of_travelers: MIN_TRAVELERS,
            travelers: vec![traveler],
            has_pets: false,
            number_of_pets: 0,
            has_extra_luggage: false,
            number_of_extra_luggage: 0,
            travel_insurance: false,
            preferred_seats: false,
            special_assistance: false,
            assistance_note: String::new(),
        }
    }

    /// Whether any paid service is selected
    #[must_use]
    pub fn has_services(&self) -> bool {
        self.travel_insurance || self.preferred_seats || self.special_assistance
    }
}

/// Partial set of field changes merged by `BookingController::update_fields`.
///
/// Travelers are edited one at a time through `update_traveler`; the list
/// itself only changes size through `number_of_travelers`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingUpdate {
    pub destination: Option<String>,
    pub departure_date: Option<String>,
    pub return_date: Option<String>,
    pub flight_class: Option<FlightClass>,
    pub number_of_travelers: Option<u32>,
    pub has_pets: Option<bool>,
    pub number_of_pets: Option<u32>,
    pub has_extra_luggage: Option<bool>,
    pub number_of_extra_luggage: Option<u32>,
    pub travel_insurance: Option<bool>,
    pub preferred_seats: Option<bool>,
    pub special_assistance: Option<bool>,
    pub assistance_note: Option<String>,
}

/// Cut a note down to the assistance note limit on a character boundary
#[must_use]
pub fn truncate_note(note: &str) -> String {
    note.chars().take(ASSISTANCE_NOTE_LIMIT).collect()
}
