//! Data models for the Globetrotter booking wizard
//!
//! This module contains the core domain models organized by concern:
//! - Flight: catalog offers and cabin classes
//! - Traveler: people on the booking and their documents
//! - Booking: the form aggregate and its partial update

pub mod booking;
pub mod flight;
pub mod traveler;

// Re-export all public types for convenient access
pub use booking::{
    ASSISTANCE_NOTE_LIMIT, BookingForm, BookingUpdate, MAX_EXTRA_ITEMS, MAX_TRAVELERS,
    MIN_TRAVELERS,
};
pub use flight::{FlightClass, FlightOffer};
pub use traveler::{DocumentType, Traveler, TravelerUpdate};
