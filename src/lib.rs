//! Globetrotter - multi-step flight booking wizard
//!
//! This library provides the booking form controller, the flight catalog it
//! prices against, and a terminal front end that walks a traveler through
//! trip details, travelers, extra services and a confirmed summary.

pub mod booking;
pub mod catalog;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod wizard;

// Re-export core types for public API
pub use booking::{
    BookingController, BookingSummary, ConfirmationSimulator, PricingBreakdown, Step,
};
pub use catalog::{CatalogLoader, ConfiguredSource, FlightCatalog, FlightSource};
pub use config::GlobetrotterConfig;
pub use error::GlobetrotterError;
pub use models::{BookingForm, BookingUpdate, FlightClass, FlightOffer, Traveler, TravelerUpdate};
pub use wizard::WizardShell;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, GlobetrotterError>;
