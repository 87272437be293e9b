//! Booking wizard state
//!
//! The controller owns the step and the form; pricing, validation and the
//! summary are derived from them on demand.

pub mod confirmation;
pub mod controller;
pub mod pricing;
pub mod step;
pub mod summary;
pub mod validation;

pub use confirmation::{ConfirmationSimulator, ConfirmationState};
pub use controller::BookingController;
pub use pricing::{PricingBreakdown, compute_pricing, format_usd};
pub use step::{Step, TOTAL_STEPS};
pub use summary::{BookingSummary, TravelerLine, format_date};
pub use validation::{missing_fields, validate_step};
