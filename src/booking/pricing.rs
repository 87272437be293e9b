//! Derived pricing
//!
//! Totals are recomputed from the form and the catalog on every call and
//! never stored.

use serde::Serialize;

use crate::catalog::FlightCatalog;
use crate::models::BookingForm;

/// Per pet
pub const PET_FEE: f64 = 100.0;
/// Per extra bag
pub const EXTRA_BAG_FEE: f64 = 50.0;
/// Per traveler
pub const INSURANCE_FEE: f64 = 75.0;
/// Per traveler
pub const PREFERRED_SEAT_FEE: f64 = 25.0;
/// Flat, whatever the traveler count
pub const SPECIAL_ASSISTANCE_FEE: f64 = 50.0;

/// Price of a booking, split by what it pays for
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct PricingBreakdown {
    pub flight_price: f64,
    pub pets_price: f64,
    pub extra_luggage_price: f64,
    pub services_price: f64,
    pub total_price: f64,
}

/// Price the form against the catalog.
///
/// A destination/class pair the catalog does not offer prices the flight at
/// zero rather than failing.
#[must_use]
pub fn compute_pricing(form: &BookingForm, catalog: &FlightCatalog) -> PricingBreakdown {
    let travelers = f64::from(form.number_of_travelers);

    let flight_price = catalog
        .find_offer(&form.destination, form.flight_class)
        .map_or(0.0, |offer| offer.price_usd * travelers);

    let pets_price = if form.has_pets {
        f64::from(form.number_of_pets) * PET_FEE
    } else {
        0.0
    };

    let extra_luggage_price = if form.has_extra_luggage {
        f64::from(form.number_of_extra_luggage) * EXTRA_BAG_FEE
    } else {
        0.0
    };

    let mut services_price = 0.0;
    if form.travel_insurance {
        services_price += INSURANCE_FEE * travelers;
    }
    if form.preferred_seats {
        services_price += PREFERRED_SEAT_FEE * travelers;
    }
    if form.special_assistance {
        services_price += SPECIAL_ASSISTANCE_FEE;
    }

    PricingBreakdown {
        flight_price,
        pets_price,
        extra_luggage_price,
        services_price,
        total_price: flight_price + pets_price + extra_luggage_price + services_price,
    }
}

/// `$1,234` for whole amounts, `$1,234.50` otherwise
#[must_use]
pub fn format_usd(amount: f64) -> String {
    let cents = (amount * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.abs();
    let (whole, fraction) = (cents / 100, cents % 100);

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if fraction == 0 {
        format!("{sign}${grouped}")
    } else {
        format!("{sign}${grouped}.{fraction:02}")
    }
}
