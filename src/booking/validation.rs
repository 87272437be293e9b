//! Step completeness checks
//!
//! Only the trip and travelers steps have required fields.

use super::step::Step;
use crate::models::BookingForm;

/// Destination, both dates and a class are filled in
#[must_use]
pub fn trip_is_complete(form: &BookingForm) -> bool {
    // flight_class is an enum and therefore always set
    !form.destination.is_empty() && !form.departure_date.is_empty() && !form.return_date.is_empty()
}

/// Every traveler is complete and the list matches the declared count
#[must_use]
pub fn travelers_are_complete(form: &BookingForm) -> bool {
    form.travelers.iter().all(|traveler| traveler.is_complete())
        && form.travelers.len() == form.number_of_travelers as usize
}

#[must_use]
pub fn validate_step(form: &BookingForm, step: Step) -> bool {
    match step {
        Step::TripInfo => trip_is_complete(form),
        Step::Travelers => travelers_are_complete(form),
        Step::Services | Step::Summary => true,
    }
}

/// Human-readable list of what keeps `step` from being complete
#[must_use]
pub fn missing_fields(form: &BookingForm, step: Step) -> Vec<String> {
    let mut missing = Vec::new();
    match step {
        Step::TripInfo => {
            if form.destination.is_empty() {
                missing.push("destination".to_string());
            }
            if form.departure_date.is_empty() {
                missing.push("departure date".to_string());
            }
            if form.return_date.is_empty() {
                missing.push("return date".to_string());
            }
        }
        Step::Travelers => {
            for (index, traveler) in form.travelers.iter().enumerate() {
                let position = index + 1;
                if traveler.full_name.is_empty() {
                    missing.push(format!("traveler {position} name"));
                }
                if traveler.birth_date.is_empty() {
                    missing.push(format!("traveler {position} birth date"));
                }
                if traveler.document_number.is_empty() {
                    missing.push(format!("traveler {position} document number"));
                }
            }
        }
        Step::Services | Step::Summary => {}
    }
    missing
}
