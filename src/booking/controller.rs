//! Booking form state controller
//!
//! `BookingController` is the only owner of the wizard step and the booking
//! form. Views read through it and every change goes through its methods, so
//! the traveler list and the extras counts can never drift from the values
//! they depend on.

use chrono::NaiveDate;
use tracing::{debug, info};

use super::pricing::{PricingBreakdown, compute_pricing};
use super::step::{Step, TOTAL_STEPS};
use super::summary::BookingSummary;
use super::validation::{missing_fields, validate_step};
use crate::catalog::{CatalogLoader, FlightCatalog, FlightSource, MAX_SUGGESTIONS};
use crate::models::booking::truncate_note;
use crate::models::{
    BookingForm, BookingUpdate, FlightClass, FlightOffer, MAX_EXTRA_ITEMS, MAX_TRAVELERS,
    MIN_TRAVELERS, Traveler, TravelerUpdate,
};
use crate::{GlobetrotterError, Result};

#[derive(Debug, Clone)]
pub struct BookingController {
    step: Step,
    form: BookingForm,
    catalog: FlightCatalog,
    loading: bool,
    /// Sequence number of the next traveler id; only ever grows within a session
    next_traveler_seq: u32,
}

impl Default for BookingController {
    fn default() -> Self {
        Self::new()
    }
}

impl BookingController {
    /// Fresh session with an empty catalog and one blank traveler
    #[must_use]
    pub fn new() -> Self {
        Self::with_catalog(FlightCatalog::default())
    }

    #[must_use]
    pub fn with_catalog(catalog: FlightCatalog) -> Self {
        Self {
            step: Step::TripInfo,
            form: BookingForm::with_first_traveler(Traveler::blank(traveler_id(1))),
            catalog,
            loading: false,
            next_traveler_seq: 2,
        }
    }

    // State

    #[must_use]
    pub fn current_step(&self) -> Step {
        self.step
    }

    #[must_use]
    pub fn form(&self) -> &BookingForm {
        &self.form
    }

    #[must_use]
    pub fn catalog(&self) -> &FlightCatalog {
        &self.catalog
    }

    /// True while a catalog fetch is outstanding
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn total_steps(&self) -> u8 {
        TOTAL_STEPS
    }

    #[must_use]
    pub fn is_first_step(&self) -> bool {
        self.step == Step::TripInfo
    }

    #[must_use]
    pub fn is_last_step(&self) -> bool {
        self.step == Step::Summary
    }

    // Catalog loading

    pub fn begin_catalog_load(&mut self) {
        self.loading = true;
    }

    /// Install the fetch outcome; a failure leaves the catalog empty
    pub fn complete_catalog_load(&mut self, result: Result<Vec<FlightOffer>>, origin: &str) {
        self.catalog = CatalogLoader::settle(result, origin);
        self.loading = false;
    }

    /// Fetch the catalog once from `source`, flagging the controller as loading meanwhile
    pub async fn load_catalog<S: FlightSource>(&mut self, source: &S) {
        self.begin_catalog_load();
        self.catalog = CatalogLoader::load(source).await;
        self.loading = false;
    }

    // Mutation

    /// Merge a partial update into the form.
    ///
    /// A new traveler count resizes the traveler list in the same call. The
    /// pets and luggage counts are pinned to 0 while their flag is off and to
    /// 1..=MAX_EXTRA_ITEMS while it is on.
    pub fn update_fields(&mut self, update: BookingUpdate) {
        let BookingUpdate {
            destination,
            departure_date,
            return_date,
            flight_class,
            number_of_travelers,
            has_pets,
            number_of_pets,
            has_extra_luggage,
            number_of_extra_luggage,
            travel_insurance,
            preferred_seats,
            special_assistance,
            assistance_note,
        } = update;

        let form = &mut self.form;
        if let Some(destination) = destination {
            form.destination = destination;
        }
        if let Some(departure_date) = departure_date {
            form.departure_date = departure_date;
        }
        if let Some(return_date) = return_date {
            form.return_date = return_date;
        }
        if let Some(flight_class) = flight_class {
            form.flight_class = flight_class;
        }
        if let Some(has_pets) = has_pets {
            form.has_pets = has_pets;
        }
        if let Some(number_of_pets) = number_of_pets {
            form.number_of_pets = number_of_pets;
        }
        if let Some(has_extra_luggage) = has_extra_luggage {
            form.has_extra_luggage = has_extra_luggage;
        }
        if let Some(number_of_extra_luggage) = number_of_extra_luggage {
            form.number_of_extra_luggage = number_of_extra_luggage;
        }
        if let Some(travel_insurance) = travel_insurance {
            form.travel_insurance = travel_insurance;
        }
        if let Some(preferred_seats) = preferred_seats {
            form.preferred_seats = preferred_seats;
        }
        if let Some(special_assistance) = special_assistance {
            form.special_assistance = special_assistance;
        }
        if let Some(note) = assistance_note {
            form.assistance_note = truncate_note(&note);
        }

        form.number_of_pets = pinned_count(form.has_pets, form.number_of_pets);
        form.number_of_extra_luggage =
            pinned_count(form.has_extra_luggage, form.number_of_extra_luggage);

        if let Some(count) = number_of_travelers {
            self.resize_travelers(count);
        }
    }

    /// Edit the traveler at `index` (0-based) in place
    pub fn update_traveler(&mut self, index: usize, update: TravelerUpdate) -> Result<()> {
        let count = self.form.travelers.len();
        let traveler = self.form.travelers.get_mut(index).ok_or_else(|| {
            GlobetrotterError::validation(format!(
                "There is no traveler {} (booking has {count})",
                index + 1
            ))
        })?;
        update.apply_to(traveler);
        Ok(())
    }

    fn resize_travelers(&mut self, requested: u32) {
        let count = requested.clamp(MIN_TRAVELERS, MAX_TRAVELERS);
        let target = count as usize;
        let previous = self.form.travelers.len();

        if target < previous {
            self.form.travelers.truncate(target);
        }
        while self.form.travelers.len() < target {
            let traveler = self.fresh_traveler();
            self.form.travelers.push(traveler);
        }
        self.form.number_of_travelers = count;

        debug!("Resized travelers from {} to {}", previous, target);
    }

    fn fresh_traveler(&mut self) -> Traveler {
        let traveler = Traveler::blank(traveler_id(self.next_traveler_seq));
        self.next_traveler_seq += 1;
        traveler
    }

    /// Restore the default form and return to the first step
    pub fn reset(&mut self) {
        info!("Starting a new booking");
        self.step = Step::TripInfo;
        self.form = BookingForm::with_first_traveler(Traveler::blank(traveler_id(1)));
        self.next_traveler_seq = 2;
    }

    // Navigation

    /// One step forward, without validation
    pub fn advance_step(&mut self) -> Step {
        self.step = self.step.next();
        self.step
    }

    /// One step back, without validation
    pub fn retreat_step(&mut self) -> Step {
        self.step = self.step.previous();
        self.step
    }

    /// Go straight to step `number`, clamped to 1..=4, without validation
    pub fn jump_to_step(&mut self, number: i64) -> Step {
        self.step = Step::clamped(number);
        self.step
    }

    /// Advance only when the current step is complete
    pub fn continue_step(&mut self) -> Result<Step> {
        if !self.validate_step(self.step) {
            let missing = missing_fields(&self.form, self.step).join(", ");
            return Err(GlobetrotterError::validation(format!(
                "Complete the {} step before continuing (missing: {missing})",
                self.step.title().to_lowercase()
            )));
        }
        Ok(self.advance_step())
    }

    /// Steps at or behind the current one can be reopened
    #[must_use]
    pub fn can_open_step(&self, step: Step) -> bool {
        step <= self.step
    }

    // Derived data

    #[must_use]
    pub fn compute_pricing(&self) -> PricingBreakdown {
        compute_pricing(&self.form, &self.catalog)
    }

    #[must_use]
    pub fn list_destinations(&self) -> Vec<String> {
        self.catalog.destinations()
    }

    #[must_use]
    pub fn flights_for(&self, destination: &str) -> Vec<&FlightOffer> {
        self.catalog.flights_for(destination)
    }

    /// Destinations matching what has been typed so far
    #[must_use]
    pub fn destination_suggestions(&self) -> Vec<String> {
        self.catalog.suggestions(&self.form.destination, MAX_SUGGESTIONS)
    }

    /// Class prices for the typed destination
    #[must_use]
    pub fn class_prices(&self) -> Vec<(FlightClass, f64)> {
        self.catalog.class_prices(&self.form.destination)
    }

    #[must_use]
    pub fn validate_step(&self, step: Step) -> bool {
        validate_step(&self.form, step)
    }

    #[must_use]
    pub fn summary(&self, today: NaiveDate) -> BookingSummary {
        BookingSummary::build(&self.form, self.compute_pricing(), today)
    }
}

fn traveler_id(seq: u32) -> String {
    format!("traveler-{seq}")
}

fn pinned_count(enabled: bool, count: u32) -> u32 {
    if enabled { count.clamp(1, MAX_EXTRA_ITEMS) } else { 0 }
}
