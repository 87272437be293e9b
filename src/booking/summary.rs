//! Read-only booking summary shown on the last step and after confirmation

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

use super::pricing::{EXTRA_BAG_FEE, PET_FEE, PricingBreakdown, format_usd};
use crate::models::{BookingForm, DocumentType, FlightClass};

/// One traveler as listed in the summary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TravelerLine {
    pub position: usize,
    pub full_name: String,
    /// `None` when the birth date does not parse
    pub age: Option<i32>,
    pub document_type: DocumentType,
}

/// Everything the summary step displays
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingSummary {
    pub destination: String,
    pub departure_date: String,
    pub return_date: String,
    pub flight_class: FlightClass,
    pub number_of_travelers: u32,
    pub travelers: Vec<TravelerLine>,
    /// 0 unless pets are enabled
    pub pets: u32,
    /// 0 unless extra luggage is enabled
    pub extra_luggage: u32,
    pub services: Vec<&'static str>,
    pub assistance_note: Option<String>,
    pub pricing: PricingBreakdown,
}

impl BookingSummary {
    #[must_use]
    pub fn build(form: &BookingForm, pricing: PricingBreakdown, today: NaiveDate) -> Self {
        let travelers = form
            .travelers
            .iter()
            .enumerate()
            .map(|(index, traveler)| TravelerLine {
                position: index + 1,
                full_name: traveler.full_name.clone(),
                age: traveler.age_on(today),
                document_type: traveler.document_type,
            })
            .collect();

        let mut services = Vec::new();
        if form.travel_insurance {
            services.push("Travel insurance");
        }
        if form.preferred_seats {
            services.push("Preferred seats");
        }
        if form.special_assistance {
            services.push("Special assistance");
        }

        Self {
            destination: form.destination.clone(),
            departure_date: form.departure_date.clone(),
            return_date: form.return_date.clone(),
            flight_class: form.flight_class,
            number_of_travelers: form.number_of_travelers,
            travelers,
            pets: if form.has_pets { form.number_of_pets } else { 0 },
            extra_luggage: if form.has_extra_luggage {
                form.number_of_extra_luggage
            } else {
                0
            },
            services,
            assistance_note: (!form.assistance_note.is_empty())
                .then(|| form.assistance_note.clone()),
            pricing,
        }
    }
}

/// `Tuesday, July 1, 2025`, or the raw text when it is not a date
#[must_use]
pub fn format_date(date: &str) -> String {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map(|parsed| parsed.format("%A, %B %-d, %Y").to_string())
        .unwrap_or_else(|_| date.to_string())
}

fn plural(count: u32, word: &str) -> String {
    if count == 1 {
        format!("{count} {word}")
    } else {
        format!("{count} {word}s")
    }
}

impl fmt::Display for BookingSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "✈️  Flight")?;
        writeln!(f, "   Destination: {}", self.destination)?;
        writeln!(f, "   Departure:   {}", format_date(&self.departure_date))?;
        writeln!(f, "   Return:      {}", format_date(&self.return_date))?;
        writeln!(f, "   Class:       {}", self.flight_class)?;

        writeln!(f, "👥 Travelers ({})", self.number_of_travelers)?;
        for traveler in &self.travelers {
            let age = traveler
                .age
                .map_or_else(|| "age unknown".to_string(), |age| format!("{age} years"));
            writeln!(
                f,
                "   {}. {} • {} • {}",
                traveler.position, traveler.full_name, age, traveler.document_type
            )?;
        }
        if self.pets > 0 {
            writeln!(f, "   🐾 {}", plural(self.pets, "pet"))?;
        }
        if self.extra_luggage > 0 {
            writeln!(f, "   🧳 {}", plural(self.extra_luggage, "extra bag"))?;
        }

        if !self.services.is_empty() {
            writeln!(f, "🛎️  Services")?;
            for service in &self.services {
                writeln!(f, "   • {service}")?;
            }
            if let Some(note) = &self.assistance_note {
                writeln!(f, "   Assistance note: {note}")?;
            }
        }

        writeln!(f, "💵 Price")?;
        writeln!(
            f,
            "   Flight ({} • {}): {}",
            plural(self.number_of_travelers, "traveler"),
            self.flight_class,
            format_usd(self.pricing.flight_price)
        )?;
        if self.pets > 0 {
            writeln!(
                f,
                "   Pets ({} × {}): {}",
                self.pets,
                format_usd(PET_FEE),
                format_usd(self.pricing.pets_price)
            )?;
        }
        if self.extra_luggage > 0 {
            writeln!(
                f,
                "   Extra luggage ({} × {}): {}",
                self.extra_luggage,
                format_usd(EXTRA_BAG_FEE),
                format_usd(self.pricing.extra_luggage_price)
            )?;
        }
        if self.pricing.services_price > 0.0 {
            writeln!(f, "   Services: {}", format_usd(self.pricing.services_price))?;
        }
        write!(f, "   Total: {}", format_usd(self.pricing.total_price))
    }
}
