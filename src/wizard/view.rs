//! Step views
//!
//! Each step gets only the data it renders. Views are rebuilt from the
//! controller every time they are shown and never hold state of their own.

use chrono::NaiveDate;
use std::fmt;

use crate::booking::{
    BookingController, BookingSummary, ConfirmationState, PricingBreakdown, Step, format_date,
    format_usd, missing_fields,
};
use crate::booking::pricing::{
    EXTRA_BAG_FEE, INSURANCE_FEE, PET_FEE, PREFERRED_SEAT_FEE, SPECIAL_ASSISTANCE_FEE,
};
use crate::models::{ASSISTANCE_NOTE_LIMIT, BookingForm, FlightClass, MAX_TRAVELERS};

const PROGRESS_WIDTH: usize = 20;

#[derive(Debug, Clone)]
pub enum StepView<'a> {
    TripInfo {
        form: &'a BookingForm,
        destinations: Vec<String>,
        suggestions: Vec<String>,
        class_prices: Vec<(FlightClass, f64)>,
        missing: Vec<String>,
    },
    Travelers {
        form: &'a BookingForm,
        missing: Vec<String>,
    },
    Services {
        form: &'a BookingForm,
        pricing: PricingBreakdown,
    },
    Summary {
        summary: BookingSummary,
        confirmation: ConfirmationState,
    },
}

impl<'a> StepView<'a> {
    /// View for the controller's current step
    #[must_use]
    pub fn build(
        controller: &'a BookingController,
        confirmation: ConfirmationState,
        today: NaiveDate,
    ) -> Self {
        let form = controller.form();
        match controller.current_step() {
            Step::TripInfo => StepView::TripInfo {
                form,
                destinations: controller.list_destinations(),
                suggestions: controller.destination_suggestions(),
                class_prices: controller.class_prices(),
                missing: missing_fields(form, Step::TripInfo),
            },
            Step::Travelers => StepView::Travelers {
                form,
                missing: missing_fields(form, Step::Travelers),
            },
            Step::Services => StepView::Services {
                form,
                pricing: controller.compute_pricing(),
            },
            Step::Summary => StepView::Summary {
                summary: controller.summary(today),
                confirmation,
            },
        }
    }

    #[must_use]
    pub fn step(&self) -> Step {
        match self {
            StepView::TripInfo { .. } => Step::TripInfo,
            StepView::Travelers { .. } => Step::Travelers,
            StepView::Services { .. } => Step::Services,
            StepView::Summary { .. } => Step::Summary,
        }
    }

    /// Whether the continue action is available
    #[must_use]
    pub fn can_continue(&self) -> bool {
        match self {
            StepView::TripInfo { missing, .. } | StepView::Travelers { missing, .. } => {
                missing.is_empty()
            }
            StepView::Services { .. } => true,
            StepView::Summary { .. } => false,
        }
    }
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}

fn switch(enabled: bool) -> &'static str {
    if enabled { "[x]" } else { "[ ]" }
}

impl fmt::Display for StepView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== {} ==", self.step())?;
        match self {
            StepView::TripInfo {
                form,
                destinations,
                suggestions,
                class_prices,
                missing,
            } => {
                writeln!(f, "Destination: {}", or_dash(&form.destination))?;
                if !form.destination.is_empty() && !suggestions.is_empty() {
                    writeln!(f, "  Suggestions: {}", suggestions.join(", "))?;
                } else if form.destination.is_empty() && !destinations.is_empty() {
                    writeln!(f, "  {} destinations available", destinations.len())?;
                }
                writeln!(f, "Departure:   {}", or_dash(&form.departure_date))?;
                writeln!(f, "Return:      {}", or_dash(&form.return_date))?;
                writeln!(f, "Class:       {}", form.flight_class)?;
                if !class_prices.is_empty() {
                    let prices: Vec<String> = class_prices
                        .iter()
                        .map(|(class, price)| format!("{class} {}", format_usd(*price)))
                        .collect();
                    writeln!(f, "  Per traveler: {}", prices.join(" • "))?;
                }
                write_gate(f, missing)
            }
            StepView::Travelers { form, missing } => {
                writeln!(f, "Travelers: {} (max {MAX_TRAVELERS})", form.number_of_travelers)?;
                for (index, traveler) in form.travelers.iter().enumerate() {
                    writeln!(
                        f,
                        "  {}. {} • born {} • {} {}",
                        index + 1,
                        or_dash(&traveler.full_name),
                        or_dash(&traveler.birth_date),
                        traveler.document_type,
                        or_dash(&traveler.document_number)
                    )?;
                }
                write_gate(f, missing)
            }
            StepView::Services { form, pricing } => {
                writeln!(
                    f,
                    "{} Pets ({} each): {}",
                    switch(form.has_pets),
                    format_usd(PET_FEE),
                    form.number_of_pets
                )?;
                writeln!(
                    f,
                    "{} Extra luggage ({} per bag): {}",
                    switch(form.has_extra_luggage),
                    format_usd(EXTRA_BAG_FEE),
                    form.number_of_extra_luggage
                )?;
                writeln!(
                    f,
                    "{} Travel insurance ({} per traveler)",
                    switch(form.travel_insurance),
                    format_usd(INSURANCE_FEE)
                )?;
                writeln!(
                    f,
                    "{} Preferred seats ({} per traveler)",
                    switch(form.preferred_seats),
                    format_usd(PREFERRED_SEAT_FEE)
                )?;
                writeln!(
                    f,
                    "{} Special assistance ({})",
                    switch(form.special_assistance),
                    format_usd(SPECIAL_ASSISTANCE_FEE)
                )?;
                if form.special_assistance {
                    writeln!(
                        f,
                        "  Note ({}/{ASSISTANCE_NOTE_LIMIT}): {}",
                        form.assistance_note.chars().count(),
                        or_dash(&form.assistance_note)
                    )?;
                }
                if !form.has_services() {
                    writeln!(f, "No extra services selected.")?;
                }
                writeln!(f, "Current total: {}", format_usd(pricing.total_price))?;
                writeln!(f, "Type 'next' to review your booking.")
            }
            StepView::Summary {
                summary,
                confirmation,
            } => {
                writeln!(f, "{summary}")?;
                match confirmation {
                    ConfirmationState::Pending => {
                        writeln!(f, "Type 'confirm' to book, or 'tab <n>' to make changes.")
                    }
                    ConfirmationState::Confirming => writeln!(f, "Confirming your booking..."),
                    ConfirmationState::Confirmed => writeln!(
                        f,
                        "🎉 Booking confirmed! Enjoy {} from {}. Type 'new' to start over.",
                        summary.destination,
                        format_date(&summary.departure_date)
                    ),
                }
            }
        }
    }
}

fn write_gate(f: &mut fmt::Formatter<'_>, missing: &[String]) -> fmt::Result {
    if missing.is_empty() {
        writeln!(f, "Type 'next' to continue.")
    } else {
        writeln!(f, "To continue, fill in: {}", missing.join(", "))
    }
}

/// `Step 2 of 4 [##########----------] 50%`
#[must_use]
pub fn progress_line(controller: &BookingController) -> String {
    let step = controller.current_step();
    let percent = step.progress_percent();
    let filled = PROGRESS_WIDTH * usize::from(percent) / 100;
    format!(
        "Step {} of {} [{}{}] {}%",
        step.number(),
        controller.total_steps(),
        "#".repeat(filled),
        "-".repeat(PROGRESS_WIDTH - filled),
        percent
    )
}

/// Step tabs: the current one in brackets, steps ahead marked locked
#[must_use]
pub fn tabs_line(controller: &BookingController) -> String {
    Step::ALL
        .iter()
        .map(|&step| {
            if step == controller.current_step() {
                format!("[{step}]")
            } else if controller.can_open_step(step) {
                step.to_string()
            } else {
                format!("{step} (locked)")
            }
        })
        .collect::<Vec<_>>()
        .join(" | ")
}
