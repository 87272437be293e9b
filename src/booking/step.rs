//! Wizard steps and their ordering

use std::fmt;

pub const TOTAL_STEPS: u8 = 4;

/// One of the four wizard steps, numbered 1 to 4
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step {
    TripInfo = 1,
    Travelers = 2,
    Services = 3,
    Summary = 4,
}

impl Step {
    pub const ALL: [Step; 4] = [Step::TripInfo, Step::Travelers, Step::Services, Step::Summary];

    /// Step with the given number, if it exists
    #[must_use]
    pub fn from_number(number: i64) -> Option<Step> {
        match number {
            1 => Some(Step::TripInfo),
            2 => Some(Step::Travelers),
            3 => Some(Step::Services),
            4 => Some(Step::Summary),
            _ => None,
        }
    }

    /// Step nearest to `number` within 1..=4
    #[must_use]
    pub fn clamped(number: i64) -> Step {
        match number {
            n if n <= 1 => Step::TripInfo,
            2 => Step::Travelers,
            3 => Step::Services,
            _ => Step::Summary,
        }
    }

    #[must_use]
    pub fn number(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub fn next(self) -> Step {
        Step::clamped(i64::from(self.number()) + 1)
    }

    #[must_use]
    pub fn previous(self) -> Step {
        Step::clamped(i64::from(self.number()) - 1)
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Step::TripInfo => "Trip information",
            Step::Travelers => "Travelers",
            Step::Services => "Additional services",
            Step::Summary => "Summary and confirmation",
        }
    }

    /// Share of the wizard completed when this step is shown, rounded
    #[must_use]
    pub fn progress_percent(self) -> u8 {
        let percent = f64::from(self.number()) / f64::from(TOTAL_STEPS) * 100.0;
        percent.round() as u8
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.title())
    }
}
