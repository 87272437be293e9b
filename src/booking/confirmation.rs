//! Simulated booking confirmation
//!
//! Stands in for a real submission: a fixed delay, then the booking counts as
//! confirmed. Nothing is sent or stored.

use std::time::Duration;
use tracing::info;

use crate::config::BookingConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfirmationState {
    #[default]
    Pending,
    Confirming,
    Confirmed,
}

#[derive(Debug, Clone)]
pub struct ConfirmationSimulator {
    delay: Duration,
    state: ConfirmationState,
}

impl ConfirmationSimulator {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            state: ConfirmationState::Pending,
        }
    }

    #[must_use]
    pub fn from_config(config: &BookingConfig) -> Self {
        Self::new(Duration::from_millis(config.confirmation_delay_ms))
    }

    #[must_use]
    pub fn state(&self) -> ConfirmationState {
        self.state
    }

    #[must_use]
    pub fn is_confirmed(&self) -> bool {
        self.state == ConfirmationState::Confirmed
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Enter the confirming state; false if a confirmation already started
    pub fn begin(&mut self) -> bool {
        if self.state != ConfirmationState::Pending {
            return false;
        }
        self.state = ConfirmationState::Confirming;
        true
    }

    /// Leave the confirming state for the terminal confirmed state
    pub fn finish(&mut self) {
        if self.state == ConfirmationState::Confirming {
            self.state = ConfirmationState::Confirmed;
        }
    }

    /// Run the whole simulation: confirming, fixed delay, confirmed
    pub async fn confirm(&mut self) {
        if !self.begin() {
            return;
        }
        info!("Confirming booking ({} ms)", self.delay.as_millis());
        tokio::time::sleep(self.delay).await;
        self.finish();
        info!("Booking confirmed");
    }

    /// Back to pending for a new booking
    pub fn reset(&mut self) {
        self.state = ConfirmationState::Pending;
    }
}

impl Default for ConfirmationSimulator {
    fn default() -> Self {
        Self::from_config(&BookingConfig::default())
    }
}
