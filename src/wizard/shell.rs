//! Line-oriented wizard shell
//!
//! Reads one command per line, applies it through the controller and
//! redraws the progress bar, the tabs and the active step view.

use chrono::{Local, NaiveDate};
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};
use tracing::{debug, warn};

use super::command::{Command, ExtraChange, HELP, TravelerField};
use super::view::{StepView, progress_line, tabs_line};
use crate::booking::{BookingController, ConfirmationSimulator, Step};
use crate::catalog::FlightSource;
use crate::models::{BookingUpdate, MAX_EXTRA_ITEMS, TravelerUpdate};
use crate::{GlobetrotterError, Result};

/// What the loop does after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Redraw,
    Stay,
    Quit,
}

pub struct WizardShell<R, W> {
    controller: BookingController,
    confirmation: ConfirmationSimulator,
    lines: Lines<R>,
    output: W,
    today: NaiveDate,
}

impl<R, W> WizardShell<R, W>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    pub fn new(
        controller: BookingController,
        confirmation: ConfirmationSimulator,
        input: R,
        output: W,
    ) -> Self {
        Self {
            controller,
            confirmation,
            lines: input.lines(),
            output,
            today: Local::now().date_naive(),
        }
    }

    /// Fix the date ages are computed against
    #[must_use]
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn controller(&self) -> &BookingController {
        &self.controller
    }

    pub fn confirmation(&self) -> &ConfirmationSimulator {
        &self.confirmation
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Fetch the catalog, showing a loading notice until it settles
    pub async fn load_catalog<S: FlightSource>(&mut self, source: &S) -> Result<()> {
        writeln!(self.output, "Loading available flights...")?;
        self.output.flush()?;

        self.controller.load_catalog(source).await;

        if self.controller.catalog().is_empty() {
            writeln!(
                self.output,
                "No flights are available right now; prices will show as $0."
            )?;
        } else {
            writeln!(
                self.output,
                "Loaded {} flight offers for {} destinations.",
                self.controller.catalog().len(),
                self.controller.list_destinations().len()
            )?;
        }
        Ok(())
    }

    /// Run until `quit` or end of input
    pub async fn run(&mut self) -> Result<()> {
        writeln!(self.output, "Welcome to Globetrotter! Type 'help' for commands.")?;
        self.render()?;

        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            let Some(line) = self.lines.next_line().await? else {
                debug!("Input closed");
                break;
            };

            let outcome = match line.parse::<Command>() {
                Ok(command) => self.dispatch(command).await,
                Err(e) => Err(e),
            };

            match outcome {
                Ok(Flow::Quit) => break,
                Ok(Flow::Redraw) => self.render()?,
                Ok(Flow::Stay) => {}
                Err(e @ GlobetrotterError::Validation { .. }) => {
                    writeln!(self.output, "⚠️  {}", e.user_message())?;
                }
                Err(e) => {
                    warn!("Command failed: {}", e);
                    writeln!(self.output, "⚠️  {}", e.user_message())?;
                }
            }
        }

        writeln!(self.output, "Goodbye!")?;
        Ok(())
    }

    fn render(&mut self) -> Result<()> {
        let view = StepView::build(&self.controller, self.confirmation.state(), self.today);
        writeln!(self.output)?;
        writeln!(self.output, "{}", progress_line(&self.controller))?;
        writeln!(self.output, "{}", tabs_line(&self.controller))?;
        write!(self.output, "{view}")?;
        Ok(())
    }

    async fn dispatch(&mut self, command: Command) -> Result<Flow> {
        debug!("Applying {:?}", command);

        if self.confirmation.is_confirmed()
            && !matches!(
                command,
                Command::NewBooking | Command::Quit | Command::Help | Command::Show
            )
        {
            return Err(GlobetrotterError::validation(
                "This booking is already confirmed; type 'new' to start another",
            ));
        }

        let flow = match command {
            Command::Next => {
                self.controller.continue_step()?;
                Flow::Redraw
            }
            Command::Back => {
                self.controller.retreat_step();
                Flow::Redraw
            }
            Command::Tab(number) => {
                let step = Step::from_number(number).ok_or_else(|| {
                    GlobetrotterError::validation(format!("There is no step {number}"))
                })?;
                if !self.controller.can_open_step(step) {
                    return Err(GlobetrotterError::validation(format!(
                        "Step {number} is not available yet"
                    )));
                }
                self.controller.jump_to_step(number);
                Flow::Redraw
            }
            Command::Show => Flow::Redraw,
            Command::Help => {
                writeln!(self.output, "{HELP}")?;
                Flow::Stay
            }
            Command::Quit => Flow::Quit,

            Command::Destination(destination) => self.update(BookingUpdate {
                destination: Some(destination),
                ..Default::default()
            }),
            Command::Departure(date) => self.update(BookingUpdate {
                departure_date: Some(date),
                ..Default::default()
            }),
            Command::Return(date) => self.update(BookingUpdate {
                return_date: Some(date),
                ..Default::default()
            }),
            Command::Class(class) => self.update(BookingUpdate {
                flight_class: Some(class),
                ..Default::default()
            }),

            Command::Travelers(count) => self.update(BookingUpdate {
                number_of_travelers: Some(count),
                ..Default::default()
            }),
            Command::Traveler { position, field } => {
                let index = position.checked_sub(1).ok_or_else(|| {
                    GlobetrotterError::validation("Travelers are numbered from 1")
                })?;
                let update = match field {
                    TravelerField::Name(name) => TravelerUpdate {
                        full_name: Some(name),
                        ..Default::default()
                    },
                    TravelerField::BirthDate(date) => TravelerUpdate {
                        birth_date: Some(date),
                        ..Default::default()
                    },
                    TravelerField::Document(document_type) => TravelerUpdate {
                        document_type: Some(document_type),
                        ..Default::default()
                    },
                    TravelerField::DocumentNumber(number) => TravelerUpdate {
                        document_number: Some(number),
                        ..Default::default()
                    },
                };
                self.controller.update_traveler(index, update)?;
                Flow::Redraw
            }

            Command::Pets(change) => {
                let form = self.controller.form();
                let (enabled, count) = apply_extra(change, form.has_pets, form.number_of_pets);
                self.update(BookingUpdate {
                    has_pets: Some(enabled),
                    number_of_pets: Some(count),
                    ..Default::default()
                })
            }
            Command::Luggage(change) => {
                let form = self.controller.form();
                let (enabled, count) = apply_extra(
                    change,
                    form.has_extra_luggage,
                    form.number_of_extra_luggage,
                );
                self.update(BookingUpdate {
                    has_extra_luggage: Some(enabled),
                    number_of_extra_luggage: Some(count),
                    ..Default::default()
                })
            }
            Command::Insurance(enabled) => self.update(BookingUpdate {
                travel_insurance: Some(enabled),
                ..Default::default()
            }),
            Command::Seats(enabled) => self.update(BookingUpdate {
                preferred_seats: Some(enabled),
                ..Default::default()
            }),
            Command::Assistance(enabled) => self.update(BookingUpdate {
                special_assistance: Some(enabled),
                ..Default::default()
            }),
            Command::Note(note) => self.update(BookingUpdate {
                assistance_note: Some(note),
                ..Default::default()
            }),

            Command::Confirm => {
                if !self.controller.is_last_step() {
                    return Err(GlobetrotterError::validation(
                        "Bookings are confirmed from the summary step",
                    ));
                }
                writeln!(self.output, "Confirming your booking...")?;
                self.output.flush()?;
                self.confirmation.confirm().await;
                Flow::Redraw
            }
            Command::NewBooking => {
                self.controller.reset();
                self.confirmation.reset();
                Flow::Redraw
            }
        };
        Ok(flow)
    }

    fn update(&mut self, update: BookingUpdate) -> Flow {
        self.controller.update_fields(update);
        Flow::Redraw
    }
}

/// New flag and count for an extras selection; counts stay within 1..=MAX_EXTRA_ITEMS while on
fn apply_extra(change: ExtraChange, enabled: bool, count: u32) -> (bool, u32) {
    match change {
        ExtraChange::On => (true, count.max(1)),
        ExtraChange::Off => (false, 0),
        ExtraChange::Set(0) => (false, 0),
        ExtraChange::Set(n) => (true, n),
        ExtraChange::More => (true, count.saturating_add(1).min(MAX_EXTRA_ITEMS)),
        ExtraChange::Fewer if enabled => (true, count.saturating_sub(1).max(1)),
        ExtraChange::Fewer => (false, 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StaticFlightSource;
    use crate::models::{FlightClass, FlightOffer};
    use rstest::rstest;
    use std::time::Duration;

    fn offers() -> Vec<FlightOffer> {
        vec![
            FlightOffer::new("Paris", FlightClass::Economy, 650.0),
            FlightOffer::new("Paris", FlightClass::Business, 1200.0),
        ]
    }

    async fn session(script: &str, offers: Vec<FlightOffer>) -> (BookingController, String) {
        let mut shell = WizardShell::new(
            BookingController::new(),
            ConfirmationSimulator::new(Duration::from_secs(2)),
            script.as_bytes(),
            Vec::new(),
        )
        .with_today(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        shell
            .load_catalog(&StaticFlightSource::new(offers))
            .await
            .unwrap();
        shell.run().await.unwrap();
        let controller = shell.controller().clone();
        let output = String::from_utf8(shell.into_output()).unwrap();
        (controller, output)
    }

    #[rstest]
    #[case(ExtraChange::On, false, 0, (true, 1))]
    #[case(ExtraChange::On, true, 3, (true, 3))]
    #[case(ExtraChange::Off, true, 3, (false, 0))]
    #[case(ExtraChange::Set(0), true, 2, (false, 0))]
    #[case(ExtraChange::More, false, 0, (true, 1))]
    #[case(ExtraChange::Fewer, true, 1, (true, 1))]
    #[case(ExtraChange::Fewer, true, 4, (true, 3))]
    #[case(ExtraChange::More, true, 9, (true, 10))]
    #[case(ExtraChange::More, true, MAX_EXTRA_ITEMS, (true, MAX_EXTRA_ITEMS))]
    #[case(ExtraChange::More, true, u32::MAX, (true, MAX_EXTRA_ITEMS))]
    fn test_apply_extra(
        #[case] change: ExtraChange,
        #[case] enabled: bool,
        #[case] count: u32,
        #[case] expected: (bool, u32),
    ) {
        assert_eq!(apply_extra(change, enabled, count), expected);
    }

    #[tokio::test(start_paused = true)]
    async fn test_full_booking_session() {
        let script = "\
dest Paris
depart 2025-07-01
return 2025-07-10
class business
next
count 2
traveler 1 name Ana Ruiz
traveler 1 birth 1990-06-15
traveler 1 number X123
traveler 2 name Leo Ruiz
traveler 2 birth 2015-03-02
traveler 2 doc id
traveler 2 number Y456
next
pets on
insurance on
next
confirm
quit
";
        let (controller, output) = session(script, offers()).await;

        assert_eq!(controller.current_step(), Step::Summary);
        assert_eq!(controller.form().travelers.len(), 2);
        // 2 * 1200 + 100 + 2 * 75
        assert_eq!(controller.compute_pricing().total_price, 2650.0);
        assert!(output.contains("Loaded 2 flight offers for 1 destinations."));
        assert!(output.contains("Total: $2,650"));
        assert!(output.contains("Booking confirmed!"));
        assert!(output.ends_with("Goodbye!\n"));
    }

    #[tokio::test]
    async fn test_next_is_blocked_until_trip_is_complete() {
        let (controller, output) = session("dest Paris\nnext\n", offers()).await;
        assert_eq!(controller.current_step(), Step::TripInfo);
        assert!(output.contains("missing: departure date, return date"));
    }

    #[tokio::test]
    async fn test_tabs_ahead_are_locked() {
        let (controller, output) = session("tab 3\ntab 9\n", offers()).await;
        assert_eq!(controller.current_step(), Step::TripInfo);
        assert!(output.contains("Step 3 is not available yet"));
        assert!(output.contains("There is no step 9"));
    }

    #[tokio::test]
    async fn test_empty_catalog_notice() {
        let (controller, output) = session("dest Paris\n", Vec::new()).await;
        assert!(output.contains("No flights are available right now"));
        assert_eq!(controller.compute_pricing().flight_price, 0.0);
    }

    #[tokio::test]
    async fn test_unknown_command_keeps_going() {
        let (_, output) = session("fly away\nhelp\n", offers()).await;
        assert!(output.contains("Unknown command 'fly'"));
        assert!(output.contains("Navigation:"));
    }

    #[tokio::test]
    async fn test_oversized_extras_are_rejected_and_increment_is_capped() {
        let (controller, output) =
            session("pets 4294967295\npets 10\npets +\nluggage +\nquit\n", offers()).await;
        assert!(output.contains("At most 10 pets or extra bags per booking"));
        assert_eq!(controller.form().number_of_pets, MAX_EXTRA_ITEMS);
        assert_eq!(controller.form().number_of_extra_luggage, 1);
    }

    #[tokio::test]
    async fn test_confirm_only_from_summary() {
        let (_, output) = session("confirm\n", offers()).await;
        assert!(output.contains("Bookings are confirmed from the summary step"));
    }
}
