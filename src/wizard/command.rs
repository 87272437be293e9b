//! Commands typed into the wizard shell

use chrono::NaiveDate;
use std::str::FromStr;

use crate::models::{DocumentType, FlightClass, MAX_EXTRA_ITEMS};
use crate::{GlobetrotterError, Result};

/// Change to a pets or extra luggage selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtraChange {
    On,
    Off,
    Set(u32),
    More,
    Fewer,
}

/// Field edit for one traveler
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TravelerField {
    Name(String),
    BirthDate(String),
    Document(DocumentType),
    DocumentNumber(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // Navigation
    Next,
    Back,
    Tab(i64),
    Show,
    Help,
    Quit,

    // Trip
    Destination(String),
    Departure(String),
    Return(String),
    Class(FlightClass),

    // Travelers; the index is 1-based as typed
    Travelers(u32),
    Traveler { position: usize, field: TravelerField },

    // Services
    Pets(ExtraChange),
    Luggage(ExtraChange),
    Insurance(bool),
    Seats(bool),
    Assistance(bool),
    Note(String),

    // Summary
    Confirm,
    NewBooking,
}

pub const HELP: &str = "\
Navigation:  next | back | tab <1-4> | show | help | quit
Trip:        dest <city> | depart <YYYY-MM-DD> | return <YYYY-MM-DD> | class economy|business|first
Travelers:   count <1-10> | traveler <n> name|birth|doc|number <value>
Services:    pets on|off|<n>|+|- | luggage on|off|<n>|+|- | insurance on|off | seats on|off
             assistance on|off | note <text>
Summary:     confirm | new";

impl FromStr for Command {
    type Err = GlobetrotterError;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        let (keyword, rest) = match line.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest.trim()),
            None => (line, ""),
        };

        let command = match keyword.to_lowercase().as_str() {
            "next" | "continue" | "n" => Command::Next,
            "back" | "b" => Command::Back,
            "tab" | "step" => Command::Tab(parse_number(rest, "step")?),
            "show" | "" => Command::Show,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,

            "dest" | "destination" => Command::Destination(rest.to_string()),
            "depart" | "departure" => Command::Departure(parse_date(rest)?),
            "return" => Command::Return(parse_date(rest)?),
            "class" => Command::Class(rest.parse()?),

            "count" | "travelers" => Command::Travelers(parse_number(rest, "traveler count")?),
            "traveler" => parse_traveler(rest)?,

            "pets" => Command::Pets(parse_extra(rest)?),
            "luggage" | "bags" => Command::Luggage(parse_extra(rest)?),
            "insurance" => Command::Insurance(parse_switch(rest)?),
            "seats" => Command::Seats(parse_switch(rest)?),
            "assistance" => Command::Assistance(parse_switch(rest)?),
            "note" => Command::Note(rest.to_string()),

            "confirm" => Command::Confirm,
            "new" | "restart" => Command::NewBooking,

            other => {
                return Err(GlobetrotterError::validation(format!(
                    "Unknown command '{other}' (type 'help' for the list)"
                )));
            }
        };
        Ok(command)
    }
}

fn parse_number<T: FromStr>(text: &str, what: &str) -> Result<T> {
    text.parse()
        .map_err(|_| GlobetrotterError::validation(format!("Expected a {what}, got '{text}'")))
}

/// Dates are kept as `YYYY-MM-DD` text; an empty value clears the field
fn parse_date(text: &str) -> Result<String> {
    if text.is_empty() {
        return Ok(String::new());
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .map(|date| date.format("%Y-%m-%d").to_string())
        .map_err(|_| GlobetrotterError::validation(format!("Expected a YYYY-MM-DD date, got '{text}'")))
}

fn parse_switch(text: &str) -> Result<bool> {
    match text.to_lowercase().as_str() {
        "on" | "yes" | "y" | "true" => Ok(true),
        "off" | "no" | "n" | "false" => Ok(false),
        _ => Err(GlobetrotterError::validation(format!(
            "Expected on or off, got '{text}'"
        ))),
    }
}

fn parse_extra(text: &str) -> Result<ExtraChange> {
    match text {
        "+" => Ok(ExtraChange::More),
        "-" => Ok(ExtraChange::Fewer),
        _ if text.chars().all(|c| c.is_ascii_digit()) && !text.is_empty() => {
            let count: u32 = parse_number(text, "count")?;
            if count > MAX_EXTRA_ITEMS {
                return Err(GlobetrotterError::validation(format!(
                    "At most {MAX_EXTRA_ITEMS} pets or extra bags per booking"
                )));
            }
            Ok(ExtraChange::Set(count))
        }
        _ => parse_switch(text).map(|on| if on { ExtraChange::On } else { ExtraChange::Off }),
    }
}

fn parse_traveler(text: &str) -> Result<Command> {
    let mut parts = text.splitn(3, char::is_whitespace);
    let position: usize = parse_number(parts.next().unwrap_or_default(), "traveler number")?;
    let field = parts.next().unwrap_or_default().to_lowercase();
    let value = parts.next().unwrap_or_default().trim();

    let field = match field.as_str() {
        "name" => TravelerField::Name(value.to_string()),
        "birth" | "born" => TravelerField::BirthDate(parse_date(value)?),
        "doc" | "document" => TravelerField::Document(value.parse()?),
        "number" => TravelerField::DocumentNumber(value.to_string()),
        _ => {
            return Err(GlobetrotterError::validation(format!(
                "Unknown traveler field '{field}' (use name, birth, doc or number)"
            )));
        }
    };
    Ok(Command::Traveler { position, field })
}
