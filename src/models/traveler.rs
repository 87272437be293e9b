//! Traveler model collected on the travelers step

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::GlobetrotterError;

/// Identity document presented by a traveler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    #[default]
    Passport,
    #[serde(rename = "id")]
    NationalId,
    DriverLicense,
}

impl DocumentType {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            DocumentType::Passport => "Passport",
            DocumentType::NationalId => "National ID",
            DocumentType::DriverLicense => "Driver License",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DocumentType {
    type Err = GlobetrotterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "passport" => Ok(DocumentType::Passport),
            "id" | "national_id" | "national-id" => Ok(DocumentType::NationalId),
            "license" | "driver_license" | "driver-license" => Ok(DocumentType::DriverLicense),
            other => Err(GlobetrotterError::validation(format!(
                "Unknown document type '{other}'. Must be one of: passport, id, license"
            ))),
        }
    }
}

/// One person on the booking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Traveler {
    /// Stable within a session; never handed out twice
    pub id: String,
    pub full_name: String,
    /// `YYYY-MM-DD`, empty until filled in
    pub birth_date: String,
    pub document_type: DocumentType,
    pub document_number: String,
}

impl Traveler {
    /// A traveler with every required field left blank
    #[must_use]
    pub fn blank(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            full_name: String::new(),
            birth_date: String::new(),
            document_type: DocumentType::default(),
            document_number: String::new(),
        }
    }

    /// All required fields are filled in
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.full_name.is_empty() && !self.birth_date.is_empty() && !self.document_number.is_empty()
    }

    /// Age in whole years on `today`, if the birth date parses
    #[must_use]
    pub fn age_on(&self, today: NaiveDate) -> Option<i32> {
        let birth = NaiveDate::parse_from_str(&self.birth_date, "%Y-%m-%d").ok()?;
        let mut age = today.year() - birth.year();
        if (today.month(), today.day()) < (birth.month(), birth.day()) {
            age -= 1;
        }
        Some(age)
    }
}

/// Partial edit of a single traveler
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TravelerUpdate {
    pub full_name: Option<String>,
    pub birth_date: Option<String>,
    pub document_type: Option<DocumentType>,
    pub document_number: Option<String>,
}

impl TravelerUpdate {
    pub(crate) fn apply_to(self, traveler: &mut Traveler) {
        if let Some(full_name) = self.full_name {
            traveler.full_name = full_name;
        }
        if let Some(birth_date) = self.birth_date {
            traveler.birth_date = birth_date;
        }
        if let Some(document_type) = self.document_type {
            traveler.document_type = document_type;
        }
        if let Some(document_number) = self.document_number {
            traveler.document_number = document_number;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_blank_traveler_is_incomplete() {
        let traveler = Traveler::blank("traveler-1");
        assert_eq!(traveler.id, "traveler-1");
        assert_eq!(traveler.document_type, DocumentType::Passport);
        assert!(!traveler.is_complete());
    }

    #[test]
    fn test_update_only_touches_given_fields() {
        let mut traveler = Traveler::blank("traveler-1");
        TravelerUpdate {
            full_name: Some("Ana Ruiz".to_string()),
            ..Default::default()
        }
        .apply_to(&mut traveler);
        TravelerUpdate {
            document_number: Some("X123".to_string()),
            ..Default::default()
        }
        .apply_to(&mut traveler);

        assert_eq!(traveler.full_name, "Ana Ruiz");
        assert_eq!(traveler.document_number, "X123");
        assert!(traveler.birth_date.is_empty());
    }

    #[rstest]
    #[case("1990-06-15", date(2024, 6, 14), Some(33))]
    #[case("1990-06-15", date(2024, 6, 15), Some(34))]
    #[case("2000-01-01", date(2024, 12, 31), Some(24))]
    #[case("not a date", date(2024, 1, 1), None)]
    #[case("", date(2024, 1, 1), None)]
    fn test_age_on(#[case] birth: &str, #[case] today: NaiveDate, #[case] expected: Option<i32>) {
        let mut traveler = Traveler::blank("t");
        traveler.birth_date = birth.to_string();
        assert_eq!(traveler.age_on(today), expected);
    }

    #[rstest]
    #[case("passport", DocumentType::Passport)]
    #[case("ID", DocumentType::NationalId)]
    #[case("license", DocumentType::DriverLicense)]
    fn test_document_type_from_str(#[case] input: &str, #[case] expected: DocumentType) {
        assert_eq!(input.parse::<DocumentType>().unwrap(), expected);
    }
}
