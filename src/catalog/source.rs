//! Flight catalog sources
//!
//! The catalog is a flat JSON array of `{ destination, class, priceUSD }`
//! records. Sources only fetch and parse; they never retry.

use reqwest::Client;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

use crate::config::CatalogConfig;
use crate::models::{FlightClass, FlightOffer};
use crate::{GlobetrotterError, Result};

/// Something the flight catalog can be fetched from
pub trait FlightSource {
    /// Where the offers come from, for logs and the loading notice
    fn describe(&self) -> String;

    async fn fetch_offers(&self) -> Result<Vec<FlightOffer>>;
}

/// Catalog record as published; the class is kept as text until checked
#[derive(Debug, Deserialize)]
struct RawFlightRecord {
    destination: String,
    class: String,
    #[serde(rename = "priceUSD")]
    price_usd: f64,
}

/// Parse a catalog body.
///
/// Class names must match the feed's spelling exactly. Records with any other
/// class are kept unclassified so their destination is still listed.
pub fn parse_offers(body: &str) -> Result<Vec<FlightOffer>> {
    let records: Vec<RawFlightRecord> = serde_json::from_str(body)?;

    let offers: Vec<FlightOffer> = records
        .into_iter()
        .map(|record| match FlightClass::from_wire(&record.class) {
            Some(class) => FlightOffer::new(record.destination, class, record.price_usd),
            None => {
                warn!(
                    "Flight to '{}' has unknown class '{}' and will not be priced",
                    record.destination, record.class
                );
                FlightOffer::unclassified(record.destination, record.price_usd)
            }
        })
        .collect();

    debug!(
        "Parsed {} flight records, {} unclassified",
        offers.len(),
        offers.iter().filter(|offer| offer.class.is_none()).count()
    );
    Ok(offers)
}

/// Remote JSON feed
pub struct HttpFlightSource {
    client: Client,
    url: String,
}

impl HttpFlightSource {
    /// Create a new feed client
    pub fn new(config: &CatalogConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .user_agent(concat!("Globetrotter/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GlobetrotterError::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            url: config.source_url.clone(),
        })
    }
}

impl FlightSource for HttpFlightSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    #[instrument(name = "fetch_catalog", skip(self), fields(url = %self.url))]
    async fn fetch_offers(&self) -> Result<Vec<FlightOffer>> {
        info!("Fetching flight catalog");

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| GlobetrotterError::catalog(format!("Catalog request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(GlobetrotterError::catalog(format!(
                "Catalog feed answered {status}"
            )));
        }

        let body = response.text().await?;
        let offers = parse_offers(&body)?;
        info!("Fetched {} flight offers", offers.len());
        Ok(offers)
    }
}

/// Local JSON file with the same layout as the feed
pub struct FileFlightSource {
    path: PathBuf,
}

impl FileFlightSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl FlightSource for FileFlightSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    #[instrument(name = "read_catalog", skip(self), fields(path = %self.path.display()))]
    async fn fetch_offers(&self) -> Result<Vec<FlightOffer>> {
        let body = tokio::fs::read_to_string(&self.path).await?;
        parse_offers(&body)
    }
}

/// Offers held in memory
#[derive(Debug, Clone, Default)]
pub struct StaticFlightSource {
    offers: Vec<FlightOffer>,
}

impl StaticFlightSource {
    #[must_use]
    pub fn new(offers: Vec<FlightOffer>) -> Self {
        Self { offers }
    }
}

impl FlightSource for StaticFlightSource {
    fn describe(&self) -> String {
        format!("{} in-memory offers", self.offers.len())
    }

    async fn fetch_offers(&self) -> Result<Vec<FlightOffer>> {
        Ok(self.offers.clone())
    }
}

/// Source picked from configuration: a local file wins over the feed
pub enum ConfiguredSource {
    Http(HttpFlightSource),
    File(FileFlightSource),
}

impl ConfiguredSource {
    pub fn from_config(config: &CatalogConfig) -> Result<Self> {
        match &config.file {
            Some(path) => Ok(ConfiguredSource::File(FileFlightSource::new(path.clone()))),
            None => Ok(ConfiguredSource::Http(HttpFlightSource::new(config)?)),
        }
    }
}

impl FlightSource for ConfiguredSource {
    fn describe(&self) -> String {
        match self {
            ConfiguredSource::Http(source) => source.describe(),
            ConfiguredSource::File(source) => source.describe(),
        }
    }

    async fn fetch_offers(&self) -> Result<Vec<FlightOffer>> {
        match self {
            ConfiguredSource::Http(source) => source.fetch_offers().await,
            ConfiguredSource::File(source) => source.fetch_offers().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const FEED: &str = r#"[
        {"destination": "Paris", "class": "Economy", "priceUSD": 650},
        {"destination": "Paris", "class": "Business", "priceUSD": 1200.5},
        {"destination": "Tokyo", "class": "First Class", "priceUSD": 3400},
        {"destination": "Lima", "class": "Premium Economy", "priceUSD": 900}
    ]"#;

    #[test]
    fn test_parse_offers_keeps_unknown_classes_unclassified() {
        let offers = parse_offers(FEED).unwrap();
        assert_eq!(offers.len(), 4);
        assert_eq!(offers[1], FlightOffer::new("Paris", FlightClass::Business, 1200.5));
        assert_eq!(offers[2].class, Some(FlightClass::First));
        assert_eq!(offers[3], FlightOffer::unclassified("Lima", 900.0));
    }

    #[test]
    fn test_parse_offers_matches_class_names_exactly() {
        let offers = parse_offers(
            r#"[
                {"destination": "Rome", "class": "business", "priceUSD": 800},
                {"destination": "Rome", "class": "First", "priceUSD": 1900}
            ]"#,
        )
        .unwrap();
        assert!(offers.iter().all(|offer| offer.class.is_none()));
    }

    #[test]
    fn test_parse_offers_rejects_malformed_body() {
        let err = parse_offers(r#"{"flights": []}"#).unwrap_err();
        assert!(matches!(err, GlobetrotterError::Catalog { .. }));

        let err = parse_offers(r#"[{"destination": "Paris", "class": "Economy"}]"#).unwrap_err();
        assert!(matches!(err, GlobetrotterError::Catalog { .. }));
    }

    #[test]
    fn test_parse_empty_array() {
        assert!(parse_offers("[]").unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_file_source_reads_feed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{FEED}").unwrap();

        let source = FileFlightSource::new(file.path());
        let offers = source.fetch_offers().await.unwrap();
        assert_eq!(offers.len(), 4);
    }

    #[tokio::test]
    async fn test_file_source_missing_file() {
        let source = FileFlightSource::new("/definitely/not/here/flights.json");
        let err = source.fetch_offers().await.unwrap_err();
        assert!(matches!(err, GlobetrotterError::Io { .. }));
    }

    #[test]
    fn test_configured_source_prefers_file() {
        let config = CatalogConfig {
            file: Some(PathBuf::from("flights.json")),
            ..CatalogConfig::default()
        };
        let source = ConfiguredSource::from_config(&config).unwrap();
        assert!(matches!(source, ConfiguredSource::File(_)));
        assert_eq!(source.describe(), "flights.json");
    }

    #[test]
    fn test_http_source_creation() {
        let config = CatalogConfig::default();
        let source = HttpFlightSource::new(&config).unwrap();
        assert_eq!(source.describe(), config.source_url);
    }
}
