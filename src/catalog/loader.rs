//! Catalog loading
//!
//! A failed fetch never reaches the caller: it is logged and the session
//! continues with an empty catalog.

use tracing::{error, info};

use super::FlightCatalog;
use super::source::FlightSource;
use crate::Result;
use crate::models::FlightOffer;

/// Service for turning a source fetch into the session's catalog
pub struct CatalogLoader;

impl CatalogLoader {
    /// Fetch once from `source` and settle the outcome
    pub async fn load<S: FlightSource>(source: &S) -> FlightCatalog {
        let origin = source.describe();
        Self::settle(source.fetch_offers().await, &origin)
    }

    /// Keep the offers on success; log and fall back to an empty catalog on failure
    pub fn settle(result: Result<Vec<FlightOffer>>, origin: &str) -> FlightCatalog {
        match result {
            Ok(offers) => {
                info!("Loaded {} flight offers from {}", offers.len(), origin);
                FlightCatalog::new(offers)
            }
            Err(e) => {
                error!("Error fetching flights from {}: {}", origin, e);
                FlightCatalog::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GlobetrotterError;
    use crate::catalog::StaticFlightSource;
    use crate::models::FlightClass;

    struct UnreachableSource;

    impl FlightSource for UnreachableSource {
        fn describe(&self) -> String {
            "unreachable".to_string()
        }

        async fn fetch_offers(&self) -> Result<Vec<FlightOffer>> {
            Err(GlobetrotterError::catalog("connection refused"))
        }
    }

    #[tokio::test]
    async fn test_load_keeps_offers() {
        let source = StaticFlightSource::new(vec![FlightOffer::new(
            "Paris",
            FlightClass::Economy,
            650.0,
        )]);
        let catalog = CatalogLoader::load(&source).await;
        assert_eq!(catalog.len(), 1);
    }

    #[tokio::test]
    async fn test_failed_fetch_leaves_catalog_empty() {
        let catalog = CatalogLoader::load(&UnreachableSource).await;
        assert!(catalog.is_empty());
    }
}
