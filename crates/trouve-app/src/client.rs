// Rust guideline compliant 2026-02-09

//! HTTP access to the worker directory service.

use crate::error::{AppError, Result};
use reqwest::{Client, Url};
use std::future::Future;
use std::time::Duration;
use tracing::{debug, info, warn};
use trouve_core::{listing_params, workers_url, Config, FilterState, Geolocation, Worker};

/// Read access to the worker directory.
///
/// Screens depend on this trait rather than on HTTP so they can be driven by
/// any source of records.
pub trait DirectoryApi {
    /// Fetches the listing for the given filter state and viewer position.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Timeout`] when the bound is exceeded,
    /// [`AppError::HttpStatus`] on a non-success status, and
    /// [`AppError::Network`] or [`AppError::Decode`] otherwise.
    fn fetch_listing(
        &self,
        state: &FilterState,
        location: Option<Geolocation>,
    ) -> impl Future<Output = Result<Vec<Worker>>> + Send;

    /// Fetches a single worker by identifier.
    ///
    /// # Errors
    ///
    /// Every transport or decoding failure is reported as
    /// [`AppError::DetailLoad`]. A blank identifier is rejected up front.
    fn fetch_worker(&self, id: &str) -> impl Future<Output = Result<Worker>> + Send;
}

/// [`DirectoryApi`] backed by the REST endpoints `{base}/api/workers/`.
#[derive(Debug, Clone)]
pub struct HttpDirectory {
    client: Client,
    base_url: String,
    listing_timeout: Duration,
}

impl HttpDirectory {
    /// Creates a directory client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Service address, e.g. `http://127.0.0.1:8000`
    /// * `listing_timeout` - Bound applied to listing requests only
    ///
    /// # Errors
    ///
    /// Returns an error if the address is not a valid URL or the bound is zero.
    pub fn new(base_url: impl Into<String>, listing_timeout: Duration) -> Result<Self> {
        let base_url = base_url.into();
        Url::parse(&base_url)
            .map_err(|err| AppError::InvalidInput(format!("Invalid base URL {base_url}: {err}")))?;
        if listing_timeout.is_zero() {
            return Err(AppError::InvalidInput(
                "Listing timeout must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            listing_timeout,
        })
    }

    /// Creates a directory client from loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured address or timeout is invalid.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            config.base_url.clone(),
            Duration::from_millis(config.listing_timeout_ms),
        )
    }

    /// Returns the service address without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the bound applied to listing requests.
    #[must_use]
    pub fn listing_timeout(&self) -> Duration {
        self.listing_timeout
    }

    /// Builds `{base}/api/workers/{id}/` with the identifier percent-encoded.
    ///
    /// # Errors
    ///
    /// Returns an error if the identifier is blank.
    pub fn worker_url(&self, id: &str) -> Result<Url> {
        if id.trim().is_empty() {
            return Err(AppError::InvalidInput("Worker ID cannot be empty".to_string()));
        }

        let mut url = Url::parse(&workers_url(&self.base_url))
            .map_err(|err| AppError::InvalidInput(format!("Invalid base URL: {err}")))?;
        url.path_segments_mut()
            .map_err(|()| AppError::InvalidInput(format!("Cannot extend {}", self.base_url)))?
            .pop_if_empty()
            .push(id)
            .push("");
        Ok(url)
    }

    fn timeout_error(&self) -> AppError {
        AppError::Timeout {
            base_url: self.base_url.clone(),
            timeout_ms: u64::try_from(self.listing_timeout.as_millis()).unwrap_or(u64::MAX),
        }
    }

    async fn load_worker(&self, url: Url) -> reqwest::Result<Worker> {
        self.client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json::<Worker>()
            .await
    }
}

impl DirectoryApi for HttpDirectory {
    async fn fetch_listing(
        &self,
        state: &FilterState,
        location: Option<Geolocation>,
    ) -> Result<Vec<Worker>> {
        let url = workers_url(&self.base_url);
        let params = listing_params(state, location);
        debug!(url = %url, ?params, "fetching worker listing");

        let request = self.client.get(&url).query(&params).send();
        let response = match tokio::time::timeout(self.listing_timeout, request).await {
            Err(_elapsed) => {
                warn!(url = %url, timeout_ms = ?self.listing_timeout, "worker listing timed out");
                return Err(self.timeout_error());
            }
            Ok(Err(err)) if err.is_timeout() => {
                warn!(url = %url, error = %err, "worker listing timed out");
                return Err(self.timeout_error());
            }
            Ok(Err(err)) => {
                warn!(url = %url, error = %err, "worker listing request failed");
                return Err(AppError::Network {
                    base_url: self.base_url.clone(),
                    reason: err.to_string(),
                });
            }
            Ok(Ok(response)) => response,
        };

        let status = response.status();
        if !status.is_success() {
            warn!(url = %url, status = status.as_u16(), "worker listing returned an error status");
            return Err(AppError::HttpStatus {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let workers: Vec<Worker> = response
            .json()
            .await
            .map_err(|err| AppError::Decode(err.to_string()))?;
        info!(count = workers.len(), "worker listing loaded");
        Ok(workers)
    }

    async fn fetch_worker(&self, id: &str) -> Result<Worker> {
        let url = self.worker_url(id)?;
        debug!(url = %url, "fetching worker detail");

        self.load_worker(url).await.map_err(|err| {
            warn!(id, error = %err, "worker detail failed");
            AppError::DetailLoad {
                base_url: self.base_url.clone(),
                id: id.to_string(),
                reason: err.to_string(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worker_url_encodes_identifier() {
        let directory =
            HttpDirectory::new("http://127.0.0.1:8000/", Duration::from_secs(5)).unwrap();
        assert_eq!(
            directory.worker_url("42").unwrap().as_str(),
            "http://127.0.0.1:8000/api/workers/42/"
        );
        assert_eq!(
            directory.worker_url("a b").unwrap().as_str(),
            "http://127.0.0.1:8000/api/workers/a%20b/"
        );
        assert!(directory.worker_url(" ").is_err());
    }

    #[test]
    fn test_new_rejects_invalid_inputs() {
        assert!(HttpDirectory::new("not a url", Duration::from_secs(5)).is_err());
        assert!(HttpDirectory::new("http://127.0.0.1:8000", Duration::ZERO).is_err());
    }

    #[test]
    fn test_from_config_uses_listing_bound() {
        let config = Config {
            listing_timeout_ms: 1500,
            ..Config::default()
        };
        let directory = HttpDirectory::from_config(&config).unwrap();
        assert_eq!(directory.listing_timeout(), Duration::from_millis(1500));
        assert_eq!(directory.base_url(), "http://127.0.0.1:8000");
    }
}
