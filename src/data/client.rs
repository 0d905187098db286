//! HTTP client for the dataset, rubric, and freshness probes.
//!
//! All requests are blocking and run on worker threads owned by the
//! [`DataStore`](super::DataStore); nothing here touches the UI thread.

use crate::config::DataConfig;
use crate::error::{FetchErrorKind, FixgradeError, Result};
use crate::model::{Device, Rubric};
use chrono::{DateTime, Utc};
use std::time::Duration;

/// Blocking HTTP client with per-request timeout.
#[derive(Debug, Clone)]
pub struct DataClient {
    devices_url: String,
    rubric_url: String,
    timeout: Duration,
}

impl DataClient {
    #[must_use]
    pub fn new(config: &DataConfig) -> Self {
        Self {
            devices_url: config.devices_url(),
            rubric_url: config.rubric_url(),
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }

    /// Fetch the canonical device dataset.
    #[cfg(feature = "fetch")]
    pub fn fetch_devices(&self) -> Result<Vec<Device>> {
        let client = self.build_client()?;

        tracing::debug!(url = %self.devices_url, "fetching device dataset");
        let response = client
            .get(&self.devices_url)
            .header("Accept", "application/json")
            .send()
            .map_err(|e| {
                FixgradeError::fetch("device dataset", FetchErrorKind::Network(e.to_string()))
            })?;

        if !response.status().is_success() {
            return Err(FixgradeError::http_status(
                &self.devices_url,
                response.status().as_u16(),
            ));
        }

        response.json().map_err(|e| {
            FixgradeError::fetch("device dataset", FetchErrorKind::InvalidBody(e.to_string()))
        })
    }

    /// Fetch the rubric document.
    #[cfg(feature = "fetch")]
    pub fn fetch_rubric(&self) -> Result<Rubric> {
        let client = self.build_client()?;

        tracing::debug!(url = %self.rubric_url, "fetching rubric");
        let response = client
            .get(&self.rubric_url)
            .header("Accept", "application/json")
            .send()
            .map_err(|e| {
                FixgradeError::fetch("rubric", FetchErrorKind::Network(e.to_string()))
            })?;

        if !response.status().is_success() {
            return Err(FixgradeError::http_status(
                &self.rubric_url,
                response.status().as_u16(),
            ));
        }

        response.json().map_err(|e| {
            FixgradeError::fetch("rubric", FetchErrorKind::InvalidBody(e.to_string()))
        })
    }

    /// Read the dataset's `Last-Modified` timestamp via a `HEAD` request.
    ///
    /// Purely informational for the freshness display; absence of the
    /// header is not an error.
    #[cfg(feature = "fetch")]
    pub fn head_last_modified(&self) -> Result<Option<DateTime<Utc>>> {
        let client = self.build_client()?;

        let response = client.head(&self.devices_url).send().map_err(|e| {
            FixgradeError::fetch("freshness probe", FetchErrorKind::Network(e.to_string()))
        })?;

        if !response.status().is_success() {
            return Err(FixgradeError::http_status(
                &self.devices_url,
                response.status().as_u16(),
            ));
        }

        let last_modified = response
            .headers()
            .get(reqwest::header::LAST_MODIFIED)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| DateTime::parse_from_rfc2822(v).ok())
            .map(|dt| dt.with_timezone(&Utc));

        Ok(last_modified)
    }

    #[cfg(feature = "fetch")]
    fn build_client(&self) -> Result<reqwest::blocking::Client> {
        reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .user_agent(concat!("fixgrade/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                FixgradeError::fetch("client setup", FetchErrorKind::Network(e.to_string()))
            })
    }

    #[cfg(not(feature = "fetch"))]
    pub fn fetch_devices(&self) -> Result<Vec<Device>> {
        Err(self.disabled())
    }

    #[cfg(not(feature = "fetch"))]
    pub fn fetch_rubric(&self) -> Result<Rubric> {
        Err(self.disabled())
    }

    #[cfg(not(feature = "fetch"))]
    pub fn head_last_modified(&self) -> Result<Option<DateTime<Utc>>> {
        Err(self.disabled())
    }

    #[cfg(not(feature = "fetch"))]
    fn disabled(&self) -> FixgradeError {
        FixgradeError::fetch(
            "network access",
            FetchErrorKind::Disabled(
                "built without the 'fetch' feature; rebuild with --features fetch".to_string(),
            ),
        )
    }
}
