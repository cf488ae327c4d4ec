//! The HTTP side of the crate: sends one GET per request to the archive
//! endpoint and decodes the answer.

use crate::error::ArchiveError;
use crate::fetch::error::FetchError;
use crate::fetch::response::{ApiErrorBody, ArchiveResponse};
use crate::request::historical_request::HistoricalWeatherRequest;
use crate::tables::archive_tables::ArchiveTables;
use bon::bon;
use log::{info, warn};
use reqwest::Client;
use std::time::Duration;

/// The public Open-Meteo historical weather endpoint.
pub const ARCHIVE_URL: &str = "https://archive-api.open-meteo.com/v1/archive";

const MAX_REASON_LEN: usize = 200;

/// Client for the Open-Meteo archive API.
///
/// Create one with [`ArchiveClient::new()`] for the public endpoint without a
/// timeout, or with [`ArchiveClient::custom()`] to point at another base URL
/// or bound the request time. Each call sends exactly one request; nothing is
/// retried or cached.
///
/// # Examples
///
/// ```no_run
/// # use openmeteo_archive::{ArchiveClient, ArchiveError, HistoricalWeatherRequest, LatLon};
/// # use chrono::NaiveDate;
/// # use std::time::Duration;
/// # #[tokio::main]
/// # async fn main() -> Result<(), ArchiveError> {
/// let client = ArchiveClient::custom()
///     .timeout(Duration::from_secs(30))
///     .call()?;
///
/// let request = HistoricalWeatherRequest::builder()
///     .location(LatLon(51.50, -0.12))
///     .variables(&["precipitation_sum"])
///     .start_date(NaiveDate::from_ymd_opt(2022, 7, 1).unwrap())
///     .end_date(NaiveDate::from_ymd_opt(2022, 7, 31).unwrap())
///     .build()?;
///
/// let tables = client.fetch_tables(&request).await?;
/// println!("{:?}", tables.daily().map(|d| d.height()));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ArchiveClient {
    http: Client,
    base_url: String,
}

#[bon]
impl ArchiveClient {
    /// Creates a client with custom settings.
    ///
    /// This method uses a builder pattern.
    ///
    /// # Arguments
    ///
    /// * `.base_url(..)`: Optional. Endpoint to query. Defaults to [`ARCHIVE_URL`].
    /// * `.timeout(Duration)`: Optional. Total time allowed per request. No timeout if unset.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::ClientBuild`] if the underlying HTTP client cannot be created.
    #[builder]
    pub fn custom(
        #[builder(into)] base_url: Option<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, FetchError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(FetchError::ClientBuild)?;

        Ok(Self {
            http,
            base_url: base_url.unwrap_or_else(|| ARCHIVE_URL.to_string()),
        })
    }
}

impl ArchiveClient {
    /// Creates a client for the public archive endpoint.
    pub fn new() -> Self {
        Self {
            http: Client::new(),
            base_url: ARCHIVE_URL.to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sends the request and decodes the JSON payload.
    ///
    /// Failures are logged at `warn` level and returned, never swallowed.
    ///
    /// # Errors
    ///
    /// * [`FetchError::NetworkRequest`] for connection failures and timeouts.
    /// * [`FetchError::HttpStatus`] for a non-success status. The `reason` carries
    ///   the API's own explanation when the body has one.
    /// * [`FetchError::Decode`] if a successful body is not a valid archive response.
    pub async fn fetch(
        &self,
        request: &HistoricalWeatherRequest,
    ) -> Result<ArchiveResponse, FetchError> {
        let params = request.build_params();
        let http_request = self
            .http
            .get(&self.base_url)
            .query(&params)
            .build()
            .map_err(|e| FetchError::NetworkRequest(self.base_url.clone(), e))?;
        let url = http_request.url().to_string();
        info!("Requesting archive data from {}", url);

        let response = self.http.execute(http_request).await.map_err(|e| {
            warn!("API request error for {}: {}", url, e);
            FetchError::NetworkRequest(url.clone(), e)
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            warn!("Could not read response body from {}: {}", url, e);
            FetchError::NetworkRequest(url.clone(), e)
        })?;

        if !status.is_success() {
            let reason = error_reason(status, &body);
            warn!("HTTP error {} for {}: {}", status, url, reason);
            return Err(FetchError::HttpStatus {
                url,
                status,
                reason,
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            warn!("Could not decode archive response from {}: {}", url, e);
            FetchError::Decode(url, e)
        })
    }

    /// Fetches the request and shapes the payload into [`ArchiveTables`].
    ///
    /// # Errors
    ///
    /// Returns [`ArchiveError::Fetch`] if fetching fails and [`ArchiveError::Table`]
    /// if the payload has no data section or cannot be shaped.
    pub async fn fetch_tables(
        &self,
        request: &HistoricalWeatherRequest,
    ) -> Result<ArchiveTables, ArchiveError> {
        let response = self.fetch(request).await?;
        Ok(ArchiveTables::try_from(response)?)
    }
}

impl Default for ArchiveClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Picks the most useful explanation for a failed response.
fn error_reason(status: reqwest::StatusCode, body: &str) -> String {
    if let Ok(api_error) = serde_json::from_str::<ApiErrorBody>(body) {
        return api_error.reason;
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string();
    }
    trimmed.chars().take(MAX_REASON_LEN).collect()
}
