//! The request object: holds the parameters of one archive query, classifies
//! the requested variables and renders the query string.

use crate::error::ArchiveError;
use crate::fetch::client::ArchiveClient;
use crate::fetch::response::ArchiveResponse;
use crate::request::error::ConfigurationError;
use crate::request::params::QueryParams;
use crate::tables::archive_tables::ArchiveTables;
use crate::types::frequency::Frequency;
use crate::types::variables::{select_for, unknown_variables};
use bon::bon;
use chrono::NaiveDate;
use log::debug;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Represents a geographical coordinate using latitude and longitude.
///
/// Latitude is the first element (index 0), and longitude is the second (index 1).
///
/// # Examples
///
/// ```
/// use openmeteo_archive::LatLon;
///
/// let berlin_center = LatLon(52.52, 13.41);
/// assert_eq!(berlin_center.0, 52.52); // Latitude
/// assert_eq!(berlin_center.1, 13.41); // Longitude
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLon(pub f64, pub f64);

impl LatLon {
    fn validate(&self) -> Result<(), ConfigurationError> {
        if !self.0.is_finite() || !(-90.0..=90.0).contains(&self.0) {
            return Err(ConfigurationError::InvalidLatitude(self.0));
        }
        if !self.1.is_finite() || !(-180.0..=180.0).contains(&self.1) {
            return Err(ConfigurationError::InvalidLongitude(self.1));
        }
        Ok(())
    }
}

/// A validated query against the Open-Meteo historical weather archive.
///
/// Built with [`HistoricalWeatherRequest::builder()`]. Construction splits the
/// requested variables into an hourly and a daily list using the fixed
/// catalogs ([`crate::HOURLY_VARIABLES`], [`crate::DAILY_VARIABLES`]). Names in
/// neither catalog are dropped. A request is immutable once built.
///
/// # Examples
///
/// ```
/// use openmeteo_archive::{HistoricalWeatherRequest, LatLon};
/// use chrono::NaiveDate;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let request = HistoricalWeatherRequest::builder()
///     .location(LatLon(52.52, 13.41))
///     .variables(&["temperature_2m", "sunrise"])
///     .start_date(NaiveDate::from_ymd_opt(2023, 1, 1).unwrap())
///     .end_date(NaiveDate::from_ymd_opt(2023, 1, 2).unwrap())
///     .build()?;
///
/// assert_eq!(request.hourly_vars(), ["temperature_2m"]);
/// assert_eq!(request.daily_vars(), ["sunrise"]);
///
/// let params = request.build_params();
/// assert_eq!(params.get("hourly"), Some("temperature_2m"));
/// assert_eq!(params.get("daily"), Some("sunrise"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct HistoricalWeatherRequest {
    location: LatLon,
    variables: Vec<String>,
    start_date: NaiveDate,
    end_date: NaiveDate,
    timezone: String,
    temperature_unit: String,
    wind_speed_unit: String,
    precipitation_unit: String,
    timeformat: String,
    model: Option<String>,
    elevation: Option<f64>,
    cell_selection: String,
    hourly_vars: Vec<String>,
    daily_vars: Vec<String>,
}

#[bon]
impl HistoricalWeatherRequest {
    /// Creates a new request.
    ///
    /// This method uses a builder pattern.
    ///
    /// # Arguments
    ///
    /// * `.location(LatLon)`: **Required.** The coordinates to query.
    /// * `.variables(&[&str])`: **Required.** Variable names, hourly and daily mixed.
    /// * `.start_date(NaiveDate)`, `.end_date(NaiveDate)`: **Required.** Inclusive date range.
    /// * `.timezone(..)`: Optional. Defaults to `"auto"`.
    /// * `.temperature_unit(..)`: Optional. Defaults to `"celsius"`.
    /// * `.wind_speed_unit(..)`: Optional. Defaults to `"kmh"`.
    /// * `.precipitation_unit(..)`: Optional. Defaults to `"mm"`.
    /// * `.timeformat(..)`: Optional. Defaults to `"iso8601"`.
    /// * `.model(..)`: Optional. Omitted from the query when not set.
    /// * `.elevation(f64)`: Optional. Omitted from the query when not set; `0.0` is sent.
    /// * `.cell_selection(..)`: Optional. Defaults to `"land"`.
    ///
    /// Unit and format strings are passed to the API unchanged.
    ///
    /// # Errors
    ///
    /// * [`ConfigurationError::NoValidVariables`] if no requested variable is in either catalog.
    /// * [`ConfigurationError::InvalidLatitude`] / [`ConfigurationError::InvalidLongitude`]
    ///   for coordinates outside the valid range.
    /// * [`ConfigurationError::InvalidDateRange`] if `start_date` is after `end_date`.
    #[builder]
    pub fn new(
        location: LatLon,
        variables: &[&str],
        start_date: NaiveDate,
        end_date: NaiveDate,
        #[builder(into, default = "auto".to_string())] timezone: String,
        #[builder(into, default = "celsius".to_string())] temperature_unit: String,
        #[builder(into, default = "kmh".to_string())] wind_speed_unit: String,
        #[builder(into, default = "mm".to_string())] precipitation_unit: String,
        #[builder(into, default = "iso8601".to_string())] timeformat: String,
        #[builder(into)] model: Option<String>,
        elevation: Option<f64>,
        #[builder(into, default = "land".to_string())] cell_selection: String,
    ) -> Result<Self, ConfigurationError> {
        location.validate()?;
        if start_date > end_date {
            return Err(ConfigurationError::InvalidDateRange {
                start: start_date,
                end: end_date,
            });
        }

        let variables: Vec<String> = variables.iter().map(|v| v.to_string()).collect();
        let hourly_vars = select_for(Frequency::Hourly, &variables);
        let daily_vars = select_for(Frequency::Daily, &variables);

        let unknown = unknown_variables(&variables);
        if !unknown.is_empty() {
            debug!("Dropping unknown variables: {:?}", unknown);
        }

        if hourly_vars.is_empty() && daily_vars.is_empty() {
            return Err(ConfigurationError::NoValidVariables {
                requested: variables,
            });
        }

        Ok(Self {
            location,
            variables,
            start_date,
            end_date,
            timezone,
            temperature_unit,
            wind_speed_unit,
            precipitation_unit,
            timeformat,
            model,
            elevation,
            cell_selection,
            hourly_vars,
            daily_vars,
        })
    }
}

impl HistoricalWeatherRequest {
    /// Builds the query parameters for this request.
    ///
    /// The ten base parameters are always present, in a fixed order. `hourly`
    /// and `daily` are included only when their variable list is non-empty,
    /// `model` and `elevation` only when they were set.
    pub fn build_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.push("latitude", self.location.0);
        params.push("longitude", self.location.1);
        params.push("start_date", self.start_date.format(DATE_FORMAT));
        params.push("end_date", self.end_date.format(DATE_FORMAT));
        params.push("timezone", &self.timezone);
        params.push("temperature_unit", &self.temperature_unit);
        params.push("wind_speed_unit", &self.wind_speed_unit);
        params.push("precipitation_unit", &self.precipitation_unit);
        params.push("timeformat", &self.timeformat);
        params.push("cell_selection", &self.cell_selection);

        if !self.hourly_vars.is_empty() {
            params.push("hourly", self.hourly_vars.join(","));
        }
        if !self.daily_vars.is_empty() {
            params.push("daily", self.daily_vars.join(","));
        }
        if let Some(model) = &self.model {
            params.push("model", model);
        }
        if let Some(elevation) = self.elevation {
            params.push("elevation", elevation);
        }

        params
    }

    /// Fetches the raw archive response with a fresh [`ArchiveClient`].
    ///
    /// # Errors
    ///
    /// Returns [`ArchiveError::Fetch`] if the request fails, the API answers with
    /// a non-success status, or the body cannot be decoded.
    pub async fn fetch(&self) -> Result<ArchiveResponse, ArchiveError> {
        self.fetch_with(&ArchiveClient::new()).await
    }

    pub(crate) async fn fetch_with(
        &self,
        client: &ArchiveClient,
    ) -> Result<ArchiveResponse, ArchiveError> {
        Ok(client.fetch(self).await?)
    }

    /// Fetches the data and shapes it into tables indexed by timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`ArchiveError::Fetch`] if fetching fails and [`ArchiveError::Table`]
    /// if the response has neither an hourly nor a daily section, or cannot be shaped.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use openmeteo_archive::{ArchiveError, HistoricalWeatherRequest, LatLon};
    /// use chrono::NaiveDate;
    ///
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let tables = HistoricalWeatherRequest::builder()
    ///     .location(LatLon(52.52, 13.41))
    ///     .variables(&["temperature_2m", "temperature_2m_max"])
    ///     .start_date(NaiveDate::from_ymd_opt(2023, 1, 1).unwrap())
    ///     .end_date(NaiveDate::from_ymd_opt(2023, 1, 7).unwrap())
    ///     .build()?
    ///     .to_tables()
    ///     .await?;
    ///
    /// if let Some(hourly) = tables.hourly() {
    ///     println!("{}", hourly.frame);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn to_tables(&self) -> Result<ArchiveTables, ArchiveError> {
        self.to_tables_with(&ArchiveClient::new()).await
    }

    pub(crate) async fn to_tables_with(
        &self,
        client: &ArchiveClient,
    ) -> Result<ArchiveTables, ArchiveError> {
        client.fetch_tables(self).await
    }

    pub fn location(&self) -> LatLon {
        self.location
    }

    /// The variables as given, including any that were dropped.
    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    /// Requested variables found in the hourly catalog, in request order.
    pub fn hourly_vars(&self) -> &[String] {
        &self.hourly_vars
    }

    /// Requested variables found in the daily catalog, in request order.
    pub fn daily_vars(&self) -> &[String] {
        &self.daily_vars
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn timezone(&self) -> &str {
        &self.timezone
    }

    pub fn temperature_unit(&self) -> &str {
        &self.temperature_unit
    }

    pub fn wind_speed_unit(&self) -> &str {
        &self.wind_speed_unit
    }

    pub fn precipitation_unit(&self) -> &str {
        &self.precipitation_unit
    }

    pub fn timeformat(&self) -> &str {
        &self.timeformat
    }

    pub fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    pub fn elevation(&self) -> Option<f64> {
        self.elevation
    }

    pub fn cell_selection(&self) -> &str {
        &self.cell_selection
    }
}
