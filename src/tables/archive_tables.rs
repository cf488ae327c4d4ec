//! The result of shaping an archive response: up to one table per frequency.

use crate::fetch::response::ArchiveResponse;
use crate::tables::error::TableError;
use crate::tables::shaping::section_to_frame;
use crate::tables::weather_frame::WeatherFrame;
use crate::types::frequency::Frequency;
use log::debug;

/// The tables built from one archive response.
///
/// Always has the same shape regardless of which sections the API returned:
/// a slot for the hourly table and one for the daily table, each `None` when
/// the response had no such section. At least one slot is filled.
#[derive(Debug, Clone)]
pub struct ArchiveTables {
    hourly: Option<WeatherFrame>,
    daily: Option<WeatherFrame>,
    timezone: Option<String>,
    utc_offset_seconds: Option<i64>,
}

impl ArchiveTables {
    /// Shapes every data section of `response` into a [`WeatherFrame`].
    ///
    /// # Errors
    ///
    /// Returns [`TableError::NoSections`] if the response has neither an
    /// `hourly` nor a `daily` section, or a shaping error if a section is malformed.
    pub fn from_response(response: &ArchiveResponse) -> Result<Self, TableError> {
        let offset = response.utc_offset_seconds.unwrap_or(0);
        let shape = |frequency: Frequency| -> Result<Option<WeatherFrame>, TableError> {
            response
                .section(frequency)
                .map(|fields| -> Result<WeatherFrame, TableError> {
                    let frame = section_to_frame(frequency, fields, offset)?;
                    debug!(
                        "Shaped {} section: {} rows x {} columns",
                        frequency,
                        frame.height(),
                        frame.width()
                    );
                    Ok(WeatherFrame::new(frequency, frame))
                })
                .transpose()
        };

        let hourly = shape(Frequency::Hourly)?;
        let daily = shape(Frequency::Daily)?;
        if hourly.is_none() && daily.is_none() {
            return Err(TableError::NoSections);
        }

        Ok(Self {
            hourly,
            daily,
            timezone: response.timezone.clone(),
            utc_offset_seconds: response.utc_offset_seconds,
        })
    }

    pub fn hourly(&self) -> Option<&WeatherFrame> {
        self.hourly.as_ref()
    }

    pub fn daily(&self) -> Option<&WeatherFrame> {
        self.daily.as_ref()
    }

    pub fn get(&self, frequency: Frequency) -> Option<&WeatherFrame> {
        match frequency {
            Frequency::Hourly => self.hourly(),
            Frequency::Daily => self.daily(),
        }
    }

    /// Number of tables present (1 or 2).
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Always `false`; construction fails instead of producing an empty set.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The present tables, hourly first.
    pub fn iter(&self) -> impl Iterator<Item = &WeatherFrame> {
        self.hourly.iter().chain(self.daily.iter())
    }

    /// Returns the only table if exactly one section was present.
    pub fn into_single(self) -> Option<WeatherFrame> {
        match (self.hourly, self.daily) {
            (Some(frame), None) | (None, Some(frame)) => Some(frame),
            _ => None,
        }
    }

    /// Splits into the `(hourly, daily)` tables.
    pub fn into_parts(self) -> (Option<WeatherFrame>, Option<WeatherFrame>) {
        (self.hourly, self.daily)
    }

    /// The time zone the `time` index is expressed in, as reported by the API.
    pub fn timezone(&self) -> Option<&str> {
        self.timezone.as_deref()
    }

    /// Offset of that time zone from UTC, as reported by the API.
    pub fn utc_offset_seconds(&self) -> Option<i64> {
        self.utc_offset_seconds
    }
}

impl TryFrom<ArchiveResponse> for ArchiveTables {
    type Error = TableError;

    fn try_from(response: ArchiveResponse) -> Result<Self, Self::Error> {
        Self::from_response(&response)
    }
}

impl TryFrom<&ArchiveResponse> for ArchiveTables {
    type Error = TableError;

    fn try_from(response: &ArchiveResponse) -> Result<Self, Self::Error> {
        Self::from_response(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};
    use serde_json::json;

    fn response(value: serde_json::Value) -> ArchiveResponse {
        serde_json::from_value(value).unwrap()
    }

    fn dt(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M").unwrap()
    }

    #[test]
    fn test_hourly_only() -> Result<(), Box<dyn std::error::Error>> {
        let tables = ArchiveTables::try_from(response(json!({
            "hourly": {
                "time": ["2020-01-01T00:00", "2020-01-01T01:00"],
                "temperature_2m": [1.0, 2.0]
            }
        })))?;

        assert_eq!(tables.len(), 1);
        assert!(tables.daily().is_none());

        let hourly = tables.into_single().ok_or("expected a single table")?;
        assert_eq!(hourly.frequency(), Frequency::Hourly);
        assert_eq!(hourly.height(), 2);
        assert_eq!(
            hourly.times()?,
            vec![dt("2020-01-01T00:00"), dt("2020-01-01T01:00")]
        );
        let temps: Vec<Option<f64>> = hourly
            .frame
            .column("temperature_2m")?
            .f64()?
            .into_iter()
            .collect();
        assert_eq!(temps, vec![Some(1.0), Some(2.0)]);
        Ok(())
    }

    #[test]
    fn test_daily_only() -> Result<(), TableError> {
        let tables = ArchiveTables::try_from(response(json!({
            "daily": {"time": ["2023-01-01", "2023-01-02"], "temperature_2m_max": [4.1, 6.0]}
        })))?;

        assert!(tables.hourly().is_none());
        assert_eq!(tables.get(Frequency::Daily).map(|d| d.height()), Some(2));
        assert_eq!(
            tables.into_single().map(|t| t.frequency()),
            Some(Frequency::Daily)
        );
        Ok(())
    }

    #[test]
    fn test_both_sections() -> Result<(), TableError> {
        let tables = ArchiveTables::try_from(&response(json!({
            "timezone": "Europe/Berlin",
            "utc_offset_seconds": 3600,
            "hourly": {
                "time": ["2023-01-01T00:00", "2023-01-01T01:00", "2023-01-01T02:00"],
                "temperature_2m": [9.4, 9.1, 8.8]
            },
            "daily": {"time": ["2023-01-01"], "sunrise": ["2023-01-01T08:17"]}
        })))?;

        assert_eq!(tables.len(), 2);
        assert!(!tables.is_empty());
        assert_eq!(tables.hourly().map(|t| t.height()), Some(3));
        assert_eq!(tables.daily().map(|t| t.height()), Some(1));
        assert_eq!(
            tables.iter().map(|t| t.frequency()).collect::<Vec<_>>(),
            Frequency::all()
        );
        assert_eq!(tables.timezone(), Some("Europe/Berlin"));
        assert_eq!(tables.utc_offset_seconds(), Some(3600));

        assert!(tables.clone().into_single().is_none());
        let (hourly, daily) = tables.into_parts();
        assert!(hourly.is_some() && daily.is_some());
        Ok(())
    }

    #[test]
    fn test_empty_object_is_data_unavailable() {
        let err = ArchiveTables::try_from(response(json!({}))).unwrap_err();
        assert!(matches!(err, TableError::NoSections));
        assert_eq!(
            err.to_string(),
            "No 'hourly' or 'daily' data found in API response"
        );
    }

    #[test]
    fn test_metadata_only_is_data_unavailable() {
        let err = ArchiveTables::try_from(response(json!({
            "latitude": 52.52,
            "longitude": 13.41,
            "hourly_units": {"time": "iso8601"}
        })))
        .unwrap_err();
        assert!(matches!(err, TableError::NoSections));
    }

    #[test]
    fn test_malformed_section_propagates() {
        let err = ArchiveTables::try_from(response(json!({
            "hourly": {"time": ["2020-01-01T00:00"], "rain": [0.0]},
            "daily": {"sunrise": ["2020-01-01T08:00"]}
        })))
        .unwrap_err();
        assert!(matches!(
            err,
            TableError::MissingTimeColumn {
                section: Frequency::Daily
            }
        ));
    }

    #[test]
    fn test_unixtime_index() -> Result<(), TableError> {
        let tables = ArchiveTables::try_from(response(json!({
            "hourly": {"time": [1672531200, 1672534800], "rain": [0.0, 0.2]}
        })))?;

        let times = tables.hourly().map(|h| h.times()).transpose()?;
        assert_eq!(
            times,
            Some(vec![dt("2023-01-01T00:00"), dt("2023-01-01T01:00")])
        );
        Ok(())
    }

    #[test]
    fn test_unixtime_index_is_local() -> Result<(), Box<dyn std::error::Error>> {
        // local midnights in UTC+1, sent as UTC seconds
        let tables = ArchiveTables::try_from(response(json!({
            "timezone": "Europe/Berlin",
            "utc_offset_seconds": 3600,
            "daily": {"time": [1672527600, 1672614000], "rain_sum": [0.1, 0.2]}
        })))?;
        let daily = tables.daily().ok_or("expected a daily table")?;

        assert_eq!(
            daily.times()?,
            vec![dt("2023-01-01T00:00"), dt("2023-01-02T00:00")]
        );

        let new_year = daily.get_for_date(NaiveDate::from_ymd_opt(2023, 1, 1).unwrap())?;
        assert_eq!(new_year.height(), 1);
        let rain = new_year.frame.column("rain_sum")?.f64()?.get(0);
        assert_eq!(rain, Some(0.1));
        Ok(())
    }
}
