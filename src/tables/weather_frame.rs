//! Contains `WeatherFrame`, the table for one frequency of an archive response.

use crate::tables::error::TableError;
use crate::tables::shaping::TIME_COLUMN;
use crate::types::frequency::Frequency;
use crate::types::weather_code::WeatherCode;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use polars::prelude::{col, lit, DataFrame, DataType, Expr, IntoLazy};

const WEATHER_CODE_COLUMN: &str = "weather_code";

/// A wrapper around a Polars `DataFrame` holding one section (hourly or daily)
/// of an archive response.
///
/// The first column, `time`, is the row index: a `Datetime(us)` column without
/// time zone, expressed in the time zone the request asked for. The remaining
/// columns are the requested variables, in the order the API returned them.
///
/// Filtering methods run through a Polars `LazyFrame` and return a new,
/// collected `WeatherFrame`; the original is left unchanged.
#[derive(Debug, Clone)]
pub struct WeatherFrame {
    frequency: Frequency,
    /// The underlying table.
    pub frame: DataFrame,
}

impl WeatherFrame {
    pub(crate) fn new(frequency: Frequency, frame: DataFrame) -> Self {
        Self { frequency, frame }
    }

    /// Which section of the response this table came from.
    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// Number of rows (timestamps).
    pub fn height(&self) -> usize {
        self.frame.height()
    }

    /// Filters the rows with a Polars predicate expression.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use openmeteo_archive::{HistoricalWeatherRequest, LatLon};
    /// # use chrono::NaiveDate;
    /// use polars::prelude::{col, lit};
    ///
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let tables = HistoricalWeatherRequest::builder()
    ///     .location(LatLon(41.90, 12.50))
    ///     .variables(&["temperature_2m_max"])
    ///     .start_date(NaiveDate::from_ymd_opt(2022, 7, 1).unwrap())
    ///     .end_date(NaiveDate::from_ymd_opt(2022, 7, 31).unwrap())
    ///     .build()?
    ///     .to_tables()
    ///     .await?;
    ///
    /// if let Some(daily) = tables.daily() {
    ///     let hot_days = daily.filter(col("temperature_2m_max").gt(lit(30.0f64)))?;
    ///     println!("{} hot days:\n{}", hot_days.height(), hot_days.frame);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Polars`] if the predicate cannot be evaluated,
    /// e.g. because it names a column that does not exist.
    pub fn filter(&self, predicate: Expr) -> Result<WeatherFrame, TableError> {
        let frame = self.frame.clone().lazy().filter(predicate).collect()?;
        Ok(WeatherFrame::new(self.frequency, frame))
    }

    /// Rows whose timestamp lies in `start..=end`.
    pub fn get_range(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<WeatherFrame, TableError> {
        self.filter(
            col(TIME_COLUMN)
                .gt_eq(lit(start))
                .and(col(TIME_COLUMN).lt_eq(lit(end))),
        )
    }

    /// The row at exactly `datetime`; empty if there is none.
    pub fn get_at(&self, datetime: NaiveDateTime) -> Result<WeatherFrame, TableError> {
        self.filter(col(TIME_COLUMN).eq(lit(datetime)))
    }

    /// All rows that fall on the calendar day `date`.
    pub fn get_for_date(&self, date: NaiveDate) -> Result<WeatherFrame, TableError> {
        let start = date.and_time(NaiveTime::default());
        let mut predicate = col(TIME_COLUMN).gt_eq(lit(start));
        if let Some(next_day) = date.succ_opt() {
            let end = next_day.and_time(NaiveTime::default());
            predicate = predicate.and(col(TIME_COLUMN).lt(lit(end)));
        }
        self.filter(predicate)
    }

    /// The `time` index as chrono values.
    pub fn times(&self) -> Result<Vec<NaiveDateTime>, TableError> {
        let micros = self
            .frame
            .column(TIME_COLUMN)
            .map_err(|e| TableError::ColumnNotFound(TIME_COLUMN.to_string(), e))?
            .cast(&DataType::Int64)?;

        Ok(micros
            .i64()?
            .into_iter()
            .flatten()
            .filter_map(DateTime::from_timestamp_micros)
            .map(|dt| dt.naive_utc())
            .collect())
    }

    /// Decodes the `weather_code` column. Unknown codes and gaps are `None`.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::ColumnNotFound`] if `weather_code` was not requested.
    pub fn weather_codes(&self) -> Result<Vec<Option<WeatherCode>>, TableError> {
        let codes = self
            .frame
            .column(WEATHER_CODE_COLUMN)
            .map_err(|e| TableError::ColumnNotFound(WEATHER_CODE_COLUMN.to_string(), e))?
            .cast(&DataType::Int64)?;

        Ok(codes
            .i64()?
            .into_iter()
            .map(|code| code.and_then(WeatherCode::from_i64))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::shaping::section_to_frame;
    use serde_json::{json, Value};

    fn hourly_frame() -> WeatherFrame {
        let Value::Object(fields) = json!({
            "time": [
                "2023-03-01T22:00", "2023-03-01T23:00",
                "2023-03-02T00:00", "2023-03-02T01:00", "2023-03-02T02:00"
            ],
            "temperature_2m": [1.5, 1.0, 0.4, -0.2, -0.8],
            "weather_code": [3, 45, null, 71, 4]
        }) else {
            unreachable!()
        };
        WeatherFrame::new(
            Frequency::Hourly,
            section_to_frame(Frequency::Hourly, &fields, 0).unwrap(),
        )
    }

    fn dt(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M").unwrap()
    }

    #[test]
    fn test_times() -> Result<(), TableError> {
        let frame = hourly_frame();
        let times = frame.times()?;

        assert_eq!(times.len(), 5);
        assert_eq!(times[0], dt("2023-03-01T22:00"));
        assert_eq!(times[4], dt("2023-03-02T02:00"));
        Ok(())
    }

    #[test]
    fn test_get_range_is_inclusive() -> Result<(), TableError> {
        let frame = hourly_frame();
        let range = frame.get_range(dt("2023-03-01T23:00"), dt("2023-03-02T01:00"))?;

        assert_eq!(range.height(), 3);
        assert_eq!(range.frequency(), Frequency::Hourly);
        assert_eq!(
            range.times()?,
            vec![
                dt("2023-03-01T23:00"),
                dt("2023-03-02T00:00"),
                dt("2023-03-02T01:00")
            ]
        );
        // the source frame is untouched
        assert_eq!(frame.height(), 5);
        Ok(())
    }

    #[test]
    fn test_get_at() -> Result<(), Box<dyn std::error::Error>> {
        let frame = hourly_frame();

        let row = frame.get_at(dt("2023-03-02T00:00"))?;
        assert_eq!(row.height(), 1);
        let temp = row.frame.column("temperature_2m")?.f64()?.get(0);
        assert_eq!(temp, Some(0.4));

        assert_eq!(frame.get_at(dt("2023-03-02T00:30"))?.height(), 0);
        Ok(())
    }

    #[test]
    fn test_get_for_date() -> Result<(), TableError> {
        let frame = hourly_frame();
        let date = NaiveDate::from_ymd_opt(2023, 3, 2).unwrap();

        let day = frame.get_for_date(date)?;
        assert_eq!(day.height(), 3);
        assert!(day.times()?.iter().all(|t| t.date() == date));
        Ok(())
    }

    #[test]
    fn test_filter_by_value() -> Result<(), Box<dyn std::error::Error>> {
        let frame = hourly_frame();
        let freezing = frame.filter(col("temperature_2m").lt(lit(0.0f64)))?;

        assert_eq!(freezing.height(), 2);
        let temps: Vec<Option<f64>> = freezing
            .frame
            .column("temperature_2m")?
            .f64()?
            .into_iter()
            .collect();
        assert_eq!(temps, vec![Some(-0.2), Some(-0.8)]);
        Ok(())
    }

    #[test]
    fn test_filter_unknown_column_fails() {
        let frame = hourly_frame();
        let result = frame.filter(col("no_such_column").gt(lit(1.0f64)));
        assert!(matches!(result, Err(TableError::Polars(_))));
    }

    #[test]
    fn test_weather_codes() -> Result<(), TableError> {
        let codes = hourly_frame().weather_codes()?;
        assert_eq!(
            codes,
            vec![
                Some(WeatherCode::Overcast),
                Some(WeatherCode::Fog),
                None,
                Some(WeatherCode::SlightSnowfall),
                None, // 4 is not a WMO code Open-Meteo uses
            ]
        );
        Ok(())
    }

    #[test]
    fn test_weather_codes_missing_column() {
        let frame = hourly_frame();
        let without = WeatherFrame::new(
            Frequency::Hourly,
            frame.frame.drop(WEATHER_CODE_COLUMN).unwrap(),
        );
        assert!(matches!(
            without.weather_codes(),
            Err(TableError::ColumnNotFound(name, _)) if name == WEATHER_CODE_COLUMN
        ));
    }
}
