use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("No valid variables found in hourly or daily categories (requested: {requested:?})")]
    NoValidVariables { requested: Vec<String> },

    #[error("Latitude {0} is outside the range -90..=90")]
    InvalidLatitude(f64),

    #[error("Longitude {0} is outside the range -180..=180")]
    InvalidLongitude(f64),

    #[error("Start date {start} is after end date {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },
}
