mod error;
mod fetch;
mod request;
mod tables;
mod types;

pub use error::ArchiveError;

pub use fetch::client::{ArchiveClient, ARCHIVE_URL};
pub use fetch::error::FetchError;
pub use fetch::response::{ArchiveResponse, Section};

pub use request::error::ConfigurationError;
pub use request::historical_request::{HistoricalWeatherRequest, LatLon};
pub use request::params::QueryParams;

pub use tables::archive_tables::ArchiveTables;
pub use tables::error::TableError;
pub use tables::weather_frame::WeatherFrame;

pub use types::frequency::Frequency;
pub use types::variables::{DAILY_VARIABLES, HOURLY_VARIABLES};
pub use types::weather_code::WeatherCode;
