pub mod error;
pub mod historical_request;
pub mod params;
