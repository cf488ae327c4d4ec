pub mod archive_tables;
pub mod error;
pub mod shaping;
pub mod weather_frame;
