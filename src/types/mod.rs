pub mod frequency;
pub mod variables;
pub mod weather_code;
