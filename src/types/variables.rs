//! The fixed catalogs of variable names the archive API accepts, and the
//! classification of a requested variable list into hourly and daily buckets.

use crate::types::frequency::Frequency;

/// Variables the archive can report once per hour.
pub const HOURLY_VARIABLES: &[&str] = &[
    "temperature_2m",
    "relative_humidity_2m",
    "dew_point_2m",
    "apparent_temperature",
    "pressure_msl",
    "surface_pressure",
    "precipitation",
    "rain",
    "snowfall",
    "cloud_cover",
    "cloud_cover_low",
    "cloud_cover_mid",
    "cloud_cover_high",
    "shortwave_radiation",
    "direct_radiation",
    "direct_normal_irradiance",
    "diffuse_radiation",
    "global_tilted_irradiance",
    "sunshine_duration",
    "wind_speed_10m",
    "wind_speed_100m",
    "wind_direction_10m",
    "wind_direction_100m",
    "wind_gusts_10m",
    "et0_fao_evapotranspiration",
    "weather_code",
    "snow_depth",
    "vapour_pressure_deficit",
    "soil_temperature_0_to_7cm",
    "soil_temperature_7_to_28cm",
    "soil_temperature_28_to_100cm",
    "soil_temperature_100_to_255cm",
    "soil_moisture_0_to_7cm",
    "soil_moisture_7_to_28cm",
    "soil_moisture_28_to_100cm",
    "soil_moisture_100_to_255cm",
];

/// Variables the archive aggregates once per calendar day.
pub const DAILY_VARIABLES: &[&str] = &[
    "weather_code",
    "temperature_2m_max",
    "temperature_2m_min",
    "apparent_temperature_max",
    "apparent_temperature_min",
    "precipitation_sum",
    "rain_sum",
    "snowfall_sum",
    "precipitation_hours",
    "sunrise",
    "sunset",
    "sunshine_duration",
    "daylight_duration",
    "wind_speed_10m_max",
    "wind_gusts_10m_max",
    "wind_direction_10m_dominant",
    "shortwave_radiation_sum",
    "et0_fao_evapotranspiration",
];

impl Frequency {
    /// The catalog of variable names valid for this frequency.
    pub fn catalog(&self) -> &'static [&'static str] {
        match self {
            Frequency::Hourly => HOURLY_VARIABLES,
            Frequency::Daily => DAILY_VARIABLES,
        }
    }

    /// Returns `true` if `variable` can be requested at this frequency.
    ///
    /// ```
    /// use openmeteo_archive::Frequency;
    ///
    /// assert!(Frequency::Hourly.supports("temperature_2m"));
    /// assert!(!Frequency::Daily.supports("temperature_2m"));
    /// assert!(Frequency::Daily.supports("sunrise"));
    /// ```
    pub fn supports(&self, variable: &str) -> bool {
        self.catalog().contains(&variable)
    }
}

/// Keeps the entries of `variables` that the catalog of `frequency` knows,
/// preserving their order.
pub(crate) fn select_for(frequency: Frequency, variables: &[String]) -> Vec<String> {
    variables
        .iter()
        .filter(|v| frequency.supports(v))
        .cloned()
        .collect()
}

/// Variables that appear in neither catalog.
pub(crate) fn unknown_variables(variables: &[String]) -> Vec<&str> {
    variables
        .iter()
        .map(String::as_str)
        .filter(|v| Frequency::all().iter().all(|f| !f.supports(v)))
        .collect()
}
