//! Defines the `WeatherCode` enum, mapping the WMO weather interpretation codes
//! reported in Open-Meteo's `weather_code` variable to descriptive variants.

/// Represents a WMO weather interpretation code (WMO 4677) as used by Open-Meteo.
///
/// Only the codes Open-Meteo documents are represented. See the
/// [Open-Meteo documentation](https://open-meteo.com/en/docs#weather_variable_documentation)
/// for the official list.
///
/// Convert a raw value from a `weather_code` column with [`WeatherCode::from_i64`],
/// or decode a whole column with [`crate::WeatherFrame::weather_codes`].
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum WeatherCode {
    /// Code 0: Clear sky.
    ClearSky = 0,
    /// Code 1: Mainly clear.
    MainlyClear = 1,
    /// Code 2: Partly cloudy.
    PartlyCloudy = 2,
    /// Code 3: Overcast.
    Overcast = 3,
    /// Code 45: Fog.
    Fog = 45,
    /// Code 48: Depositing rime fog.
    RimeFog = 48,
    /// Code 51: Light drizzle.
    LightDrizzle = 51,
    /// Code 53: Moderate drizzle.
    Drizzle = 53,
    /// Code 55: Dense drizzle.
    DenseDrizzle = 55,
    /// Code 56: Light freezing drizzle.
    LightFreezingDrizzle = 56,
    /// Code 57: Dense freezing drizzle.
    DenseFreezingDrizzle = 57,
    /// Code 61: Slight rain.
    SlightRain = 61,
    /// Code 63: Moderate rain.
    Rain = 63,
    /// Code 65: Heavy rain.
    HeavyRain = 65,
    /// Code 66: Light freezing rain.
    LightFreezingRain = 66,
    /// Code 67: Heavy freezing rain.
    HeavyFreezingRain = 67,
    /// Code 71: Slight snowfall.
    SlightSnowfall = 71,
    /// Code 73: Moderate snowfall.
    Snowfall = 73,
    /// Code 75: Heavy snowfall.
    HeavySnowfall = 75,
    /// Code 77: Snow grains.
    SnowGrains = 77,
    /// Code 80: Slight rain showers.
    SlightRainShowers = 80,
    /// Code 81: Moderate rain showers.
    RainShowers = 81,
    /// Code 82: Violent rain showers.
    ViolentRainShowers = 82,
    /// Code 85: Slight snow showers.
    SlightSnowShowers = 85,
    /// Code 86: Heavy snow showers.
    HeavySnowShowers = 86,
    /// Code 95: Thunderstorm, slight or moderate.
    Thunderstorm = 95,
    /// Code 96: Thunderstorm with slight hail.
    ThunderstormSlightHail = 96,
    /// Code 99: Thunderstorm with heavy hail.
    ThunderstormHeavyHail = 99,
}

impl WeatherCode {
    /// Attempts to convert an integer code into a `WeatherCode`.
    ///
    /// # Returns
    ///
    /// * `Some(WeatherCode)` if `value` is one of the documented codes.
    /// * `None` otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use openmeteo_archive::WeatherCode;
    ///
    /// assert_eq!(WeatherCode::from_i64(63), Some(WeatherCode::Rain));
    /// assert_eq!(WeatherCode::from_i64(4), None);
    ///
    /// match WeatherCode::from_i64(45) {
    ///     Some(WeatherCode::Fog) => println!("It's foggy!"),
    ///     Some(code) => println!("Weather is: {:?}", code),
    ///     None => println!("Unknown weather code."),
    /// }
    /// ```
    pub fn from_i64(value: i64) -> Option<Self> {
        match value {
            0 => Some(WeatherCode::ClearSky),
            1 => Some(WeatherCode::MainlyClear),
            2 => Some(WeatherCode::PartlyCloudy),
            3 => Some(WeatherCode::Overcast),
            45 => Some(WeatherCode::Fog),
            48 => Some(WeatherCode::RimeFog),
            51 => Some(WeatherCode::LightDrizzle),
            53 => Some(WeatherCode::Drizzle),
            55 => Some(WeatherCode::DenseDrizzle),
            56 => Some(WeatherCode::LightFreezingDrizzle),
            57 => Some(WeatherCode::DenseFreezingDrizzle),
            61 => Some(WeatherCode::SlightRain),
            63 => Some(WeatherCode::Rain),
            65 => Some(WeatherCode::HeavyRain),
            66 => Some(WeatherCode::LightFreezingRain),
            67 => Some(WeatherCode::HeavyFreezingRain),
            71 => Some(WeatherCode::SlightSnowfall),
            73 => Some(WeatherCode::Snowfall),
            75 => Some(WeatherCode::HeavySnowfall),
            77 => Some(WeatherCode::SnowGrains),
            80 => Some(WeatherCode::SlightRainShowers),
            81 => Some(WeatherCode::RainShowers),
            82 => Some(WeatherCode::ViolentRainShowers),
            85 => Some(WeatherCode::SlightSnowShowers),
            86 => Some(WeatherCode::HeavySnowShowers),
            95 => Some(WeatherCode::Thunderstorm),
            96 => Some(WeatherCode::ThunderstormSlightHail),
            99 => Some(WeatherCode::ThunderstormHeavyHail),
            _ => None,
        }
    }

    /// The raw WMO code.
    pub fn code(&self) -> i64 {
        *self as i64
    }

    /// Returns `true` for codes that describe any kind of precipitation.
    pub fn is_precipitation(&self) -> bool {
        self.code() >= 51
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_i64_round_trips_known_codes() {
        for code in [0, 1, 2, 3, 45, 48, 51, 63, 77, 86, 99] {
            let weather = WeatherCode::from_i64(code).unwrap();
            assert_eq!(weather.code(), code);
        }
    }

    #[test]
    fn test_from_i64_rejects_gaps() {
        for code in [-1, 4, 44, 50, 100] {
            assert_eq!(WeatherCode::from_i64(code), None);
        }
    }

    #[test]
    fn test_precipitation() {
        assert!(!WeatherCode::Fog.is_precipitation());
        assert!(WeatherCode::LightDrizzle.is_precipitation());
        assert!(WeatherCode::ThunderstormHeavyHail.is_precipitation());
    }
}
