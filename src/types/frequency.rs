//! Defines the time granularity of archive data and the label each granularity
//! uses in requests, responses and result tables.

use std::fmt;

/// Represents the time frequency of Open-Meteo archive data.
///
/// The archive answers hourly and daily variables in separate sections of the
/// same response. `Frequency` names those sections and selects the matching
/// variable catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Frequency {
    /// One value per hour, e.g. `temperature_2m`.
    Hourly,
    /// One aggregated value per calendar day, e.g. `temperature_2m_max`.
    Daily,
}

impl Frequency {
    /// The query parameter and response key for this frequency.
    pub(crate) fn section_key(&self) -> &'static str {
        match self {
            Frequency::Hourly => "hourly",
            Frequency::Daily => "daily",
        }
    }

    pub const fn all() -> [Frequency; 2] {
        [Frequency::Hourly, Frequency::Daily]
    }
}

/// Allows formatting a `Frequency` variant using its section key.
///
/// # Examples
///
/// ```
/// use openmeteo_archive::Frequency;
///
/// assert_eq!(format!("{}", Frequency::Hourly), "hourly");
/// assert_eq!(Frequency::Daily.to_string(), "daily");
/// ```
impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.section_key())
    }
}
