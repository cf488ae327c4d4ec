//! The decoded body of an archive response.

use crate::types::frequency::Frequency;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// One data section of the response: field name to a JSON array of values.
/// Always contains a `time` field when the API returns the section.
pub type Section = Map<String, Value>;

/// The archive API's JSON payload, as returned on success.
///
/// Only `hourly` and `daily` carry data. The remaining fields describe the
/// grid cell the API actually used and the time zone the `time` values are
/// expressed in. Keys not modelled here are kept in `extra`, and absent fields
/// stay absent when serialized again, so the payload round-trips unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArchiveResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elevation: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generationtime_ms: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utc_offset_seconds: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone_abbreviation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hourly_units: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hourly: Option<Section>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_units: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily: Option<Section>,
    /// Every other top-level key of the payload.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ArchiveResponse {
    /// The data section for `frequency`, if the response has one.
    pub fn section(&self, frequency: Frequency) -> Option<&Section> {
        match frequency {
            Frequency::Hourly => self.hourly.as_ref(),
            Frequency::Daily => self.daily.as_ref(),
        }
    }

    /// The unit strings the API reported for the fields of `frequency`.
    pub fn units(&self, frequency: Frequency) -> Option<&BTreeMap<String, String>> {
        match frequency {
            Frequency::Hourly => self.hourly_units.as_ref(),
            Frequency::Daily => self.daily_units.as_ref(),
        }
    }
}

/// Error body the API sends with 4xx answers.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    pub reason: String,
}
