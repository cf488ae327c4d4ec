//! Turns one JSON section of an archive response into a `DataFrame`.
//!
//! A section maps field names to equally long arrays. The `time` array becomes
//! the first column, typed `Datetime(us)`, and acts as the row index. Every
//! other field becomes a column whose dtype is inferred from its values.
//!
//! String timestamps are already local to the requested time zone. Unix
//! timestamps are UTC and get the response's `utc_offset_seconds` added, so
//! both forms yield the same local index.

use crate::tables::error::TableError;
use crate::types::frequency::Frequency;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use polars::prelude::*;
use serde_json::{Map, Value};

pub const TIME_COLUMN: &str = "time";

const MINUTE_FORMAT: &str = "%Y-%m-%dT%H:%M";
const SECOND_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ValueKind {
    Int,
    Float,
    Str,
    Bool,
    Mixed,
}

/// Builds the table for one section. `utc_offset_seconds` shifts unix
/// timestamps into the response's local time.
pub(crate) fn section_to_frame(
    section: Frequency,
    fields: &Map<String, Value>,
    utc_offset_seconds: i64,
) -> Result<DataFrame, TableError> {
    let times = fields
        .get(TIME_COLUMN)
        .ok_or(TableError::MissingTimeColumn { section })?
        .as_array()
        .ok_or_else(|| TableError::NotAnArray {
            section,
            field: TIME_COLUMN.to_string(),
        })?;
    let height = times.len();

    let mut columns = Vec::with_capacity(fields.len());
    columns.push(time_column(section, times, utc_offset_seconds)?);

    for (name, value) in fields.iter().filter(|(name, _)| *name != TIME_COLUMN) {
        let values = value.as_array().ok_or_else(|| TableError::NotAnArray {
            section,
            field: name.clone(),
        })?;
        if values.len() != height {
            return Err(TableError::LengthMismatch {
                section,
                field: name.clone(),
                expected: height,
                found: values.len(),
            });
        }
        columns.push(value_column(name, values));
    }

    Ok(DataFrame::new(columns)?)
}

/// Parses a `time` entry. Strings may be ISO minutes, ISO seconds or plain
/// dates (midnight); integers are unix seconds, as sent for `timeformat=unixtime`,
/// and are moved to local time by `utc_offset_seconds`.
pub(crate) fn parse_timestamp(value: &Value, utc_offset_seconds: i64) -> Option<NaiveDateTime> {
    match value {
        Value::String(s) => NaiveDateTime::parse_from_str(s, MINUTE_FORMAT)
            .or_else(|_| NaiveDateTime::parse_from_str(s, SECOND_FORMAT))
            .ok()
            .or_else(|| {
                NaiveDate::parse_from_str(s, DATE_FORMAT)
                    .ok()
                    .map(|d| d.and_time(NaiveTime::default()))
            }),
        Value::Number(n) => n
            .as_i64()
            .and_then(|secs| secs.checked_add(utc_offset_seconds))
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
            .map(|dt| dt.naive_utc()),
        _ => None,
    }
}

fn time_column(
    section: Frequency,
    values: &[Value],
    utc_offset_seconds: i64,
) -> Result<Column, TableError> {
    let micros = values
        .iter()
        .map(|v| {
            parse_timestamp(v, utc_offset_seconds)
                .map(|dt| dt.and_utc().timestamp_micros())
                .ok_or_else(|| TableError::TimestampParse {
                    section,
                    value: v.to_string(),
                })
        })
        .collect::<Result<Vec<i64>, TableError>>()?;

    let series = Series::new(TIME_COLUMN.into(), micros)
        .cast(&DataType::Datetime(TimeUnit::Microseconds, None))?;
    Ok(series.into_column())
}

fn infer_kind(values: &[Value]) -> ValueKind {
    let mut kind = None;
    for value in values.iter().filter(|v| !v.is_null()) {
        let this = match value {
            Value::Number(n) if n.is_i64() => ValueKind::Int,
            Value::Number(_) => ValueKind::Float,
            Value::String(_) => ValueKind::Str,
            Value::Bool(_) => ValueKind::Bool,
            _ => return ValueKind::Mixed,
        };
        kind = Some(match (kind, this) {
            (None, k) => k,
            (Some(a), b) if a == b => a,
            (Some(ValueKind::Int), ValueKind::Float) | (Some(ValueKind::Float), ValueKind::Int) => {
                ValueKind::Float
            }
            _ => return ValueKind::Mixed,
        });
    }
    // all-null columns are numeric gaps
    kind.unwrap_or(ValueKind::Float)
}

fn value_column(name: &str, values: &[Value]) -> Column {
    let name: PlSmallStr = name.into();
    let series = match infer_kind(values) {
        ValueKind::Int => Series::new(
            name,
            values.iter().map(Value::as_i64).collect::<Vec<Option<i64>>>(),
        ),
        ValueKind::Float => Series::new(
            name,
            values.iter().map(Value::as_f64).collect::<Vec<Option<f64>>>(),
        ),
        ValueKind::Bool => Series::new(
            name,
            values.iter().map(Value::as_bool).collect::<Vec<Option<bool>>>(),
        ),
        ValueKind::Str => Series::new(
            name,
            values
                .iter()
                .map(|v| v.as_str().map(str::to_string))
                .collect::<Vec<Option<String>>>(),
        ),
        ValueKind::Mixed => Series::new(
            name,
            values
                .iter()
                .map(|v| match v {
                    Value::Null => None,
                    Value::String(s) => Some(s.clone()),
                    other => Some(other.to_string()),
                })
                .collect::<Vec<Option<String>>>(),
        ),
    };
    series.into_column()
}
