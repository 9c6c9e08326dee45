//! The generic value-coercion primitive.
//!
//! [`coerce`] converts a [`Value`] into another [`ValueKind`] or fails when no
//! conversion exists for that value. Conversions are total over kinds that
//! make sense (numbers, booleans, characters, text, dates) and reject
//! everything else, including any composite target.

use crate::error::{ModelError, ModelResult};
use crate::value::{Value, ValueKind};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Formats used when dates cross the text boundary.
///
/// Parsing tries each format in order; the display formats are used when a date
/// becomes text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextFormats {
    pub date_formats: Vec<String>,
    pub datetime_formats: Vec<String>,
    pub date_display: String,
    pub datetime_display: String,
}

impl Default for TextFormats {
    fn default() -> Self {
        Self {
            date_formats: vec![
                "%m/%d/%Y".to_string(),
                "%Y-%m-%d".to_string(),
                "%d %B %Y".to_string(),
            ],
            datetime_formats: vec![
                "%m/%d/%Y %H:%M:%S%.f".to_string(),
                "%m/%d/%Y %H:%M".to_string(),
                "%Y-%m-%dT%H:%M:%S%.f".to_string(),
                "%Y-%m-%d %H:%M:%S%.f".to_string(),
            ],
            date_display: "%m/%d/%Y".to_string(),
            datetime_display: "%m/%d/%Y %H:%M:%S%.f".to_string(),
        }
    }
}

impl TextFormats {
    /// Parses a date, falling back to the date part of a date-time.
    pub fn parse_date(&self, text: &str) -> Option<NaiveDate> {
        let text = text.trim();
        self.date_formats
            .iter()
            .find_map(|f| NaiveDate::parse_from_str(text, f).ok())
            .or_else(|| self.parse_datetime_only(text).map(|dt| dt.date()))
    }

    /// Parses a date-time, falling back to midnight of a bare date.
    pub fn parse_datetime(&self, text: &str) -> Option<NaiveDateTime> {
        let text = text.trim();
        self.parse_datetime_only(text).or_else(|| {
            self.date_formats
                .iter()
                .find_map(|f| NaiveDate::parse_from_str(text, f).ok())
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
    }

    fn parse_datetime_only(&self, text: &str) -> Option<NaiveDateTime> {
        self.datetime_formats
            .iter()
            .find_map(|f| NaiveDateTime::parse_from_str(text, f).ok())
    }
}

/// Converts `value` into `target`.
///
/// A value already of the target kind is returned unchanged. `Null` converts to
/// nothing.
pub fn coerce(value: Value, target: ValueKind, formats: &TextFormats) -> ModelResult<Value> {
    let Some(from) = value.kind() else {
        return Err(ModelError::NullValue { to: target });
    };
    if from == target {
        return Ok(value);
    }

    let unsupported = ModelError::Unsupported { from, to: target };
    match (value, target) {
        (v, ValueKind::Text) => Ok(v.into_text(formats)),

        (Value::Int(v), ValueKind::Bool) => Ok(Value::Bool(v != 0)),
        (Value::UInt(v), ValueKind::Bool) => Ok(Value::Bool(v != 0)),
        (Value::Float(v), ValueKind::Bool) => Ok(Value::Bool(v != 0.0)),
        (Value::Text(s), ValueKind::Bool) => parse_bool(&s).map(Value::Bool),

        (Value::Bool(v), ValueKind::Int) => Ok(Value::Int(i64::from(v))),
        (Value::UInt(v), ValueKind::Int) => i64::try_from(v)
            .map(Value::Int)
            .map_err(|_| ModelError::out_of_range(v, "i64")),
        (Value::Float(v), ValueKind::Int) => float_to_i64(v).map(Value::Int),
        (Value::Char(c), ValueKind::Int) => Ok(Value::Int(i64::from(u32::from(c)))),
        (Value::Text(s), ValueKind::Int) => s
            .trim()
            .parse::<i64>()
            .map(Value::Int)
            .map_err(|_| ModelError::invalid_text(&s, ValueKind::Int)),

        (Value::Bool(v), ValueKind::UInt) => Ok(Value::UInt(u64::from(v))),
        (Value::Int(v), ValueKind::UInt) => u64::try_from(v)
            .map(Value::UInt)
            .map_err(|_| ModelError::out_of_range(v, "u64")),
        (Value::Float(v), ValueKind::UInt) => float_to_u64(v).map(Value::UInt),
        (Value::Char(c), ValueKind::UInt) => Ok(Value::UInt(u64::from(u32::from(c)))),
        (Value::Text(s), ValueKind::UInt) => s
            .trim()
            .parse::<u64>()
            .map(Value::UInt)
            .map_err(|_| ModelError::invalid_text(&s, ValueKind::UInt)),

        (Value::Bool(v), ValueKind::Float) => Ok(Value::Float(if v { 1.0 } else { 0.0 })),
        (Value::Int(v), ValueKind::Float) => Ok(Value::Float(v as f64)),
        (Value::UInt(v), ValueKind::Float) => Ok(Value::Float(v as f64)),
        (Value::Text(s), ValueKind::Float) => s
            .trim()
            .parse::<f64>()
            .map(Value::Float)
            .map_err(|_| ModelError::invalid_text(&s, ValueKind::Float)),

        (Value::Int(v), ValueKind::Char) => u32::try_from(v)
            .ok()
            .and_then(char::from_u32)
            .map(Value::Char)
            .ok_or_else(|| ModelError::out_of_range(v, "char")),
        (Value::UInt(v), ValueKind::Char) => u32::try_from(v)
            .ok()
            .and_then(char::from_u32)
            .map(Value::Char)
            .ok_or_else(|| ModelError::out_of_range(v, "char")),
        (Value::Text(s), ValueKind::Char) => {
            let mut chars = s.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Ok(Value::Char(c)),
                _ => Err(ModelError::invalid_text(&s, ValueKind::Char)),
            }
        }

        (Value::DateTime(dt), ValueKind::Date) => Ok(Value::Date(dt.date())),
        (Value::Text(s), ValueKind::Date) => formats
            .parse_date(&s)
            .map(Value::Date)
            .ok_or_else(|| ModelError::invalid_text(&s, ValueKind::Date)),

        (Value::Date(d), ValueKind::DateTime) => d
            .and_hms_opt(0, 0, 0)
            .map(Value::DateTime)
            .ok_or_else(|| ModelError::out_of_range(d, "datetime")),
        (Value::Text(s), ValueKind::DateTime) => formats
            .parse_datetime(&s)
            .map(Value::DateTime)
            .ok_or_else(|| ModelError::invalid_text(&s, ValueKind::DateTime)),

        _ => Err(unsupported),
    }
}

fn parse_bool(text: &str) -> ModelResult<bool> {
    let trimmed = text.trim();
    if trimmed.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if trimmed.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(ModelError::invalid_text(text, ValueKind::Bool))
    }
}

// Half-to-even rounding; NaN and infinities are out of range.
fn float_to_i64(v: f64) -> ModelResult<i64> {
    let rounded = v.round_ties_even();
    if rounded.is_finite() && rounded >= i64::MIN as f64 && rounded < i64::MAX as f64 {
        Ok(rounded as i64)
    } else {
        Err(ModelError::out_of_range(v, "i64"))
    }
}

fn float_to_u64(v: f64) -> ModelResult<u64> {
    let rounded = v.round_ties_even();
    if rounded.is_finite() && rounded >= 0.0 && rounded < u64::MAX as f64 {
        Ok(rounded as u64)
    } else {
        Err(ModelError::out_of_range(v, "u64"))
    }
}
