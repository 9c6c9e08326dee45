//! Dynamically typed property values.

use crate::convert::TextFormats;
use crate::error::{ModelError, ModelResult};
use chrono::{NaiveDate, NaiveDateTime};
use std::fmt;

/// The declared kind of a property.
///
/// `Composite` names a user-defined type. The mapper never traverses it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Bool,
    Int,
    UInt,
    Float,
    Char,
    Text,
    Date,
    DateTime,
    Composite(&'static str),
}

impl ValueKind {
    #[must_use]
    pub const fn is_composite(&self) -> bool {
        matches!(self, Self::Composite(_))
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => f.write_str("bool"),
            Self::Int => f.write_str("int"),
            Self::UInt => f.write_str("uint"),
            Self::Float => f.write_str("float"),
            Self::Char => f.write_str("char"),
            Self::Text => f.write_str("text"),
            Self::Date => f.write_str("date"),
            Self::DateTime => f.write_str("datetime"),
            Self::Composite(name) => write!(f, "composite {name}"),
        }
    }
}

/// A property value read from, or written to, a record.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The absent value of an `Option<T>` property.
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Char(char),
    Text(String),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

impl Value {
    /// Returns the kind of this value, or `None` for `Null`.
    #[must_use]
    pub const fn kind(&self) -> Option<ValueKind> {
        match self {
            Self::Null => None,
            Self::Bool(_) => Some(ValueKind::Bool),
            Self::Int(_) => Some(ValueKind::Int),
            Self::UInt(_) => Some(ValueKind::UInt),
            Self::Float(_) => Some(ValueKind::Float),
            Self::Char(_) => Some(ValueKind::Char),
            Self::Text(_) => Some(ValueKind::Text),
            Self::Date(_) => Some(ValueKind::Date),
            Self::DateTime(_) => Some(ValueKind::DateTime),
        }
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Textual representation of the value. `Null` has none.
    #[must_use]
    pub fn to_text(&self, formats: &TextFormats) -> Option<String> {
        let text = match self {
            Self::Null => return None,
            Self::Bool(v) => v.to_string(),
            Self::Int(v) => v.to_string(),
            Self::UInt(v) => v.to_string(),
            Self::Float(v) => v.to_string(),
            Self::Char(v) => v.to_string(),
            Self::Text(v) => v.clone(),
            Self::Date(v) => v.format(&formats.date_display).to_string(),
            Self::DateTime(v) => v.format(&formats.datetime_display).to_string(),
        };
        Some(text)
    }

    /// Converts the value into `Value::Text`, keeping `Null` as `Null`.
    #[must_use]
    pub fn into_text(self, formats: &TextFormats) -> Self {
        match self {
            Self::Text(_) | Self::Null => self,
            other => other.to_text(formats).map_or(Self::Null, Self::Text),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_text(&TextFormats::default()) {
            Some(text) => f.write_str(&text),
            None => f.write_str("null"),
        }
    }
}

/// A Rust type that can back a mapped property.
///
/// Narrowing conversions out of [`Value`] are range checked. `from_value` never
/// coerces between kinds; that is the job of [`crate::convert::coerce`].
pub trait FieldValue: Sized {
    /// Kind reported in the property's metadata.
    fn kind() -> ValueKind;

    /// Whether the property accepts `Value::Null`.
    fn nullable() -> bool {
        false
    }

    fn into_value(self) -> Value;

    fn from_value(value: Value) -> ModelResult<Self>;
}

fn mismatch(value: &Value, to: ValueKind) -> ModelError {
    match value.kind() {
        Some(from) => ModelError::Unsupported { from, to },
        None => ModelError::NullValue { to },
    }
}

macro_rules! signed_field {
    ($($t:ty),* $(,)?) => {
        $(
            impl FieldValue for $t {
                fn kind() -> ValueKind {
                    ValueKind::Int
                }

                fn into_value(self) -> Value {
                    Value::Int(i64::from(self))
                }

                fn from_value(value: Value) -> ModelResult<Self> {
                    match value {
                        Value::Int(v) => <$t>::try_from(v)
                            .map_err(|_| ModelError::out_of_range(v, stringify!($t))),
                        other => Err(mismatch(&other, ValueKind::Int)),
                    }
                }
            }
        )*
    };
}

macro_rules! unsigned_field {
    ($($t:ty),* $(,)?) => {
        $(
            impl FieldValue for $t {
                fn kind() -> ValueKind {
                    ValueKind::UInt
                }

                fn into_value(self) -> Value {
                    Value::UInt(u64::from(self))
                }

                fn from_value(value: Value) -> ModelResult<Self> {
                    match value {
                        Value::UInt(v) => <$t>::try_from(v)
                            .map_err(|_| ModelError::out_of_range(v, stringify!($t))),
                        other => Err(mismatch(&other, ValueKind::UInt)),
                    }
                }
            }
        )*
    };
}

signed_field!(i8, i16, i32, i64);
unsigned_field!(u8, u16, u32, u64);

impl FieldValue for f64 {
    fn kind() -> ValueKind {
        ValueKind::Float
    }

    fn into_value(self) -> Value {
        Value::Float(self)
    }

    fn from_value(value: Value) -> ModelResult<Self> {
        match value {
            Value::Float(v) => Ok(v),
            other => Err(mismatch(&other, ValueKind::Float)),
        }
    }
}

impl FieldValue for f32 {
    fn kind() -> ValueKind {
        ValueKind::Float
    }

    // Widened through the shortest f32 rendering so 0.1f32 stays 0.1.
    fn into_value(self) -> Value {
        Value::Float(self.to_string().parse().unwrap_or(f64::from(self)))
    }

    fn from_value(value: Value) -> ModelResult<Self> {
        match value {
            Value::Float(v) if v.is_finite() && v.abs() > f64::from(f32::MAX) => {
                Err(ModelError::out_of_range(v, "f32"))
            }
            Value::Float(v) => Ok(v as f32),
            other => Err(mismatch(&other, ValueKind::Float)),
        }
    }
}

macro_rules! simple_field {
    ($t:ty, $kind:ident) => {
        impl FieldValue for $t {
            fn kind() -> ValueKind {
                ValueKind::$kind
            }

            fn into_value(self) -> Value {
                Value::$kind(self)
            }

            fn from_value(value: Value) -> ModelResult<Self> {
                match value {
                    Value::$kind(v) => Ok(v),
                    other => Err(mismatch(&other, ValueKind::$kind)),
                }
            }
        }
    };
}

simple_field!(bool, Bool);
simple_field!(char, Char);
simple_field!(String, Text);
simple_field!(NaiveDate, Date);
simple_field!(NaiveDateTime, DateTime);

impl<T: FieldValue> FieldValue for Option<T> {
    fn kind() -> ValueKind {
        T::kind()
    }

    fn nullable() -> bool {
        true
    }

    fn into_value(self) -> Value {
        self.map_or(Value::Null, T::into_value)
    }

    fn from_value(value: Value) -> ModelResult<Self> {
        match value {
            Value::Null => Ok(None),
            other => T::from_value(other).map(Some),
        }
    }
}
