//! Error types for the property model.

use crate::value::ValueKind;
use thiserror::Error;

/// Result type for value and property operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors raised while converting values or accessing properties.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    /// No conversion exists between the two kinds.
    #[error("cannot convert {from} to {to}")]
    Unsupported { from: ValueKind, to: ValueKind },

    /// Text could not be parsed as the requested kind.
    #[error("cannot parse {text:?} as {to}")]
    InvalidText { text: String, to: ValueKind },

    /// The value does not fit in the target type.
    #[error("value {value} is out of range for {target}")]
    OutOfRange { value: String, target: &'static str },

    /// An absent value was converted into a non-nullable kind.
    #[error("cannot convert a null value to {to}")]
    NullValue { to: ValueKind },

    /// The instance does not expose the named property.
    #[error("unknown property '{property}' on {type_name}")]
    UnknownProperty {
        type_name: &'static str,
        property: String,
    },
}

impl ModelError {
    pub(crate) fn out_of_range(value: impl ToString, target: &'static str) -> Self {
        Self::OutOfRange {
            value: value.to_string(),
            target,
        }
    }

    pub(crate) fn invalid_text(text: &str, to: ValueKind) -> Self {
        Self::InvalidText {
            text: text.to_string(),
            to,
        }
    }
}
