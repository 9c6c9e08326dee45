//! Error types for plan compilation and execution.

use propmap_model::{ModelError, TypeKey};
use thiserror::Error;

/// Result type for mapper operations.
pub type MapperResult<T> = Result<T, MapperError>;

/// Errors raised while registering or executing a mapping plan.
#[derive(Debug, Error)]
pub enum MapperError {
    /// A type-scoped `MapsTo` names a property the destination does not have.
    #[error(
        "unable to map property '{property}' from source object '{source_type}' to destination object '{destination_type}': {reason}"
    )]
    DestinationPropertyNotFound {
        source_type: TypeKey,
        destination_type: TypeKey,
        property: String,
        reason: String,
    },

    /// A type-scoped `MapsFrom` names a property the source does not have.
    #[error(
        "unable to map property '{property}' from source object '{source_type}' to destination object '{destination_type}': {reason}"
    )]
    SourcePropertyNotFound {
        source_type: TypeKey,
        destination_type: TypeKey,
        property: String,
        reason: String,
    },

    /// A matched property holds a composite value.
    #[error(
        "cannot map complex objects: property '{property}' between '{source_type}' and '{destination_type}' is composite"
    )]
    CannotMapComplexObjects {
        source_type: TypeKey,
        destination_type: TypeKey,
        property: String,
    },

    /// No plan is registered for the ordered type pair.
    #[error("a map was not found for a source of {source_type} with a destination of {destination_type}")]
    MapNotFound {
        source_type: TypeKey,
        destination_type: TypeKey,
    },

    /// A compiled step failed on the actual runtime value.
    #[error("failed to map '{source_property}' to '{destination_property}': {source}")]
    Conversion {
        source_property: String,
        destination_property: String,
        source: ModelError,
    },

    /// Configuration could not be read or parsed.
    #[error("configuration error: {0}")]
    Config(String),
}

impl MapperError {
    /// True for errors raised while registering a plan.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::DestinationPropertyNotFound { .. }
                | Self::SourcePropertyNotFound { .. }
                | Self::CannotMapComplexObjects { .. }
        )
    }
}
