//! Declarative property annotations.
//!
//! A property on a source type carries [`MapsTo`] annotations naming destination
//! properties; a property on a destination type carries [`MapsFrom`] annotations
//! naming source properties. Either may be scoped to one counterpart type.

use crate::reflect::TypeKey;

/// Source-side annotation: "this property maps to a property on the destination".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MapsTo {
    destination_name: Option<String>,
    destination_type: Option<TypeKey>,
}

impl MapsTo {
    /// Maps to the destination property with the same name.
    #[must_use]
    pub fn same_name() -> Self {
        Self::default()
    }

    /// Maps to the named destination property.
    #[must_use]
    pub fn named(destination_name: impl Into<String>) -> Self {
        Self {
            destination_name: Some(destination_name.into()),
            destination_type: None,
        }
    }

    /// Restricts the annotation to mappings whose destination is `T`.
    #[must_use]
    pub fn for_type<T: 'static>(mut self) -> Self {
        self.destination_type = Some(TypeKey::of::<T>());
        self
    }

    pub fn destination_name(&self) -> Option<&str> {
        self.destination_name.as_deref()
    }

    pub fn destination_type(&self) -> Option<TypeKey> {
        self.destination_type
    }
}

/// Destination-side annotation: "this property maps from a property on the source".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MapsFrom {
    source_name: Option<String>,
    source_type: Option<TypeKey>,
}

impl MapsFrom {
    /// Maps from the source property with the same name.
    #[must_use]
    pub fn same_name() -> Self {
        Self::default()
    }

    /// Maps from the named source property.
    #[must_use]
    pub fn named(source_name: impl Into<String>) -> Self {
        Self {
            source_name: Some(source_name.into()),
            source_type: None,
        }
    }

    /// Restricts the annotation to mappings whose source is `T`.
    #[must_use]
    pub fn for_type<T: 'static>(mut self) -> Self {
        self.source_type = Some(TypeKey::of::<T>());
        self
    }

    pub fn source_name(&self) -> Option<&str> {
        self.source_name.as_deref()
    }

    pub fn source_type(&self) -> Option<TypeKey> {
        self.source_type
    }
}

/// Either annotation family, for attaching to a [`crate::PropertyInfo`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Annotation {
    MapsTo(MapsTo),
    MapsFrom(MapsFrom),
}

impl From<MapsTo> for Annotation {
    fn from(value: MapsTo) -> Self {
        Self::MapsTo(value)
    }
}

impl From<MapsFrom> for Annotation {
    fn from(value: MapsFrom) -> Self {
        Self::MapsFrom(value)
    }
}
