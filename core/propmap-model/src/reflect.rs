//! Type and property metadata, and the [`Mappable`] capability.

use crate::annotation::{Annotation, MapsFrom, MapsTo};
use crate::error::ModelResult;
use crate::value::{FieldValue, Value, ValueKind};
use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Identity of a Rust type, with its name kept for diagnostics.
///
/// Equality and hashing use only the `TypeId`.
#[derive(Clone, Copy)]
pub struct TypeKey {
    id: TypeId,
    name: &'static str,
}

impl TypeKey {
    #[must_use]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// Fully qualified type name, e.g. `my_app::model::Customer`.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Last path segment of the type name, e.g. `Customer`.
    #[must_use]
    pub fn short_name(&self) -> &'static str {
        let base = self.name.split('<').next().unwrap_or(self.name);
        base.rsplit("::").next().unwrap_or(base)
    }
}

impl PartialEq for TypeKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeKey {}

impl Hash for TypeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TypeKey").field(&self.name).finish()
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Metadata for one declared property.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyInfo {
    name: String,
    kind: ValueKind,
    nullable: bool,
    maps_to: Vec<MapsTo>,
    maps_from: Vec<MapsFrom>,
}

impl PropertyInfo {
    /// Describes a property backed by the field type `T`.
    #[must_use]
    pub fn of<T: FieldValue>(name: impl Into<String>) -> Self {
        Self::with_kind(name, T::kind(), T::nullable())
    }

    /// Describes a property holding a user-defined type `T`.
    #[must_use]
    pub fn composite<T: ?Sized + 'static>(name: impl Into<String>) -> Self {
        Self::with_kind(name, ValueKind::Composite(std::any::type_name::<T>()), false)
    }

    #[must_use]
    pub fn with_kind(name: impl Into<String>, kind: ValueKind, nullable: bool) -> Self {
        Self {
            name: name.into(),
            kind,
            nullable,
            maps_to: Vec::new(),
            maps_from: Vec::new(),
        }
    }

    /// Attaches an annotation. Annotations keep their declaration order.
    #[must_use]
    pub fn annotated(mut self, annotation: impl Into<Annotation>) -> Self {
        match annotation.into() {
            Annotation::MapsTo(a) => self.maps_to.push(a),
            Annotation::MapsFrom(a) => self.maps_from.push(a),
        }
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    pub fn maps_to(&self) -> &[MapsTo] {
        &self.maps_to
    }

    pub fn maps_from(&self) -> &[MapsFrom] {
        &self.maps_from
    }
}

/// The declared properties of a type, in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeInfo {
    key: TypeKey,
    properties: Vec<PropertyInfo>,
}

impl TypeInfo {
    #[must_use]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            key: TypeKey::of::<T>(),
            properties: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_property(mut self, property: PropertyInfo) -> Self {
        self.properties.push(property);
        self
    }

    pub fn key(&self) -> TypeKey {
        self.key
    }

    pub fn name(&self) -> &'static str {
        self.key.name()
    }

    pub fn properties(&self) -> &[PropertyInfo] {
        &self.properties
    }

    /// Looks a property up by exact name.
    pub fn property(&self, name: &str) -> Option<&PropertyInfo> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// True when any property carries a [`MapsTo`] annotation.
    pub fn has_maps_to(&self) -> bool {
        self.properties.iter().any(|p| !p.maps_to.is_empty())
    }

    /// True when any property carries a [`MapsFrom`] annotation.
    pub fn has_maps_from(&self) -> bool {
        self.properties.iter().any(|p| !p.maps_from.is_empty())
    }
}

/// Introspection capability required of every mapped record type.
///
/// `read` and `write` must accept every property name that `type_info` declares.
/// Most types implement this through [`crate::mappable!`].
pub trait Mappable: 'static {
    fn type_info() -> TypeInfo
    where
        Self: Sized;

    fn read(&self, property: &str) -> ModelResult<Value>;

    fn write(&mut self, property: &str, value: Value) -> ModelResult<()>;
}
