//! Property model for propmap.
//!
//! Defines everything the mapping engine reads but does not own:
//! - [`Value`] / [`ValueKind`]: the dynamically typed property value and its kind
//! - [`FieldValue`]: bridges concrete Rust field types to [`Value`]
//! - [`MapsTo`] / [`MapsFrom`]: declarative annotations naming a counterpart property
//! - [`TypeInfo`] / [`PropertyInfo`] / [`TypeKey`]: per-type property metadata
//! - [`Mappable`]: the introspection capability (enumerate, read, write)
//! - [`convert::coerce`]: the generic value-coercion primitive
//!
//! Record types usually implement [`Mappable`] through the [`mappable!`] macro.

mod annotation;
pub mod convert;
mod error;
mod macros;
mod reflect;
mod value;

pub use annotation::{Annotation, MapsFrom, MapsTo};
pub use convert::TextFormats;
pub use error::{ModelError, ModelResult};
pub use reflect::{Mappable, PropertyInfo, TypeInfo, TypeKey};
pub use value::{FieldValue, Value, ValueKind};
