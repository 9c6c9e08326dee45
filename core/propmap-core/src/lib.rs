//! Mapping plan compiler and execution engine.
//!
//! Given two [`Mappable`](propmap_model::Mappable) record types, a [`Mapper`]
//! compiles a reusable plan that copies values from the source type to the
//! destination type:
//!
//! - Properties pair up by `MapsTo` / `MapsFrom` annotation or by name
//!   ([`MapsToConversion`], [`MapsFromConversion`], or any [`ConversionStrategy`])
//! - Each pair compiles to a [`Conversion`] that copies, renders to text, or
//!   coerces the value
//! - Plans are cached per ordered type pair; registering a pair twice is a no-op
//!
//! Nested objects are never traversed: a composite property fails registration
//! with [`MapperError::CannotMapComplexObjects`].

mod config;
mod conversion;
mod error;
mod interrogation;
mod mapper;
mod maps_from;
mod maps_to;
mod registry;
mod strategy;

pub use config::MapperConfig;
pub use conversion::{Conversion, ConversionKind};
pub use error::{MapperError, MapperResult};
pub use interrogation::{MappedObject, MappedProperty};
pub use mapper::Mapper;
pub use maps_from::MapsFromConversion;
pub use maps_to::MapsToConversion;
pub use registry::MappingPlan;
pub use strategy::ConversionStrategy;
