//! Compiled conversion steps.

use crate::error::{MapperError, MapperResult};
use propmap_model::convert::coerce;
use propmap_model::{Mappable, ModelError, PropertyInfo, TextFormats, TypeInfo, Value, ValueKind};

/// How a step moves its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionKind {
    /// Source and destination share a kind; the value is copied as is.
    DirectCopy,
    /// The destination is text; the value is rendered.
    ToText,
    /// The value is coerced into the destination kind at execution time.
    Coerce(ValueKind),
}

/// One compiled source-property to destination-property copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    source_property: String,
    destination_property: String,
    kind: ConversionKind,
}

impl Conversion {
    /// Compiles the step for a matched property pair.
    ///
    /// Fails with [`MapperError::CannotMapComplexObjects`] when either side
    /// holds a composite value.
    pub fn compile(
        source: &TypeInfo,
        source_property: &PropertyInfo,
        destination: &TypeInfo,
        destination_property: &PropertyInfo,
    ) -> MapperResult<Self> {
        for property in [source_property, destination_property] {
            if property.kind().is_composite() {
                return Err(MapperError::CannotMapComplexObjects {
                    source_type: source.key(),
                    destination_type: destination.key(),
                    property: property.name().to_string(),
                });
            }
        }

        let kind = if source_property.kind() == destination_property.kind() {
            ConversionKind::DirectCopy
        } else if destination_property.kind() == ValueKind::Text {
            ConversionKind::ToText
        } else {
            ConversionKind::Coerce(destination_property.kind())
        };

        Ok(Self {
            source_property: source_property.name().to_string(),
            destination_property: destination_property.name().to_string(),
            kind,
        })
    }

    pub fn source_property(&self) -> &str {
        &self.source_property
    }

    pub fn destination_property(&self) -> &str {
        &self.destination_property
    }

    pub fn kind(&self) -> ConversionKind {
        self.kind
    }

    /// Reads the source property, converts it, and writes the destination property.
    pub fn apply(
        &self,
        source: &dyn Mappable,
        destination: &mut dyn Mappable,
        formats: &TextFormats,
    ) -> MapperResult<()> {
        let value = source
            .read(&self.source_property)
            .map_err(|e| self.failed(e))?;
        let value = self.convert(value, formats).map_err(|e| self.failed(e))?;
        destination
            .write(&self.destination_property, value)
            .map_err(|e| self.failed(e))
    }

    // Null passes through every kind; the destination decides whether it accepts it.
    fn convert(&self, value: Value, formats: &TextFormats) -> Result<Value, ModelError> {
        match self.kind {
            ConversionKind::DirectCopy => Ok(value),
            ConversionKind::Coerce(_) if value.is_null() => Ok(value),
            ConversionKind::ToText => Ok(value.into_text(formats)),
            ConversionKind::Coerce(kind) => coerce(value, kind, formats),
        }
    }

    fn failed(&self, source: ModelError) -> MapperError {
        MapperError::Conversion {
            source_property: self.source_property.clone(),
            destination_property: self.destination_property.clone(),
            source,
        }
    }
}
