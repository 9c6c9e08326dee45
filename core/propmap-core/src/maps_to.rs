//! Source-declared pairing: `MapsTo` annotations on the source name
//! destination properties.

use crate::conversion::Conversion;
use crate::error::{MapperError, MapperResult};
use crate::strategy::ConversionStrategy;
use propmap_model::{MapsTo, TypeInfo};
use tracing::debug;

/// The default strategy.
///
/// When no source property is annotated every source property maps to the
/// destination property of the same name. Once any property is annotated only
/// annotated properties take part.
#[derive(Debug, Clone, Copy, Default)]
pub struct MapsToConversion;

impl ConversionStrategy for MapsToConversion {
    fn create_conversions(
        &self,
        source: &TypeInfo,
        destination: &TypeInfo,
    ) -> MapperResult<Vec<Conversion>> {
        let explicit = source.has_maps_to();
        let implicit = [MapsTo::same_name()];
        let mut conversions = Vec::new();

        for property in source.properties() {
            let annotations = if explicit {
                property.maps_to()
            } else {
                &implicit[..]
            };

            for annotation in annotations {
                let scope = annotation.destination_type();
                if scope.is_some_and(|t| t != destination.key()) {
                    continue;
                }

                let name = annotation.destination_name().unwrap_or(property.name());
                let Some(target) = destination.property(name) else {
                    if scope.is_some() {
                        return Err(MapperError::DestinationPropertyNotFound {
                            source_type: source.key(),
                            destination_type: destination.key(),
                            property: name.to_string(),
                            reason: format!(
                                "the property named '{}' was not found on the destination type '{}'",
                                name,
                                destination.name()
                            ),
                        });
                    }
                    debug!(
                        source = source.name(),
                        destination = destination.name(),
                        property = property.name(),
                        "No destination property '{}', skipping",
                        name
                    );
                    continue;
                };

                let conversion = Conversion::compile(source, property, destination, target)?;
                debug!(
                    source_property = conversion.source_property(),
                    destination_property = conversion.destination_property(),
                    kind = ?conversion.kind(),
                    "Compiled conversion"
                );
                conversions.push(conversion);
            }
        }

        Ok(conversions)
    }
}
