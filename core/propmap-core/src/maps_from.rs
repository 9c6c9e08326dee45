//! Destination-declared pairing: `MapsFrom` annotations on the destination
//! name source properties. Useful when the source type cannot be annotated.

use crate::conversion::Conversion;
use crate::error::{MapperError, MapperResult};
use crate::strategy::ConversionStrategy;
use propmap_model::{MapsFrom, TypeInfo};
use tracing::debug;

/// Mirror image of [`MapsToConversion`](crate::MapsToConversion) with the
/// destination as the authoritative side.
#[derive(Debug, Clone, Copy, Default)]
pub struct MapsFromConversion;

impl ConversionStrategy for MapsFromConversion {
    fn create_conversions(
        &self,
        source: &TypeInfo,
        destination: &TypeInfo,
    ) -> MapperResult<Vec<Conversion>> {
        let explicit = destination.has_maps_from();
        let implicit = [MapsFrom::same_name()];
        let mut conversions = Vec::new();

        for property in destination.properties() {
            let annotations = if explicit {
                property.maps_from()
            } else {
                &implicit[..]
            };

            for annotation in annotations {
                let scope = annotation.source_type();
                if scope.is_some_and(|t| t != source.key()) {
                    continue;
                }

                let name = annotation.source_name().unwrap_or(property.name());
                let Some(origin) = source.property(name) else {
                    if scope.is_some() {
                        return Err(MapperError::SourcePropertyNotFound {
                            source_type: source.key(),
                            destination_type: destination.key(),
                            property: name.to_string(),
                            reason: format!(
                                "the property named '{}' was not found on the source type '{}'",
                                name,
                                source.name()
                            ),
                        });
                    }
                    debug!(
                        source = source.name(),
                        destination = destination.name(),
                        property = property.name(),
                        "No source property '{}', skipping",
                        name
                    );
                    continue;
                };

                let conversion = Conversion::compile(source, origin, destination, property)?;
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
