use crate::conversion::Conversion;
use crate::error::MapperResult;
use propmap_model::TypeInfo;

/// Produces the conversions for one (source, destination) type pair.
///
/// Implement this to plug a custom pairing rule into
/// [`Mapper::create_map_with`](crate::Mapper::create_map_with).
pub trait ConversionStrategy: Send + Sync {
    /// Returns the conversions in the order they should run.
    fn create_conversions(
        &self,
        source: &TypeInfo,
        destination: &TypeInfo,
    ) -> MapperResult<Vec<Conversion>>;
}
