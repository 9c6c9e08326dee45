//! The mapping engine.
//!
//! A [`Mapper`] owns a registry of compiled plans. Register each
//! (source, destination) pair once, then map as many instances as needed.
//! The mapper is `Send + Sync`; share it behind an `Arc` when several threads
//! map concurrently.

use crate::config::MapperConfig;
use crate::error::{MapperError, MapperResult};
use crate::interrogation::MappedObject;
use crate::maps_to::MapsToConversion;
use crate::registry::{MapRegistry, MappingPlan};
use crate::strategy::ConversionStrategy;
use propmap_model::{Mappable, TypeKey};
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Debug, Default)]
pub struct Mapper {
    registry: MapRegistry,
    config: MapperConfig,
}

impl Mapper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: MapperConfig) -> Self {
        Self {
            registry: MapRegistry::default(),
            config,
        }
    }

    pub fn config(&self) -> &MapperConfig {
        &self.config
    }

    // ================================================================
    // Registration
    // ================================================================

    /// Registers `S -> D` with the default [`MapsToConversion`] strategy.
    pub fn create_map<S: Mappable, D: Mappable>(&self) -> MapperResult<()> {
        self.create_map_with::<S, D>(&MapsToConversion)
    }

    /// Registers `S -> D` with a custom strategy.
    pub fn create_map_with<S: Mappable, D: Mappable>(
        &self,
        strategy: &dyn ConversionStrategy,
    ) -> MapperResult<()> {
        self.create_map_with_all::<S, D>(&[strategy])
    }

    /// Registers `S -> D` with the union of several strategies' conversions,
    /// in strategy order.
    ///
    /// A pair that is already registered is left untouched. A strategy error
    /// aborts the registration and stores nothing.
    pub fn create_map_with_all<S: Mappable, D: Mappable>(
        &self,
        strategies: &[&dyn ConversionStrategy],
    ) -> MapperResult<()> {
        let source = S::type_info();
        let destination = D::type_info();

        if self.registry.contains(source.key(), destination.key()) {
            debug!(
                source = source.key().short_name(),
                destination = destination.key().short_name(),
                "Map already registered"
            );
            return Ok(());
        }

        let mut conversions = Vec::new();
        for strategy in strategies {
            conversions.extend(strategy.create_conversions(&source, &destination)?);
        }

        let count = conversions.len();
        let plan = MappingPlan::new(source.key(), destination.key(), conversions);
        if self.registry.insert(plan) {
            info!(
                source = source.key().short_name(),
                destination = destination.key().short_name(),
                conversions = count,
                "Map registered"
            );
        } else {
            debug!(
                source = source.key().short_name(),
                destination = destination.key().short_name(),
                "Map registered concurrently, keeping the first"
            );
        }
        Ok(())
    }

    // ================================================================
    // Mapping
    // ================================================================

    /// Copies the mapped properties of `source` onto `destination`.
    ///
    /// Steps run in plan order; a failing step leaves earlier writes in place.
    pub fn map_into<S: Mappable, D: Mappable>(
        &self,
        source: &S,
        destination: &mut D,
    ) -> MapperResult<()> {
        let plan = self.plan::<S, D>().ok_or(MapperError::MapNotFound {
            source_type: TypeKey::of::<S>(),
            destination_type: TypeKey::of::<D>(),
        })?;
        plan.apply(source, destination, &self.config.text)
    }

    /// Maps `source` onto `destination` and hands the destination back.
    pub fn map<S: Mappable, D: Mappable>(&self, source: &S, mut destination: D) -> MapperResult<D> {
        self.map_into(source, &mut destination)?;
        Ok(destination)
    }

    /// Maps onto a freshly defaulted destination.
    ///
    /// An absent source yields `Ok(None)` without building a destination.
    pub fn map_new<S: Mappable, D: Mappable + Default>(
        &self,
        source: Option<&S>,
    ) -> MapperResult<Option<D>> {
        source.map(|s| self.map(s, D::default())).transpose()
    }

    /// Maps every source onto a fresh destination, preserving order.
    pub fn map_all<'a, S, D, I>(&self, sources: I) -> MapperResult<Vec<D>>
    where
        S: Mappable,
        D: Mappable + Default,
        I: IntoIterator<Item = &'a S>,
    {
        sources
            .into_iter()
            .map(|s| self.map(s, D::default()))
            .collect()
    }

    // ================================================================
    // Interrogation
    // ================================================================

    pub fn has_map<S: Mappable, D: Mappable>(&self) -> bool {
        self.registry.contains(TypeKey::of::<S>(), TypeKey::of::<D>())
    }

    pub fn plan<S: Mappable, D: Mappable>(&self) -> Option<Arc<MappingPlan>> {
        self.registry.find(TypeKey::of::<S>(), TypeKey::of::<D>())
    }

    /// Every registered plan, in registration order.
    pub fn mappings(&self) -> Vec<MappedObject> {
        self.registry
            .snapshot()
            .iter()
            .map(|p| MappedObject::from(p.as_ref()))
            .collect()
    }

    /// The plan registered for `S -> D`, if any.
    pub fn mappings_for<S: Mappable, D: Mappable>(&self) -> Vec<MappedObject> {
        self.plan::<S, D>()
            .map(|p| MappedObject::from(p.as_ref()))
            .into_iter()
            .collect()
    }

    // ================================================================
    // Clearing
    // ================================================================

    pub fn clear_mappings(&self) {
        let removed = self.registry.clear();
        info!(removed, "Maps cleared");
    }

    pub fn clear_mappings_for<S: Mappable, D: Mappable>(&self) {
        let source = TypeKey::of::<S>();
        let destination = TypeKey::of::<D>();
        if self.registry.remove(source, destination) {
            info!(
                source = source.short_name(),
                destination = destination.short_name(),
                "Map cleared"
            );
        }
    }
}
