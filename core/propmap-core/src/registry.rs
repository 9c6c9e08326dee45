//! Plan storage.

use crate::conversion::Conversion;
use crate::error::MapperResult;
use propmap_model::{Mappable, TextFormats, TypeKey};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Compiled plan for one ordered (source, destination) type pair.
///
/// Conversions never change after the plan is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingPlan {
    source: TypeKey,
    destination: TypeKey,
    conversions: Vec<Conversion>,
}

impl MappingPlan {
    pub(crate) fn new(source: TypeKey, destination: TypeKey, conversions: Vec<Conversion>) -> Self {
        Self {
            source,
            destination,
            conversions,
        }
    }

    pub fn source(&self) -> TypeKey {
        self.source
    }

    pub fn destination(&self) -> TypeKey {
        self.destination
    }

    pub fn conversions(&self) -> &[Conversion] {
        &self.conversions
    }

    fn is_for(&self, source: TypeKey, destination: TypeKey) -> bool {
        self.source == source && self.destination == destination
    }

    /// Runs every conversion in order. Steps applied before a failure stay applied.
    pub(crate) fn apply(
        &self,
        source: &dyn Mappable,
        destination: &mut dyn Mappable,
        formats: &TextFormats,
    ) -> MapperResult<()> {
        for conversion in &self.conversions {
            conversion.apply(source, destination, formats)?;
        }
        Ok(())
    }
}

/// Plans in registration order, behind one lock.
#[derive(Debug, Default)]
pub(crate) struct MapRegistry {
    plans: RwLock<Vec<Arc<MappingPlan>>>,
}

impl MapRegistry {
    // A panic while holding the lock cannot leave a half-inserted plan, so
    // poisoning is ignored.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Arc<MappingPlan>>> {
        self.plans.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Arc<MappingPlan>>> {
        self.plans.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn find(&self, source: TypeKey, destination: TypeKey) -> Option<Arc<MappingPlan>> {
        self.read()
            .iter()
            .find(|p| p.is_for(source, destination))
            .cloned()
    }

    pub(crate) fn contains(&self, source: TypeKey, destination: TypeKey) -> bool {
        self.read().iter().any(|p| p.is_for(source, destination))
    }

    /// Stores the plan unless its pair is already present. Returns whether it was stored.
    pub(crate) fn insert(&self, plan: MappingPlan) -> bool {
        let mut plans = self.write();
        if plans.iter().any(|p| p.is_for(plan.source, plan.destination)) {
            return false;
        }
        plans.push(Arc::new(plan));
        true
    }

    pub(crate) fn snapshot(&self) -> Vec<Arc<MappingPlan>> {
        self.read().clone()
    }

    /// Removes every plan and returns how many there were.
    pub(crate) fn clear(&self) -> usize {
        let mut plans = self.write();
        let count = plans.len();
        plans.clear();
        count
    }

    /// Removes the plan for one pair. Returns whether one existed.
    pub(crate) fn remove(&self, source: TypeKey, destination: TypeKey) -> bool {
        let mut plans = self.write();
        let before = plans.len();
        plans.retain(|p| !p.is_for(source, destination));
        plans.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct A;
    struct B;

    fn plan<S: 'static, D: 'static>() -> MappingPlan {
        MappingPlan::new(TypeKey::of::<S>(), TypeKey::of::<D>(), Vec::new())
    }

    #[test]
    fn first_insert_wins() {
        let registry = MapRegistry::default();
        assert!(registry.insert(plan::<A, B>()));
        assert!(!registry.insert(plan::<A, B>()));
        assert_eq!(registry.snapshot().len(), 1);
    }

    #[test]
    fn direction_matters() {
        let registry = MapRegistry::default();
        registry.insert(plan::<A, B>());
        assert!(registry.contains(TypeKey::of::<A>(), TypeKey::of::<B>()));
        assert!(!registry.contains(TypeKey::of::<B>(), TypeKey::of::<A>()));
    }

    #[test]
    fn remove_only_touches_the_pair() {
        let registry = MapRegistry::default();
        registry.insert(plan::<A, B>());
        registry.insert(plan::<B, A>());
        assert!(registry.remove(TypeKey::of::<A>(), TypeKey::of::<B>()));
        assert!(!registry.remove(TypeKey::of::<A>(), TypeKey::of::<B>()));
        assert!(registry.find(TypeKey::of::<B>(), TypeKey::of::<A>()).is_some());
    }

    #[test]
    fn clear_reports_count() {
        let registry = MapRegistry::default();
        registry.insert(plan::<A, B>());
        registry.insert(plan::<B, A>());
        assert_eq!(registry.clear(), 2);
        assert!(registry.snapshot().is_empty());
    }
}
