//! Read-only view of registered plans.

use crate::registry::MappingPlan;
use serde::{Deserialize, Serialize};

/// A registered plan, by type name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappedObject {
    pub source_object_type: String,
    pub destination_object_type: String,
    pub properties: Vec<MappedProperty>,
}

/// One step of a registered plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappedProperty {
    pub source_property: String,
    pub destination_property: String,
}

impl From<&MappingPlan> for MappedObject {
    fn from(plan: &MappingPlan) -> Self {
        Self {
            source_object_type: plan.source().name().to_string(),
            destination_object_type: plan.destination().name().to_string(),
            properties: plan
                .conversions()
                .iter()
                .map(|c| MappedProperty {
                    source_property: c.source_property().to_string(),
                    destination_property: c.destination_property().to_string(),
                })
                .collect(),
        }
    }
}
