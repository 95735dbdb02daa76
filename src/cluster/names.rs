//! Resolution of external schema names to local identities.
//!
//! Inbound messages address attributes by name; the numeric identities
//! never travel. The reverse direction needs no resolver because outbound
//! names are read straight off the descriptors.

use crate::data_model::{AttributeId, ClusterId};

use super::ClusterRegistry;

/// Maps external cluster and attribute names to their local identifiers.
///
/// `None` means the name is not part of the bridged schema; callers treat
/// that as noise, not as an error.
pub trait SchemaNames: Send + Sync {
    fn cluster_id(&self, name: &str) -> Option<ClusterId>;

    fn attribute_id(&self, cluster: ClusterId, name: &str) -> Option<AttributeId>;
}

/// [`SchemaNames`] answered from a cluster registry. The external schema
/// names and the registry's table names are the same vocabulary.
pub struct RegistryNames {
    registry: &'static ClusterRegistry,
}

impl RegistryNames {
    pub fn new(registry: &'static ClusterRegistry) -> Self {
        Self { registry }
    }
}

impl SchemaNames for RegistryNames {
    fn cluster_id(&self, name: &str) -> Option<ClusterId> {
        self.registry.cluster_by_name(name).map(|cluster| cluster.id)
    }

    fn attribute_id(&self, cluster: ClusterId, name: &str) -> Option<AttributeId> {
        self.registry
            .cluster(cluster)?
            .attribute_by_name(name)
            .map(|attribute| attribute.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cluster::{default_registry, door_lock, on_off, GlobalAttribute};

    #[test]
    fn resolves_known_names() {
        let names = RegistryNames::new(default_registry());
        assert_eq!(names.cluster_id("OnOff"), Some(on_off::CLUSTER_ID));
        assert_eq!(
            names.attribute_id(door_lock::CLUSTER_ID, "LockState"),
            Some(door_lock::Attributes::LockState as u16)
        );
        assert_eq!(
            names.attribute_id(on_off::CLUSTER_ID, "ClusterRevision"),
            Some(GlobalAttribute::ClusterRevision as u16)
        );
    }

    #[test]
    fn unknown_names_resolve_to_none() {
        let names = RegistryNames::new(default_registry());
        assert_eq!(names.cluster_id("Thermostat"), None);
        assert_eq!(names.attribute_id(on_off::CLUSTER_ID, "LockState"), None);
        assert_eq!(names.attribute_id(0xEEEE, "OnOff"), None);
    }
}
