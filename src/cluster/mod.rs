//! Cluster schema tables.
//!
//! Each cluster module defines its identity, revision, feature bits and a
//! static attribute table; the registry collects them for lookup by id or by
//! external schema name.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use tracing::warn;

use crate::codec::dictionary::{BitmapTable, EnumDictionary};
use crate::data_model::{AttributeId, ClusterId};

pub mod door_lock;
pub mod identify;
pub mod level;
pub mod names;
pub mod occupancy_sensing;
pub mod on_off;
pub mod temperature_measurement;

/// Storage width of an integer attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntWidth {
    W8,
    W16,
    W32,
    W64,
}

/// Semantic type of an attribute value. Selects the codec rule and, for
/// enumerations and bitmasks, carries the dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    Boolean,
    Unsigned(IntWidth),
    Signed(IntWidth),
    Enum8(&'static EnumDictionary),
    Bitmap(&'static BitmapTable),
    Utf8,
    Octets,
    Nullable(&'static ValueType),
}

/// Static description of one attribute of a cluster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeDescriptor {
    pub id: AttributeId,
    pub name: &'static str,
    pub value_type: ValueType,
    pub writable: bool,
    /// Attributes the external schema does not carry keep their row for
    /// documentation but refuse translation.
    pub supported: bool,
    /// Answered from the cluster definition rather than the store.
    pub static_metadata: bool,
}

impl AttributeDescriptor {
    pub const fn new(id: AttributeId, name: &'static str, value_type: ValueType) -> Self {
        Self {
            id,
            name,
            value_type,
            writable: false,
            supported: true,
            static_metadata: false,
        }
    }

    pub const fn writable(mut self) -> Self {
        self.writable = true;
        self
    }

    pub const fn unsupported(mut self) -> Self {
        self.supported = false;
        self
    }

    pub const fn static_metadata(mut self) -> Self {
        self.static_metadata = true;
        self
    }
}

/// One cluster definition.
#[derive(Debug, PartialEq, Eq)]
pub struct Cluster {
    pub id: ClusterId,
    pub name: &'static str,
    pub revision: u16,
    pub features: u32,
    pub attributes: &'static [AttributeDescriptor],
}

impl Cluster {
    /// Looks up an attribute by id, falling back to the cluster-global
    /// pseudo-attributes shared by every cluster.
    pub fn attribute(&self, id: AttributeId) -> Option<&'static AttributeDescriptor> {
        let own: &'static [AttributeDescriptor] = self.attributes;
        own.iter()
            .find(|attribute| attribute.id == id)
            .or_else(|| GLOBAL_ATTRIBUTES.iter().find(|attribute| attribute.id == id))
    }

    pub fn attribute_by_name(&self, name: &str) -> Option<&'static AttributeDescriptor> {
        let own: &'static [AttributeDescriptor] = self.attributes;
        own.iter()
            .find(|attribute| attribute.name == name)
            .or_else(|| GLOBAL_ATTRIBUTES.iter().find(|attribute| attribute.name == name))
    }
}

/// Cluster-global attribute identifiers.
#[repr(u16)]
#[derive(FromPrimitive, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlobalAttribute {
    FeatureMap = 0xFFFC,
    ClusterRevision = 0xFFFD,
}

/// Read-only constants every cluster exposes.
pub const GLOBAL_ATTRIBUTES: &[AttributeDescriptor] = &[
    AttributeDescriptor::new(
        GlobalAttribute::FeatureMap as u16,
        "FeatureMap",
        ValueType::Unsigned(IntWidth::W32),
    )
    .static_metadata(),
    AttributeDescriptor::new(
        GlobalAttribute::ClusterRevision as u16,
        "ClusterRevision",
        ValueType::Unsigned(IntWidth::W16),
    )
    .static_metadata(),
];

/// Every cluster the built-in registry translates.
pub const SUPPORTED_CLUSTERS: &[&Cluster] = &[
    &identify::CLUSTER,
    &on_off::CLUSTER,
    &level::CLUSTER,
    &door_lock::CLUSTER,
    &temperature_measurement::CLUSTER,
    &occupancy_sensing::CLUSTER,
];

/// Lookup over a fixed set of clusters, built once at startup.
pub struct ClusterRegistry {
    by_id: HashMap<ClusterId, &'static Cluster>,
    by_name: HashMap<&'static str, &'static Cluster>,
}

impl ClusterRegistry {
    pub fn new(clusters: &[&'static Cluster]) -> Self {
        let mut by_id = HashMap::with_capacity(clusters.len());
        let mut by_name = HashMap::with_capacity(clusters.len());
        for cluster in clusters {
            if by_id.contains_key(&cluster.id) {
                warn!(cluster = cluster.name, id = cluster.id, "duplicate cluster id, keeping the first definition");
                continue;
            }
            by_id.insert(cluster.id, *cluster);
            by_name.insert(cluster.name, *cluster);
        }
        Self { by_id, by_name }
    }

    pub fn cluster(&self, id: ClusterId) -> Option<&'static Cluster> {
        self.by_id.get(&id).copied()
    }

    pub fn cluster_by_name(&self, name: &str) -> Option<&'static Cluster> {
        self.by_name.get(name).copied()
    }

    pub fn lookup(
        &self,
        cluster: ClusterId,
        attribute: AttributeId,
    ) -> Option<&'static AttributeDescriptor> {
        self.cluster(cluster)?.attribute(attribute)
    }

    pub fn clusters(&self) -> impl Iterator<Item = &'static Cluster> + '_ {
        self.by_id.values().copied()
    }
}

/// The registry over [`SUPPORTED_CLUSTERS`].
pub fn default_registry() -> &'static ClusterRegistry {
    static REGISTRY: Lazy<ClusterRegistry> = Lazy::new(|| ClusterRegistry::new(SUPPORTED_CLUSTERS));
    &REGISTRY
}

#[cfg(test)]
mod tests {
    use super::*;
    use num::FromPrimitive;

    #[test]
    fn registry_resolves_by_id_and_name() {
        let registry = default_registry();
        let cluster = registry.cluster(on_off::CLUSTER_ID).unwrap();
        assert_eq!(cluster.name, "OnOff");
        assert_eq!(registry.cluster_by_name("DoorLock").unwrap().id, door_lock::CLUSTER_ID);
        assert!(registry.cluster(0xFFFF).is_none());
    }

    #[test]
    fn global_attributes_resolve_on_every_cluster() {
        for cluster in default_registry().clusters() {
            let revision = cluster.attribute(GlobalAttribute::ClusterRevision as u16).unwrap();
            assert!(revision.static_metadata);
            assert!(!revision.writable);
            let feature_map = cluster.attribute_by_name("FeatureMap").unwrap();
            assert_eq!(
                GlobalAttribute::from_u16(feature_map.id),
                Some(GlobalAttribute::FeatureMap)
            );
        }
    }

    #[test]
    fn duplicate_cluster_ids_keep_the_first_definition() {
        let registry = ClusterRegistry::new(&[&on_off::CLUSTER, &on_off::CLUSTER]);
        assert_eq!(registry.clusters().count(), 1);
        assert_eq!(registry.cluster(on_off::CLUSTER_ID), Some(&on_off::CLUSTER));
    }

    #[test]
    fn unsupported_attributes_keep_their_rows() {
        let lock = default_registry().cluster(door_lock::CLUSTER_ID).unwrap();
        let security = lock.attribute(door_lock::Attributes::SecurityLevel as u16).unwrap();
        assert!(!security.supported);
    }
}
