//! Mapping between local endpoints and their external node identity.
//!
//! The node-state owner maintains this mapping; the bridge only reads it.

use std::collections::HashMap;

use super::EndpointId;

/// The external identity of a bridged endpoint, used to build topic names.
///
/// Both fields are opaque to the bridge: `device` is the external node
/// identifier (e.g. `mt-d0cf5efffe1a30f1`), `endpoint` the external endpoint
/// suffix (e.g. `ep1`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BridgedEndpoint {
    pub device: String,
    pub endpoint: String,
}

impl BridgedEndpoint {
    pub fn new(device: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            device: device.into(),
            endpoint: endpoint.into(),
        }
    }
}

/// Resolves local endpoints to their external identity and back.
///
/// Pure lookups; absence means the endpoint is not (or no longer) bridged
/// and is a routine condition.
pub trait NodeMap: Send + Sync {
    fn bridged_endpoint(&self, endpoint: EndpointId) -> Option<BridgedEndpoint>;

    fn local_endpoint(&self, device: &str, endpoint: &str) -> Option<EndpointId>;
}

/// A fixed endpoint table, built once at startup.
#[derive(Debug, Default)]
pub struct StaticNodeMap {
    forward: HashMap<EndpointId, BridgedEndpoint>,
    reverse: HashMap<BridgedEndpoint, EndpointId>,
}

impl StaticNodeMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a bridged endpoint. The last registration for a local
    /// endpoint or an external identity wins.
    pub fn insert(&mut self, endpoint: EndpointId, bridged: BridgedEndpoint) {
        self.reverse.insert(bridged.clone(), endpoint);
        self.forward.insert(endpoint, bridged);
    }
}

impl NodeMap for StaticNodeMap {
    fn bridged_endpoint(&self, endpoint: EndpointId) -> Option<BridgedEndpoint> {
        self.forward.get(&endpoint).cloned()
    }

    fn local_endpoint(&self, device: &str, endpoint: &str) -> Option<EndpointId> {
        self.reverse
            .get(&BridgedEndpoint::new(device, endpoint))
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_both_directions() {
        let mut nodes = StaticNodeMap::new();
        nodes.insert(1, BridgedEndpoint::new("mt-1234", "ep1"));

        assert_eq!(
            nodes.bridged_endpoint(1),
            Some(BridgedEndpoint::new("mt-1234", "ep1"))
        );
        assert_eq!(nodes.local_endpoint("mt-1234", "ep1"), Some(1));
        assert_eq!(nodes.local_endpoint("mt-1234", "ep2"), None);
        assert_eq!(nodes.bridged_endpoint(9), None);
    }
}
