//! Bridge configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_TOPIC_ROOT, DEFAULT_UPDATE_QUEUE_DEPTH};

/// Deployment configuration, injected at construction. Deserializes from
/// partial documents; missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// Leading segment(s) of every attribute topic.
    pub topic_root: String,
    /// Capacity of the attribute-update channel handed out by the bridge.
    pub update_queue_depth: usize,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            topic_root: DEFAULT_TOPIC_ROOT.to_owned(),
            update_queue_depth: DEFAULT_UPDATE_QUEUE_DEPTH,
        }
    }
}
