//! Desired-value publication towards the external side.

pub mod topic;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::data_model::{AttributeValue, BridgedEndpoint};

pub use crate::error::PublishError;
pub use topic::{AttributeTopic, TopicKind};

/// The single-key envelope every attribute payload travels in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuePayload {
    pub value: Value,
}

impl ValuePayload {
    pub fn new(value: Value) -> Self {
        Self { value }
    }

    pub fn from_slice(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }

    pub fn into_value(self) -> Value {
        self.value
    }
}

/// Hands desired-value events to the external transport.
///
/// Implementations own the final wire encoding; the bridge gives them the
/// already validated local value and the names to address it with. The
/// bridge holds no state about the publication: delivery, retrying and
/// echo handling are transport concerns.
#[async_trait]
pub trait Publisher: Send + Sync {
    async fn publish_desired(
        &self,
        endpoint: &BridgedEndpoint,
        cluster: &str,
        attribute: &str,
        value: AttributeValue,
    ) -> Result<(), PublishError>;
}
