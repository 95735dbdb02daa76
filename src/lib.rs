//! Bidirectional attribute translation between a strongly typed cluster
//! data model and a topic-addressed JSON representation.
//!
//! The local side speaks numeric endpoint/cluster/attribute identities and
//! typed values; the external side speaks topic strings and loosely typed
//! JSON with a desired/reported convention per attribute. The bridge owns
//! the translation and nothing else:
//!
//! * [`cluster`] holds the static schema tables and the registry.
//! * [`codec`] converts values in both directions, driven by the schema.
//! * [`bridge`] wires per-cluster handlers to a shared store, publisher
//!   and node map, and routes inbound reports.
//! * [`store`] and [`publish`] are the seams the embedding node
//!   implementation plugs its cache and transport into.
//!
//! Writes never touch the store; they are published as desired values and
//! take effect only when the device side reports back.

#[macro_use]
extern crate num_derive;

pub mod bridge;
pub mod cluster;
pub mod codec;
pub mod config;
pub mod constants;
pub mod data_model;
pub mod error;
pub mod publish;
pub mod store;

pub use bridge::{
    AttributeBridge, BridgeContext, ClusterHandler, ReportDispatcher, ReportEvent, WriteOutcome,
};
pub use config::BridgeConfig;
pub use data_model::{
    AttributeId, AttributePath, AttributeUpdate, AttributeValue, BridgedEndpoint, ClusterId,
    EndpointId, NodeMap, StaticNodeMap,
};
pub use error::{BridgeError, DecodeError, EncodeError, PublishError};
pub use publish::{AttributeTopic, Publisher, TopicKind, ValuePayload};
pub use store::{AttributeStore, MemoryAttributeStore};
