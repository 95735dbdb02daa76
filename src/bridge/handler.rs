//! Per-cluster attribute access.

use std::sync::Arc;

use num::FromPrimitive;
use serde_json::{json, Value};
use tracing::{debug, trace, warn};

use crate::cluster::{AttributeDescriptor, Cluster, GlobalAttribute};
use crate::codec;
use crate::data_model::{AttributePath, AttributeUpdate, AttributeValue, EndpointId};
use crate::error::{BridgeError, DecodeError};
use crate::publish::ValuePayload;

use super::BridgeContext;

/// Outcome of a write request.
///
/// Writes to read-only, untranslated or unbridged targets are absorbed
/// rather than errored; the external convention treats them as requests
/// that simply have no taker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The desired value reached the publisher.
    Published,
    /// The request did not apply; nothing was published.
    NoEffect,
}

/// Translates one cluster between the local store and the external side.
///
/// A handler serves every endpoint that hosts its cluster; the endpoint
/// travels in the [`AttributePath`].
#[derive(Clone)]
pub struct ClusterHandler {
    cluster: &'static Cluster,
    ctx: Arc<BridgeContext>,
}

impl ClusterHandler {
    pub(crate) fn new(cluster: &'static Cluster, ctx: Arc<BridgeContext>) -> Self {
        Self { cluster, ctx }
    }

    pub fn cluster(&self) -> &'static Cluster {
        self.cluster
    }

    /// Reads the current value for `path` as a wrapped external payload.
    ///
    /// Cluster metadata (FeatureMap, ClusterRevision) is answered from the
    /// cluster definition; everything else comes from the store.
    pub async fn read(&self, path: AttributePath) -> Result<Value, BridgeError> {
        let descriptor = self.descriptor(path)?;
        let value = if descriptor.static_metadata {
            self.metadata_value(descriptor)?
        } else {
            self.ctx
                .store
                .get(path)
                .await
                .ok_or(BridgeError::NotFound(path))?
        };
        let encoded = codec::encode(&value, descriptor)?;
        Ok(json!({ "value": encoded }))
    }

    /// Forwards a write request as a desired-value publication.
    ///
    /// The store is left untouched on every path through here; the
    /// authoritative change arrives, if at all, as a later report.
    pub async fn write(&self, path: AttributePath, payload: Value) -> Result<WriteOutcome, BridgeError> {
        self.check_cluster(path)?;
        let Some(descriptor) = self.cluster.attribute(path.attribute) else {
            trace!(%path, "write to unknown attribute absorbed");
            return Ok(WriteOutcome::NoEffect);
        };
        if !descriptor.supported || descriptor.static_metadata || !descriptor.writable {
            trace!(%path, attribute = descriptor.name, "write to read-only attribute absorbed");
            return Ok(WriteOutcome::NoEffect);
        }
        let value = decode_payload(payload, descriptor)?;
        let Some(endpoint) = self.ctx.nodes.bridged_endpoint(path.endpoint) else {
            debug!(%path, "write for unbridged endpoint absorbed");
            return Ok(WriteOutcome::NoEffect);
        };
        self.ctx
            .publisher
            .publish_desired(&endpoint, self.cluster.name, descriptor.name, value)
            .await?;
        Ok(WriteOutcome::Published)
    }

    /// Applies an externally reported value to the store and notifies the
    /// update channel.
    ///
    /// Reports arrive from an uncontrolled source, so nothing here is an
    /// error to the caller: unresolvable names, stale schema and malformed
    /// payloads are logged and dropped.
    pub async fn apply_report(
        &self,
        endpoint: EndpointId,
        cluster: &str,
        attribute: &str,
        payload: Value,
    ) {
        let Some(cluster_id) = self.ctx.names.cluster_id(cluster) else {
            trace!(cluster, "report for unknown cluster name dropped");
            return;
        };
        if cluster_id != self.cluster.id {
            trace!(cluster, "report does not belong to this cluster, dropped");
            return;
        }
        let Some(attribute_id) = self.ctx.names.attribute_id(cluster_id, attribute) else {
            trace!(cluster, attribute, "report for unknown attribute name dropped");
            return;
        };
        let Some(descriptor) = self.cluster.attribute(attribute_id) else {
            return;
        };
        if !descriptor.supported {
            trace!(cluster, attribute, "report for untranslated attribute dropped");
            return;
        }
        if descriptor.static_metadata {
            trace!(cluster, attribute, "report against cluster metadata dropped");
            return;
        }
        let path = AttributePath::new(endpoint, cluster_id, attribute_id);
        if payload.is_null() {
            // A cleared retained topic: the value is gone, not null.
            self.ctx.store.remove(path).await;
            trace!(%path, "cleared report removed the cached value");
            return;
        }
        let value = match decode_payload(payload, descriptor) {
            Ok(value) => value,
            Err(error) => {
                debug!(%path, %error, "malformed report dropped");
                return;
            }
        };
        self.ctx.store.set(path, value.clone()).await;
        let update = AttributeUpdate { path, value };
        if self.ctx.updates.send(update).await.is_err() {
            warn!(%path, "update channel closed, notification lost");
        }
    }

    fn check_cluster(&self, path: AttributePath) -> Result<(), BridgeError> {
        if path.cluster != self.cluster.id {
            return Err(BridgeError::ClusterMismatch {
                path,
                expected: self.cluster.id,
            });
        }
        Ok(())
    }

    fn descriptor(&self, path: AttributePath) -> Result<&'static AttributeDescriptor, BridgeError> {
        self.check_cluster(path)?;
        match self.cluster.attribute(path.attribute) {
            Some(descriptor) if descriptor.supported => Ok(descriptor),
            _ => Err(BridgeError::UnsupportedAttribute {
                cluster: path.cluster,
                attribute: path.attribute,
            }),
        }
    }

    fn metadata_value(&self, descriptor: &AttributeDescriptor) -> Result<AttributeValue, BridgeError> {
        match GlobalAttribute::from_u16(descriptor.id) {
            Some(GlobalAttribute::FeatureMap) => Ok(AttributeValue::U32(self.cluster.features)),
            Some(GlobalAttribute::ClusterRevision) => Ok(AttributeValue::U16(self.cluster.revision)),
            None => Err(BridgeError::UnsupportedAttribute {
                cluster: self.cluster.id,
                attribute: descriptor.id,
            }),
        }
    }
}

/// Unwraps the `{"value": ...}` envelope and decodes the inner value.
fn decode_payload(payload: Value, descriptor: &AttributeDescriptor) -> Result<AttributeValue, BridgeError> {
    let found = codec::json_kind(&payload);
    let envelope: ValuePayload = serde_json::from_value(payload)
        .map_err(|_| DecodeError::mismatch("value envelope", found))?;
    Ok(codec::decode(&envelope.value, descriptor)?)
}
