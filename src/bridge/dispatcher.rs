//! Routing of inbound reported updates.

use std::collections::HashMap;
use std::sync::Arc;

use futures_util::{Stream, StreamExt};
use serde_json::Value;
use tokio::sync::{Mutex, OwnedMutexGuard};
use tracing::trace;

use crate::data_model::EndpointId;
use crate::publish::{AttributeTopic, TopicKind};

use super::{BridgeContext, ClusterHandler};

/// One reported-value message from the external transport, already split
/// into its address parts.
#[derive(Debug, Clone)]
pub struct ReportEvent {
    pub device: String,
    pub endpoint: String,
    pub cluster: String,
    pub attribute: String,
    /// The wrapped payload, or JSON null for a cleared retained topic.
    pub payload: Value,
}

impl ReportEvent {
    /// Builds an event from a parsed attribute topic. Desired topics are
    /// outbound traffic and yield `None`.
    pub fn from_topic(topic: AttributeTopic, payload: Value) -> Option<Self> {
        match topic.kind {
            TopicKind::Reported => Some(Self {
                device: topic.device,
                endpoint: topic.endpoint,
                cluster: topic.cluster,
                attribute: topic.attribute,
                payload,
            }),
            TopicKind::Desired => None,
        }
    }
}

/// Routes reports to the handler registered for their cluster name.
///
/// Reports for endpoints this bridge does not own and for cluster names it
/// does not route are multiplexing noise and are dropped. Applications for
/// one endpoint run under a FIFO lock, so concurrent dispatchers cannot
/// interleave them; [`ReportDispatcher::run`] additionally preserves the
/// transport's delivery order by dispatching sequentially.
pub struct ReportDispatcher {
    ctx: Arc<BridgeContext>,
    routes: HashMap<&'static str, ClusterHandler>,
    locks: EndpointLocks,
}

impl ReportDispatcher {
    pub(crate) fn new(ctx: Arc<BridgeContext>, routes: HashMap<&'static str, ClusterHandler>) -> Self {
        Self {
            ctx,
            routes,
            locks: EndpointLocks::default(),
        }
    }

    pub async fn dispatch(&self, event: ReportEvent) {
        let Some(endpoint) = self.ctx.nodes.local_endpoint(&event.device, &event.endpoint) else {
            trace!(device = %event.device, endpoint = %event.endpoint, "report for unbridged endpoint dropped");
            return;
        };
        let Some(handler) = self.routes.get(event.cluster.as_str()) else {
            trace!(cluster = %event.cluster, "report for unrouted cluster dropped");
            return;
        };
        let _guard = self.locks.acquire(endpoint).await;
        handler
            .apply_report(endpoint, &event.cluster, &event.attribute, event.payload)
            .await;
    }

    /// Drains `events` until the stream ends, applying them in order. This
    /// is the pump an embedding transport task runs.
    pub async fn run<S>(&self, mut events: S)
    where
        S: Stream<Item = ReportEvent> + Unpin,
    {
        while let Some(event) = events.next().await {
            self.dispatch(event).await;
        }
    }
}

/// One FIFO mutex per endpoint, created on first use.
#[derive(Default)]
struct EndpointLocks {
    inner: Mutex<HashMap<EndpointId, Arc<Mutex<()>>>>,
}

impl EndpointLocks {
    async fn acquire(&self, endpoint: EndpointId) -> OwnedMutexGuard<()> {
        let lock = {
            let mut map = self.inner.lock().await;
            map.entry(endpoint).or_default().clone()
        };
        lock.lock_owned().await
    }
}
