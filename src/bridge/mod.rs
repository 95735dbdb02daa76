//! Bridge assembly: handlers, dispatcher and their shared context.

pub mod dispatcher;
pub mod handler;

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;
use tokio::sync::mpsc;

use crate::cluster::names::{RegistryNames, SchemaNames};
use crate::cluster::ClusterRegistry;
use crate::config::BridgeConfig;
use crate::data_model::{AttributePath, AttributeUpdate, ClusterId, NodeMap};
use crate::error::BridgeError;
use crate::publish::Publisher;
use crate::store::AttributeStore;

pub use dispatcher::{ReportDispatcher, ReportEvent};
pub use handler::{ClusterHandler, WriteOutcome};

/// Collaborators shared by every handler.
///
/// All of them are owned by the embedding node implementation and injected
/// at construction; the bridge never creates its own.
pub struct BridgeContext {
    pub store: Arc<dyn AttributeStore>,
    pub publisher: Arc<dyn Publisher>,
    pub nodes: Arc<dyn NodeMap>,
    pub names: Arc<dyn SchemaNames>,
    pub(crate) updates: mpsc::Sender<AttributeUpdate>,
}

/// The attribute translation bridge: one handler per registered cluster and
/// the report dispatcher, all sharing one context.
pub struct AttributeBridge {
    config: BridgeConfig,
    handlers: HashMap<ClusterId, ClusterHandler>,
    dispatcher: ReportDispatcher,
}

impl AttributeBridge {
    /// Builds a bridge over `registry`. Returns the receiving end of the
    /// attribute-update channel; successfully applied reports land there.
    pub fn new(
        config: BridgeConfig,
        registry: &'static ClusterRegistry,
        store: Arc<dyn AttributeStore>,
        publisher: Arc<dyn Publisher>,
        nodes: Arc<dyn NodeMap>,
        names: Arc<dyn SchemaNames>,
    ) -> (Self, mpsc::Receiver<AttributeUpdate>) {
        let (updates, receiver) = mpsc::channel(config.update_queue_depth);
        let ctx = Arc::new(BridgeContext {
            store,
            publisher,
            nodes,
            names,
            updates,
        });
        let mut handlers = HashMap::new();
        let mut routes = HashMap::new();
        for cluster in registry.clusters() {
            let handler = ClusterHandler::new(cluster, ctx.clone());
            routes.insert(cluster.name, handler.clone());
            handlers.insert(cluster.id, handler);
        }
        let dispatcher = ReportDispatcher::new(ctx, routes);
        (
            Self {
                config,
                handlers,
                dispatcher,
            },
            receiver,
        )
    }

    /// Bridge over the built-in cluster set with registry-backed name
    /// resolution.
    pub fn with_builtin_schema(
        config: BridgeConfig,
        store: Arc<dyn AttributeStore>,
        publisher: Arc<dyn Publisher>,
        nodes: Arc<dyn NodeMap>,
    ) -> (Self, mpsc::Receiver<AttributeUpdate>) {
        let registry = crate::cluster::default_registry();
        let names = Arc::new(RegistryNames::new(registry));
        Self::new(config, registry, store, publisher, nodes, names)
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    pub fn handler(&self, cluster: ClusterId) -> Option<&ClusterHandler> {
        self.handlers.get(&cluster)
    }

    pub fn dispatcher(&self) -> &ReportDispatcher {
        &self.dispatcher
    }

    /// Routes a read to the handler owning `path`'s cluster.
    pub async fn read(&self, path: AttributePath) -> Result<Value, BridgeError> {
        self.handler(path.cluster)
            .ok_or(BridgeError::UnknownCluster(path.cluster))?
            .read(path)
            .await
    }

    /// Routes a write to the handler owning `path`'s cluster.
    pub async fn write(&self, path: AttributePath, payload: Value) -> Result<WriteOutcome, BridgeError> {
        self.handler(path.cluster)
            .ok_or(BridgeError::UnknownCluster(path.cluster))?
            .write(path, payload)
            .await
    }
}
