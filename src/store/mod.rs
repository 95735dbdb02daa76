//! Local attribute cache.

use async_trait::async_trait;

use crate::data_model::{AttributePath, AttributeValue};

pub mod memory;

pub use memory::MemoryAttributeStore;

/// The local attribute cache the bridge reads from and applies reports to.
///
/// Absence is a first-class state: an attribute nobody has reported yet has
/// no entry, and a cleared retained report removes the entry again.
#[async_trait]
pub trait AttributeStore: Send + Sync {
    async fn get(&self, path: AttributePath) -> Option<AttributeValue>;

    async fn set(&self, path: AttributePath, value: AttributeValue);

    async fn remove(&self, path: AttributePath);
}
