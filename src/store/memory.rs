//! In-memory attribute cache.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::data_model::{AttributePath, AttributeValue};

use super::AttributeStore;

/// Hash map behind a read/write lock. Each operation takes the lock once,
/// so a reader racing a writer sees the previous or the new value, never a
/// torn one.
#[derive(Debug, Default)]
pub struct MemoryAttributeStore {
    entries: RwLock<HashMap<AttributePath, AttributeValue>>,
}

impl MemoryAttributeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl AttributeStore for MemoryAttributeStore {
    async fn get(&self, path: AttributePath) -> Option<AttributeValue> {
        self.entries.read().await.get(&path).cloned()
    }

    async fn set(&self, path: AttributePath, value: AttributeValue) {
        self.entries.write().await.insert(path, value);
    }

    async fn remove(&self, path: AttributePath) {
        self.entries.write().await.remove(&path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(attribute: u16) -> AttributePath {
        AttributePath::new(1, 0x0006, attribute)
    }

    #[tokio::test]
    async fn set_get_remove() {
        let store = MemoryAttributeStore::new();
        assert!(store.is_empty().await);
        assert_eq!(store.get(path(0)).await, None);

        store.set(path(0), AttributeValue::Boolean(true)).await;
        assert_eq!(store.get(path(0)).await, Some(AttributeValue::Boolean(true)));

        store.set(path(0), AttributeValue::Boolean(false)).await;
        assert_eq!(store.get(path(0)).await, Some(AttributeValue::Boolean(false)));
        assert_eq!(store.len().await, 1);

        store.remove(path(0)).await;
        assert_eq!(store.get(path(0)).await, None);
    }

    #[tokio::test]
    async fn paths_are_isolated() {
        let store = MemoryAttributeStore::new();
        store.set(path(0), AttributeValue::U16(7)).await;
        store.set(path(1), AttributeValue::U16(9)).await;
        store.remove(path(1)).await;
        assert_eq!(store.get(path(0)).await, Some(AttributeValue::U16(7)));
    }
}
