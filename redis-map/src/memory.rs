//! In-process store with the same command semantics as Redis.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::Result;
use crate::store::Store;

/// A [`Store`] holding its keys in a local hash map.
///
/// Useful for tests and for running code written against
/// [`StringMap`](crate::StringMap) without a server. It never fails.
pub struct MemoryStore {
    inner: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn db_size(&self) -> Result<u64> {
        Ok(self.inner.read().await.len() as u64)
    }

    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.inner.read().await.get(key).cloned())
    }

    async fn set_get(&self, key: &str, value: &str) -> Result<Option<String>> {
        let mut guard = self.inner.write().await;
        Ok(guard.insert(key.to_string(), value.to_string()))
    }

    async fn get_del(&self, key: &str) -> Result<Option<String>> {
        Ok(self.inner.write().await.remove(key))
    }

    async fn flush_db(&self) -> Result<()> {
        self.inner.write().await.clear();
        Ok(())
    }

    async fn keys(&self) -> Result<HashSet<String>> {
        Ok(self.inner.read().await.keys().cloned().collect())
    }
}
