//! Map operations translated one-to-one onto store commands.

use std::collections::HashSet;

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::lookup::Lookup;
use crate::remote::{RedisStore, ServerAddr};
use crate::store::Store;

/// The operations of a `String` to `String` map whose contents live
/// elsewhere.
///
/// Every method that returns a future performs its work on the store and
/// resolves once the store has answered. Operations that would need every
/// value in the store (`contains_value`, `values`, `entries`) are refused
/// with [`Error::Unsupported`].
#[async_trait]
pub trait StringMap {
    /// Number of keys in the store, including keys this map never wrote.
    async fn len(&self) -> Result<u64>;

    async fn is_empty(&self) -> Result<bool> {
        Ok(self.len().await? == 0)
    }

    /// Whether `key` has a value. Non-text keys are never contained.
    async fn contains_key<Q>(&self, key: &Q) -> Result<bool>
    where
        Q: Lookup + Sync + ?Sized;

    /// The value stored under `key`, or `None` if there is none or `key`
    /// is not text.
    async fn get<Q>(&self, key: &Q) -> Result<Option<String>>
    where
        Q: Lookup + Sync + ?Sized;

    /// Stores `value` under `key`, returning the previous value.
    async fn insert(&self, key: &str, value: &str) -> Result<Option<String>>;

    /// Deletes `key`, returning its previous value. Non-text keys are a
    /// no-op.
    async fn remove<Q>(&self, key: &Q) -> Result<Option<String>>
    where
        Q: Lookup + Sync + ?Sized;

    /// Inserts every entry in iteration order.
    ///
    /// Not atomic: the first failure is returned immediately, leaving the
    /// entries before it written and the ones after it untouched.
    async fn insert_all<I, K, V>(&self, entries: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)> + Send,
        I::IntoIter: Send,
        K: AsRef<str> + Send + Sync,
        V: AsRef<str> + Send + Sync,
    {
        for (key, value) in entries {
            self.insert(key.as_ref(), value.as_ref()).await?;
        }
        Ok(())
    }

    /// Removes every key in the store's selected database.
    async fn clear(&self) -> Result<()>;

    /// Every key in the store.
    async fn keys(&self) -> Result<HashSet<String>>;

    /// Always fails with [`Error::Unsupported`].
    fn contains_value<V>(&self, _value: &V) -> Result<bool>
    where
        V: ?Sized,
    {
        Err(Error::unsupported("contains_value"))
    }

    /// Always fails with [`Error::Unsupported`].
    fn values(&self) -> Result<Vec<String>> {
        Err(Error::unsupported("values"))
    }

    /// Always fails with [`Error::Unsupported`].
    fn entries(&self) -> Result<Vec<(String, String)>> {
        Err(Error::unsupported("entries"))
    }
}

/// A `String` to `String` map stored in Redis.
///
/// `RedisMap` holds nothing but its store handle. Each call issues a single
/// command (`insert_all` issues one per entry) and hands any store error
/// straight back to the caller; there is no caching, batching or retrying.
///
/// # Clearing
///
/// [`clear`](StringMap::clear) runs `FLUSHDB`. It deletes *every* key in the
/// selected logical database, not only the keys written through this map.
/// Point the map at a database of its own if anything else lives on the
/// server.
///
/// # Example
///
/// ```no_run
/// use redis_map::{RedisMap, StringMap};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let map = RedisMap::connect("localhost:6379").await?;
///
///     assert_eq!(map.insert("greeting", "hello").await?, None);
///     assert_eq!(map.get("greeting").await?, Some("hello".to_string()));
///
///     assert_eq!(map.remove("greeting").await?, Some("hello".to_string()));
///     assert_eq!(map.get("greeting").await?, None);
///
///     Ok(())
/// }
/// ```
pub struct RedisMap<S = RedisStore> {
    store: S,
}

impl RedisMap<RedisStore> {
    /// Connects to a Redis server and wraps the connection in a map.
    ///
    /// # Arguments
    ///
    /// * `addr` - Server address (e.g., `"localhost:6379"` or `"redis://localhost:6379/1"`)
    pub async fn connect(addr: impl Into<ServerAddr>) -> Result<Self> {
        Ok(Self::new(RedisStore::connect(addr).await?))
    }
}

impl<S: Store> RedisMap<S> {
    /// Wraps an already connected store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }
}

#[async_trait]
impl<S: Store> StringMap for RedisMap<S> {
    async fn len(&self) -> Result<u64> {
        self.store.db_size().await
    }

    async fn contains_key<Q>(&self, key: &Q) -> Result<bool>
    where
        Q: Lookup + Sync + ?Sized,
    {
        Ok(self.get(key).await?.is_some())
    }

    async fn get<Q>(&self, key: &Q) -> Result<Option<String>>
    where
        Q: Lookup + Sync + ?Sized,
    {
        match key.as_key() {
            Some(key) => self.store.get(key).await,
            None => Ok(None),
        }
    }

    async fn insert(&self, key: &str, value: &str) -> Result<Option<String>> {
        self.store.set_get(key, value).await
    }

    async fn remove<Q>(&self, key: &Q) -> Result<Option<String>>
    where
        Q: Lookup + Sync + ?Sized,
    {
        match key.as_key() {
            Some(key) => self.store.get_del(key).await,
            None => Ok(None),
        }
    }

    async fn clear(&self) -> Result<()> {
        tracing::warn!("flushing every key in the selected database");
        self.store.flush_db().await
    }

    async fn keys(&self) -> Result<HashSet<String>> {
        self.store.keys().await
    }
}
