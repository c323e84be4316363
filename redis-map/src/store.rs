//! The connection seam between the map and the server holding its data.

use std::collections::HashSet;

use async_trait::async_trait;

use crate::error::Result;

/// The store primitives a [`RedisMap`](crate::RedisMap) is built from.
///
/// Each method corresponds to a single Redis command. Implementations must
/// already be connected; the map never opens, retries or closes anything.
#[async_trait]
pub trait Store: Send + Sync {
    /// `DBSIZE`: number of keys in the selected database.
    async fn db_size(&self) -> Result<u64>;

    /// `GET key`
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// `SET key value GET`: stores `value` and returns what was there before.
    async fn set_get(&self, key: &str, value: &str) -> Result<Option<String>>;

    /// `GETDEL key`: deletes `key` and returns its last value.
    async fn get_del(&self, key: &str) -> Result<Option<String>>;

    /// `FLUSHDB`: drops every key in the selected database.
    async fn flush_db(&self) -> Result<()>;

    /// `KEYS *`: every key in the selected database.
    async fn keys(&self) -> Result<HashSet<String>>;
}
