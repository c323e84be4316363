//! [`Store`] implementation talking to a Redis server.

use std::collections::HashSet;

use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::{Client, ConnectionInfo, IntoConnectionInfo};

use crate::error::Result;
use crate::store::Store;

const URL_SCHEMES: [&str; 4] = ["redis://", "rediss://", "unix://", "redis+unix://"];

/// A Redis store reached through a multiplexed connection.
///
/// The connection is cloned for every command, so a single `RedisStore` can
/// be shared freely between tasks.
#[derive(Clone)]
pub struct RedisStore {
    conn: MultiplexedConnection,
}

impl RedisStore {
    /// Connects to the Redis server at `addr`.
    ///
    /// # Arguments
    ///
    /// * `addr` - `host:port` or a full Redis URL (e.g. `"redis://localhost:6379/0"`)
    pub async fn connect(addr: impl Into<ServerAddr>) -> Result<Self> {
        let client = Client::open(addr.into().connection_info()?)?;
        let info = client.get_connection_info();
        tracing::debug!(addr = %info.addr, db = info.redis.db, "connecting to redis");

        let conn = client.get_multiplexed_async_connection().await?;
        Ok(Self::new(conn))
    }

    /// Wraps an already established connection.
    pub fn new(conn: MultiplexedConnection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl Store for RedisStore {
    async fn db_size(&self) -> Result<u64> {
        let mut conn = self.conn.clone();
        let size: u64 = redis::cmd("DBSIZE").query_async(&mut conn).await?;
        Ok(size)
    }

    async fn get(&self, key: &str) -> Result<Option<String>> {
        tracing::trace!(key, "GET");
        let mut conn = self.conn.clone();
        let value: Option<String> = redis::cmd("GET").arg(key).query_async(&mut conn).await?;
        Ok(value)
    }

    async fn set_get(&self, key: &str, value: &str) -> Result<Option<String>> {
        tracing::trace!(key, "SET GET");
        let mut conn = self.conn.clone();
        let previous: Option<String> = redis::cmd("SET")
            .arg(key)
            .arg(value)
            .arg("GET")
            .query_async(&mut conn)
            .await?;
        Ok(previous)
    }

    async fn get_del(&self, key: &str) -> Result<Option<String>> {
        tracing::trace!(key, "GETDEL");
        let mut conn = self.conn.clone();
        let previous: Option<String> = redis::cmd("GETDEL").arg(key).query_async(&mut conn).await?;
        Ok(previous)
    }

    async fn flush_db(&self) -> Result<()> {
        let mut conn = self.conn.clone();
        let _: () = redis::cmd("FLUSHDB").query_async(&mut conn).await?;
        Ok(())
    }

    async fn keys(&self) -> Result<HashSet<String>> {
        tracing::trace!("KEYS *");
        let mut conn = self.conn.clone();
        let keys: HashSet<String> = redis::cmd("KEYS").arg("*").query_async(&mut conn).await?;
        Ok(keys)
    }
}

/// Redis server address.
///
/// Either a bare `host:port` or a full URL. The logical database is the URL
/// path (`redis://host:6379/2`), the `db` query parameter of a unix socket
/// URL, or [`with_database`](Self::with_database); it defaults to 0.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerAddr {
    addr: String,
    database: Option<i64>,
}

impl ServerAddr {
    /// Selects logical database `db`, overriding any database named in the
    /// address itself.
    pub fn with_database(mut self, db: i64) -> Self {
        self.database = Some(db);
        self
    }

    /// The address as a URL understood by the redis client.
    pub fn url(&self) -> String {
        if URL_SCHEMES.iter().any(|scheme| self.addr.starts_with(scheme)) {
            self.addr.clone()
        } else {
            format!("redis://{}", self.addr)
        }
    }

    /// Parses the address into the client's connection settings.
    pub fn connection_info(&self) -> Result<ConnectionInfo> {
        let mut info = self.url().into_connection_info()?;
        if let Some(db) = self.database {
            info.redis.db = db;
        }
        Ok(info)
    }
}

impl From<String> for ServerAddr {
    fn from(addr: String) -> Self {
        Self {
            addr,
            database: None,
        }
    }
}

impl From<&str> for ServerAddr {
    fn from(addr: &str) -> Self {
        Self::from(addr.to_string())
    }
}

#[cfg(test)]
mod tests {
    use redis::{ConnectionAddr, ProtocolVersion};

    use super::*;

    #[test]
    fn bare_host_port_gets_redis_scheme() {
        assert_eq!(ServerAddr::from("localhost:6379").url(), "redis://localhost:6379");

        let info = ServerAddr::from("localhost:6379").connection_info().unwrap();
        assert_eq!(info.addr, ConnectionAddr::Tcp("localhost".to_string(), 6379));
        assert_eq!(info.redis.db, 0);
    }

    #[test]
    fn full_urls_pass_through() {
        let addr = ServerAddr::from("rediss://user:pw@cache.internal:6380/3");
        assert_eq!(addr.url(), "rediss://user:pw@cache.internal:6380/3");
        assert_eq!(addr.connection_info().unwrap().redis.db, 3);
    }

    #[test]
    fn with_database_overrides_path() {
        let info = ServerAddr::from("redis://localhost:6379/3")
            .with_database(7)
            .connection_info()
            .unwrap();
        assert_eq!(info.redis.db, 7);

        let info = ServerAddr::from("localhost:6379")
            .with_database(1)
            .connection_info()
            .unwrap();
        assert_eq!(info.redis.db, 1);
    }

    #[test]
    fn with_database_keeps_query_parameters() {
        let info = ServerAddr::from("redis://localhost:6379?protocol=resp3")
            .with_database(2)
            .connection_info()
            .unwrap();
        assert_eq!(info.addr, ConnectionAddr::Tcp("localhost".to_string(), 6379));
        assert_eq!(info.redis.db, 2);
        assert_eq!(info.redis.protocol, ProtocolVersion::RESP3);
    }

    #[cfg(unix)]
    #[test]
    fn with_database_on_unix_socket_keeps_password() {
        let info = ServerAddr::from("unix:///tmp/r.sock?pass=secret&db=1")
            .with_database(2)
            .connection_info()
            .unwrap();
        assert_eq!(info.addr, ConnectionAddr::Unix("/tmp/r.sock".into()));
        assert_eq!(info.redis.db, 2);
        assert_eq!(info.redis.password.as_deref(), Some("secret"));
    }

    #[test]
    fn malformed_address_is_an_error() {
        let err = ServerAddr::from("redis://localhost:notaport").connection_info().unwrap_err();
        assert!(matches!(err, crate::Error::Redis(_)));
    }
}
