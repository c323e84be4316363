//! A string-to-string map backed by a Redis database.
//!
//! `redis-map` provides [`RedisMap`], which implements the [`StringMap`]
//! operations by sending one Redis command per call. Nothing is cached
//! locally: the server is the only copy of the data.
//!
//! # Features
//!
//! - `GET`, `SET .. GET`, `GETDEL`, `DBSIZE`, `KEYS *` and `FLUSHDB` behind
//!   familiar map operations
//! - Lookups with non-text keys answer "absent" without a round trip
//! - Value and entry enumeration are refused with [`Error::Unsupported`]
//!   instead of downloading the whole database
//! - [`MemoryStore`] for running the same code without a server
//!
//! `clear` flushes the whole selected database, not just keys written through
//! the map. See [`RedisMap`].
//!
//! # Example
//!
//! ```no_run
//! use redis_map::{RedisMap, StringMap};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let map = RedisMap::connect("localhost:6379").await?;
//!
//!     map.insert("1", "one").await?;
//!     let value = map.get("1").await?;
//!
//!     map.remove("1").await?;
//!     Ok(())
//! }
//! ```

mod error;
mod lookup;
mod map;
mod memory;
mod remote;
mod store;

pub use error::{Error, Result};
pub use lookup::Lookup;
pub use map::{RedisMap, StringMap};
pub use memory::MemoryStore;
pub use remote::{RedisStore, ServerAddr};
pub use store::Store;
