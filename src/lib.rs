//! Recommendations for a running Redis node, computed from its `INFO` reply.
//!
//! The crate connects to a Redis-compatible server, issues `INFO`, parses the
//! text reply into a section/field mapping and evaluates threshold rules
//! against it:
//!
//! - Lua script cache size (`memory.number_of_cached_scripts`)
//! - Number of connected clients (`clients.connected_clients`)
//! - Keys spread over several logical databases (`keyspace.dbN`)
//! - Outdated server version (`server.redis_version`)
//!
//! Talking to the server uses the Redis Serialization Protocol (RESP) over a
//! single Tokio TCP connection.

pub mod client;
pub mod config;
pub mod info;
pub mod input;
pub mod recommendations;
pub mod resp;
