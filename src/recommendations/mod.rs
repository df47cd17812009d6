mod connected_clients;
mod logical_databases;
mod lua_script;
mod recommendation_provider;
mod redis_version;

use serde::Serialize;

pub use connected_clients::{connected_clients, BIG_AMOUNT_OF_CONNECTED_CLIENTS};
pub use logical_databases::logical_databases;
pub use lua_script::{lua_script, MIN_NUMBER_OF_CACHED_SCRIPTS};
pub use recommendation_provider::{RecommendationProvider, RecommendationReport};
pub use redis_version::{redis_version, MIN_RECOMMENDED_REDIS_MAJOR_VERSION};

/// Identifies a rule; serialized as the camelCase tag the UI keys on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RecommendationName {
    LuaScript,
    BigAmountOfConnectedClients,
    AvoidLogicalDatabases,
    RedisVersion,
}

impl RecommendationName {
    /// The `INFO` section a rule reads its fields from.
    pub fn section(&self) -> &'static str {
        match self {
            RecommendationName::LuaScript => "memory",
            RecommendationName::BigAmountOfConnectedClients => "clients",
            RecommendationName::AvoidLogicalDatabases => "keyspace",
            RecommendationName::RedisVersion => "server",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationResult {
    pub name: RecommendationName,
    pub triggered: bool,
}

impl RecommendationResult {
    pub fn new(name: RecommendationName, triggered: bool) -> Self {
        RecommendationResult { name, triggered }
    }
}
