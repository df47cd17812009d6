use serde::Serialize;
use tracing::info;

use crate::client::RedisClient;
use crate::info::ParsedInfo;
use crate::input::ClientError;
use crate::recommendations::{
    connected_clients, logical_databases, lua_script, redis_version, RecommendationName,
    RecommendationResult,
};

/// Outcome of one evaluation run against a single node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationReport {
    pub address: String,
    pub recommendations: Vec<RecommendationResult>,
}

/// Evaluates recommendation rules against `INFO` snapshots.
///
/// Rules are pure functions of a [`ParsedInfo`]; the async methods only add the
/// `INFO` round-trip in front of them.
#[derive(Debug, Default)]
pub struct RecommendationProvider;

impl RecommendationProvider {
    pub fn new() -> Self {
        RecommendationProvider
    }

    /// Runs every rule, always in the same order.
    pub fn evaluate(&self, info: &ParsedInfo) -> Vec<RecommendationResult> {
        vec![
            RecommendationResult::new(RecommendationName::LuaScript, lua_script(info)),
            RecommendationResult::new(
                RecommendationName::BigAmountOfConnectedClients,
                connected_clients(info),
            ),
            RecommendationResult::new(
                RecommendationName::AvoidLogicalDatabases,
                logical_databases(info),
            ),
            RecommendationResult::new(RecommendationName::RedisVersion, redis_version(info)),
        ]
    }

    /// Runs the rules that can be answered by a reply to `INFO <section>`.
    ///
    /// Rules reading a section other than the requested one are left out of the
    /// result.
    ///
    /// # Arguments
    ///
    /// * `info` - The parsed reply
    /// * `section` - The section that was requested; `None`, `all`, `everything`
    ///   and `default` cover every rule
    pub fn evaluate_section(
        &self,
        info: &ParsedInfo,
        section: Option<&str>,
    ) -> Vec<RecommendationResult> {
        let section = section.map(str::to_lowercase);

        match section.as_deref() {
            None | Some("all") | Some("everything") | Some("default") => self.evaluate(info),
            Some(section) => self
                .evaluate(info)
                .into_iter()
                .filter(|result| result.name.section() == section)
                .collect(),
        }
    }

    pub async fn determine_lua_script_recommendation(
        &self,
        client: &mut RedisClient,
    ) -> Result<bool, ClientError> {
        let info = client.fetch_info(None).await?;
        Ok(lua_script(&info))
    }

    /// Fetches `INFO` (optionally a single section) and evaluates the rules that
    /// section covers.
    ///
    /// # Returns
    ///
    /// * `Ok(RecommendationReport)` - The node address and one result per evaluated rule
    /// * `Err(ClientError)` - If the `INFO` round-trip fails
    pub async fn determine_recommendations(
        &self,
        client: &mut RedisClient,
        section: Option<&str>,
    ) -> Result<RecommendationReport, ClientError> {
        let info = client.fetch_info(section).await?;
        let recommendations = self.evaluate_section(&info, section);

        let triggered = recommendations.iter().filter(|r| r.triggered).count();
        info!(
            address = client.address(),
            triggered,
            total = recommendations.len(),
            "evaluated recommendations"
        );

        Ok(RecommendationReport {
            address: client.address().to_string(),
            recommendations,
        })
    }
}
