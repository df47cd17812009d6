use anyhow::Context;
use redis_advisor::{
    client::RedisClient, config::AdvisorConfig, recommendations::RecommendationProvider,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout only carries the report.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = AdvisorConfig::new(std::env::args()).context("invalid command line")?;

    let mut client = RedisClient::connect(&config)
        .await
        .with_context(|| format!("failed to connect to {}", config.address()))?;

    let report = RecommendationProvider::new()
        .determine_recommendations(&mut client, config.section.as_deref())
        .await
        .context("failed to evaluate recommendations")?;

    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
