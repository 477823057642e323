use anyhow::{anyhow, Result as AnyhowResult};
use matchai::{match_participants, parse_args, Config, Directory, MatchRecord, MatchingService};
use serde_json::json;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_tracing(debug: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if debug { "debug" } else { "info" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> AnyhowResult<()> {
    let args = parse_args();
    init_tracing(args.debug);

    let config = Config::load_or_default(&args.config)?;
    let directory = Directory::load_from_json(&args.profiles)?;

    if args.server {
        return run_server(config, directory).await;
    }

    let user_id = args
        .user
        .as_deref()
        .ok_or_else(|| anyhow!("--user is required outside server mode"))?;
    let user = directory.profile(user_id)?.clone();
    let matcher = Arc::new(MatchingService::from_config(&config));

    if args.insights {
        let (summary, enhanced, insights) = tokio::join!(
            matcher.profile_summary(&user),
            matcher.enhanced_profile_summary(&user),
            matcher.networking_insights(&user),
        );
        let output = json!({
            "summary": summary,
            "enhancedSummary": enhanced,
            "insights": insights,
            "aiConfigured": matcher.is_ai_configured(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let event_id = args
        .event
        .as_deref()
        .ok_or_else(|| anyhow!("--event is required to generate matches"))?;
    let candidates = directory.event_candidates(event_id, user_id)?;
    info!(
        "Matching user {} against {} participants of event {}",
        user_id,
        candidates.len(),
        event_id
    );

    let records = match_participants(
        matcher,
        &user,
        candidates,
        event_id,
        config.batch.concurrency,
    )
    .await;
    println!("{}", serde_json::to_string_pretty(&records)?);

    if args.publish {
        publish(&config, &records).await?;
    }
    Ok(())
}

#[cfg(feature = "grpc")]
async fn run_server(config: Config, directory: Directory) -> AnyhowResult<()> {
    matchai::start_grpc_server(Arc::new(config), directory)
        .await
        .map_err(|e| anyhow!("gRPC server failed: {}", e))
}

#[cfg(not(feature = "grpc"))]
async fn run_server(_config: Config, _directory: Directory) -> AnyhowResult<()> {
    Err(anyhow!("matchai was built without the `grpc` feature"))
}

#[cfg(feature = "messaging")]
async fn publish(config: &Config, records: &[MatchRecord]) -> AnyhowResult<()> {
    matchai::publish_matches(&config.messaging, records).await
}

#[cfg(not(feature = "messaging"))]
async fn publish(_config: &Config, _records: &[MatchRecord]) -> AnyhowResult<()> {
    Err(anyhow!("matchai was built without the `messaging` feature"))
}
