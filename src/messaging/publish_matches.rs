use super::get_authenticated_iggy_client::get_authenticated_iggy_client;
use crate::config::MessagingConfig;
use crate::matching::MatchRecord;
use anyhow::Result as AnyhowResult;
use iggy::messages::send_messages::Message;
use std::str::FromStr;
use tracing::info;

/// Publishes one JSON message per match record for the persistence side.
pub async fn publish_matches(config: &MessagingConfig, records: &[MatchRecord]) -> AnyhowResult<()> {
    if records.is_empty() {
        info!("No match records to publish");
        return Ok(());
    }

    let client = get_authenticated_iggy_client(config).await?;
    let mut producer = client.producer(&config.stream, &config.topic)?.build();
    producer.init().await?;

    let messages = records
        .iter()
        .map(|record| {
            let payload = serde_json::to_string(record)?;
            Ok(Message::from_str(&payload)?)
        })
        .collect::<AnyhowResult<Vec<_>>>()?;

    producer.send(messages).await?;

    info!(
        stream = %config.stream,
        topic = %config.topic,
        count = records.len(),
        "Published match records"
    );
    Ok(())
}
