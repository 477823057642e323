use crate::config::MessagingConfig;
use anyhow::{anyhow, Result as AnyhowResult};
use iggy::client::Client;
use iggy::client::UserClient;
use iggy::clients::builder::IggyClientBuilder;
use iggy::clients::client::IggyClient;
use tracing::{error, info};

pub async fn get_authenticated_iggy_client(config: &MessagingConfig) -> AnyhowResult<IggyClient> {
    let client = IggyClientBuilder::new()
        .with_tcp()
        .with_server_address(config.address.clone())
        .build()
        .map_err(|e| anyhow!("Failed to build Iggy client: {}", e))?;

    if let Err(e) = client.connect().await {
        error!("Failed to connect to Iggy server at {}: {}", config.address, e);
        return Err(anyhow!("Connection failed: {}", e));
    }

    client
        .login_user(&config.username, &config.password)
        .await
        .map_err(|e| anyhow!("Login failed: {}", e))?;

    info!("Logged in to Iggy at {}", config.address);
    Ok(client)
}
