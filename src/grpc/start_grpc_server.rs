use super::matchai::match_ai_server::MatchAiServer;
use super::MatchAiService;
use crate::adapter::MatchingService;
use crate::config::Config;
use crate::directory::Directory;

use std::sync::Arc;
use tonic::transport::Server;
use tonic_reflection::server::Builder as ReflectionBuilder;
use tracing::info;

pub async fn start_grpc_server(
    config: Arc<Config>,
    directory: Directory,
) -> Result<(), Box<dyn std::error::Error>> {
    let addr = config.server.address.parse()?;

    let matcher = Arc::new(MatchingService::from_config(&config));
    let service = MatchAiService::new(Arc::new(directory), matcher, config.batch.concurrency);

    let descriptor_set = include_bytes!(concat!(env!("OUT_DIR"), "/matchai_descriptor.bin"));
    let reflection_service = ReflectionBuilder::configure()
        .register_encoded_file_descriptor_set(descriptor_set)
        .build_v1()?;

    info!("Starting gRPC server on {}", addr);

    Server::builder()
        .add_service(MatchAiServer::new(service))
        .add_service(reflection_service)
        .serve(addr)
        .await?;

    info!("gRPC server has been shut down");
    Ok(())
}
