pub mod get_authenticated_iggy_client;
pub mod publish_matches;

pub use publish_matches::publish_matches;
