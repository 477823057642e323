pub mod adapter;
mod cli;
mod config;
mod constants;
mod directory;
pub mod engine;
mod error;
#[cfg(feature = "grpc")]
mod grpc;
mod matching;
#[cfg(feature = "messaging")]
mod messaging;
mod profile;

#[cfg(test)]
mod tests;

pub use adapter::{CompletionProvider, MatchingService};
pub use cli::{parse_args, Args};
pub use config::{AiConfig, BatchConfig, Config, MessagingConfig, ServerConfig};
pub use constants::*;
pub use directory::Directory;
pub use engine::{CompatibilityResult, MatchPolicy, Normalization, ProfileSummary, SkillsMode};
pub use error::{AdapterError, DirectoryError, FallbackReason};
#[cfg(feature = "grpc")]
pub use grpc::start_grpc_server::start_grpc_server;
pub use matching::{analyze_candidates, match_participants, CandidateAnalysis, CompatibilityFactors, MatchRecord};
#[cfg(feature = "messaging")]
pub use messaging::publish_matches;
pub use profile::{ExperienceLevel, Profile};
