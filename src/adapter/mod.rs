//! Boundary between the deterministic engine and the external AI capability.
//!
//! Every operation answers with the same shape whether the external call
//! succeeded or not. Failures are only visible in the logs.

pub mod gemini;
pub mod parse;
pub mod prompts;

use crate::config::Config;
use crate::constants::{INSIGHT_COUNT, STARTER_COUNT};
use crate::engine::{self, CompatibilityResult, MatchPolicy, ProfileSummary};
use crate::error::{AdapterError, FallbackReason};
use crate::profile::Profile;
use async_trait::async_trait;
use gemini::GeminiClient;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// A text-completion capability: prompt in, free text out.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    fn name(&self) -> &str;

    async fn complete(&self, prompt: &str) -> Result<String, AdapterError>;
}

pub struct MatchingService {
    provider: Option<Arc<dyn CompletionProvider>>,
    policy: MatchPolicy,
    timeout: Duration,
}

impl MatchingService {
    /// Service without an external provider: always deterministic.
    pub fn new(policy: MatchPolicy, timeout: Duration) -> Self {
        Self {
            provider: None,
            policy,
            timeout,
        }
    }

    pub fn with_provider(mut self, provider: Arc<dyn CompletionProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Wires a Gemini client when an API key is configured in the environment.
    pub fn from_config(config: &Config) -> Self {
        let service = Self::new(config.engine, config.ai.timeout());
        match config.ai.resolve_api_key() {
            Some(api_key) => {
                info!("Google AI configured, using model {}", config.ai.model);
                service.with_provider(Arc::new(GeminiClient::new(&config.ai, api_key)))
            }
            None => {
                warn!(
                    "Google AI API not configured, using fallback algorithms. Set one of {:?} to enable AI features",
                    config.ai.api_key_env
                );
                service
            }
        }
    }

    pub fn is_ai_configured(&self) -> bool {
        self.provider.is_some()
    }

    async fn complete(&self, prompt: String) -> Result<String, AdapterError> {
        let provider = self.provider.as_ref().ok_or(AdapterError::Unavailable)?;
        debug!("Requesting completion from {}", provider.name());
        match tokio::time::timeout(self.timeout, provider.complete(&prompt)).await {
            Ok(result) => result,
            Err(_) => Err(AdapterError::Timeout(self.timeout)),
        }
    }

    fn fall_back<T>(operation: &str, error: AdapterError, value: T) -> T {
        match FallbackReason::classify(&error) {
            FallbackReason::Unavailable => {
                debug!("Google AI not configured, using fallback {}", operation)
            }
            FallbackReason::Errored => {
                warn!("AI {} failed, using fallback: {}", operation, error)
            }
        }
        value
    }

    pub async fn analyze_compatibility(&self, a: &Profile, b: &Profile) -> CompatibilityResult {
        let a = a.clone().sanitized();
        let b = b.clone().sanitized();
        let fallback = engine::score(&a, &b, &self.policy);

        match self.try_compatibility(&a, &b, &fallback).await {
            Ok(result) => result,
            Err(e) => Self::fall_back("compatibility analysis", e, fallback),
        }
    }

    async fn try_compatibility(
        &self,
        a: &Profile,
        b: &Profile,
        fallback: &CompatibilityResult,
    ) -> Result<CompatibilityResult, AdapterError> {
        let text = self.complete(prompts::compatibility(a, b)).await?;
        parse::compatibility(&text, fallback)
    }

    pub async fn profile_summary(&self, profile: &Profile) -> String {
        let profile = profile.clone().sanitized();
        let outcome = match self.complete(prompts::profile_summary(&profile)).await {
            Ok(text) => parse::plain_summary(&text),
            Err(e) => Err(e),
        };
        outcome.unwrap_or_else(|e| {
            Self::fall_back("profile summary", e, engine::profile_summary(&profile))
        })
    }

    pub async fn enhanced_profile_summary(&self, profile: &Profile) -> ProfileSummary {
        let profile = profile.clone().sanitized();
        let fallback = engine::enhanced_summary(&profile);
        let outcome = match self.complete(prompts::enhanced_summary(&profile)).await {
            Ok(text) => parse::enhanced_summary(&text, &fallback),
            Err(e) => Err(e),
        };
        match outcome {
            Ok(summary) => summary,
            Err(e) => Self::fall_back("enhanced profile summary", e, fallback),
        }
    }

    pub async fn conversation_starters(
        &self,
        a: &Profile,
        b: &Profile,
        shared: &[String],
    ) -> [String; STARTER_COUNT] {
        let a = a.clone().sanitized();
        let b = b.clone().sanitized();
        let fallback = engine::starters(&a, &b, shared);
        let outcome = match self.complete(prompts::conversation_starters(&a, &b, shared)).await {
            Ok(text) => parse::starters(&text, &fallback),
            Err(e) => Err(e),
        };
        match outcome {
            Ok(starters) => starters,
            Err(e) => Self::fall_back("conversation starters", e, fallback),
        }
    }

    pub async fn networking_insights(&self, profile: &Profile) -> [String; INSIGHT_COUNT] {
        let profile = profile.clone().sanitized();
        let fallback = engine::insights(&profile);
        let outcome = match self.complete(prompts::networking_insights(&profile)).await {
            Ok(text) => parse::insights(&text, &fallback),
            Err(e) => Err(e),
        };
        match outcome {
            Ok(insights) => insights,
            Err(e) => Self::fall_back("networking insights", e, fallback),
        }
    }
}
