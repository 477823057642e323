use crate::constants::{API_KEY_VARS, GEMINI_BASE_URL, GEMINI_MODEL, PLACEHOLDER_KEYS};
use crate::engine::MatchPolicy;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::{path::Path, time::Duration};
use tracing::info;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AiConfig {
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Environment variables probed for the API key, first set one wins.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct BatchConfig {
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_server_address")]
    pub address: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MessagingConfig {
    #[serde(default = "default_messaging_address")]
    pub address: String,
    #[serde(default = "default_iggy_user")]
    pub username: String,
    #[serde(default = "default_iggy_user")]
    pub password: String,
    #[serde(default = "default_stream")]
    pub stream: String,
    #[serde(default = "default_topic")]
    pub topic: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub engine: MatchPolicy,
    #[serde(default)]
    pub ai: AiConfig,
    #[serde(default)]
    pub batch: BatchConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub messaging: MessagingConfig,
}

fn default_model() -> String {
    GEMINI_MODEL.to_string()
}

fn default_base_url() -> String {
    GEMINI_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    20
}

fn default_api_key_env() -> Vec<String> {
    API_KEY_VARS.iter().map(|v| v.to_string()).collect()
}

fn default_concurrency() -> usize {
    8
}

fn default_server_address() -> String {
    "[::]:50030".to_string()
}

fn default_messaging_address() -> String {
    "127.0.0.1:8090".to_string()
}

fn default_iggy_user() -> String {
    "iggy".to_string()
}

fn default_stream() -> String {
    "matchai".to_string()
}

fn default_topic() -> String {
    "matches".to_string()
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            api_key_env: default_api_key_env(),
        }
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            concurrency: default_concurrency(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: default_server_address(),
        }
    }
}

impl Default for MessagingConfig {
    fn default() -> Self {
        Self {
            address: default_messaging_address(),
            username: default_iggy_user(),
            password: default_iggy_user(),
            stream: default_stream(),
            topic: default_topic(),
        }
    }
}

impl AiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// API key from the environment, or None when absent or a placeholder.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.resolve_api_key_with(|var| std::env::var(var).ok())
    }

    pub fn resolve_api_key_with<F>(&self, lookup: F) -> Option<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        self.api_key_env
            .iter()
            .find_map(|var| lookup(var).filter(|value| !value.trim().is_empty()))
            .filter(|key| !PLACEHOLDER_KEYS.contains(&key.trim()))
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.model.trim().is_empty() {
            return Err("ai.model must not be empty".to_string());
        }
        if self.timeout_secs == 0 {
            return Err("ai.timeout_secs must be greater than zero".to_string());
        }
        Ok(())
    }
}

impl Config {
    pub fn load_from_yaml<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let f = std::fs::File::open(path)
            .with_context(|| format!("Failed to open config file {}", path.display()))?;
        let config: Config = serde_yaml::from_reader(f)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        config.validate().map_err(|e| anyhow::anyhow!(e))?;
        Ok(config)
    }

    /// Loads `path` when it exists, defaults otherwise.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load_from_yaml(path)
        } else {
            info!("No config file at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        self.ai.validate()?;
        if self.batch.concurrency == 0 {
            return Err("batch.concurrency must be greater than zero".to_string());
        }
        Ok(())
    }
}
