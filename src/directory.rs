use crate::error::DirectoryError;
use crate::profile::Profile;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::{info, warn};

/// File-backed profile store with event participation lists.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Directory {
    #[serde(default)]
    pub profiles: Vec<Profile>,
    /// Event id -> participant user ids, in registration order.
    #[serde(default)]
    pub events: HashMap<String, Vec<String>>,
}

impl Directory {
    pub fn load_from_json<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let f = std::fs::File::open(path)
            .with_context(|| format!("Failed to open profile directory {}", path.display()))?;
        let directory: Directory = serde_json::from_reader(f)
            .with_context(|| format!("Failed to parse profile directory {}", path.display()))?;

        info!(
            "Loaded {} profiles and {} events from {}",
            directory.profiles.len(),
            directory.events.len(),
            path.display()
        );
        Ok(directory)
    }

    pub fn profile(&self, id: &str) -> Result<&Profile, DirectoryError> {
        self.profiles
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| DirectoryError::ProfileNotFound(id.to_string()))
    }

    /// Other participants of `event_id`, in registration order.
    pub fn event_candidates(&self, event_id: &str, user_id: &str) -> Result<Vec<Profile>, DirectoryError> {
        let participants = self
            .events
            .get(event_id)
            .ok_or_else(|| DirectoryError::EventNotFound(event_id.to_string()))?;

        Ok(participants
            .iter()
            .filter(|id| id.as_str() != user_id)
            .filter_map(|id| match self.profile(id) {
                Ok(profile) => Some(profile.clone()),
                Err(e) => {
                    warn!("Skipping participant of event {}: {}", event_id, e);
                    None
                }
            })
            .collect())
    }
}
