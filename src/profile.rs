use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;

/// Canonical ordered experience scale.
///
/// Only these four spellings are recognised. Other labels found in stored
/// profiles ("mid", "executive", ...) stay unmapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Entry,
    Intermediate,
    Senior,
    Expert,
}

impl ExperienceLevel {
    /// Ordinal used when the level is unknown.
    pub const UNKNOWN_ORDINAL: u8 = 2;

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "entry" => Some(ExperienceLevel::Entry),
            "intermediate" => Some(ExperienceLevel::Intermediate),
            "senior" => Some(ExperienceLevel::Senior),
            "expert" => Some(ExperienceLevel::Expert),
            _ => None,
        }
    }

    pub fn ordinal(self) -> u8 {
        match self {
            ExperienceLevel::Entry => 1,
            ExperienceLevel::Intermediate => 2,
            ExperienceLevel::Senior => 3,
            ExperienceLevel::Expert => 4,
        }
    }
}

/// A participant's professional data, as read from the profile store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub full_name: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub interests: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub goals: Vec<String>,
    #[serde(default)]
    pub experience_level: Option<String>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl Profile {
    pub fn new(id: impl Into<String>, full_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            full_name: full_name.into(),
            ..Default::default()
        }
    }

    pub fn with_interests<I, S>(mut self, interests: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.interests = interests.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skills = skills.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_goals<I, S>(mut self, goals: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.goals = goals.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_industry(mut self, industry: impl Into<String>) -> Self {
        self.industry = Some(industry.into());
        self
    }

    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    pub fn with_experience(mut self, level: impl Into<String>) -> Self {
        self.experience_level = Some(level.into());
        self
    }

    /// Name used when addressing this participant, "there" when unnamed.
    pub fn display_name(&self) -> &str {
        let name = self.full_name.trim();
        if name.is_empty() {
            "there"
        } else {
            name
        }
    }

    pub fn company(&self) -> Option<&str> {
        non_blank(&self.company)
    }

    pub fn position(&self) -> Option<&str> {
        non_blank(&self.position)
    }

    pub fn industry(&self) -> Option<&str> {
        non_blank(&self.industry)
    }

    pub fn bio(&self) -> Option<&str> {
        non_blank(&self.bio)
    }

    pub fn experience(&self) -> Option<ExperienceLevel> {
        non_blank(&self.experience_level).and_then(ExperienceLevel::parse)
    }

    /// Raw experience label for display, "professional" when missing.
    pub fn experience_label(&self) -> &str {
        non_blank(&self.experience_level).unwrap_or("professional")
    }

    /// Trims list entries, drops blanks and duplicates, and clears blank text
    /// fields so the engine never sees sparse or padded input.
    pub fn sanitized(self) -> Self {
        fn clean_list(list: Vec<String>) -> Vec<String> {
            let mut seen = HashSet::new();
            list.into_iter()
                .map(|entry| entry.trim().to_string())
                .filter(|entry| !entry.is_empty() && seen.insert(entry.clone()))
                .collect()
        }
        fn clean_text(text: Option<String>) -> Option<String> {
            text.map(|t| t.trim().to_string()).filter(|t| !t.is_empty())
        }

        Self {
            id: self.id.trim().to_string(),
            full_name: self.full_name.trim().to_string(),
            bio: clean_text(self.bio),
            company: clean_text(self.company),
            position: clean_text(self.position),
            industry: clean_text(self.industry),
            interests: clean_list(self.interests),
            skills: clean_list(self.skills),
            goals: clean_list(self.goals),
            experience_level: clean_text(self.experience_level),
        }
    }
}
