//! Deterministic compatibility engine.
//!
//! Everything under this module is pure and synchronous: no I/O, no clock,
//! no randomness. The adapter layer falls back to these functions whenever
//! the external AI capability cannot answer.

pub mod explanation;
pub mod insights;
pub mod primitives;
pub mod scorer;

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// How strings are compared when intersecting interests, skills and goals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Normalization {
    /// Exact, case-sensitive equality.
    #[default]
    Exact,
    /// Trimmed, lowercase equality.
    CaseInsensitive,
}

impl Normalization {
    pub(crate) fn key<'a>(self, value: &'a str) -> Cow<'a, str> {
        match self {
            Normalization::Exact => Cow::Borrowed(value),
            Normalization::CaseInsensitive => Cow::Owned(value.trim().to_lowercase()),
        }
    }
}

/// Which of A's skills count as complementary to B.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillsMode {
    /// Every skill A has that B lacks.
    #[default]
    Directional,
    /// Only those skills B mentions in one of its goals.
    GoalFiltered,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchPolicy {
    #[serde(default)]
    pub normalization: Normalization,
    #[serde(default)]
    pub skills: SkillsMode,
}

pub use explanation::{explain, starters};
pub use insights::{enhanced_summary, insights, profile_summary, ProfileSummary};
pub use primitives::{complementary_skills, experience_proximity, goal_alignment, shared_interests};
pub use scorer::{qualifies_as_match, score, CompatibilityResult};
