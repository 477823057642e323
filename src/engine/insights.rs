use crate::constants::INSIGHT_COUNT;
use crate::profile::Profile;
use serde::{Deserialize, Serialize};

pub(crate) const GENERIC_EVENTS_INSIGHT: &str =
    "Attend industry-specific events to expand your professional network.";
pub(crate) const GENERIC_GROUPS_INSIGHT: &str =
    "Join professional groups and communities to build meaningful connections.";
pub(crate) const GENERIC_MENTOR_INSIGHT: &str =
    "Look for mentors or peers who can help you achieve your professional goals.";
const DEFAULT_STRENGTH: &str = "Professional expertise";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileSummary {
    pub summary: String,
    pub key_strengths: Vec<String>,
    pub networking_value: String,
    pub suggested_connections: Vec<String>,
}

/// Three networking tips drawn from the first skill, interest and goal.
pub fn insights(profile: &Profile) -> [String; INSIGHT_COUNT] {
    let from_skill = profile.skills.first().map(|skill| {
        format!(
            "Focus on connecting with professionals who can help you develop your {} skills further.",
            skill
        )
    });
    let from_interest = profile.interests.first().map(|interest| {
        format!(
            "Seek out networking events and groups focused on {} to meet like-minded professionals.",
            interest
        )
    });
    let from_goal = profile.goals.first().map(|goal| {
        format!(
            "Look for mentors or peers who have achieved similar goals to {}.",
            goal.to_lowercase()
        )
    });

    [
        from_skill.unwrap_or_else(|| GENERIC_EVENTS_INSIGHT.to_string()),
        from_interest.unwrap_or_else(|| GENERIC_GROUPS_INSIGHT.to_string()),
        from_goal.unwrap_or_else(|| GENERIC_MENTOR_INSIGHT.to_string()),
    ]
}

fn capitalized(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// One-sentence summary: experience, industry and top two skills.
pub fn profile_summary(profile: &Profile) -> String {
    let skills = if profile.skills.is_empty() {
        "various skills".to_string()
    } else {
        profile.skills.iter().take(2).map(String::as_str).collect::<Vec<_>>().join(" and ")
    };

    format!(
        "{} professional in {} with expertise in {}.",
        capitalized(profile.experience_label()),
        profile.industry().unwrap_or("their field"),
        skills
    )
}

pub fn enhanced_summary(profile: &Profile) -> ProfileSummary {
    let industry = profile.industry().unwrap_or("their field");
    let top_skill = profile.skills.first().map(String::as_str);

    let key_strengths = if profile.skills.is_empty() {
        vec![DEFAULT_STRENGTH.to_string()]
    } else {
        profile.skills.iter().take(3).cloned().collect()
    };

    ProfileSummary {
        summary: profile_summary(profile),
        key_strengths,
        networking_value: format!(
            "Brings {} experience in {} with strong {} skills.",
            profile.experience_label(),
            industry,
            top_skill.unwrap_or("professional")
        ),
        suggested_connections: vec![
            format!("Other {} professionals", industry),
            format!(
                "People interested in {}",
                profile
                    .interests
                    .first()
                    .map(String::as_str)
                    .unwrap_or("professional development")
            ),
            format!("Mentors or mentees in {}", top_skill.unwrap_or("their field")),
        ],
    }
}
