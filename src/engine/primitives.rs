use super::{MatchPolicy, Normalization, SkillsMode};
use crate::profile::{ExperienceLevel, Profile};
use std::collections::HashSet;

fn key_set(values: &[String], normalization: Normalization) -> HashSet<String> {
    values.iter().map(|v| normalization.key(v).into_owned()).collect()
}

/// Entries of `left` also present in `right`, in `left`'s order, once each.
fn intersect(left: &[String], right: &[String], normalization: Normalization) -> Vec<String> {
    let right_keys = key_set(right, normalization);
    let mut seen = HashSet::new();
    left.iter()
        .filter(|value| {
            let key = normalization.key(value);
            right_keys.contains(key.as_ref()) && seen.insert(key.into_owned())
        })
        .cloned()
        .collect()
}

/// Interests of `a` that `b` shares, keeping `a`'s order.
pub fn shared_interests(a: &Profile, b: &Profile, policy: &MatchPolicy) -> Vec<String> {
    intersect(&a.interests, &b.interests, policy.normalization)
}

/// Skills `a` offers that `b` lacks. Directional: swapping the arguments
/// generally gives a different answer.
pub fn complementary_skills(a: &Profile, b: &Profile, policy: &MatchPolicy) -> Vec<String> {
    let b_skills = key_set(&b.skills, policy.normalization);
    let b_goals: Vec<String> = b.goals.iter().map(|g| g.to_lowercase()).collect();
    let mut seen = HashSet::new();

    a.skills
        .iter()
        .filter(|skill| {
            let key = policy.normalization.key(skill);
            if b_skills.contains(key.as_ref()) || !seen.insert(key.into_owned()) {
                return false;
            }
            match policy.skills {
                SkillsMode::Directional => true,
                SkillsMode::GoalFiltered => {
                    let needle = skill.to_lowercase();
                    b_goals.iter().any(|goal| goal.contains(&needle))
                }
            }
        })
        .cloned()
        .collect()
}

/// |shared goals| / max(|a.goals|, |b.goals|, 1), in [0, 1].
pub fn goal_alignment(a: &Profile, b: &Profile, policy: &MatchPolicy) -> f64 {
    let shared = intersect(&a.goals, &b.goals, policy.normalization).len();
    let denominator = a.goals.len().max(b.goals.len()).max(1);
    (shared as f64 / denominator as f64).min(1.0)
}

/// True when the two experience levels are at most one step apart.
pub fn experience_proximity(a: &Profile, b: &Profile) -> bool {
    let ordinal = |p: &Profile| {
        p.experience()
            .map(ExperienceLevel::ordinal)
            .unwrap_or(ExperienceLevel::UNKNOWN_ORDINAL)
    };
    ordinal(a).abs_diff(ordinal(b)) <= 1
}
