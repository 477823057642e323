use super::explanation::{explain, starters};
use super::primitives::{complementary_skills, shared_interests};
use super::MatchPolicy;
use crate::constants::{
    ALIGNMENT_WITHOUT_SHARED, ALIGNMENT_WITH_SHARED, BASE_SCORE, COMPLEMENTARY_SKILL_POINTS,
    MATCH_THRESHOLD, SCORE_CEILING, SHARED_INTEREST_POINTS, STARTER_COUNT,
};
use crate::profile::Profile;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityResult {
    pub score: u32,
    pub shared_interests: Vec<String>,
    /// What `a` offers that `b` lacks.
    pub complementary_skills: Vec<String>,
    pub goal_alignment: f64,
    pub explanation: String,
    pub conversation_starters: [String; STARTER_COUNT],
}

/// Deterministic compatibility of `a` towards `b`.
///
/// The score is `70 + 5 * shared + 3 * complementary`, capped at 95, so it
/// always lands in `[70, 95]`.
pub fn score(a: &Profile, b: &Profile, policy: &MatchPolicy) -> CompatibilityResult {
    let shared = shared_interests(a, b, policy);
    let complementary = complementary_skills(a, b, policy);

    let raw = BASE_SCORE
        .saturating_add((shared.len() as u32).saturating_mul(SHARED_INTEREST_POINTS))
        .saturating_add((complementary.len() as u32).saturating_mul(COMPLEMENTARY_SKILL_POINTS));
    let score = raw.min(SCORE_CEILING);

    let goal_alignment = if shared.is_empty() {
        ALIGNMENT_WITHOUT_SHARED
    } else {
        ALIGNMENT_WITH_SHARED
    };

    debug!(
        "Scored {} -> {}: {} shared, {} complementary, score={}",
        a.id,
        b.id,
        shared.len(),
        complementary.len(),
        score
    );

    let mut result = CompatibilityResult {
        score,
        explanation: String::new(),
        conversation_starters: starters(a, b, &shared),
        shared_interests: shared,
        complementary_skills: complementary,
        goal_alignment,
    };
    result.explanation = explain(&result);
    result
}

/// Strictly above 60. Always true for deterministic scores; only external
/// AI scores can fall below it.
pub fn qualifies_as_match(score: u32) -> bool {
    score > MATCH_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn founder_pair() -> (Profile, Profile) {
        let a = Profile::new("a", "Alice")
            .with_interests(["AI", "Mentoring"])
            .with_skills(["Python"])
            .with_goals(["Find cofounder"]);
        let b = Profile::new("b", "Bob")
            .with_interests(["AI", "Sustainability"])
            .with_skills(["Business Strategy"])
            .with_goals(["Find cofounder"]);
        (a, b)
    }

    #[test]
    fn test_shared_interest_scenario() {
        let (a, b) = founder_pair();
        let result = score(&a, &b, &MatchPolicy::default());
        assert_eq!(result.shared_interests, vec!["AI".to_string()]);
        assert_eq!(result.complementary_skills, vec!["Python".to_string()]);
        assert_eq!(result.score, 78);
        assert_eq!(result.goal_alignment, 0.8);
    }

    #[test]
    fn test_zero_overlap_scenario() {
        let a = Profile::new("a", "Alice")
            .with_interests(["Chess"])
            .with_skills(["Law"])
            .with_goals(["Hire"]);
        let b = Profile::new("b", "Bob")
            .with_interests(["Surfing"])
            .with_skills(["Law"])
            .with_goals(["Invest"]);
        let result = score(&a, &b, &MatchPolicy::default());
        assert!(result.shared_interests.is_empty());
        assert!(result.complementary_skills.is_empty());
        assert_eq!(result.score, 70);
        assert_eq!(result.goal_alignment, 0.6);
    }

    #[test]
    fn test_score_is_capped() {
        let interests: Vec<String> = (0..10).map(|i| format!("topic-{}", i)).collect();
        let a = Profile::new("a", "A")
            .with_interests(interests.clone())
            .with_skills(["Go", "Rust", "C"]);
        let b = Profile::new("b", "B").with_interests(interests);
        assert_eq!(score(&a, &b, &MatchPolicy::default()).score, 95);
    }

    #[test]
    fn test_score_bounds_on_sparse_profiles() {
        let empty = Profile::default();
        let (a, b) = founder_pair();
        for (left, right) in [(&empty, &empty), (&a, &empty), (&empty, &b), (&a, &b), (&b, &a)] {
            let result = score(left, right, &MatchPolicy::default());
            assert!((70..=95).contains(&result.score), "score {} out of bounds", result.score);
            assert!(qualifies_as_match(result.score));
        }
    }

    #[test]
    fn test_score_is_deterministic() {
        let (a, b) = founder_pair();
        let first = score(&a, &b, &MatchPolicy::default());
        for _ in 0..5 {
            assert_eq!(score(&a, &b, &MatchPolicy::default()), first);
        }
    }

    #[test]
    fn test_threshold_is_strict() {
        assert!(!qualifies_as_match(60));
        assert!(qualifies_as_match(61));
        assert!(!qualifies_as_match(0));
    }
}
