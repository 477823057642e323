#[cfg(test)]
mod tests {
    use crate::adapter::{CompletionProvider, MatchingService};
    use crate::engine::{self, MatchPolicy};
    use crate::error::AdapterError;
    use crate::matching::{analyze_candidates, match_participants};
    use crate::profile::Profile;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;
    use std::time::Duration;

    const AI_REPLY: &str = r#"{
        "compatibility_score": 88,
        "shared_interests": ["AI"],
        "complementary_skills": ["Go"],
        "goal_alignment": 0.9,
        "explanation": "Both build AI products.",
        "conversation_starters": ["What AI project excites you?", "How did you start?", "Coffee soon?"]
    }"#;

    /// Answers every prompt except the ones about `failing_name`.
    struct ScriptedProvider {
        failing_name: &'static str,
        panic_instead: bool,
    }

    #[async_trait]
    impl CompletionProvider for ScriptedProvider {
        fn name(&self) -> &str {
            "scripted"
        }

        async fn complete(&self, prompt: &str) -> Result<String, AdapterError> {
            if prompt.contains(&format!("Name: {}", self.failing_name)) {
                if self.panic_instead {
                    panic!("provider defect for {}", self.failing_name);
                }
                return Err(AdapterError::Request("connection reset".to_string()));
            }
            Ok(AI_REPLY.to_string())
        }
    }

    fn service(provider: Option<ScriptedProvider>) -> Arc<MatchingService> {
        let service = MatchingService::new(MatchPolicy::default(), Duration::from_secs(5));
        Arc::new(match provider {
            Some(provider) => service.with_provider(Arc::new(provider)),
            None => service,
        })
    }

    fn user() -> Profile {
        Profile::new("u0", "Uma")
            .with_interests(["AI", "Mentoring"])
            .with_skills(["Python"])
            .with_goals(["Find cofounder"])
            .with_industry("Fintech")
    }

    fn candidates() -> Vec<Profile> {
        vec![
            Profile::new("u1", "Ann").with_interests(["AI"]),
            Profile::new("u2", "Ben")
                .with_interests(["AI", "Sustainability"])
                .with_skills(["Business Strategy"])
                .with_goals(["Find cofounder"])
                .with_industry("Energy")
                .with_company("GreenCo"),
            Profile::new("u3", "Cal").with_skills(["Python"]),
        ]
    }

    #[tokio::test]
    async fn test_fallback_equivalence_scenario() {
        let a = Profile::new("a", "Alice")
            .with_interests(["AI", "Mentoring"])
            .with_skills(["Python"])
            .with_goals(["Find cofounder"]);
        let b = Profile::new("b", "Bob")
            .with_interests(["AI", "Sustainability"])
            .with_skills(["Business Strategy"])
            .with_goals(["Find cofounder"]);

        let result = service(None).analyze_compatibility(&a, &b).await;
        assert_eq!(result.shared_interests, vec!["AI".to_string()]);
        assert_eq!(result.score, 78);
        assert_eq!(result.goal_alignment, 0.8);
        assert_eq!(
            result.explanation,
            "78% compatibility based on shared interests in AI and complementary skills in Python. Great potential for mutual learning and collaboration."
        );
    }

    #[tokio::test]
    async fn test_zero_overlap_scenario() {
        let a = Profile::new("a", "Alice")
            .with_interests(["Chess"])
            .with_skills(["Law"])
            .with_goals(["Hire"]);
        let b = Profile::new("b", "Bob")
            .with_interests(["Golf"])
            .with_skills(["Law"])
            .with_goals(["Invest"]);

        let result = service(None).analyze_compatibility(&a, &b).await;
        assert!(result.shared_interests.is_empty());
        assert_eq!(result.score, 70);
        assert_eq!(result.goal_alignment, 0.6);
    }

    #[tokio::test]
    async fn test_batch_partial_failure_falls_back_per_candidate() {
        let provider = ScriptedProvider {
            failing_name: "Ben",
            panic_instead: false,
        };
        let analyses = analyze_candidates(service(Some(provider)), &user(), candidates(), 3).await;

        let ids: Vec<&str> = analyses.iter().map(|a| a.candidate_id.as_str()).collect();
        assert_eq!(ids, vec!["u1", "u2", "u3"]);

        assert_eq!(analyses[0].result.score, 88);
        assert_eq!(analyses[2].result.score, 88);

        let ben = candidates().remove(1);
        let expected = engine::score(&user(), &ben, &MatchPolicy::default());
        assert_eq!(analyses[1].result, expected);
        assert_eq!(analyses[1].result.score, 78);
    }

    #[tokio::test]
    async fn test_batch_survives_candidate_defect() {
        let provider = ScriptedProvider {
            failing_name: "Ben",
            panic_instead: true,
        };
        let records = match_participants(service(Some(provider)), &user(), candidates(), "evt", 2).await;

        let ids: Vec<&str> = records.iter().map(|r| r.user2_id.as_str()).collect();
        assert_eq!(ids, vec!["u1", "u3"]);
        assert!(records.iter().all(|r| r.match_score == 88));
    }

    #[tokio::test]
    async fn test_low_ai_scores_do_not_qualify() {
        struct Lukewarm;

        #[async_trait]
        impl CompletionProvider for Lukewarm {
            fn name(&self) -> &str {
                "lukewarm"
            }

            async fn complete(&self, _prompt: &str) -> Result<String, AdapterError> {
                Ok(r#"{"compatibility_score": 60}"#.to_string())
            }
        }

        let service = Arc::new(
            MatchingService::new(MatchPolicy::default(), Duration::from_secs(5))
                .with_provider(Arc::new(Lukewarm)),
        );
        let records = match_participants(service, &user(), candidates(), "evt", 4).await;
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_sparse_profiles_never_fail() {
        let empty = Profile::default();
        let service = service(None);

        let result = service.analyze_compatibility(&empty, &empty).await;
        assert_eq!(result.score, 70);
        assert!(result.conversation_starters.iter().all(|s| !s.is_empty()));

        let insights = service.networking_insights(&empty).await;
        assert_eq!(insights.len(), 3);
        assert!(insights.iter().all(|s| !s.is_empty()));

        let summary = service.enhanced_profile_summary(&empty).await;
        assert_eq!(summary.suggested_connections.len(), 3);
        assert!(!summary.key_strengths.is_empty());
    }

    #[test]
    fn test_starter_and_insight_counts_hold_for_all_shapes() {
        let shapes = vec![
            Profile::default(),
            Profile::new("x", "").with_industry("Media"),
            user(),
            Profile::new("y", "Yan").with_goals(["Grow"]).with_company("Co"),
        ];
        for a in &shapes {
            assert_eq!(engine::insights(a).len(), 3);
            for b in &shapes {
                let shared = engine::shared_interests(a, b, &MatchPolicy::default());
                let starters = engine::starters(a, b, &shared);
                for starter in &starters {
                    let length = starter.chars().count();
                    assert!((10..=300).contains(&length), "bad starter: {}", starter);
                }
            }
        }
    }
}
