pub mod service;
pub mod start_grpc_server;

use crate::adapter::MatchingService;
use crate::directory::Directory;
use crate::engine::ProfileSummary;
use crate::matching::MatchRecord;
use std::sync::Arc;

pub mod matchai {
    tonic::include_proto!("matchai");
}

pub struct MatchAiService {
    directory: Arc<Directory>,
    matcher: Arc<MatchingService>,
    concurrency: usize,
}

impl MatchAiService {
    pub fn new(directory: Arc<Directory>, matcher: Arc<MatchingService>, concurrency: usize) -> Self {
        Self {
            directory,
            matcher,
            concurrency,
        }
    }

    fn convert_record_to_response(record: MatchRecord) -> matchai::Match {
        matchai::Match {
            user1_id: record.user1_id,
            user2_id: record.user2_id,
            event_id: record.event_id,
            match_score: record.match_score,
            factors: Some(matchai::CompatibilityFactors {
                shared_interests: record.compatibility_factors.shared_interests,
                complementary_skills: record.compatibility_factors.complementary_skills,
                goal_alignment: record.compatibility_factors.goal_alignment,
            }),
            explanation: record.ai_explanation,
            conversation_starters: record.conversation_starters.into(),
            status: record.status,
            created_at: record.created_at.to_rfc3339(),
        }
    }

    fn convert_summary_to_response(summary: ProfileSummary) -> matchai::ProfileSummary {
        matchai::ProfileSummary {
            summary: summary.summary,
            key_strengths: summary.key_strengths,
            networking_value: summary.networking_value,
            suggested_connections: summary.suggested_connections,
        }
    }
}
