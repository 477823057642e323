use crate::adapter::MatchingService;
use crate::constants::{MATCH_STATUS_ACTIVE, STARTER_COUNT};
use crate::engine::{qualifies_as_match, CompatibilityResult};
use crate::profile::Profile;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::{self, JoinSet};
use tracing::{debug, info, info_span, warn};
use tracing_futures::Instrument;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityFactors {
    pub shared_interests: Vec<String>,
    pub complementary_skills: Vec<String>,
    pub goal_alignment: f64,
}

/// A qualifying pair, ready for upsert keyed by (user1, user2, event).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub user1_id: String,
    pub user2_id: String,
    pub event_id: String,
    pub match_score: u32,
    pub compatibility_factors: CompatibilityFactors,
    pub ai_explanation: String,
    pub conversation_starters: [String; STARTER_COUNT],
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl MatchRecord {
    pub fn new(
        user_id: &str,
        candidate_id: &str,
        event_id: &str,
        result: CompatibilityResult,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            user1_id: user_id.to_string(),
            user2_id: candidate_id.to_string(),
            event_id: event_id.to_string(),
            match_score: result.score,
            compatibility_factors: CompatibilityFactors {
                shared_interests: result.shared_interests,
                complementary_skills: result.complementary_skills,
                goal_alignment: result.goal_alignment,
            },
            ai_explanation: result.explanation,
            conversation_starters: result.conversation_starters,
            status: MATCH_STATUS_ACTIVE.to_string(),
            created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CandidateAnalysis {
    pub candidate_id: String,
    pub result: CompatibilityResult,
}

/// Analyses `user` against every candidate, at most `concurrency` at a time.
///
/// Output keeps candidate order. A candidate whose task fails is logged and
/// left out; the rest of the batch is unaffected. The user never gets
/// matched with itself. Dropping the returned future aborts the tasks still
/// in flight.
pub async fn analyze_candidates(
    service: Arc<MatchingService>,
    user: &Profile,
    candidates: Vec<Profile>,
    concurrency: usize,
) -> Vec<CandidateAnalysis> {
    let semaphore = Arc::new(Semaphore::new(concurrency.max(1)));
    let user = Arc::new(user.clone());

    let mut tasks = JoinSet::new();
    let mut positions: HashMap<task::Id, usize> = HashMap::new();
    let mut candidate_ids = Vec::with_capacity(candidates.len());

    for candidate in candidates.into_iter().filter(|candidate| candidate.id != user.id) {
        let service = Arc::clone(&service);
        let user = Arc::clone(&user);
        let semaphore = Arc::clone(&semaphore);
        let span = info_span!("candidate", candidate_id = %candidate.id);
        candidate_ids.push(candidate.id.clone());

        let handle = tasks.spawn(
            async move {
                let _permit = semaphore.acquire_owned().await.ok();
                service.analyze_compatibility(&user, &candidate).await
            }
            .instrument(span),
        );
        positions.insert(handle.id(), candidate_ids.len() - 1);
    }

    let mut results: Vec<Option<CompatibilityResult>> =
        std::iter::repeat_with(|| None).take(candidate_ids.len()).collect();
    while let Some(outcome) = tasks.join_next_with_id().await {
        match outcome {
            Ok((id, result)) => {
                if let Some(&position) = positions.get(&id) {
                    results[position] = Some(result);
                }
            }
            Err(e) => {
                let candidate_id = positions
                    .get(&e.id())
                    .map(|&position| candidate_ids[position].as_str())
                    .unwrap_or("unknown");
                warn!(
                    "Error analyzing compatibility for candidate {}, skipping: {}",
                    candidate_id, e
                );
            }
        }
    }

    candidate_ids
        .into_iter()
        .zip(results)
        .filter_map(|(candidate_id, result)| {
            let result = result?;
            debug!("Candidate {} scored {}", candidate_id, result.score);
            Some(CandidateAnalysis {
                candidate_id,
                result,
            })
        })
        .collect()
}

/// Match records for the candidates whose score qualifies.
pub async fn match_participants(
    service: Arc<MatchingService>,
    user: &Profile,
    candidates: Vec<Profile>,
    event_id: &str,
    concurrency: usize,
) -> Vec<MatchRecord> {
    let total = candidates.len();
    let analyses = analyze_candidates(service, user, candidates, concurrency).await;
    let created_at = Utc::now();

    let records: Vec<MatchRecord> = analyses
        .into_iter()
        .filter(|analysis| qualifies_as_match(analysis.result.score))
        .map(|analysis| {
            MatchRecord::new(
                &user.id,
                &analysis.candidate_id,
                event_id,
                analysis.result,
                created_at,
            )
        })
        .collect();

    info!(
        "Generated {} matches for user {} in event {} from {} candidates",
        records.len(),
        user.id,
        event_id,
        total
    );
    records
}
