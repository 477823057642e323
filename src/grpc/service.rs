use super::matchai;
use super::MatchAiService;
use crate::error::DirectoryError;
use crate::matching::match_participants;
use tonic::{Request, Response, Status};
use tracing::info;

use super::matchai::match_ai_server::MatchAi;
use super::matchai::{MatchRequest, MatchResponse, ProfileRequest, ProfileResponse};

fn to_status(error: DirectoryError) -> Status {
    Status::not_found(error.to_string())
}

#[tonic::async_trait]
impl MatchAi for MatchAiService {
    async fn match_participants(
        &self,
        request: Request<MatchRequest>,
    ) -> Result<Response<MatchResponse>, Status> {
        let req = request.into_inner();
        info!(
            "Received match request - user: {}, event: {}",
            req.user_id, req.event_id
        );

        let user = self.directory.profile(&req.user_id).map_err(to_status)?.clone();
        let candidates = self
            .directory
            .event_candidates(&req.event_id, &req.user_id)
            .map_err(to_status)?;

        let records = match_participants(
            self.matcher.clone(),
            &user,
            candidates,
            &req.event_id,
            self.concurrency,
        )
        .await;

        let matches = records
            .into_iter()
            .map(Self::convert_record_to_response)
            .collect();

        Ok(Response::new(matchai::MatchResponse {
            matches,
            ai_configured: self.matcher.is_ai_configured(),
        }))
    }

    async fn analyze_profile(
        &self,
        request: Request<ProfileRequest>,
    ) -> Result<Response<ProfileResponse>, Status> {
        let req = request.into_inner();
        info!("Received profile analysis request - user: {}", req.user_id);

        let user = self.directory.profile(&req.user_id).map_err(to_status)?;
        let (summary, enhanced, insights) = tokio::join!(
            self.matcher.profile_summary(user),
            self.matcher.enhanced_profile_summary(user),
            self.matcher.networking_insights(user),
        );

        Ok(Response::new(ProfileResponse {
            summary,
            enhanced_summary: Some(Self::convert_summary_to_response(enhanced)),
            insights: insights.into(),
            ai_configured: self.matcher.is_ai_configured(),
        }))
    }
}
