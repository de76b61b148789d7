use axum::{Json, extract::State, http::StatusCode};
use tracing::instrument;

use crate::middleware::auth::AuthSession;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{Complaint, CreateComplaintDto};
use super::service::ComplaintService;

/// File a moderation report
#[utoipa::path(
    post,
    path = "/api/complaints",
    request_body = CreateComplaintDto,
    responses(
        (status = 201, description = "Complaint filed", body = Complaint),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Missing or invalid token")
    ),
    security(("bearer_auth" = [])),
    tag = "Complaints"
)]
#[instrument(skip_all)]
pub async fn create_complaint(
    State(state): State<AppState>,
    AuthSession(user): AuthSession,
    ValidatedJson(dto): ValidatedJson<CreateComplaintDto>,
) -> Result<(StatusCode, Json<Complaint>), AppError> {
    let complaint = ComplaintService::create(&state.db, user.id, dto).await?;
    Ok((StatusCode::CREATED, Json(complaint)))
}
