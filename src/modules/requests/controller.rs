use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::auth::AuthSession;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{CreateRequestDto, Request, RequestWithOwner};
use super::service::RequestService;

/// List the authenticated user's own requests
#[utoipa::path(
    get,
    path = "/api/requests",
    responses(
        (status = 200, description = "Requests owned by the caller", body = Vec<Request>),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Account blocked")
    ),
    security(("bearer_auth" = [])),
    tag = "Requests"
)]
#[instrument(skip_all)]
pub async fn list_own_requests(
    State(state): State<AppState>,
    AuthSession(user): AuthSession,
) -> Result<Json<Vec<Request>>, AppError> {
    let requests = RequestService::list_owned(&state.db, user.id).await?;
    Ok(Json(requests))
}

/// Create a new delivery request
#[utoipa::path(
    post,
    path = "/api/requests",
    request_body = CreateRequestDto,
    responses(
        (status = 201, description = "Request created", body = Request),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Missing or invalid token")
    ),
    security(("bearer_auth" = [])),
    tag = "Requests"
)]
#[instrument(skip_all)]
pub async fn create_request(
    State(state): State<AppState>,
    AuthSession(user): AuthSession,
    ValidatedJson(dto): ValidatedJson<CreateRequestDto>,
) -> Result<(StatusCode, Json<Request>), AppError> {
    let request = RequestService::create(&state.db, user.id, dto).await?;
    Ok((StatusCode::CREATED, Json(request)))
}

/// List all requests with their owners populated
#[utoipa::path(
    get,
    path = "/api/allrequests",
    responses(
        (status = 200, description = "All requests", body = Vec<RequestWithOwner>),
        (status = 401, description = "Missing or invalid token")
    ),
    security(("bearer_auth" = [])),
    tag = "Requests"
)]
#[instrument(skip_all)]
pub async fn list_all_requests(
    State(state): State<AppState>,
    _session: AuthSession,
) -> Result<Json<Vec<RequestWithOwner>>, AppError> {
    let requests = RequestService::list_all(&state.db).await?;
    Ok(Json(requests))
}

/// Fetch a request and mark it accepted
#[utoipa::path(
    get,
    path = "/api/requests/{id}",
    params(("id" = Uuid, Path, description = "Request id")),
    responses(
        (status = 200, description = "Accepted request", body = RequestWithOwner),
        (status = 404, description = "Request not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Requests"
)]
#[instrument(skip_all)]
pub async fn accept_request(
    State(state): State<AppState>,
    _session: AuthSession,
    Path(id): Path<Uuid>,
) -> Result<Json<RequestWithOwner>, AppError> {
    let request = RequestService::accept(&state.db, id).await?;
    Ok(Json(request))
}
