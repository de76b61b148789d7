use axum::{
    Json,
    extract::{Path, Query, State},
};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::middleware::admin_auth::RequireManageRequests;
use crate::modules::auth::model::MessageResponse;
use crate::modules::requests::model::Request;
use crate::state::AppState;
use crate::utils::errors::AppError;

use super::model::{PaginatedRequestsResponse, RequestFilterParams};
use super::service::AdminRequestService;

/// List delivery requests with status filter, search and pagination
#[utoipa::path(
    get,
    path = "/admin/requests",
    params(
        ("status" = Option<String>, Query, description = "Exact status filter"),
        ("search" = Option<String>, Query, description = "Substring match on title or description"),
        ("page" = Option<i64>, Query, description = "1-based page number"),
        ("limit" = Option<i64>, Query, description = "Page size, 1-100")
    ),
    responses(
        (status = 200, description = "Paginated request listing", body = PaginatedRequestsResponse),
        (status = 403, description = "Missing manage-requests permission")
    ),
    security(("bearer_auth" = [])),
    tag = "Admin Requests"
)]
#[instrument(skip_all)]
pub async fn list_requests(
    _gate: RequireManageRequests,
    State(state): State<AppState>,
    Query(filters): Query<RequestFilterParams>,
) -> Result<Json<PaginatedRequestsResponse>, AppError> {
    let page = AdminRequestService::list(&state.db, filters).await?;
    Ok(Json(page))
}

/// Mark a request as completed
#[utoipa::path(
    patch,
    path = "/admin/requests/{request_id}/complete",
    params(("request_id" = Uuid, Path, description = "Request ID")),
    responses(
        (status = 200, description = "Updated request", body = Request),
        (status = 403, description = "Missing manage-requests permission"),
        (status = 404, description = "Request not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Admin Requests"
)]
#[instrument(skip_all, fields(request_id = %request_id))]
pub async fn complete_request(
    RequireManageRequests(session): RequireManageRequests,
    State(state): State<AppState>,
    Path(request_id): Path<Uuid>,
) -> Result<Json<Request>, AppError> {
    let request = AdminRequestService::complete(&state.db, request_id).await?;
    info!(admin = %session.0.username, "Request marked completed");
    Ok(Json(request))
}

/// Delete a request
#[utoipa::path(
    delete,
    path = "/admin/requests/{request_id}",
    params(("request_id" = Uuid, Path, description = "Request ID")),
    responses(
        (status = 200, description = "Request deleted", body = MessageResponse),
        (status = 403, description = "Missing manage-requests permission"),
        (status = 404, description = "Request not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Admin Requests"
)]
#[instrument(skip_all, fields(request_id = %request_id))]
pub async fn delete_request(
    RequireManageRequests(session): RequireManageRequests,
    State(state): State<AppState>,
    Path(request_id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    AdminRequestService::delete(&state.db, request_id).await?;
    info!(admin = %session.0.username, "Request deleted");
    Ok(Json(MessageResponse {
        message: "Request deleted successfully".to_string(),
    }))
}
