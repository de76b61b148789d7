use axum::{
    Json,
    extract::{Path, Query, State},
};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::middleware::admin_auth::RequireHandleComplaints;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{
    ComplaintFilterParams, ComplaintWithParties, PaginatedComplaintsResponse, UpdateComplaintDto,
};
use super::service::AdminComplaintService;

/// List complaints with status and type filters and pagination
#[utoipa::path(
    get,
    path = "/admin/complaints",
    params(
        ("status" = Option<String>, Query, description = "Exact status filter"),
        ("type" = Option<String>, Query, description = "Exact complaint type filter"),
        ("page" = Option<i64>, Query, description = "1-based page number"),
        ("limit" = Option<i64>, Query, description = "Page size, 1-100")
    ),
    responses(
        (status = 200, description = "Paginated complaint listing", body = PaginatedComplaintsResponse),
        (status = 403, description = "Missing handle-complaints permission")
    ),
    security(("bearer_auth" = [])),
    tag = "Admin Complaints"
)]
#[instrument(skip_all)]
pub async fn list_complaints(
    _gate: RequireHandleComplaints,
    State(state): State<AppState>,
    Query(filters): Query<ComplaintFilterParams>,
) -> Result<Json<PaginatedComplaintsResponse>, AppError> {
    let page = AdminComplaintService::list(&state.db, filters).await?;
    Ok(Json(page))
}

/// Update a complaint's status and admin response
#[utoipa::path(
    patch,
    path = "/admin/complaints/{complaint_id}",
    params(("complaint_id" = Uuid, Path, description = "Complaint ID")),
    request_body = UpdateComplaintDto,
    responses(
        (status = 200, description = "Updated complaint", body = ComplaintWithParties),
        (status = 403, description = "Missing handle-complaints permission"),
        (status = 404, description = "Complaint not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Admin Complaints"
)]
#[instrument(skip_all, fields(complaint_id = %complaint_id))]
pub async fn update_complaint(
    RequireHandleComplaints(session): RequireHandleComplaints,
    State(state): State<AppState>,
    Path(complaint_id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateComplaintDto>,
) -> Result<Json<ComplaintWithParties>, AppError> {
    let admin = session.0;
    let complaint =
        AdminComplaintService::update(&state.db, complaint_id, admin.id, dto).await?;
    info!(admin = %admin.username, status = ?complaint.complaint.status, "Complaint updated");
    Ok(Json(complaint))
}
