use axum::{Json, extract::State};
use tracing::instrument;

use crate::middleware::admin_auth::RequireViewAnalytics;
use crate::state::AppState;
use crate::utils::errors::AppError;

use super::model::DashboardStats;
use super::service::DashboardService;

/// Platform statistics for the admin dashboard
#[utoipa::path(
    get,
    path = "/admin/dashboard/stats",
    responses(
        (status = 200, description = "Aggregate platform figures", body = DashboardStats),
        (status = 403, description = "Missing view-analytics permission")
    ),
    security(("bearer_auth" = [])),
    tag = "Admin Dashboard"
)]
#[instrument(skip_all)]
pub async fn dashboard_stats(
    _gate: RequireViewAnalytics,
    State(state): State<AppState>,
) -> Result<Json<DashboardStats>, AppError> {
    let stats = DashboardService::stats(&state.db).await?;
    Ok(Json(stats))
}
