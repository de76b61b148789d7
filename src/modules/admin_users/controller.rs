use axum::{
    Json,
    extract::{Path, Query, State},
};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::middleware::admin_auth::{RequireManageUsers, RequireSuperAdmin};
use crate::modules::auth::model::{MessageResponse, User};
use crate::state::AppState;
use crate::utils::errors::AppError;

use super::model::{PaginatedUsersResponse, UserFilterParams};
use super::service::AdminUserService;

/// List users with search, category filter and pagination
#[utoipa::path(
    get,
    path = "/admin/users",
    params(
        ("search" = Option<String>, Query, description = "Substring match on name or email"),
        ("type" = Option<String>, Query, description = "Exact user category"),
        ("page" = Option<i64>, Query, description = "1-based page number"),
        ("limit" = Option<i64>, Query, description = "Page size, 1-100")
    ),
    responses(
        (status = 200, description = "Paginated user listing", body = PaginatedUsersResponse),
        (status = 403, description = "Missing manage-users permission")
    ),
    security(("bearer_auth" = [])),
    tag = "Admin Users"
)]
#[instrument(skip_all)]
pub async fn list_users(
    _gate: RequireManageUsers,
    State(state): State<AppState>,
    Query(filters): Query<UserFilterParams>,
) -> Result<Json<PaginatedUsersResponse>, AppError> {
    let page = AdminUserService::list(&state.db, filters).await?;
    Ok(Json(page))
}

/// Block or unblock a user account
#[utoipa::path(
    patch,
    path = "/admin/users/{user_id}/toggle-status",
    params(("user_id" = Uuid, Path, description = "User ID")),
    responses(
        (status = 200, description = "Updated user", body = User),
        (status = 403, description = "Missing manage-users permission"),
        (status = 404, description = "User not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Admin Users"
)]
#[instrument(skip_all, fields(user_id = %user_id))]
pub async fn toggle_user_status(
    RequireManageUsers(session): RequireManageUsers,
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<User>, AppError> {
    let user = AdminUserService::toggle_status(&state.db, user_id).await?;
    info!(
        admin = %session.0.username,
        active = user.is_active,
        "User status toggled"
    );
    Ok(Json(user))
}

/// Permanently delete a user and everything they own
#[utoipa::path(
    delete,
    path = "/admin/users/{user_id}",
    params(("user_id" = Uuid, Path, description = "User ID")),
    responses(
        (status = 200, description = "User deleted", body = MessageResponse),
        (status = 403, description = "Super admin access required"),
        (status = 404, description = "User not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Admin Users"
)]
#[instrument(skip_all, fields(user_id = %user_id))]
pub async fn delete_user(
    RequireSuperAdmin(session): RequireSuperAdmin,
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    AdminUserService::delete(&state.db, user_id).await?;
    info!(admin = %session.0.username, "User deleted");
    Ok(Json(MessageResponse {
        message: "User deleted successfully".to_string(),
    }))
}
