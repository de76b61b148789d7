use axum::{
    Router,
    routing::{delete, get, patch},
};

use crate::state::AppState;

use super::controller::{delete_user, list_users, toggle_user_status};

pub fn init_admin_users_router() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users))
        .route("/users/{user_id}/toggle-status", patch(toggle_user_status))
        .route("/users/{user_id}", delete(delete_user))
}
