use axum::{Router, routing::get, routing::post};

use crate::state::AppState;

use super::controller::{admin_login, admin_logout, admin_setup, admin_verify};

pub fn init_admin_auth_router() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(admin_login))
        .route("/auth/logout", post(admin_logout))
        .route("/auth/verify", get(admin_verify))
        .route("/setup", post(admin_setup))
}
