use axum::{Router, routing::get, routing::post};

use crate::state::AppState;

use super::controller::{health, login, logout, profile, register, user_exists};

pub fn init_auth_router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/logout", get(logout))
        .route("/user", get(profile))
        .route("/userexist", get(user_exists))
        .route("/health", get(health))
}
