use axum::{Router, routing::post};

use crate::state::AppState;

use super::controller::create_complaint;

pub fn init_complaints_router() -> Router<AppState> {
    Router::new().route("/complaints", post(create_complaint))
}
