use axum::{
    Router,
    routing::{delete, get, patch},
};

use crate::state::AppState;

use super::controller::{complete_request, delete_request, list_requests};

pub fn init_admin_requests_router() -> Router<AppState> {
    Router::new()
        .route("/requests", get(list_requests))
        .route("/requests/{request_id}/complete", patch(complete_request))
        .route("/requests/{request_id}", delete(delete_request))
}
