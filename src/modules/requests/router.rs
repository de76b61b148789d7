use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{accept_request, create_request, list_all_requests, list_own_requests};

pub fn init_requests_router() -> Router<AppState> {
    Router::new()
        .route("/requests", get(list_own_requests).post(create_request))
        .route("/allrequests", get(list_all_requests))
        .route("/requests/{id}", get(accept_request))
}
