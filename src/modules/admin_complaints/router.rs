use axum::{
    Router,
    routing::{get, patch},
};

use crate::state::AppState;

use super::controller::{list_complaints, update_complaint};

pub fn init_admin_complaints_router() -> Router<AppState> {
    Router::new()
        .route("/complaints", get(list_complaints))
        .route("/complaints/{complaint_id}", patch(update_complaint))
}
