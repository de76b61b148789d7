use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::dashboard_stats;

pub fn init_dashboard_router() -> Router<AppState> {
    Router::new().route("/dashboard/stats", get(dashboard_stats))
}
