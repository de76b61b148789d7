use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::auth::model::User;
use crate::modules::requests::model::RequestWithOwner;

/// Aggregate platform figures for the admin dashboard.
#[derive(Debug, Serialize, ToSchema)]
pub struct DashboardStats {
    pub total_users: i64,
    pub active_users: i64,
    pub total_requests: i64,
    pub active_requests: i64,
    pub completed_requests: i64,
    pub total_complaints: i64,
    pub pending_complaints: i64,
    /// Five most recently registered accounts
    pub recent_users: Vec<User>,
    /// Five most recently posted requests, owners populated
    pub recent_requests: Vec<RequestWithOwner>,
}
