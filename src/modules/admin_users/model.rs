use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::modules::auth::model::User;
use crate::utils::pagination::{PaginationMeta, PaginationParams};

/// Query parameters for the admin user listing.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UserFilterParams {
    /// Case-insensitive substring match against name or email
    pub search: Option<String>,
    /// Exact-match category filter (wire name `type`)
    #[serde(rename = "type")]
    pub user_type: Option<String>,
    #[serde(flatten)]
    pub pagination: PaginationParams,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedUsersResponse {
    pub data: Vec<User>,
    pub meta: PaginationMeta,
}
