use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::modules::requests::model::RequestWithOwner;
use crate::utils::pagination::{PaginationMeta, PaginationParams};

/// Query parameters for the admin request listing.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct RequestFilterParams {
    /// Exact-match status filter
    pub status: Option<String>,
    /// Case-insensitive substring match against title or description
    pub search: Option<String>,
    #[serde(flatten)]
    pub pagination: PaginationParams,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedRequestsResponse {
    pub data: Vec<RequestWithOwner>,
    pub meta: PaginationMeta,
}
