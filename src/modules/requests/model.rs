//! Delivery-request models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::modules::auth::model::UserSummary;

/// Lifecycle of a delivery request.
///
/// Requests start `active`, move to `accepted` when a peer takes them up,
/// and to `completed` or `cancelled` through moderation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "TEXT", rename_all = "lowercase")]
pub enum RequestStatus {
    Active,
    Completed,
    Cancelled,
    Accepted,
}

/// A posted item-delivery request.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Request {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: String,
    pub status: RequestStatus,
    pub price: f64,
    pub category: String,
    pub location: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateRequestDto {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub description: String,
    pub price: f64,
    pub category: Option<String>,
    pub location: Option<String>,
}

/// A request with its owner populated, for listings shown to other users
/// and to admins.
#[derive(Debug, Serialize, ToSchema)]
pub struct RequestWithOwner {
    #[serde(flatten)]
    pub request: Request,
    pub user: UserSummary,
}

/// Flat row produced by the requests-to-users join.
#[derive(Debug, FromRow)]
pub struct RequestOwnerRow {
    #[sqlx(flatten)]
    pub request: Request,
    pub owner_name: String,
    pub owner_email: String,
    pub owner_type: String,
}

impl From<RequestOwnerRow> for RequestWithOwner {
    fn from(row: RequestOwnerRow) -> Self {
        let user = UserSummary {
            id: row.request.user_id,
            name: row.owner_name,
            email: row.owner_email,
            user_type: row.owner_type,
        };
        Self {
            request: row.request,
            user,
        }
    }
}
