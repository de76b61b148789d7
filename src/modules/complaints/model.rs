//! Moderation-report models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "kebab-case")]
#[sqlx(type_name = "TEXT", rename_all = "kebab-case")]
pub enum ComplaintType {
    UserBehavior,
    InappropriateRequest,
    Spam,
    Fraud,
    Other,
}

/// Handling lifecycle: `pending` → `investigating` → `resolved` | `dismissed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "TEXT", rename_all = "lowercase")]
pub enum ComplaintStatus {
    Pending,
    Investigating,
    Resolved,
    Dismissed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "TEXT", rename_all = "lowercase")]
pub enum ComplaintPriority {
    Low,
    Medium,
    High,
    Urgent,
}

/// A moderation report filed by one account, optionally against another
/// account or a specific request.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Complaint {
    pub id: Uuid,
    pub reported_by: Uuid,
    pub reported_user: Option<Uuid>,
    pub request_id: Option<Uuid>,
    #[serde(rename = "type")]
    pub complaint_type: ComplaintType,
    pub title: String,
    pub description: String,
    pub status: ComplaintStatus,
    pub priority: ComplaintPriority,
    pub admin_response: Option<String>,
    pub handled_by: Option<Uuid>,
    pub resolved_at: Option<chrono::DateTime<chrono::Utc>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateComplaintDto {
    #[serde(rename = "type")]
    pub complaint_type: ComplaintType,
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(min = 1, max = 1000))]
    pub description: String,
    pub reported_user: Option<Uuid>,
    pub request_id: Option<Uuid>,
    pub priority: Option<ComplaintPriority>,
}
