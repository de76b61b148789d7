use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::modules::auth::model::UserSummary;
use crate::modules::complaints::model::{Complaint, ComplaintStatus};
use crate::utils::pagination::{PaginationMeta, PaginationParams};

/// Query parameters for the admin complaint listing.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ComplaintFilterParams {
    /// Exact-match status filter
    pub status: Option<String>,
    /// Exact-match complaint type filter (wire name `type`)
    #[serde(rename = "type")]
    pub complaint_type: Option<String>,
    #[serde(flatten)]
    pub pagination: PaginationParams,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateComplaintDto {
    pub status: ComplaintStatus,
    #[validate(length(max = 1000))]
    pub admin_response: Option<String>,
}

/// Minimal reference to an account named by a complaint.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PartyRef {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

/// A complaint with its parties populated for the moderation queue.
#[derive(Debug, Serialize, ToSchema)]
pub struct ComplaintWithParties {
    #[serde(flatten)]
    pub complaint: Complaint,
    pub reporter: UserSummary,
    /// Absent when no user was named or the named user no longer exists
    pub reported: Option<PartyRef>,
    pub handled_by_username: Option<String>,
}

/// Flat row produced by the complaints-to-parties joins.
#[derive(Debug, FromRow)]
pub struct ComplaintPartiesRow {
    #[sqlx(flatten)]
    pub complaint: Complaint,
    pub reporter_name: String,
    pub reporter_email: String,
    pub reporter_type: String,
    pub reported_name: Option<String>,
    pub reported_email: Option<String>,
    pub handler_username: Option<String>,
}

impl From<ComplaintPartiesRow> for ComplaintWithParties {
    fn from(row: ComplaintPartiesRow) -> Self {
        let reporter = UserSummary {
            id: row.complaint.reported_by,
            name: row.reporter_name,
            email: row.reporter_email,
            user_type: row.reporter_type,
        };
        let reported = match (row.complaint.reported_user, row.reported_name, row.reported_email)
        {
            (Some(id), Some(name), Some(email)) => Some(PartyRef { id, name, email }),
            _ => None,
        };
        Self {
            complaint: row.complaint,
            reporter,
            reported,
            handled_by_username: row.handler_username,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedComplaintsResponse {
    pub data: Vec<ComplaintWithParties>,
    pub meta: PaginationMeta,
}
