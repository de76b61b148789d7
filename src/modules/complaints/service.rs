use anyhow::Context;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::utils::errors::AppError;

use super::model::{Complaint, ComplaintPriority, CreateComplaintDto};

pub struct ComplaintService;

impl ComplaintService {
    #[instrument(skip(db, dto))]
    pub async fn create(
        db: &PgPool,
        reporter_id: Uuid,
        dto: CreateComplaintDto,
    ) -> Result<Complaint, AppError> {
        let complaint = sqlx::query_as::<_, Complaint>(
            r#"
            INSERT INTO complaints
                (reported_by, reported_user, request_id, complaint_type, title, description, priority)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(reporter_id)
        .bind(dto.reported_user)
        .bind(dto.request_id)
        .bind(dto.complaint_type)
        .bind(&dto.title)
        .bind(&dto.description)
        .bind(dto.priority.unwrap_or(ComplaintPriority::Medium))
        .fetch_one(db)
        .await
        .context("Failed to insert complaint")
        .map_err(AppError::database)?;

        Ok(complaint)
    }
}
