use anyhow::Context;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::instrument;
use uuid::Uuid;

use crate::modules::complaints::model::{Complaint, ComplaintStatus};
use crate::utils::errors::AppError;
use crate::utils::pagination::PaginationMeta;

use super::model::{
    ComplaintFilterParams, ComplaintPartiesRow, ComplaintWithParties, PaginatedComplaintsResponse,
    UpdateComplaintDto,
};

const COMPLAINT_WITH_PARTIES: &str = r#"
    SELECT c.*,
        ru.name AS reporter_name, ru.email AS reporter_email, ru.user_type AS reporter_type,
        tu.name AS reported_name, tu.email AS reported_email,
        a.username AS handler_username
    FROM complaints c
    JOIN users ru ON ru.id = c.reported_by
    LEFT JOIN users tu ON tu.id = c.reported_user
    LEFT JOIN admins a ON a.id = c.handled_by
"#;

fn push_filters(qb: &mut QueryBuilder<'_, Postgres>, filters: &ComplaintFilterParams) {
    if let Some(status) = filters.status.as_deref().filter(|s| !s.is_empty()) {
        qb.push(" AND c.status = ").push_bind(status.to_string());
    }
    if let Some(kind) = filters.complaint_type.as_deref().filter(|s| !s.is_empty()) {
        qb.push(" AND c.complaint_type = ").push_bind(kind.to_string());
    }
}

pub struct AdminComplaintService;

impl AdminComplaintService {
    /// Paginated complaint listing with reporter, reported user and
    /// handling admin populated.
    #[instrument(skip(db))]
    pub async fn list(
        db: &PgPool,
        filters: ComplaintFilterParams,
    ) -> Result<PaginatedComplaintsResponse, AppError> {
        let mut count_qb = QueryBuilder::new("SELECT COUNT(*) FROM complaints c WHERE TRUE");
        push_filters(&mut count_qb, &filters);
        let total: i64 = count_qb
            .build_query_scalar()
            .fetch_one(db)
            .await
            .context("Failed to count complaints")
            .map_err(AppError::database)?;

        let mut list_qb = QueryBuilder::new(COMPLAINT_WITH_PARTIES);
        list_qb.push(" WHERE TRUE");
        push_filters(&mut list_qb, &filters);
        list_qb
            .push(" ORDER BY c.created_at DESC LIMIT ")
            .push_bind(filters.pagination.limit())
            .push(" OFFSET ")
            .push_bind(filters.pagination.offset());

        let rows = list_qb
            .build_query_as::<ComplaintPartiesRow>()
            .fetch_all(db)
            .await
            .context("Failed to fetch complaints")
            .map_err(AppError::database)?;

        Ok(PaginatedComplaintsResponse {
            data: rows.into_iter().map(ComplaintWithParties::from).collect(),
            meta: PaginationMeta::new(total, &filters.pagination),
        })
    }

    /// Update a complaint's status and response, recording which admin
    /// handled it. `resolved_at` is stamped the first time the status
    /// reaches `resolved` and never overwritten.
    #[instrument(skip(db, dto))]
    pub async fn update(
        db: &PgPool,
        id: Uuid,
        admin_id: Uuid,
        dto: UpdateComplaintDto,
    ) -> Result<ComplaintWithParties, AppError> {
        let resolved = dto.status == ComplaintStatus::Resolved;

        let updated = sqlx::query_as::<_, Complaint>(
            r#"
            UPDATE complaints
            SET status = $1,
                admin_response = COALESCE($2, admin_response),
                handled_by = $3,
                resolved_at = CASE WHEN $4 THEN COALESCE(resolved_at, NOW()) ELSE resolved_at END,
                updated_at = NOW()
            WHERE id = $5
            RETURNING *
            "#,
        )
        .bind(dto.status)
        .bind(dto.admin_response.as_deref())
        .bind(admin_id)
        .bind(resolved)
        .bind(id)
        .fetch_optional(db)
        .await
        .context("Failed to update complaint")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Complaint not found")))?;

        let row = sqlx::query_as::<_, ComplaintPartiesRow>(&format!(
            "{} WHERE c.id = $1",
            COMPLAINT_WITH_PARTIES
        ))
        .bind(updated.id)
        .fetch_one(db)
        .await
        .context("Failed to fetch updated complaint")
        .map_err(AppError::database)?;

        Ok(ComplaintWithParties::from(row))
    }
}
