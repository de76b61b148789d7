use anyhow::Context;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::instrument;
use uuid::Uuid;

use crate::modules::requests::model::{
    Request, RequestOwnerRow, RequestStatus, RequestWithOwner,
};
use crate::utils::errors::AppError;
use crate::utils::pagination::PaginationMeta;

use super::model::{PaginatedRequestsResponse, RequestFilterParams};

fn push_filters(qb: &mut QueryBuilder<'_, Postgres>, filters: &RequestFilterParams) {
    if let Some(status) = filters.status.as_deref().filter(|s| !s.is_empty()) {
        qb.push(" AND r.status = ").push_bind(status.to_string());
    }
    if let Some(search) = filters.search.as_deref().filter(|s| !s.is_empty()) {
        let pattern = format!("%{}%", search);
        qb.push(" AND (r.title ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR r.description ILIKE ")
            .push_bind(pattern)
            .push(")");
    }
}

pub struct AdminRequestService;

impl AdminRequestService {
    /// Paginated request listing with owner details joined in.
    #[instrument(skip(db))]
    pub async fn list(
        db: &PgPool,
        filters: RequestFilterParams,
    ) -> Result<PaginatedRequestsResponse, AppError> {
        let mut count_qb = QueryBuilder::new("SELECT COUNT(*) FROM requests r WHERE TRUE");
        push_filters(&mut count_qb, &filters);
        let total: i64 = count_qb
            .build_query_scalar()
            .fetch_one(db)
            .await
            .context("Failed to count requests")
            .map_err(AppError::database)?;

        let mut list_qb = QueryBuilder::new(
            r#"
            SELECT r.*, u.name AS owner_name, u.email AS owner_email, u.user_type AS owner_type
            FROM requests r
            JOIN users u ON u.id = r.user_id
            WHERE TRUE
            "#,
        );
        push_filters(&mut list_qb, &filters);
        list_qb
            .push(" ORDER BY r.created_at DESC LIMIT ")
            .push_bind(filters.pagination.limit())
            .push(" OFFSET ")
            .push_bind(filters.pagination.offset());

        let rows = list_qb
            .build_query_as::<RequestOwnerRow>()
            .fetch_all(db)
            .await
            .context("Failed to fetch requests")
            .map_err(AppError::database)?;

        Ok(PaginatedRequestsResponse {
            data: rows.into_iter().map(RequestWithOwner::from).collect(),
            meta: PaginationMeta::new(total, &filters.pagination),
        })
    }

    /// Mark a request completed, the moderation close-out.
    #[instrument(skip(db))]
    pub async fn complete(db: &PgPool, id: Uuid) -> Result<Request, AppError> {
        let request = sqlx::query_as::<_, Request>(
            r#"
            UPDATE requests
            SET status = $1, updated_at = NOW()
            WHERE id = $2
            RETURNING *
            "#,
        )
        .bind(RequestStatus::Completed)
        .bind(id)
        .fetch_optional(db)
        .await
        .context("Failed to complete request")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Request not found")))?;

        Ok(request)
    }

    #[instrument(skip(db))]
    pub async fn delete(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM requests WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .context("Failed to delete request")
            .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Request not found")));
        }

        Ok(())
    }
}
