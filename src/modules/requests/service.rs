use anyhow::Context;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::utils::errors::AppError;

use super::model::{CreateRequestDto, Request, RequestOwnerRow, RequestStatus, RequestWithOwner};

const REQUEST_WITH_OWNER: &str = r#"
    SELECT r.*, u.name AS owner_name, u.email AS owner_email, u.user_type AS owner_type
    FROM requests r
    JOIN users u ON u.id = r.user_id
"#;

pub struct RequestService;

impl RequestService {
    #[instrument(skip(db, dto))]
    pub async fn create(
        db: &PgPool,
        owner_id: Uuid,
        dto: CreateRequestDto,
    ) -> Result<Request, AppError> {
        let request = sqlx::query_as::<_, Request>(
            r#"
            INSERT INTO requests (user_id, title, description, price, category, location)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(owner_id)
        .bind(&dto.title)
        .bind(&dto.description)
        .bind(dto.price)
        .bind(dto.category.as_deref().unwrap_or("general"))
        .bind(dto.location.as_deref().unwrap_or(""))
        .fetch_one(db)
        .await
        .context("Failed to insert request")
        .map_err(AppError::database)?;

        Ok(request)
    }

    #[instrument(skip(db))]
    pub async fn list_owned(db: &PgPool, owner_id: Uuid) -> Result<Vec<Request>, AppError> {
        let requests = sqlx::query_as::<_, Request>(
            "SELECT * FROM requests WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(owner_id)
        .fetch_all(db)
        .await
        .context("Failed to fetch owned requests")
        .map_err(AppError::database)?;

        Ok(requests)
    }

    #[instrument(skip(db))]
    pub async fn list_all(db: &PgPool) -> Result<Vec<RequestWithOwner>, AppError> {
        let rows = sqlx::query_as::<_, RequestOwnerRow>(&format!(
            "{} ORDER BY r.created_at DESC",
            REQUEST_WITH_OWNER
        ))
        .fetch_all(db)
        .await
        .context("Failed to fetch requests")
        .map_err(AppError::database)?;

        Ok(rows.into_iter().map(RequestWithOwner::from).collect())
    }

    /// Fetch a request and mark it accepted, the peer-acceptance flow.
    #[instrument(skip(db))]
    pub async fn accept(db: &PgPool, id: Uuid) -> Result<RequestWithOwner, AppError> {
        let updated = sqlx::query_as::<_, Request>(
            r#"
            UPDATE requests
            SET status = $1, updated_at = NOW()
            WHERE id = $2
            RETURNING *
            "#,
        )
        .bind(RequestStatus::Accepted)
        .bind(id)
        .fetch_optional(db)
        .await
        .context("Failed to accept request")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Request not found")))?;

        let row = sqlx::query_as::<_, RequestOwnerRow>(&format!(
            "{} WHERE r.id = $1",
            REQUEST_WITH_OWNER
        ))
        .bind(updated.id)
        .fetch_one(db)
        .await
        .context("Failed to fetch accepted request")
        .map_err(AppError::database)?;

        Ok(RequestWithOwner::from(row))
    }
}
