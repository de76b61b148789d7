use anyhow::Context;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::instrument;
use uuid::Uuid;

use crate::modules::auth::model::User;
use crate::utils::errors::AppError;
use crate::utils::pagination::PaginationMeta;

use super::model::{PaginatedUsersResponse, UserFilterParams};

fn push_filters(qb: &mut QueryBuilder<'_, Postgres>, filters: &UserFilterParams) {
    if let Some(search) = filters.search.as_deref().filter(|s| !s.is_empty()) {
        let pattern = format!("%{}%", search);
        qb.push(" AND (name ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR email ILIKE ")
            .push_bind(pattern)
            .push(")");
    }
    if let Some(user_type) = filters.user_type.as_deref().filter(|s| !s.is_empty()) {
        qb.push(" AND user_type = ").push_bind(user_type.to_string());
    }
}

pub struct AdminUserService;

impl AdminUserService {
    /// Paginated user listing with optional search and category filters.
    #[instrument(skip(db))]
    pub async fn list(
        db: &PgPool,
        filters: UserFilterParams,
    ) -> Result<PaginatedUsersResponse, AppError> {
        let mut count_qb = QueryBuilder::new("SELECT COUNT(*) FROM users WHERE TRUE");
        push_filters(&mut count_qb, &filters);
        let total: i64 = count_qb
            .build_query_scalar()
            .fetch_one(db)
            .await
            .context("Failed to count users")
            .map_err(AppError::database)?;

        let mut list_qb = QueryBuilder::new("SELECT * FROM users WHERE TRUE");
        push_filters(&mut list_qb, &filters);
        list_qb
            .push(" ORDER BY created_at DESC LIMIT ")
            .push_bind(filters.pagination.limit())
            .push(" OFFSET ")
            .push_bind(filters.pagination.offset());

        let users = list_qb
            .build_query_as::<User>()
            .fetch_all(db)
            .await
            .context("Failed to fetch users")
            .map_err(AppError::database)?;

        Ok(PaginatedUsersResponse {
            data: users,
            meta: PaginationMeta::new(total, &filters.pagination),
        })
    }

    /// Flip the active flag, blocking or unblocking the account.
    #[instrument(skip(db))]
    pub async fn toggle_status(db: &PgPool, id: Uuid) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET is_active = NOT is_active, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
        .context("Failed to toggle user status")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("User not found")))?;

        Ok(user)
    }

    /// Delete an account together with its requests and the complaints
    /// referencing it, in a single transaction so a mid-cascade failure
    /// cannot leave orphaned records.
    #[instrument(skip(db))]
    pub async fn delete(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let mut tx = db
            .begin()
            .await
            .context("Failed to begin transaction")
            .map_err(AppError::database)?;

        sqlx::query("DELETE FROM requests WHERE user_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .context("Failed to delete user's requests")
            .map_err(AppError::database)?;

        sqlx::query("DELETE FROM complaints WHERE reported_user = $1 OR reported_by = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .context("Failed to delete user's complaints")
            .map_err(AppError::database)?;

        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .context("Failed to delete user")
            .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("User not found")));
        }

        tx.commit()
            .await
            .context("Failed to commit cascade delete")
            .map_err(AppError::database)?;

        Ok(())
    }
}
