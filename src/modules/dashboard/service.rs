use anyhow::Context;
use sqlx::PgPool;
use tracing::instrument;

use crate::modules::auth::model::User;
use crate::modules::requests::model::{RequestOwnerRow, RequestWithOwner};
use crate::utils::errors::AppError;

use super::model::DashboardStats;

async fn count(db: &PgPool, sql: &'static str) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(sql).fetch_one(db).await
}

pub struct DashboardService;

impl DashboardService {
    /// Gather the dashboard figures, running the count queries concurrently.
    #[instrument(skip(db))]
    pub async fn stats(db: &PgPool) -> Result<DashboardStats, AppError> {
        let (
            total_users,
            active_users,
            total_requests,
            active_requests,
            completed_requests,
            total_complaints,
            pending_complaints,
        ) = tokio::try_join!(
            count(db, "SELECT COUNT(*) FROM users"),
            count(db, "SELECT COUNT(*) FROM users WHERE is_active"),
            count(db, "SELECT COUNT(*) FROM requests"),
            count(db, "SELECT COUNT(*) FROM requests WHERE status = 'active'"),
            count(db, "SELECT COUNT(*) FROM requests WHERE status = 'completed'"),
            count(db, "SELECT COUNT(*) FROM complaints"),
            count(db, "SELECT COUNT(*) FROM complaints WHERE status = 'pending'"),
        )
        .context("Failed to gather dashboard counts")
        .map_err(AppError::database)?;

        let recent_users = sqlx::query_as::<_, User>(
            "SELECT * FROM users ORDER BY created_at DESC LIMIT 5",
        )
        .fetch_all(db)
        .await
        .context("Failed to fetch recent users")
        .map_err(AppError::database)?;

        let recent_requests = sqlx::query_as::<_, RequestOwnerRow>(
            r#"
            SELECT r.*, u.name AS owner_name, u.email AS owner_email, u.user_type AS owner_type
            FROM requests r
            JOIN users u ON u.id = r.user_id
            ORDER BY r.created_at DESC
            LIMIT 5
            "#,
        )
        .fetch_all(db)
        .await
        .context("Failed to fetch recent requests")
        .map_err(AppError::database)?
        .into_iter()
        .map(RequestWithOwner::from)
        .collect();

        Ok(DashboardStats {
            total_users,
            active_users,
            total_requests,
            active_requests,
            completed_requests,
            total_complaints,
            pending_complaints,
            recent_users,
            recent_requests,
        })
    }
}
