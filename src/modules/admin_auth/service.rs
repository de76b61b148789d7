use anyhow::Context;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::config::jwt::JwtConfig;
use crate::utils::errors::AppError;
use crate::utils::jwt::create_admin_token;
use crate::utils::password::{hash_password, verify_password};

use super::model::{Admin, AdminLoginDto, AdminRole, SetupDto};

pub struct AdminAuthService;

impl AdminAuthService {
    /// Verify admin credentials (username or email) and issue a session
    /// token. Stamps `last_login` on success.
    #[instrument(skip(db, dto, jwt_config))]
    pub async fn login(
        db: &PgPool,
        dto: AdminLoginDto,
        jwt_config: &JwtConfig,
    ) -> Result<(Admin, String), AppError> {
        let admin = sqlx::query_as::<_, Admin>(
            "SELECT * FROM admins WHERE username = $1 OR email = $1",
        )
        .bind(&dto.username)
        .fetch_optional(db)
        .await
        .context("Failed to fetch admin")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::unauthorized(anyhow::anyhow!("Invalid credentials")))?;

        if !admin.is_active {
            return Err(AppError::unauthorized(anyhow::anyhow!(
                "Admin account is disabled"
            )));
        }

        let is_valid = verify_password(&dto.password, &admin.password)?;
        if !is_valid {
            return Err(AppError::unauthorized(anyhow::anyhow!(
                "Invalid credentials"
            )));
        }

        let admin = sqlx::query_as::<_, Admin>(
            "UPDATE admins SET last_login = NOW(), updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(admin.id)
        .fetch_one(db)
        .await
        .context("Failed to stamp last login")
        .map_err(AppError::database)?;

        let token = create_admin_token(admin.id, &admin.username, admin.role.as_str(), jwt_config)?;

        Ok((admin, token))
    }

    /// Fetch the live admin record for a decoded token subject.
    pub async fn find_by_id(db: &PgPool, id: Uuid) -> Result<Option<Admin>, AppError> {
        sqlx::query_as::<_, Admin>("SELECT * FROM admins WHERE id = $1")
            .bind(id)
            .fetch_optional(db)
            .await
            .context("Failed to fetch admin by ID")
            .map_err(AppError::database)
    }

    /// One-time bootstrap of the first super-admin. Refuses to run once any
    /// admin record exists, so the endpoint is self-disabling.
    #[instrument(skip(db, dto))]
    pub async fn setup(db: &PgPool, dto: SetupDto) -> Result<Admin, AppError> {
        let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM admins")
            .fetch_one(db)
            .await
            .context("Failed to count admins")
            .map_err(AppError::database)?;

        if existing > 0 {
            return Err(AppError::validation(anyhow::anyhow!("Admin already exists")));
        }

        let hashed_password = hash_password(&dto.password)?;

        let admin = sqlx::query_as::<_, Admin>(
            r#"
            INSERT INTO admins
                (username, email, password, role,
                 manage_users, manage_requests, handle_complaints, view_analytics, system_settings)
            VALUES ($1, $2, $3, $4, TRUE, TRUE, TRUE, TRUE, TRUE)
            RETURNING *
            "#,
        )
        .bind(&dto.username)
        .bind(&dto.email)
        .bind(&hashed_password)
        .bind(AdminRole::SuperAdmin)
        .fetch_one(db)
        .await
        .map_err(|e| AppError::from_sqlx(e, "An admin with this username or email already exists"))?;

        Ok(admin)
    }
}
