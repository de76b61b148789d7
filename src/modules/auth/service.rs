use anyhow::Context;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::config::jwt::JwtConfig;
use crate::utils::errors::AppError;
use crate::utils::jwt::create_user_token;
use crate::utils::password::{hash_password, verify_password};

use super::model::{AuthResponse, LoginDto, RegisterDto, User, UserSummary};

pub struct AuthService;

impl AuthService {
    #[instrument(skip(db, dto, jwt_config))]
    pub async fn register(
        db: &PgPool,
        dto: RegisterDto,
        jwt_config: &JwtConfig,
    ) -> Result<AuthResponse, AppError> {
        let hashed_password = hash_password(&dto.password)?;

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, password, user_type)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&dto.name)
        .bind(&dto.email)
        .bind(&hashed_password)
        .bind(&dto.user_type)
        .fetch_one(db)
        .await
        .map_err(|e| AppError::from_sqlx(e, "An account with this email already exists"))?;

        let token = create_user_token(user.id, &user.email, jwt_config)?;

        Ok(AuthResponse {
            token,
            user: UserSummary::from(&user),
        })
    }

    #[instrument(skip(db, dto, jwt_config))]
    pub async fn login(
        db: &PgPool,
        dto: LoginDto,
        jwt_config: &JwtConfig,
    ) -> Result<AuthResponse, AppError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
            .bind(&dto.email)
            .fetch_optional(db)
            .await
            .context("Failed to fetch user by email")
            .map_err(AppError::database)?
            .ok_or_else(|| AppError::unauthorized(anyhow::anyhow!("Invalid email or password")))?;

        // Deactivated accounts cannot authenticate even with valid credentials
        if !user.is_active {
            return Err(AppError::forbidden(anyhow::anyhow!(
                "Account has been blocked. Please contact support."
            )));
        }

        let is_valid = verify_password(&dto.password, &user.password)?;
        if !is_valid {
            return Err(AppError::unauthorized(anyhow::anyhow!(
                "Invalid email or password"
            )));
        }

        let token = create_user_token(user.id, &user.email, jwt_config)?;

        Ok(AuthResponse {
            token,
            user: UserSummary::from(&user),
        })
    }

    /// Fetch the live account record for a decoded token subject.
    ///
    /// Session resolution re-reads the store on every request so that an
    /// admin-side deactivation takes effect immediately, even against an
    /// outstanding, otherwise-valid token.
    pub async fn find_by_id(db: &PgPool, id: Uuid) -> Result<Option<User>, AppError> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(db)
            .await
            .context("Failed to fetch user by ID")
            .map_err(AppError::database)
    }
}
