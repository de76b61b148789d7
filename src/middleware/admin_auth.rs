//! Admin session resolution and the authorization gate.
//!
//! [`AdminSession`] mirrors end-user session resolution over the admin
//! cookie and the admin signing secret. The permission extractors generated
//! by [`require_permission!`] compose the gate on top: super-admins pass
//! unconditionally, other admins need the named flag set on their record.

use axum::{extract::FromRequestParts, http::request::Parts};
use uuid::Uuid;

use crate::modules::admin_auth::model::{Admin, Permission};
use crate::modules::admin_auth::service::AdminAuthService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::verify_admin_token;

use super::auth::extract_token;

/// Cookie used for admin sessions.
pub const ADMIN_SESSION_COOKIE: &str = "adminToken";

/// Extractor providing the authenticated admin's live account record.
#[derive(Debug, Clone)]
pub struct AdminSession(pub Admin);

impl FromRequestParts<AppState> for AdminSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = extract_token(parts, ADMIN_SESSION_COOKIE).ok_or_else(|| {
            AppError::unauthorized(anyhow::anyhow!("Access denied. No admin token provided."))
        })?;

        let claims = verify_admin_token(&token, &state.jwt_config)?;

        let admin_id = Uuid::parse_str(&claims.sub)
            .map_err(|_| AppError::unauthorized(anyhow::anyhow!("Invalid admin ID in token")))?;

        let admin = AdminAuthService::find_by_id(&state.db, admin_id)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Admin not found")))?;

        if !admin.is_active {
            return Err(AppError::forbidden(anyhow::anyhow!(
                "Admin account is disabled."
            ))
            .with_cleared_cookie(ADMIN_SESSION_COOKIE));
        }

        Ok(AdminSession(admin))
    }
}

/// Extractor that additionally requires the `super-admin` role.
#[derive(Debug, Clone)]
pub struct RequireSuperAdmin(pub AdminSession);

impl FromRequestParts<AppState> for RequireSuperAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let session = AdminSession::from_request_parts(parts, state).await?;

        if !session.0.is_super_admin() {
            return Err(AppError::forbidden(anyhow::anyhow!(
                "Super admin access required."
            )));
        }

        Ok(RequireSuperAdmin(session))
    }
}

/// Generates a permission-gated extractor on top of [`AdminSession`].
macro_rules! require_permission {
    ($name:ident, $permission:expr) => {
        #[derive(Debug, Clone)]
        pub struct $name(pub AdminSession);

        impl FromRequestParts<AppState> for $name {
            type Rejection = AppError;

            async fn from_request_parts(
                parts: &mut Parts,
                state: &AppState,
            ) -> Result<Self, Self::Rejection> {
                let session = AdminSession::from_request_parts(parts, state).await?;

                if !session.0.has_permission($permission) {
                    return Err(AppError::forbidden(anyhow::anyhow!(
                        "Insufficient permissions."
                    )));
                }

                Ok($name(session))
            }
        }
    };
}

require_permission!(RequireManageUsers, Permission::ManageUsers);
require_permission!(RequireManageRequests, Permission::ManageRequests);
require_permission!(RequireHandleComplaints, Permission::HandleComplaints);
require_permission!(RequireViewAnalytics, Permission::ViewAnalytics);
