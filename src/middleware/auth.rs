//! End-user session resolution.
//!
//! [`AuthSession`] turns an inbound token into a verified, live account
//! identity: locate the token (session cookie first, then bearer header),
//! decode it, then re-fetch the account record so revocation and
//! deactivation take effect immediately.

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use axum_extra::extract::cookie::CookieJar;
use uuid::Uuid;

use crate::modules::auth::model::User;
use crate::modules::auth::service::AuthService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::verify_user_token;

/// Cookie used for end-user sessions in same-domain deployments.
pub const USER_SESSION_COOKIE: &str = "token";

/// Locate a session token on the request.
///
/// The lookup order is fixed regardless of deployment environment: the
/// named session cookie wins, then an `Authorization: Bearer` header.
pub fn extract_token(parts: &Parts, cookie_name: &str) -> Option<String> {
    let jar = CookieJar::from_headers(&parts.headers);
    if let Some(cookie) = jar.get(cookie_name) {
        return Some(cookie.value().to_string());
    }

    parts
        .headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(|token| token.to_string())
}

/// Extractor providing the authenticated end-user's live account record.
#[derive(Debug, Clone)]
pub struct AuthSession(pub User);

impl FromRequestParts<AppState> for AuthSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = extract_token(parts, USER_SESSION_COOKIE).ok_or_else(|| {
            AppError::unauthorized(anyhow::anyhow!("Access denied. No token provided."))
        })?;

        let claims = verify_user_token(&token, &state.jwt_config)?;

        let user_id = Uuid::parse_str(&claims.sub)
            .map_err(|_| AppError::unauthorized(anyhow::anyhow!("Invalid user ID in token")))?;

        let user = AuthService::find_by_id(&state.db, user_id)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("User not found")))?;

        if !user.is_active {
            return Err(AppError::forbidden(anyhow::anyhow!(
                "Account has been blocked. Please contact support."
            ))
            .with_cleared_cookie(USER_SESSION_COOKIE));
        }

        Ok(AuthSession(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    fn parts_with_headers(headers: &[(&str, &str)]) -> Parts {
        let mut builder = Request::builder().uri("/api/user");
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        let (parts, ()) = builder.body(()).unwrap().into_parts();
        parts
    }

    #[test]
    fn test_extract_token_missing() {
        let parts = parts_with_headers(&[]);
        assert_eq!(extract_token(&parts, USER_SESSION_COOKIE), None);
    }

    #[test]
    fn test_extract_token_from_cookie() {
        let parts = parts_with_headers(&[("cookie", "token=abc123; other=x")]);
        assert_eq!(
            extract_token(&parts, USER_SESSION_COOKIE),
            Some("abc123".to_string())
        );
    }

    #[test]
    fn test_extract_token_from_bearer_header() {
        let parts = parts_with_headers(&[("authorization", "Bearer header-token")]);
        assert_eq!(
            extract_token(&parts, USER_SESSION_COOKIE),
            Some("header-token".to_string())
        );
    }

    #[test]
    fn test_cookie_takes_priority_over_header() {
        let parts = parts_with_headers(&[
            ("cookie", "token=cookie-token"),
            ("authorization", "Bearer header-token"),
        ]);
        assert_eq!(
            extract_token(&parts, USER_SESSION_COOKIE),
            Some("cookie-token".to_string())
        );
    }

    #[test]
    fn test_non_bearer_authorization_ignored() {
        let parts = parts_with_headers(&[("authorization", "Basic dXNlcjpwYXNz")]);
        assert_eq!(extract_token(&parts, USER_SESSION_COOKIE), None);
    }

    #[test]
    fn test_other_cookie_name_not_matched() {
        let parts = parts_with_headers(&[("cookie", "adminToken=abc123")]);
        assert_eq!(extract_token(&parts, USER_SESSION_COOKIE), None);
    }
}
