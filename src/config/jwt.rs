use std::env;

/// Token signing configuration.
///
/// End-user and admin sessions are signed with distinct secrets, so a leaked
/// end-user token can never be replayed against the admin surface.
#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub user_secret: String,
    pub admin_secret: String,
    /// End-user token lifetime in seconds
    pub user_token_expiry: i64,
    /// Admin token lifetime in seconds
    pub admin_token_expiry: i64,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        Self {
            user_secret: env::var("JWT_SECRET")
                .unwrap_or_else(|_| "your-secret-key-change-in-production".to_string()),
            admin_secret: env::var("ADMIN_JWT_SECRET")
                .unwrap_or_else(|_| "your-admin-secret-key-change-in-production".to_string()),
            user_token_expiry: env::var("JWT_USER_EXPIRY")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(604800), // 7 days
            admin_token_expiry: env::var("JWT_ADMIN_EXPIRY")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(86400), // 24 hours
        }
    }
}
