pub mod admin_auth;
pub mod auth;
