pub mod admin_auth;
pub mod admin_complaints;
pub mod admin_requests;
pub mod admin_users;
pub mod auth;
pub mod complaints;
pub mod dashboard;
pub mod requests;
