use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::admin_auth::model::{
    Admin, AdminInfo, AdminLoginDto, AdminLoginResponse, AdminPermissions, AdminRole, SetupDto,
};
use crate::modules::admin_complaints::model::{
    ComplaintWithParties, PaginatedComplaintsResponse, PartyRef, UpdateComplaintDto,
};
use crate::modules::admin_requests::model::PaginatedRequestsResponse;
use crate::modules::admin_users::model::PaginatedUsersResponse;
use crate::modules::auth::model::{
    AuthResponse, LoginDto, MessageResponse, ProfileResponse, RegisterDto, User, UserSummary,
};
use crate::modules::complaints::model::{
    Complaint, ComplaintPriority, ComplaintStatus, ComplaintType, CreateComplaintDto,
};
use crate::modules::dashboard::model::DashboardStats;
use crate::modules::requests::model::{
    CreateRequestDto, Request, RequestStatus, RequestWithOwner,
};
use crate::utils::pagination::{PaginationMeta, PaginationParams};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::register,
        crate::modules::auth::controller::login,
        crate::modules::auth::controller::logout,
        crate::modules::auth::controller::profile,
        crate::modules::auth::controller::user_exists,
        crate::modules::auth::controller::health,
        crate::modules::requests::controller::list_own_requests,
        crate::modules::requests::controller::create_request,
        crate::modules::requests::controller::list_all_requests,
        crate::modules::requests::controller::accept_request,
        crate::modules::complaints::controller::create_complaint,
        crate::modules::admin_auth::controller::admin_login,
        crate::modules::admin_auth::controller::admin_logout,
        crate::modules::admin_auth::controller::admin_verify,
        crate::modules::admin_auth::controller::admin_setup,
        crate::modules::dashboard::controller::dashboard_stats,
        crate::modules::admin_users::controller::list_users,
        crate::modules::admin_users::controller::toggle_user_status,
        crate::modules::admin_users::controller::delete_user,
        crate::modules::admin_requests::controller::list_requests,
        crate::modules::admin_requests::controller::complete_request,
        crate::modules::admin_requests::controller::delete_request,
        crate::modules::admin_complaints::controller::list_complaints,
        crate::modules::admin_complaints::controller::update_complaint,
    ),
    components(
        schemas(
            User,
            UserSummary,
            RegisterDto,
            LoginDto,
            AuthResponse,
            ProfileResponse,
            MessageResponse,
            Request,
            RequestStatus,
            RequestWithOwner,
            CreateRequestDto,
            Complaint,
            ComplaintType,
            ComplaintStatus,
            ComplaintPriority,
            CreateComplaintDto,
            Admin,
            AdminRole,
            AdminPermissions,
            AdminInfo,
            AdminLoginDto,
            AdminLoginResponse,
            SetupDto,
            DashboardStats,
            UpdateComplaintDto,
            PartyRef,
            ComplaintWithParties,
            PaginatedUsersResponse,
            PaginatedRequestsResponse,
            PaginatedComplaintsResponse,
            PaginationMeta,
            PaginationParams,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "User registration and session endpoints"),
        (name = "Requests", description = "Delivery request marketplace"),
        (name = "Complaints", description = "Moderation reports"),
        (name = "Admin Authentication", description = "Admin session endpoints"),
        (name = "Admin Dashboard", description = "Platform statistics"),
        (name = "Admin Users", description = "User moderation"),
        (name = "Admin Requests", description = "Request moderation"),
        (name = "Admin Complaints", description = "Complaint handling")
    ),
    info(
        title = "CampusKart API",
        version = "0.1.0",
        description = "Campus delivery-request marketplace with a permission-gated admin panel, built with Rust, Axum, and PostgreSQL.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
