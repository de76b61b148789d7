//! Administrator account models and admin-session DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Administrator role. Super-admins bypass all permission-flag checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "kebab-case")]
#[sqlx(type_name = "TEXT", rename_all = "kebab-case")]
pub enum AdminRole {
    Admin,
    SuperAdmin,
}

impl AdminRole {
    pub fn as_str(self) -> &'static str {
        match self {
            AdminRole::Admin => "admin",
            AdminRole::SuperAdmin => "super-admin",
        }
    }
}

/// Named permission flags on an admin record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    ManageUsers,
    ManageRequests,
    HandleComplaints,
    ViewAnalytics,
    SystemSettings,
}

/// The fixed set of boolean permission flags carried by every admin record.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminPermissions {
    pub manage_users: bool,
    pub manage_requests: bool,
    pub handle_complaints: bool,
    pub view_analytics: bool,
    pub system_settings: bool,
}

impl AdminPermissions {
    /// All flags granted, used when bootstrapping the first super-admin.
    pub fn all() -> Self {
        Self {
            manage_users: true,
            manage_requests: true,
            handle_complaints: true,
            view_analytics: true,
            system_settings: true,
        }
    }
}

/// An administrator account.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Admin {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub role: AdminRole,
    pub is_active: bool,
    pub last_login: Option<chrono::DateTime<chrono::Utc>>,
    #[sqlx(flatten)]
    pub permissions: AdminPermissions,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Admin {
    pub fn is_super_admin(&self) -> bool {
        self.role == AdminRole::SuperAdmin
    }

    /// Authorization gate: super-admins pass unconditionally, everyone else
    /// needs the named flag set on their record.
    pub fn has_permission(&self, permission: Permission) -> bool {
        if self.is_super_admin() {
            return true;
        }
        match permission {
            Permission::ManageUsers => self.permissions.manage_users,
            Permission::ManageRequests => self.permissions.manage_requests,
            Permission::HandleComplaints => self.permissions.handle_complaints,
            Permission::ViewAnalytics => self.permissions.view_analytics,
            Permission::SystemSettings => self.permissions.system_settings,
        }
    }
}

/// Claims carried by an admin session token.
#[derive(Debug, Serialize, Deserialize)]
pub struct AdminClaims {
    /// Admin id
    pub sub: String,
    pub username: String,
    pub role: String,
    pub exp: usize,
    pub iat: usize,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AdminLoginDto {
    /// Username or email
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SetupDto {
    #[validate(length(min = 3, max = 50))]
    pub username: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 6))]
    pub password: String,
}

/// Public view of an admin account returned by login and verify.
#[derive(Debug, Serialize, ToSchema)]
pub struct AdminInfo {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub role: AdminRole,
    pub permissions: AdminPermissions,
    pub last_login: Option<chrono::DateTime<chrono::Utc>>,
}

impl From<&Admin> for AdminInfo {
    fn from(admin: &Admin) -> Self {
        Self {
            id: admin.id,
            username: admin.username.clone(),
            email: admin.email.clone(),
            role: admin.role,
            permissions: admin.permissions.clone(),
            last_login: admin.last_login,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AdminLoginResponse {
    pub message: String,
    pub admin: AdminInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin_with(role: AdminRole, permissions: AdminPermissions) -> Admin {
        Admin {
            id: Uuid::new_v4(),
            username: "moderator".to_string(),
            email: "moderator@example.com".to_string(),
            password: "hash".to_string(),
            role,
            is_active: true,
            last_login: None,
            permissions,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    fn no_permissions() -> AdminPermissions {
        AdminPermissions {
            manage_users: false,
            manage_requests: false,
            handle_complaints: false,
            view_analytics: false,
            system_settings: false,
        }
    }

    #[test]
    fn test_flag_grants_permission() {
        let mut perms = no_permissions();
        perms.manage_users = true;
        let admin = admin_with(AdminRole::Admin, perms);

        assert!(admin.has_permission(Permission::ManageUsers));
        assert!(!admin.has_permission(Permission::ManageRequests));
        assert!(!admin.has_permission(Permission::SystemSettings));
    }

    #[test]
    fn test_super_admin_bypasses_flags() {
        let admin = admin_with(AdminRole::SuperAdmin, no_permissions());

        assert!(admin.has_permission(Permission::ManageUsers));
        assert!(admin.has_permission(Permission::ManageRequests));
        assert!(admin.has_permission(Permission::HandleComplaints));
        assert!(admin.has_permission(Permission::ViewAnalytics));
        assert!(admin.has_permission(Permission::SystemSettings));
    }

    #[test]
    fn test_plain_admin_without_flag_denied() {
        let admin = admin_with(AdminRole::Admin, no_permissions());
        assert!(!admin.has_permission(Permission::ManageUsers));
        assert!(!admin.is_super_admin());
    }

    #[test]
    fn test_role_wire_format() {
        assert_eq!(
            serde_json::to_string(&AdminRole::SuperAdmin).unwrap(),
            "\"super-admin\""
        );
        assert_eq!(serde_json::to_string(&AdminRole::Admin).unwrap(), "\"admin\"");
        assert_eq!(AdminRole::SuperAdmin.as_str(), "super-admin");
    }
}
