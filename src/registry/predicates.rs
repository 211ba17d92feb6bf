//! Hard-coded role-threshold predicates used by the admin surfaces.
//!
//! These intentionally do not consult the statement table. They encode the
//! same thresholds the admin call sites were written against, and they can
//! drift from `has_permission` if the grants are edited without updating
//! them. Both paths are kept; the integration tests pin the one known gap
//! (admin lacks `billing:manage` on both paths) instead of unifying them.

use super::role::Role;

pub fn can_manage_users(role: Role) -> bool {
    matches!(role, Role::Admin | Role::Superadmin)
}

pub fn can_ban_users(role: Role) -> bool {
    matches!(role, Role::Admin | Role::Superadmin)
}

pub fn can_delete_users(role: Role) -> bool {
    matches!(role, Role::Superadmin)
}

pub fn can_impersonate_users(role: Role) -> bool {
    matches!(role, Role::Superadmin)
}

pub fn can_set_user_roles(role: Role) -> bool {
    matches!(role, Role::Admin | Role::Superadmin)
}

pub fn can_create_users(role: Role) -> bool {
    matches!(role, Role::Admin | Role::Superadmin)
}

pub fn can_manage_organizations(role: Role) -> bool {
    matches!(role, Role::Admin | Role::Superadmin)
}

pub fn can_manage_billing(role: Role) -> bool {
    matches!(role, Role::Superadmin)
}
