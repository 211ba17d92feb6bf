//! Permission registry: the declared statement table, per-role grants and
//! the convenience predicates used by admin call sites.
//! Keep the public surface thin and split implementation across sub-modules.

mod grants;
mod predicates;
mod resource;
mod role;
mod statement;

pub use grants::{PermissionRegistry, RegistryBuilder};
pub use predicates::{
    can_ban_users, can_create_users, can_delete_users, can_impersonate_users, can_manage_billing,
    can_manage_organizations, can_manage_users, can_set_user_roles,
};
pub use resource::{BillingAction, Permission, ProjectAction, Resource, SessionAction, UserAction};
pub use role::Role;
pub use statement::StatementTable;
