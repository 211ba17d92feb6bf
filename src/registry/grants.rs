//! Role grants and the registry value the gate consults.

use std::collections::{BTreeMap, BTreeSet};

use strum::IntoEnumIterator;
use tracing::debug;

use crate::error::{RegistryError, RegistryResult};

use super::resource::{BillingAction, Permission, ProjectAction, Resource, SessionAction, UserAction};
use super::role::Role;
use super::statement::StatementTable;

/// Immutable mapping from role to granted (resource, action) pairs.
/// Constructed once at process start and passed by reference to the gate
/// and to call sites. Grants are additive only: absence means denial, and
/// there is no explicit deny or override.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionRegistry {
    statements: StatementTable,
    grants: BTreeMap<Role, BTreeSet<Permission>>,
}

impl PermissionRegistry {
    /// The application's built-in policy:
    /// - `user`: project:create, project:read, billing:read
    /// - `admin`: every project action, billing:read/update, and the full
    ///   user and session administration sets
    /// - `superadmin`: everything admin has, plus billing:manage
    pub fn default_policy() -> Self {
        let user: BTreeSet<Permission> = [
            Permission::Project(ProjectAction::Create),
            Permission::Project(ProjectAction::Read),
            Permission::Billing(BillingAction::Read),
        ]
        .into_iter()
        .collect();

        let mut admin: BTreeSet<Permission> =
            ProjectAction::iter().map(Permission::Project).collect();
        admin.insert(Permission::Billing(BillingAction::Read));
        admin.insert(Permission::Billing(BillingAction::Update));
        admin.extend(UserAction::iter().map(Permission::User));
        admin.extend(SessionAction::iter().map(Permission::Session));

        let mut superadmin = admin.clone();
        superadmin.insert(Permission::Billing(BillingAction::Manage));

        let grants = BTreeMap::from([
            (Role::User, user),
            (Role::Admin, admin),
            (Role::Superadmin, superadmin),
        ]);
        Self {
            statements: StatementTable::builtin().clone(),
            grants,
        }
    }

    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    pub fn statements(&self) -> &StatementTable {
        &self.statements
    }

    /// Pure membership lookup. A role without grants, or a grant set without
    /// the pair, answers `false`; there is no error path.
    pub fn has_permission(&self, role: Role, permission: Permission) -> bool {
        self.grants
            .get(&role)
            .map_or(false, |granted| granted.contains(&permission))
    }

    /// Untyped probe for the session boundary, where role, resource and
    /// action all arrive as strings. Anything unknown fails closed.
    pub fn has_permission_named(&self, role: &str, resource: &str, action: &str) -> bool {
        let Ok(role) = role.parse::<Role>() else {
            return false;
        };
        if !self.statements.contains_named(resource, action) {
            return false;
        }
        match format!("{resource}:{action}").parse::<Permission>() {
            Ok(permission) => self.has_permission(role, permission),
            Err(_) => false,
        }
    }

    /// All pairs granted to a role, in stable order.
    pub fn permissions_of(&self, role: Role) -> impl Iterator<Item = Permission> + '_ {
        self.grants.get(&role).into_iter().flatten().copied()
    }
}

/// Builder for custom registries, e.g. a deployment that disables a whole
/// resource. `build` rejects grants over undeclared resources so an invalid
/// policy cannot be constructed silently.
#[derive(Debug, Default, Clone)]
pub struct RegistryBuilder {
    resources: BTreeSet<Resource>,
    grants: BTreeMap<Role, BTreeSet<Permission>>,
}

impl RegistryBuilder {
    pub fn declare(mut self, resource: Resource) -> Self {
        self.resources.insert(resource);
        self
    }

    pub fn grant(mut self, role: Role, permission: Permission) -> Self {
        self.grants.entry(role).or_default().insert(permission);
        self
    }

    pub fn grant_all<I: IntoIterator<Item = Permission>>(mut self, role: Role, permissions: I) -> Self {
        self.grants.entry(role).or_default().extend(permissions);
        self
    }

    pub fn build(self) -> RegistryResult<PermissionRegistry> {
        for (role, granted) in &self.grants {
            for permission in granted {
                if !self.resources.contains(&permission.resource()) {
                    return Err(RegistryError::UndeclaredStatement {
                        role: *role,
                        permission: *permission,
                    });
                }
            }
        }
        let statements = StatementTable::restricted_to(self.resources.iter().copied());
        debug!(
            target: "authgate::registry",
            "registry built: roles={} statements={}",
            self.grants.len(),
            statements.len()
        );
        Ok(PermissionRegistry {
            statements,
            grants: self.grants,
        })
    }
}
