//! The decision procedure: one requirement against one session snapshot.

use tracing::debug;

use crate::registry::{self, Permission, PermissionRegistry, Role};

use super::requirement::Requirement;
use super::session::{AuthContext, SessionSnapshot};

/// Outcome of one evaluation. `Pending` is not a denial: the session is
/// still being resolved by the auth collaborator and the caller should
/// render its loading placeholder and re-evaluate with the next snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Pending,
    Allow,
    Deny,
}

impl Decision {
    pub fn is_allow(self) -> bool {
        matches!(self, Decision::Allow)
    }

    pub fn is_deny(self) -> bool {
        matches!(self, Decision::Deny)
    }

    pub fn is_pending(self) -> bool {
        matches!(self, Decision::Pending)
    }

    /// Select between protected content, fallback content and a loading
    /// placeholder.
    pub fn select<T>(self, allow: T, deny: T, pending: T) -> T {
        match self {
            Decision::Allow => allow,
            Decision::Deny => deny,
            Decision::Pending => pending,
        }
    }
}

/// Evaluate a requirement against a session snapshot.
///
/// Pure: no caching, no I/O. Every call re-derives the decision from its
/// inputs, so a snapshot that transitions out of `pending` or gains a user
/// simply produces a different decision on the next call. Guards are
/// conjunctive; the first failing guard denies, in the fixed order
/// authentication, role, permission, condition.
pub fn evaluate(
    registry: &PermissionRegistry,
    session: &SessionSnapshot,
    requirement: &Requirement,
) -> Decision {
    if session.pending {
        return Decision::Pending;
    }
    let ctx = AuthContext::from_snapshot(session);

    if requirement.require_auth && ctx.user.is_none() {
        debug!(target: "authgate::gate", "deny: authentication required");
        return Decision::Deny;
    }
    if let Some(required) = requirement.role {
        if ctx.role() != Some(required) {
            debug!(target: "authgate::gate", "deny: role '{}' required", required);
            return Decision::Deny;
        }
    }
    if let Some(permission) = requirement.permission {
        let granted = ctx
            .role()
            .map_or(false, |role| registry.has_permission(role, permission));
        if !granted {
            debug!(target: "authgate::gate", "deny: permission '{}' not granted", permission);
            return Decision::Deny;
        }
    }
    if let Some(condition) = &requirement.condition {
        if !condition(&ctx) {
            debug!(target: "authgate::gate", "deny: condition not met");
            return Decision::Deny;
        }
    }
    Decision::Allow
}

/// Borrowing view over one (registry, snapshot) pair, offering the
/// programmatic checks call sites use outside declarative requirements.
#[derive(Debug, Clone, Copy)]
pub struct Gate<'a> {
    registry: &'a PermissionRegistry,
    session: &'a SessionSnapshot,
}

impl<'a> Gate<'a> {
    pub fn new(registry: &'a PermissionRegistry, session: &'a SessionSnapshot) -> Self {
        Self { registry, session }
    }

    pub fn evaluate(&self, requirement: &Requirement) -> Decision {
        evaluate(self.registry, self.session, requirement)
    }

    pub fn is_pending(&self) -> bool {
        self.session.pending
    }

    pub fn is_authenticated(&self) -> bool {
        !self.session.pending && self.session.user.is_some()
    }

    fn role(&self) -> Option<Role> {
        if self.session.pending {
            return None;
        }
        self.session
            .user
            .as_ref()
            .and_then(|user| Role::from_session_str(user.role.as_deref()))
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.role() == Some(role)
    }

    pub fn has_permission(&self, permission: Permission) -> bool {
        self.role()
            .map_or(false, |role| self.registry.has_permission(role, permission))
    }

    pub fn check_condition<F>(&self, condition: F) -> bool
    where
        F: Fn(&AuthContext) -> bool,
    {
        condition(&AuthContext::from_snapshot(self.session))
    }

    pub fn can_manage_users(&self) -> bool {
        self.role().map_or(false, registry::can_manage_users)
    }

    pub fn can_ban_users(&self) -> bool {
        self.role().map_or(false, registry::can_ban_users)
    }

    pub fn can_delete_users(&self) -> bool {
        self.role().map_or(false, registry::can_delete_users)
    }

    pub fn can_impersonate_users(&self) -> bool {
        self.role().map_or(false, registry::can_impersonate_users)
    }

    pub fn can_set_user_roles(&self) -> bool {
        self.role().map_or(false, registry::can_set_user_roles)
    }

    pub fn can_create_users(&self) -> bool {
        self.role().map_or(false, registry::can_create_users)
    }

    pub fn can_manage_organizations(&self) -> bool {
        self.role().map_or(false, registry::can_manage_organizations)
    }

    pub fn can_manage_billing(&self) -> bool {
        self.role().map_or(false, registry::can_manage_billing)
    }
}
