//! Per-call-site authorization requirements.

use std::fmt;

use crate::registry::{Permission, Role};

use super::session::AuthContext;

/// Custom predicate for requirements not expressible as a role or
/// permission check (email-domain checks, signed-out-only content, ...).
pub type Condition = Box<dyn Fn(&AuthContext) -> bool + Send + Sync>;

/// Conjunction of guards for one protected call site. Constructed where the
/// content is declared, evaluated once against a snapshot, then discarded;
/// it holds no state across evaluations.
///
/// The evaluator checks guards in a fixed order: pending session, then
/// authentication, role, permission, condition. The order matters: a
/// requirement may combine `public()` with a condition that inspects the
/// absence of a user, which an auth-first default would wrongly deny.
pub struct Requirement {
    pub(crate) require_auth: bool,
    pub(crate) role: Option<Role>,
    pub(crate) permission: Option<Permission>,
    pub(crate) condition: Option<Condition>,
}

impl Default for Requirement {
    fn default() -> Self {
        Self::new()
    }
}

impl Requirement {
    /// Default requirement: an authenticated subject, no further guards.
    pub fn new() -> Self {
        Self {
            require_auth: true,
            role: None,
            permission: None,
            condition: None,
        }
    }

    /// Requirement that also admits signed-out visitors. Combine with a
    /// condition for signed-out-only content.
    pub fn public() -> Self {
        Self {
            require_auth: false,
            ..Self::new()
        }
    }

    /// Require the subject's role to equal `role` exactly.
    pub fn role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    /// Require `permission` to be granted to the subject's role.
    pub fn permission(mut self, permission: Permission) -> Self {
        self.permission = Some(permission);
        self
    }

    /// Require `condition` to hold over the authorization context.
    pub fn condition<F>(mut self, condition: F) -> Self
    where
        F: Fn(&AuthContext) -> bool + Send + Sync + 'static,
    {
        self.condition = Some(Box::new(condition));
        self
    }
}

impl fmt::Debug for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Requirement")
            .field("require_auth", &self.require_auth)
            .field("role", &self.role)
            .field("permission", &self.permission)
            .field("condition", &self.condition.is_some())
            .finish()
    }
}
