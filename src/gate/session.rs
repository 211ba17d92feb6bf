//! Session snapshot shapes as the external auth collaborator delivers them,
//! plus the coerced subject view handed to custom predicates.

use serde::{Deserialize, Serialize};

use crate::registry::Role;

/// Subject attributes at the boundary. `role` is an untyped string here;
/// coercion to a [`Role`] happens when an [`AuthContext`] is built.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionUser {
    pub id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

/// One observation of session state. `pending` marks resolution still in
/// flight; a later observation is a fresh value handed to a fresh
/// evaluation, never a mutation of this one.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionSnapshot {
    #[serde(default)]
    pub user: Option<SessionUser>,
    #[serde(default)]
    pub pending: bool,
}

impl SessionSnapshot {
    /// Resolution still in flight.
    pub fn resolving() -> Self {
        Self {
            user: None,
            pending: true,
        }
    }

    /// Resolved, no authenticated subject.
    pub fn signed_out() -> Self {
        Self::default()
    }

    pub fn signed_in(user: SessionUser) -> Self {
        Self {
            user: Some(user),
            pending: false,
        }
    }
}

/// Subject view after boundary coercion: a missing role defaults to the
/// least-privileged tier, an unrecognized role string to no tier at all, so
/// every downstream check fails closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: Option<Role>,
}

impl AuthUser {
    pub fn from_session(user: &SessionUser) -> Self {
        Self {
            id: user.id.clone(),
            email: user.email.clone(),
            name: user.name.clone(),
            role: Role::from_session_str(user.role.as_deref()),
        }
    }
}

/// Input handed to custom condition predicates: the coerced subject (if
/// any) and the raw snapshot it came from.
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub user: Option<AuthUser>,
    pub session: SessionSnapshot,
}

impl AuthContext {
    pub fn from_snapshot(session: &SessionSnapshot) -> Self {
        Self {
            user: session.user.as_ref().map(AuthUser::from_session),
            session: session.clone(),
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().and_then(|user| user.role)
    }
}
