use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, VariantNames};

/// Coarse privilege tier carried by a session subject. The derived `Ord`
/// follows privilege: `User < Admin < Superadmin`.
#[derive(
    Eq,
    Copy,
    Hash,
    Debug,
    Clone,
    Display,
    EnumIter,
    PartialEq,
    PartialOrd,
    Ord,
    Serialize,
    EnumString,
    Deserialize,
    VariantNames,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
    Superadmin,
}

impl Default for Role {
    fn default() -> Self {
        Role::User
    }
}

impl Role {
    /// Roles this role may hand out. The policy is strictly monotonic in
    /// privilege: nobody assigns a tier above their own, and every role may
    /// assign its own tier.
    pub fn assignable_roles(self) -> &'static [Role] {
        match self {
            Role::Superadmin => &[Role::User, Role::Admin, Role::Superadmin],
            Role::Admin => &[Role::User, Role::Admin],
            Role::User => &[Role::User],
        }
    }

    pub fn can_assign(self, target: Role) -> bool {
        self.assignable_roles().contains(&target)
    }

    /// Boundary coercion for the untyped role string the session collaborator
    /// delivers. An absent role defaults to the least-privileged tier; an
    /// unrecognized string yields no tier at all, so every downstream check
    /// fails closed instead of granting anything.
    pub fn from_session_str(raw: Option<&str>) -> Option<Role> {
        match raw {
            None => Some(Role::User),
            Some(s) => s.parse().ok(),
        }
    }
}
