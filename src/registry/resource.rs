use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, VariantNames};

/// A named category of protected functionality. The statement table owns
/// the set of actions each resource supports; an action name only has
/// meaning paired with its resource.
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
pub enum Resource {
    /// Managed user accounts (admin console surface).
    User,
    /// Live sessions of other users (admin console surface).
    Session,
    /// Application projects.
    Project,
    /// Workspace billing.
    Billing,
}

/// Actions on managed user accounts.
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
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum UserAction {
    Create,
    List,
    SetRole,
    Ban,
    Impersonate,
    Delete,
    SetPassword,
}

/// Actions on other users' sessions.
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
pub enum SessionAction {
    List,
    Revoke,
    Delete,
}

/// Actions on projects.
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
pub enum ProjectAction {
    Create,
    Read,
    Update,
    Delete,
    Share,
}

/// Actions on billing.
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
pub enum BillingAction {
    Read,
    Update,
    Manage,
}

/// A declared (resource, action) pair. Being an enum, an undeclared pair is
/// unrepresentable at typed call sites; string probes for untyped callers go
/// through [`FromStr`], which fails on anything outside the table.
///
/// The wire form is `resource:action`, e.g. `project:create`, `user:set-role`.
#[derive(
    Eq,
    Copy,
    Hash,
    Debug,
    Clone,
    Display,
    PartialEq,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[serde(into = "String", try_from = "String")]
pub enum Permission {
    #[strum(to_string = "user:{0}")]
    User(UserAction),
    #[strum(to_string = "session:{0}")]
    Session(SessionAction),
    #[strum(to_string = "project:{0}")]
    Project(ProjectAction),
    #[strum(to_string = "billing:{0}")]
    Billing(BillingAction),
}

impl Permission {
    pub fn resource(self) -> Resource {
        match self {
            Permission::User(_) => Resource::User,
            Permission::Session(_) => Resource::Session,
            Permission::Project(_) => Resource::Project,
            Permission::Billing(_) => Resource::Billing,
        }
    }

    pub fn action_name(self) -> String {
        match self {
            Permission::User(action) => action.to_string(),
            Permission::Session(action) => action.to_string(),
            Permission::Project(action) => action.to_string(),
            Permission::Billing(action) => action.to_string(),
        }
    }

    /// Every declared pair, flattened across resources.
    pub fn iter_all() -> impl Iterator<Item = Permission> {
        UserAction::iter()
            .map(Permission::User)
            .chain(SessionAction::iter().map(Permission::Session))
            .chain(ProjectAction::iter().map(Permission::Project))
            .chain(BillingAction::iter().map(Permission::Billing))
    }
}

impl FromStr for Permission {
    type Err = strum::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((resource, action)) = s.split_once(':') else {
            return Err(strum::ParseError::VariantNotFound);
        };
        Ok(match resource {
            "user" => Self::User(action.parse()?),
            "session" => Self::Session(action.parse()?),
            "project" => Self::Project(action.parse()?),
            "billing" => Self::Billing(action.parse()?),
            _ => return Err(strum::ParseError::VariantNotFound),
        })
    }
}

impl From<Permission> for String {
    fn from(permission: Permission) -> String {
        permission.to_string()
    }
}

impl TryFrom<String> for Permission {
    type Error = strum::ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
