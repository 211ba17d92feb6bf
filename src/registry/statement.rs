//! The statement table: the declared universe of (resource, action) pairs.
//! Built once from the permission enums and shared read-only for the
//! lifetime of the process.

use std::collections::{BTreeMap, BTreeSet};

use once_cell::sync::Lazy;
use strum::IntoEnumIterator;

use super::resource::{Permission, Resource};

static BUILTIN: Lazy<StatementTable> = Lazy::new(StatementTable::from_declared);

/// Resource -> supported action names. The single source of truth for which
/// pairs exist; string probes on anything undeclared answer `false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementTable {
    statements: BTreeMap<Resource, BTreeSet<String>>,
}

impl StatementTable {
    fn from_declared() -> Self {
        let mut statements: BTreeMap<Resource, BTreeSet<String>> = BTreeMap::new();
        for resource in Resource::iter() {
            statements.entry(resource).or_default();
        }
        for permission in Permission::iter_all() {
            statements
                .entry(permission.resource())
                .or_default()
                .insert(permission.action_name());
        }
        Self { statements }
    }

    /// The full table derived from the declared enums.
    pub fn builtin() -> &'static StatementTable {
        &BUILTIN
    }

    /// A table covering only the given resources, for deployments that wire
    /// up a subset of the application surface.
    pub fn restricted_to<I: IntoIterator<Item = Resource>>(resources: I) -> StatementTable {
        let keep: BTreeSet<Resource> = resources.into_iter().collect();
        let statements = BUILTIN
            .statements
            .iter()
            .filter(|(resource, _)| keep.contains(resource))
            .map(|(resource, actions)| (*resource, actions.clone()))
            .collect();
        Self { statements }
    }

    pub fn contains(&self, permission: Permission) -> bool {
        self.statements
            .get(&permission.resource())
            .map_or(false, |actions| actions.contains(&permission.action_name()))
    }

    /// String-keyed probe for callers holding untyped names. The UI probes
    /// defensively before a resource is fully wired up, so an unknown
    /// resource or action answers `false` rather than erroring.
    pub fn contains_named(&self, resource: &str, action: &str) -> bool {
        let Ok(resource) = resource.parse::<Resource>() else {
            return false;
        };
        self.statements
            .get(&resource)
            .map_or(false, |actions| actions.contains(action))
    }

    pub fn resources(&self) -> impl Iterator<Item = Resource> + '_ {
        self.statements.keys().copied()
    }

    pub fn actions_of(&self, resource: Resource) -> impl Iterator<Item = &str> {
        self.statements
            .get(&resource)
            .into_iter()
            .flatten()
            .map(String::as_str)
    }

    /// Total number of declared (resource, action) pairs.
    pub fn len(&self) -> usize {
        self.statements.values().map(BTreeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
