//! Registry construction errors. Runtime authorization deliberately has no
//! error taxonomy: unknown roles, resources and actions all degrade to a
//! denied check so a mis-specified caller can never fall through to allow.

use thiserror::Error;

use crate::registry::{Permission, Role};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A role grant references a resource the registry never declared.
    #[error("grant '{permission}' for role '{role}' references an undeclared resource")]
    UndeclaredStatement { role: Role, permission: Permission },
}

pub type RegistryResult<T> = Result<T, RegistryError>;
