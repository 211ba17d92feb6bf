//! Authorization gate: session snapshots in, allow/deny/pending out.
//! Keep the public surface thin and split implementation across sub-modules.

mod evaluate;
mod requirement;
mod session;

pub use evaluate::{evaluate, Decision, Gate};
pub use requirement::{Condition, Requirement};
pub use session::{AuthContext, AuthUser, SessionSnapshot, SessionUser};
