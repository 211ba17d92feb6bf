//! Role/permission authorization core: a declarative statement-table
//! registry plus a pure evaluation gate over session snapshots.

pub mod error;
pub mod gate;
pub mod registry;
