//! Command implementations for xtask
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod check;
mod plan;
mod tables;

pub use check::Check;
pub use plan::Plan;
pub use tables::Tables;
