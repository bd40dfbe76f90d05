//! Route handlers.

pub mod analyze;
pub mod system;
