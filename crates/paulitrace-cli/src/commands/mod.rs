//! CLI command implementations.

pub mod analyze;
pub mod common;
pub mod propagate;
pub mod step;
pub mod version;
