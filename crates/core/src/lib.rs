//! Shared domain types and rules for the Bouncy Ball progress backend.

pub mod error;
pub mod progress;
pub mod types;
