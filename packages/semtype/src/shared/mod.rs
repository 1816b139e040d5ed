//! Shared module - Common types used by every feature
//!
//! In-memory column model only. No graph or resolution logic lives here.

pub mod models;

// Re-exports for convenience
pub use models::*;
