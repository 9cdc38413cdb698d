//! Common types and helpers for all domain records

pub mod refs;
pub mod validated;

// Re-exports
pub use refs::{is_set, looks_like_email, ZERO_UUID};
pub use validated::Validated;
