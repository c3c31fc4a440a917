//! Cinebook Shared Library
//!
//! This crate contains the types, models, and validation rules shared by
//! the backend and its API clients.

pub mod models;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use models::Role;
pub use types::*;
