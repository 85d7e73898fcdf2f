//! Core domain crate for Scorebook.
//!
//! Holds the domain models (users, scores), the store client trait, the
//! pure aggregation functions, the presenter trait, and the shared error
//! and configuration types. No I/O lives here beyond the trait seams.

pub mod aggregate;
pub mod config;
pub mod error;
pub mod id;
pub mod presenter;
pub mod score;
pub mod store;
pub mod user;

// Re-export common error type
pub use error::{Result, ScorebookError};
