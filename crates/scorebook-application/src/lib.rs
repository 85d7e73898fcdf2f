//! Application layer for Scorebook.
//!
//! This crate provides the user directory and score repository services
//! plus the dashboard use cases that coordinate them with the aggregation
//! functions and a presentation sink.

pub mod dashboard;
pub mod directory;
mod records;
pub mod scores;

pub use dashboard::Dashboard;
pub use directory::UserDirectory;
pub use scores::ScoreRepository;
