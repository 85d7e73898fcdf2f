//! Infrastructure crate for Scorebook.
//!
//! Store client implementations (remote HTTP, local JSON directory,
//! in-memory), configuration persistence, and path management.

pub mod config_service;
pub mod dir_store;
pub mod http_store;
pub mod memory_store;
pub mod paths;

pub use crate::config_service::ConfigService;
pub use crate::dir_store::DirTableStore;
pub use crate::http_store::HttpStoreClient;
pub use crate::memory_store::MemoryStoreClient;
pub use crate::paths::ScorebookPaths;
