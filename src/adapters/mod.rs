// Adapters layer: concrete implementations of the domain ports.

pub mod http;
pub mod storage;
pub mod tab;

pub use http::{HttpVerifier, DEFAULT_ENDPOINT};
pub use storage::{FileStore, MemoryStore};
pub use tab::FixedTab;
