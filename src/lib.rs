pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{FileStore, FixedTab, HttpVerifier, MemoryStore};
pub use config::toml_config::AppConfig;
pub use core::{
    theme::ThemeManager,
    view::PopupView,
    workflow::{CheckOutcome, VerificationWorkflow},
};
pub use utils::error::{Result, VerifyError};
