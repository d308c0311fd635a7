pub mod theme;
pub mod view;
pub mod workflow;

pub use crate::domain::model::{Theme, ThemeIcon, VerificationResponse};
pub use crate::domain::ports::{ConfigProvider, PreferenceStore, TabQuery, VerificationService};
pub use crate::utils::error::Result;
