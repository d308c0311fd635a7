use crate::domain::model::VerificationResponse;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Host capability returning the URL of the focused tab in the front window.
#[async_trait]
pub trait TabQuery: Send + Sync {
    async fn active_tab_url(&self) -> Result<String>;
}

/// Key-value persistence used for the theme preference.
pub trait PreferenceStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

#[async_trait]
pub trait VerificationService: Send + Sync {
    async fn check_app(&self, url: &str) -> Result<VerificationResponse>;
}

pub trait ConfigProvider: Send + Sync {
    fn endpoint(&self) -> &str;
    fn preferences_path(&self) -> &str;
}
