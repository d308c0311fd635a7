use crate::domain::ports::TabQuery;
use crate::utils::error::Result;
use async_trait::async_trait;

/// A "tab" whose URL is known up front, e.g. passed on the command line.
#[derive(Debug, Clone)]
pub struct FixedTab {
    url: String,
}

impl FixedTab {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

#[async_trait]
impl TabQuery for FixedTab {
    async fn active_tab_url(&self) -> Result<String> {
        Ok(self.url.clone())
    }
}
