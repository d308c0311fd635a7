use crate::domain::model::{ErrorResponse, VerificationRequest, VerificationResponse};
use crate::domain::ports::VerificationService;
use crate::utils::error::{Result, VerifyError, SERVER_ERROR_MESSAGE};
use async_trait::async_trait;
use reqwest::Client;

pub const DEFAULT_ENDPOINT: &str = "https://counteract-mitigation.onrender.com/check_app";

/// `VerificationService` backed by the remote `check_app` endpoint.
#[derive(Debug, Clone)]
pub struct HttpVerifier {
    endpoint: String,
    client: Client,
}

impl HttpVerifier {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            // 不設定逾時，沿用傳輸層預設行為
            client: Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for HttpVerifier {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

#[async_trait]
impl VerificationService for HttpVerifier {
    async fn check_app(&self, url: &str) -> Result<VerificationResponse> {
        let request = VerificationRequest {
            url: url.to_string(),
        };

        tracing::debug!("Making verification request to: {}", self.endpoint);
        let response = self
            .client
            .post(&self.endpoint)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Verification response status: {}", status);

        let body = response.bytes().await?;

        if !status.is_success() {
            // 錯誤回應可能不是 JSON，解析失敗時使用通用訊息
            let message = serde_json::from_slice::<ErrorResponse>(&body)
                .ok()
                .and_then(|e| e.details)
                .filter(|d| !d.is_empty())
                .unwrap_or_else(|| SERVER_ERROR_MESSAGE.to_string());
            return Err(VerifyError::RemoteRejection {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: VerificationResponse = serde_json::from_slice(&body)?;
        Ok(parsed)
    }
}
