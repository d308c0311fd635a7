use thiserror::Error;

/// 驗證失敗時的通用訊息
pub const FALLBACK_MESSAGE: &str = "Unable to verify app authenticity";

/// 伺服器拒絕但沒有提供 details 時的訊息
pub const SERVER_ERROR_MESSAGE: &str = "Server Error";

pub const INVALID_URL_MESSAGE: &str = "Invalid URL: Please provide a valid web address";

#[derive(Error, Debug)]
pub enum VerifyError {
    #[error("Invalid URL: {url}")]
    InvalidUrl { url: String },

    #[error("Verification service rejected the request ({status}): {message}")]
    RemoteRejection { status: u16, message: String },

    #[error("API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Active tab query failed: {message}")]
    TabQuery { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// 本地輸入錯誤，不會送出請求
    Validation,
    /// 遠端回應非成功狀態
    Remote,
    /// 網路或解析錯誤
    Transport,
    /// 宿主環境（分頁查詢、檔案）
    Host,
    Configuration,
}

impl VerifyError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            VerifyError::InvalidUrl { .. } => ErrorCategory::Validation,
            VerifyError::RemoteRejection { .. } => ErrorCategory::Remote,
            VerifyError::Transport(_) | VerifyError::Serialization(_) => {
                ErrorCategory::Transport
            }
            VerifyError::TabQuery { .. } | VerifyError::Io(_) => ErrorCategory::Host,
            VerifyError::Config { .. } | VerifyError::InvalidConfigValue { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    /// The text shown to the user in the error panel (without the "Error: " prefix).
    pub fn user_message(&self) -> String {
        match self {
            VerifyError::InvalidUrl { .. } => INVALID_URL_MESSAGE.to_string(),
            VerifyError::RemoteRejection { message, .. } => message.clone(),
            VerifyError::TabQuery { message } if !message.trim().is_empty() => message.clone(),
            VerifyError::Config { message } => message.clone(),
            VerifyError::InvalidConfigValue { field, reason, .. } => {
                format!("{}: {}", field, reason)
            }
            _ => FALLBACK_MESSAGE.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Validation => "Open a page with a valid http(s) address and try again",
            ErrorCategory::Remote => "The verification service refused the URL; check the details",
            ErrorCategory::Transport => "Check your network connection and try again",
            ErrorCategory::Host => "Check the active tab and local preference file",
            ErrorCategory::Configuration => "Check the configuration file and CLI flags",
        }
    }
}

pub type Result<T> = std::result::Result<T, VerifyError>;
