use crate::core::view::PopupView;
use crate::domain::model::VerificationResponse;
use crate::domain::ports::{TabQuery, VerificationService};
use crate::utils::error::{ErrorCategory, Result};
use crate::utils::validation::validate_tab_url;

#[derive(Debug, Clone, PartialEq)]
pub enum WorkflowState {
    Idle,
    Checking,
    Success(VerificationResponse),
    Failure(String),
}

/// Outcome of one check, kept after the workflow returns to `Idle`.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckOutcome {
    Success(VerificationResponse),
    Failure(String),
    /// The action control was disabled; nothing happened.
    Ignored,
}

impl CheckOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, CheckOutcome::Success(_))
    }
}

pub struct VerificationWorkflow<T: TabQuery, V: VerificationService> {
    tab: T,
    verifier: V,
    view: PopupView,
    state: WorkflowState,
}

impl<T: TabQuery, V: VerificationService> VerificationWorkflow<T, V> {
    pub fn new(tab: T, verifier: V) -> Self {
        Self::with_view(tab, verifier, PopupView::new())
    }

    pub fn with_view(tab: T, verifier: V, view: PopupView) -> Self {
        Self {
            tab,
            verifier,
            view,
            state: WorkflowState::Idle,
        }
    }

    pub fn view(&self) -> &PopupView {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut PopupView {
        &mut self.view
    }

    pub fn state(&self) -> &WorkflowState {
        &self.state
    }

    /// Handle a click on the action control.
    pub async fn check(&mut self) -> CheckOutcome {
        if !self.view.check_enabled {
            tracing::debug!("Check ignored: action control is disabled");
            return CheckOutcome::Ignored;
        }

        self.transition(WorkflowState::Checking);
        self.view.begin_check();

        let outcome = match self.verify_active_tab().await {
            Ok(response) => {
                self.view.render_success(&response);
                self.transition(WorkflowState::Success(response.clone()));
                CheckOutcome::Success(response)
            }
            Err(e) => {
                if e.category() == ErrorCategory::Transport {
                    tracing::error!("Verification Error: {}", e);
                } else {
                    tracing::warn!("Verification failed: {}", e);
                }
                let message = e.user_message();
                self.view.render_failure(&message);
                self.transition(WorkflowState::Failure(message.clone()));
                CheckOutcome::Failure(message)
            }
        };

        // 所有路徑都回到 Idle
        self.view.finish_check();
        self.transition(WorkflowState::Idle);
        outcome
    }

    async fn verify_active_tab(&self) -> Result<VerificationResponse> {
        let url = self.tab.active_tab_url().await?;
        // 無效的 URL 不送出請求
        validate_tab_url(&url)?;

        tracing::info!("Verifying {}", url);
        let response = self.verifier.check_app(&url).await?;
        tracing::info!(
            "Verification result for {}: {} (is_fake: {})",
            url,
            response.message,
            response.is_fake
        );
        Ok(response)
    }

    fn transition(&mut self, next: WorkflowState) {
        tracing::debug!("Workflow: {} -> {}", state_name(&self.state), state_name(&next));
        self.state = next;
    }
}

fn state_name(state: &WorkflowState) -> &'static str {
    match state {
        WorkflowState::Idle => "Idle",
        WorkflowState::Checking => "Checking",
        WorkflowState::Success(_) => "Success",
        WorkflowState::Failure(_) => "Failure",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::FixedTab;
    use crate::core::view::ResultStyle;
    use crate::utils::error::{VerifyError, FALLBACK_MESSAGE, INVALID_URL_MESSAGE};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Clone)]
    enum Reply {
        Ok(VerificationResponse),
        Rejected(&'static str),
        Broken,
    }

    #[derive(Clone)]
    struct MockVerifier {
        reply: Reply,
        calls: Arc<AtomicUsize>,
    }

    impl MockVerifier {
        fn new(reply: Reply) -> Self {
            Self {
                reply,
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl VerificationService for MockVerifier {
        async fn check_app(&self, _url: &str) -> Result<VerificationResponse> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.reply {
                Reply::Ok(response) => Ok(response.clone()),
                Reply::Rejected(message) => Err(VerifyError::RemoteRejection {
                    status: 403,
                    message: message.to_string(),
                }),
                Reply::Broken => Err(VerifyError::Serialization(
                    serde_json::from_str::<serde_json::Value>("<html>").unwrap_err(),
                )),
            }
        }
    }

    struct NoTab;

    #[async_trait]
    impl TabQuery for NoTab {
        async fn active_tab_url(&self) -> Result<String> {
            Err(VerifyError::TabQuery {
                message: "No active tab".to_string(),
            })
        }
    }

    fn ok(message: &str, is_fake: bool) -> Reply {
        Reply::Ok(VerificationResponse {
            message: message.to_string(),
            details: None,
            is_fake,
            domain_info: None,
            legitimacy_info: None,
        })
    }

    #[tokio::test]
    async fn test_invalid_url_skips_network() {
        let verifier = MockVerifier::new(ok("OK", false));
        let mut workflow = VerificationWorkflow::new(FixedTab::new("not a url"), verifier.clone());

        let outcome = workflow.check().await;

        assert_eq!(outcome, CheckOutcome::Failure(INVALID_URL_MESSAGE.to_string()));
        assert_eq!(verifier.calls(), 0);
        assert_eq!(
            workflow.view().error.text,
            format!("Error: {}", INVALID_URL_MESSAGE)
        );
        assert!(workflow.view().check_enabled);
        assert!(!workflow.view().loading);
        assert_eq!(workflow.state(), &WorkflowState::Idle);
    }

    #[tokio::test]
    async fn test_empty_url_skips_network() {
        let verifier = MockVerifier::new(ok("OK", false));
        let mut workflow = VerificationWorkflow::new(FixedTab::new(""), verifier.clone());

        assert!(!workflow.check().await.is_success());
        assert_eq!(verifier.calls(), 0);
    }

    #[tokio::test]
    async fn test_success_renders_result() {
        let verifier = MockVerifier::new(ok("OK", false));
        let mut workflow =
            VerificationWorkflow::new(FixedTab::new("https://example.com"), verifier.clone());

        let outcome = workflow.check().await;

        assert!(outcome.is_success());
        assert_eq!(verifier.calls(), 1);
        let view = workflow.view();
        assert!(view.result.is_visible());
        assert!(view.result.text().contains("OK"));
        assert_eq!(view.result.style, Some(ResultStyle::Success));
        assert!(!view.error.is_visible());
        assert!(view.check_enabled);
    }

    #[tokio::test]
    async fn test_fake_result_uses_error_style() {
        let mut workflow = VerificationWorkflow::new(
            FixedTab::new("https://example.com"),
            MockVerifier::new(ok("Fake", true)),
        );

        workflow.check().await;

        assert_eq!(workflow.view().result.style, Some(ResultStyle::Error));
    }

    #[tokio::test]
    async fn test_remote_rejection_shows_details() {
        let mut workflow = VerificationWorkflow::new(
            FixedTab::new("https://example.com"),
            MockVerifier::new(Reply::Rejected("blocked")),
        );

        workflow.check().await;

        let view = workflow.view();
        assert!(view.error.is_visible());
        assert_eq!(view.error.text, "Error: blocked");
        assert!(!view.result.is_visible());
    }

    #[tokio::test]
    async fn test_broken_body_uses_fallback_and_reenables() {
        let mut workflow = VerificationWorkflow::new(
            FixedTab::new("https://example.com"),
            MockVerifier::new(Reply::Broken),
        );

        let outcome = workflow.check().await;

        assert_eq!(outcome, CheckOutcome::Failure(FALLBACK_MESSAGE.to_string()));
        assert_eq!(
            workflow.view().error.text,
            format!("Error: {}", FALLBACK_MESSAGE)
        );
        assert!(workflow.view().check_enabled);
    }

    #[tokio::test]
    async fn test_tab_query_failure() {
        let verifier = MockVerifier::new(ok("OK", false));
        let mut workflow = VerificationWorkflow::new(NoTab, verifier.clone());

        let outcome = workflow.check().await;

        assert_eq!(outcome, CheckOutcome::Failure("No active tab".to_string()));
        assert_eq!(verifier.calls(), 0);
    }

    #[tokio::test]
    async fn test_disabled_control_ignores_click() {
        let verifier = MockVerifier::new(ok("OK", false));
        let mut workflow =
            VerificationWorkflow::new(FixedTab::new("https://example.com"), verifier.clone());
        workflow.view_mut().check_enabled = false;

        assert_eq!(workflow.check().await, CheckOutcome::Ignored);
        assert_eq!(verifier.calls(), 0);
    }

    #[tokio::test]
    async fn test_second_check_clears_previous_error() {
        let verifier = MockVerifier::new(ok("OK", false));
        let mut workflow =
            VerificationWorkflow::new(FixedTab::new("https://example.com"), verifier);
        workflow.view_mut().render_failure("stale");

        workflow.check().await;

        assert!(!workflow.view().error.is_visible());
        assert!(workflow.view().error.text.is_empty());
    }
}
