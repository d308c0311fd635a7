//! Headless model of the popup: the panels, the action control, the loading
//! indicator and the theme state a host renders from.

use crate::domain::model::{Theme, ThemeIcon, VerificationResponse};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultStyle {
    Success,
    Error,
}

impl ResultStyle {
    pub fn class_name(&self) -> &'static str {
        match self {
            ResultStyle::Success => "success",
            ResultStyle::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultPanel {
    /// First line is the headline message, the rest are detail lines.
    pub lines: Vec<String>,
    pub style: Option<ResultStyle>,
    pub hidden: bool,
}

impl Default for ResultPanel {
    fn default() -> Self {
        Self {
            lines: Vec::new(),
            style: None,
            hidden: true,
        }
    }
}

impl ResultPanel {
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn is_visible(&self) -> bool {
        !self.hidden
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorPanel {
    pub text: String,
    pub hidden: bool,
}

impl Default for ErrorPanel {
    fn default() -> Self {
        Self {
            text: String::new(),
            hidden: true,
        }
    }
}

impl ErrorPanel {
    pub fn is_visible(&self) -> bool {
        !self.hidden
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopupView {
    pub result: ResultPanel,
    pub error: ErrorPanel,
    pub check_enabled: bool,
    pub loading: bool,
    pub theme: Theme,
    pub theme_icon: ThemeIcon,
}

impl Default for PopupView {
    fn default() -> Self {
        Self {
            result: ResultPanel::default(),
            error: ErrorPanel::default(),
            check_enabled: true,
            loading: false,
            theme: Theme::Light,
            theme_icon: ThemeIcon::for_theme(Theme::Light),
        }
    }
}

impl PopupView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset for a new check: panels cleared and hidden, control disabled, spinner on.
    pub fn begin_check(&mut self) {
        self.result.lines.clear();
        self.result.hidden = true;
        self.error.text.clear();
        self.error.hidden = true;
        self.check_enabled = false;
        self.loading = true;
    }

    pub fn render_success(&mut self, response: &VerificationResponse) {
        self.result.lines = result_lines(response);
        self.result.style = Some(if response.is_fake {
            ResultStyle::Error
        } else {
            ResultStyle::Success
        });
        self.result.hidden = false;
    }

    pub fn render_failure(&mut self, message: &str) {
        self.error.text = format!("Error: {}", message);
        self.error.hidden = false;
    }

    pub fn finish_check(&mut self) {
        self.loading = false;
        self.check_enabled = true;
    }

    pub fn apply_theme(&mut self, theme: Theme, icon: ThemeIcon) {
        self.theme = theme;
        self.theme_icon = icon;
    }
}

fn result_lines(response: &VerificationResponse) -> Vec<String> {
    let mut lines = vec![response.message.clone()];

    if let Some(details) = response.details.as_deref().filter(|d| !d.is_empty()) {
        lines.push(details.to_string());
    }

    if let Some(domain_info) = &response.domain_info {
        lines.push(format!("Domain: {}", domain_info.domain));
        if let Some(age) = &domain_info.age_info {
            lines.push(format!("Creation Date: {}", age.creation_date));
            lines.push(format!("Domain Age: {} days", age.age_days));
            lines.push(format!("Registrar: {}", age.registrar));
        }
    }

    if let Some(legitimacy) = &response.legitimacy_info {
        let label = if legitimacy.is_legitimate {
            "Legitimate"
        } else {
            "Not Legitimate"
        };
        lines.push(format!("Legitimacy: {}", label));
        lines.push(format!("Details: {}", legitimacy.details));
    }

    lines
}

impl fmt::Display for PopupView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} theme: {}", self.theme_icon.glyph(), self.theme)?;

        if self.loading {
            writeln!(f, "Checking...")?;
        }

        if self.result.is_visible() {
            let tag = self.result.style.map(|s| s.class_name()).unwrap_or("result");
            let mut lines = self.result.lines.iter();
            if let Some(headline) = lines.next() {
                writeln!(f, "[{}] {}", tag, headline)?;
            }
            for line in lines {
                writeln!(f, "    {}", line)?;
            }
        }

        if self.error.is_visible() {
            writeln!(f, "{}", self.error.text)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{AgeInfo, DomainInfo, LegitimacyInfo};

    fn response(message: &str, is_fake: bool) -> VerificationResponse {
        VerificationResponse {
            message: message.to_string(),
            details: None,
            is_fake,
            domain_info: None,
            legitimacy_info: None,
        }
    }

    #[test]
    fn test_success_style() {
        let mut view = PopupView::new();
        view.render_success(&response("OK", false));

        assert!(view.result.is_visible());
        assert!(view.result.text().contains("OK"));
        assert_eq!(view.result.style, Some(ResultStyle::Success));
    }

    #[test]
    fn test_fake_uses_error_style_and_replaces_previous_style() {
        let mut view = PopupView::new();
        view.render_success(&response("OK", false));
        view.render_success(&response("Fake", true));

        assert_eq!(view.result.style, Some(ResultStyle::Error));
        assert_eq!(view.result.lines, vec!["Fake".to_string()]);
    }

    #[test]
    fn test_full_response_lines() {
        let mut full = response("Potential Fake App Detected", true);
        full.details = Some("Risks identified: Suspicious URL keywords detected".to_string());
        full.domain_info = Some(DomainInfo {
            domain: "fake-bank.example".to_string(),
            age_info: Some(AgeInfo {
                creation_date: "2020-01-01".to_string(),
                age_days: 1000,
                registrar: "ACME".to_string(),
            }),
        });
        full.legitimacy_info = Some(LegitimacyInfo {
            is_legitimate: false,
            details: "Unknown publisher".to_string(),
        });

        let mut view = PopupView::new();
        view.render_success(&full);

        assert_eq!(
            view.result.lines,
            vec![
                "Potential Fake App Detected",
                "Risks identified: Suspicious URL keywords detected",
                "Domain: fake-bank.example",
                "Creation Date: 2020-01-01",
                "Domain Age: 1000 days",
                "Registrar: ACME",
                "Legitimacy: Not Legitimate",
                "Details: Unknown publisher",
            ]
        );
    }

    #[test]
    fn test_domain_without_age_info() {
        let mut partial = response("App Authenticity", false);
        partial.domain_info = Some(DomainInfo {
            domain: "example.com".to_string(),
            age_info: None,
        });

        let mut view = PopupView::new();
        view.render_success(&partial);

        assert_eq!(view.result.lines, vec!["App Authenticity", "Domain: example.com"]);
    }

    #[test]
    fn test_begin_check_clears_previous_outcome() {
        let mut view = PopupView::new();
        view.render_success(&response("OK", false));
        view.render_failure("boom");

        view.begin_check();

        assert!(view.result.hidden);
        assert!(view.result.lines.is_empty());
        assert!(view.error.hidden);
        assert!(view.error.text.is_empty());
        assert!(!view.check_enabled);
        assert!(view.loading);

        view.finish_check();
        assert!(view.check_enabled);
        assert!(!view.loading);
    }

    #[test]
    fn test_display_shows_visible_panels_only() {
        let mut view = PopupView::new();
        view.render_failure("blocked");
        let out = view.to_string();

        assert!(out.contains("theme: light"));
        assert!(out.contains("Error: blocked"));
        assert!(!out.contains("[success]"));
    }
}
