use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme '{}'", other)),
        }
    }
}

/// Glyph on the theme toggle control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeIcon {
    Moon,
    Sun,
}

impl ThemeIcon {
    /// Light shows the moon, dark shows the sun.
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => ThemeIcon::Moon,
            Theme::Dark => ThemeIcon::Sun,
        }
    }

    /// SVG body of the icon.
    pub fn svg(&self) -> &'static str {
        match self {
            ThemeIcon::Moon => r#"<path d="M21 12.79A9 9 0 1111.21 3 7 7 0 0021 12.79z"></path>"#,
            ThemeIcon::Sun => concat!(
                r#"<circle cx="12" cy="12" r="5"/>"#,
                r#"<path d="M12 1v2m0 18v2M4.22 4.22l1.42 1.42m12.72 12.72l1.42 1.42M1 12h2m18 0h2M4.22 19.78l1.42-1.42M18.36 5.64l1.42-1.42"/>"#
            ),
        }
    }

    pub fn glyph(&self) -> char {
        match self {
            ThemeIcon::Moon => '☾',
            ThemeIcon::Sun => '☀',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationRequest {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationResponse {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(default)]
    pub is_fake: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain_info: Option<DomainInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legitimacy_info: Option<LegitimacyInfo>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainInfo {
    pub domain: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_info: Option<AgeInfo>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeInfo {
    pub creation_date: String,
    pub age_days: i64,
    pub registrar: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegitimacyInfo {
    pub is_legitimate: bool,
    pub details: String,
}

/// Body returned with a non-success status.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub details: Option<String>,
}
