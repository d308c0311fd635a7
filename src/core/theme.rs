use crate::domain::model::{Theme, ThemeIcon};
use crate::domain::ports::PreferenceStore;

/// Key the theme preference is persisted under.
pub const THEME_KEY: &str = "appTheme";

pub struct ThemeManager<S: PreferenceStore> {
    store: S,
    current: Theme,
    icon: ThemeIcon,
}

impl<S: PreferenceStore> ThemeManager<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            current: Theme::default(),
            icon: ThemeIcon::for_theme(Theme::default()),
        }
    }

    /// Read the saved preference (default light) and apply it.
    pub fn initialize(&mut self) -> Theme {
        let saved = match self.store.get(THEME_KEY) {
            Some(raw) => raw.parse::<Theme>().unwrap_or_else(|e| {
                tracing::warn!("Ignoring saved theme: {}", e);
                Theme::default()
            }),
            None => Theme::default(),
        };

        self.apply(saved);
        tracing::debug!("Theme initialized: {}", saved);
        saved
    }

    /// Flip the theme, persist it and swap the icon to the new theme's glyph.
    pub fn toggle(&mut self) -> Theme {
        let next = self.current.toggled();

        // 寫入失敗不影響畫面上的主題
        if let Err(e) = self.store.set(THEME_KEY, next.as_str()) {
            tracing::error!("Failed to persist theme '{}': {}", next, e);
        }

        self.apply(next);
        tracing::debug!("Theme toggled to {}", next);
        next
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn icon(&self) -> ThemeIcon {
        self.icon
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn apply(&mut self, theme: Theme) {
        self.current = theme;
        self.icon = ThemeIcon::for_theme(theme);
    }
}
