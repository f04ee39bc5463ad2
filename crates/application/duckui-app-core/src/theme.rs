use duckui_core::Theme;

use crate::ports::PreferenceStore;

/// Current theme plus where the user's choice is persisted.
pub struct ThemeProvider<P: PreferenceStore> {
    store: P,
    storage_key: String,
    default_theme: Theme,
    current: Theme,
}

impl<P: PreferenceStore> ThemeProvider<P> {
    /// Load the stored preference, falling back to `default_theme` when it is
    /// missing or unreadable.
    pub fn new(store: P, default_theme: Theme, storage_key: impl Into<String>) -> Self {
        let storage_key = storage_key.into();
        let current = match store.load(&storage_key) {
            Ok(Some(raw)) => raw.parse::<Theme>().unwrap_or_else(|e| {
                tracing::warn!(error = %e, "ignoring stored theme");
                default_theme
            }),
            Ok(None) => default_theme,
            Err(e) => {
                tracing::warn!(error = %e, "failed to load theme preference");
                default_theme
            }
        };
        Self {
            store,
            storage_key,
            default_theme,
            current,
        }
    }

    /// Provider configured with the application's default theme and key.
    pub fn with_defaults(store: P) -> Self {
        let default_theme = duckui_config::DEFAULT_THEME
            .parse::<Theme>()
            .unwrap_or_default();
        Self::new(store, default_theme, duckui_config::THEME_STORAGE_KEY)
    }

    pub fn theme(&self) -> Theme {
        self.current
    }

    pub fn default_theme(&self) -> Theme {
        self.default_theme
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    /// Switch themes. The in-memory theme changes even if persisting fails.
    pub fn set_theme(&mut self, theme: Theme) -> anyhow::Result<()> {
        self.current = theme;
        self.store.save(&self.storage_key, theme.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryPreferences;

    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn load(&self, _key: &str) -> anyhow::Result<Option<String>> {
            anyhow::bail!("storage disabled")
        }

        fn save(&self, _key: &str, _value: &str) -> anyhow::Result<()> {
            anyhow::bail!("storage disabled")
        }
    }

    #[test]
    fn defaults_to_dark_under_the_vite_key() {
        let provider = ThemeProvider::with_defaults(MemoryPreferences::new());
        assert_eq!(provider.theme(), Theme::Dark);
        assert_eq!(provider.storage_key(), "vite-ui-theme");
    }

    #[test]
    fn stored_preference_wins() {
        let prefs = MemoryPreferences::with_value("vite-ui-theme", "light");
        let provider = ThemeProvider::with_defaults(prefs);
        assert_eq!(provider.theme(), Theme::Light);
    }

    #[test]
    fn set_theme_persists_under_the_key() {
        let mut provider = ThemeProvider::with_defaults(MemoryPreferences::new());
        provider.set_theme(Theme::System).unwrap();
        assert_eq!(
            provider.store.load("vite-ui-theme").unwrap().as_deref(),
            Some("system")
        );
    }

    #[test]
    fn unreadable_preferences_fall_back() {
        let prefs = MemoryPreferences::with_value("vite-ui-theme", "sepia");
        assert_eq!(ThemeProvider::with_defaults(prefs).theme(), Theme::Dark);

        let mut provider = ThemeProvider::new(BrokenStore, Theme::Light, "k");
        assert_eq!(provider.theme(), Theme::Light);
        assert!(provider.set_theme(Theme::Dark).is_err());
        assert_eq!(provider.theme(), Theme::Dark);
    }
}
