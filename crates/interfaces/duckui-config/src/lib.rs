//! Central configuration constants for startup, theming and notifications.

/// Display name of the embedded analytical engine.
pub const ENGINE_NAME: &str = "DuckDB";

/// Identifier of the element the web build mounts into.
pub const ROOT_ELEMENT_ID: &str = "root";

/// Theme applied when no preference has been stored yet.
pub const DEFAULT_THEME: &str = "dark";

/// Key under which the theme preference is persisted.
pub const THEME_STORAGE_KEY: &str = "vite-ui-theme";

/// Toasts render with level-specific colors.
pub const TOAST_RICH_COLORS: bool = true;

/// Toasts dismiss themselves after this many milliseconds.
pub const TOAST_AUTO_DISMISS_MS: u64 = 2000;

/// Every toast carries a close button.
pub const TOAST_CLOSE_BUTTON: bool = true;

/// Stacked toasts are shown expanded instead of collapsed.
pub const TOAST_EXPAND: bool = true;

/// Environment variable holding the router base path.
pub const BASE_PATH_ENV: &str = "DUCK_UI_BASEPATH";

pub const DEFAULT_BASE_PATH: &str = "/";

/// Base path the router is mounted under.
///
/// The runtime environment wins over the value baked in at build time.
pub fn base_path() -> String {
    std::env::var(BASE_PATH_ENV)
        .ok()
        .or_else(|| option_env!("DUCK_UI_BASEPATH").map(str::to_owned))
        .unwrap_or_else(|| DEFAULT_BASE_PATH.to_owned())
}

pub fn version() -> &'static str {
    option_env!("DUCK_UI_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"))
}

pub fn release_date() -> Option<&'static str> {
    option_env!("DUCK_UI_RELEASE_DATE")
}

/// Message shown by the loading placeholder while the engine starts.
pub fn initializing_message() -> String {
    format!("Initializing {ENGINE_NAME}")
}
