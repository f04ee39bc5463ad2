use duckui_core::Theme;

use crate::toast::{ToastId, ToastLevel};

#[derive(Debug, Clone)]
pub enum AppCommand {
    // Navigation
    Navigate(String),
    Back,
    Forward,

    // Recovery screen
    RetryRender,

    // Theming
    SetTheme(Theme),

    // Notifications
    Notify { level: ToastLevel, message: String },
    DismissToast(ToastId),
}
