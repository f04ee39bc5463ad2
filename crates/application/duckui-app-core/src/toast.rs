use std::time::Duration;

use uuid::Uuid;
use web_time::Instant;

pub type ToastId = Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToasterConfig {
    pub rich_colors: bool,
    pub auto_dismiss: Duration,
    pub close_button: bool,
    pub expand: bool,
}

impl Default for ToasterConfig {
    fn default() -> Self {
        Self {
            rich_colors: duckui_config::TOAST_RICH_COLORS,
            auto_dismiss: Duration::from_millis(duckui_config::TOAST_AUTO_DISMISS_MS),
            close_button: duckui_config::TOAST_CLOSE_BUTTON,
            expand: duckui_config::TOAST_EXPAND,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub id: ToastId,
    pub level: ToastLevel,
    pub message: String,
    pub created_at: Instant,
}

/// Number of toasts shown when the stack is collapsed.
const COLLAPSED_VISIBLE: usize = 1;

/// Global notification surface. Newest toasts come last.
#[derive(Debug, Default)]
pub struct Toaster {
    config: ToasterConfig,
    toasts: Vec<Toast>,
}

impl Toaster {
    pub fn new(config: ToasterConfig) -> Self {
        Self {
            config,
            toasts: Vec::new(),
        }
    }

    pub fn config(&self) -> &ToasterConfig {
        &self.config
    }

    pub fn push(&mut self, level: ToastLevel, message: impl Into<String>) -> ToastId {
        self.push_at(level, message, Instant::now())
    }

    pub fn push_at(
        &mut self,
        level: ToastLevel,
        message: impl Into<String>,
        now: Instant,
    ) -> ToastId {
        let id = Uuid::new_v4();
        self.toasts.push(Toast {
            id,
            level,
            message: message.into(),
            created_at: now,
        });
        id
    }

    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    /// Drop toasts older than the auto-dismiss delay.
    pub fn prune(&mut self, now: Instant) {
        let ttl = self.config.auto_dismiss;
        self.toasts
            .retain(|t| now.saturating_duration_since(t.created_at) < ttl);
    }

    /// How long until the oldest toast expires, for scheduling a repaint.
    pub fn next_expiry(&self, now: Instant) -> Option<Duration> {
        self.toasts
            .iter()
            .map(|t| {
                self.config
                    .auto_dismiss
                    .saturating_sub(now.saturating_duration_since(t.created_at))
            })
            .min()
    }

    pub fn visible(&self) -> &[Toast] {
        if self.config.expand {
            &self.toasts
        } else {
            let start = self.toasts.len().saturating_sub(COLLAPSED_VISIBLE);
            &self.toasts[start..]
        }
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_the_app_settings() {
        let cfg = ToasterConfig::default();
        assert!(cfg.rich_colors);
        assert_eq!(cfg.auto_dismiss, Duration::from_millis(2000));
        assert!(cfg.close_button);
        assert!(cfg.expand);
    }

    #[test]
    fn toasts_expire_after_auto_dismiss() {
        let mut toaster = Toaster::new(ToasterConfig::default());
        let t0 = Instant::now();
        toaster.push_at(ToastLevel::Info, "first", t0);
        toaster.push_at(ToastLevel::Success, "second", t0 + Duration::from_millis(1500));

        toaster.prune(t0 + Duration::from_millis(1999));
        assert_eq!(toaster.visible().len(), 2);
        assert_eq!(
            toaster.next_expiry(t0 + Duration::from_millis(1999)),
            Some(Duration::from_millis(1))
        );

        toaster.prune(t0 + Duration::from_millis(2000));
        assert_eq!(toaster.visible().len(), 1);
        assert_eq!(toaster.visible()[0].message, "second");

        toaster.prune(t0 + Duration::from_millis(3500));
        assert!(toaster.is_empty());
        assert_eq!(toaster.next_expiry(t0), None);
    }

    #[test]
    fn dismiss_removes_only_that_toast() {
        let mut toaster = Toaster::new(ToasterConfig::default());
        let a = toaster.push(ToastLevel::Warning, "a");
        let _b = toaster.push(ToastLevel::Error, "b");
        assert!(toaster.dismiss(a));
        assert!(!toaster.dismiss(a));
        assert_eq!(toaster.visible().len(), 1);
    }

    #[test]
    fn collapsed_stack_shows_the_newest() {
        let mut toaster = Toaster::new(ToasterConfig {
            expand: false,
            ..ToasterConfig::default()
        });
        toaster.push(ToastLevel::Info, "old");
        toaster.push(ToastLevel::Info, "new");
        let visible = toaster.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].message, "new");
    }
}
