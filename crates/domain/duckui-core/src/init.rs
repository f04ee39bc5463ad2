/// Failure reported by an engine startup attempt.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct InitError {
    message: String,
}

impl InitError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Lifecycle of the embedded engine.
///
/// `Cold -> Loading -> Ready` is the success path and `Ready` is terminal.
/// `Failed` records the outcome of an attempt; a new attempt may start from it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EngineInitState {
    #[default]
    Cold,
    Loading,
    Ready,
    Failed(InitError),
}

/// The two readiness flags the rest of the application reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineFlags {
    pub is_initialized: bool,
    pub is_loading: bool,
}

impl EngineInitState {
    pub fn is_initialized(&self) -> bool {
        matches!(self, Self::Ready)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn flags(&self) -> EngineFlags {
        EngineFlags {
            is_initialized: self.is_initialized(),
            is_loading: self.is_loading(),
        }
    }

    /// Whether `initialize` may start a new attempt from this state.
    pub fn can_start(&self) -> bool {
        matches!(self, Self::Cold | Self::Failed(_))
    }

    pub fn failure(&self) -> Option<&InitError> {
        match self {
            Self::Failed(e) => Some(e),
            _ => None,
        }
    }
}
