use duckui_core::InitError;

/// Errors that abort startup before anything can be rendered.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("Failed to find {id} element")]
    MountTargetMissing { id: String },
    #[error("failed to start the user interface: {0}")]
    Frontend(String),
}

/// Errors raised while rendering the tree below the render-failure boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("{0}")]
    Init(#[from] InitError),
    #[error("{message}")]
    View { message: String },
}

impl RenderError {
    pub fn view(message: impl Into<String>) -> Self {
        Self::View {
            message: message.into(),
        }
    }
}

/// The mount element is the one thing startup cannot do without.
pub fn require_mount_target<T>(found: Option<T>, id: &str) -> Result<T, StartupError> {
    found.ok_or_else(|| {
        tracing::error!(id, "mount element missing");
        StartupError::MountTargetMissing { id: id.to_string() }
    })
}
