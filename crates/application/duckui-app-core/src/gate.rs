use duckui_core::EngineInitState;

use crate::engine::EngineStore;
use crate::error::RenderError;

/// Output of the initialization gate for one render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gated<T> {
    Loading { message: String },
    Open(T),
}

/// Blocks its children until the engine reports ready.
///
/// Each gate instance triggers initialization once, after its first render,
/// so the first pass always observes the engine before it is ready.
#[derive(Debug, Default)]
pub struct InitGate {
    triggered: bool,
}

impl InitGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_triggered(&self) -> bool {
        self.triggered
    }

    pub fn render<T>(
        &mut self,
        store: &EngineStore,
        children: impl FnOnce() -> Result<T, RenderError>,
    ) -> Result<Gated<T>, RenderError> {
        let output = match store.snapshot() {
            EngineInitState::Ready => Gated::Open(children()?),
            EngineInitState::Failed(e) if self.triggered => return Err(e.into()),
            // A fresh gate that finds a failed attempt starts a new one.
            EngineInitState::Cold | EngineInitState::Loading | EngineInitState::Failed(_) => {
                Gated::Loading {
                    message: duckui_config::initializing_message(),
                }
            }
        };

        if !self.triggered {
            self.triggered = true;
            store.initialize();
        }
        Ok(output)
    }
}
