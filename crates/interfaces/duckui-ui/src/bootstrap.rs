use duckui_app_core::PreferenceStore;
#[cfg(not(target_arch = "wasm32"))]
use duckui_app_core::{EngineBootstrap, InitError};

pub type Preferences = Box<dyn PreferenceStore>;

/// Stands in for an engine whose storage could not even be located, so the
/// failure reaches the user through the normal initialization path.
#[cfg(not(target_arch = "wasm32"))]
pub struct UnavailableEngine {
    reason: String,
}

#[cfg(not(target_arch = "wasm32"))]
impl UnavailableEngine {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[async_trait::async_trait]
impl EngineBootstrap for UnavailableEngine {
    async fn boot(&self) -> Result<(), InitError> {
        Err(InitError::new(format!(
            "{} is unavailable: {}",
            duckui_config::ENGINE_NAME,
            self.reason
        )))
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub mod native {
    use super::{Preferences, UnavailableEngine};
    use duckui_app_core::{EngineStore, FilePreferences, LocalEngine, MemoryPreferences};

    pub fn engine() -> EngineStore {
        match LocalEngine::in_data_dir() {
            Ok(engine) => {
                tracing::info!(root = %engine.root().display(), "using local engine storage");
                EngineStore::new(engine)
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to locate engine storage");
                EngineStore::new(UnavailableEngine::new(e.to_string()))
            }
        }
    }

    pub fn preferences() -> Preferences {
        match FilePreferences::in_config_dir() {
            Ok(prefs) => Box::new(prefs),
            Err(e) => {
                tracing::warn!(error = %e, "preferences will not persist this session");
                Box::new(MemoryPreferences::new())
            }
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use duckui_app_core::EngineStore;
    use std::time::{Duration, Instant};

    #[test]
    fn unavailable_engine_fails_initialization_with_the_reason() {
        let store = EngineStore::new(UnavailableEngine::new("no home directory"));
        store.initialize();

        let deadline = Instant::now() + Duration::from_secs(3);
        while store.snapshot().failure().is_none() && Instant::now() < deadline {
            std::thread::sleep(Duration::from_millis(5));
        }
        let state = store.snapshot();
        let failure = state.failure().expect("initialization should fail");
        assert_eq!(failure.message(), "DuckDB is unavailable: no home directory");
        assert!(!store.is_initialized());
    }
}
