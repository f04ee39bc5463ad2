use duckui_core::InitError;
use serde::{Deserialize, Serialize};

/// On-disk layout version of the engine's data directory.
pub const ENGINE_FORMAT_VERSION: u32 = 1;

pub const MANIFEST_FILE: &str = "engine.json";

/// Marker describing who last prepared the engine's storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineManifest {
    pub format_version: u32,
    pub app_version: String,
}

impl EngineManifest {
    pub fn current() -> Self {
        Self {
            format_version: ENGINE_FORMAT_VERSION,
            app_version: duckui_config::version().to_string(),
        }
    }

    pub fn parse(raw: &str) -> Result<Self, InitError> {
        serde_json::from_str(raw)
            .map_err(|e| InitError::new(format!("Engine manifest is corrupt: {e}")))
    }

    pub fn check_compatible(&self) -> Result<(), InitError> {
        if self.format_version > ENGINE_FORMAT_VERSION {
            return Err(InitError::new(format!(
                "Engine data was written by a newer version (format {}, supported {})",
                self.format_version, ENGINE_FORMAT_VERSION
            )));
        }
        Ok(())
    }

    pub fn to_json(&self) -> Result<String, InitError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| InitError::new(format!("Failed to encode engine manifest: {e}")))
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use native::LocalEngine;

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::{Path, PathBuf};

    use super::*;
    use crate::ports::EngineBootstrap;

    /// Engine backed by a directory on the local filesystem.
    pub struct LocalEngine {
        root: PathBuf,
    }

    impl LocalEngine {
        pub fn new(root: impl Into<PathBuf>) -> Self {
            Self { root: root.into() }
        }

        pub fn in_data_dir() -> anyhow::Result<Self> {
            Ok(Self::new(crate::persistence::data_dir()?.join("engine")))
        }

        pub fn root(&self) -> &Path {
            &self.root
        }

        fn manifest_path(&self) -> PathBuf {
            self.root.join(MANIFEST_FILE)
        }
    }

    #[async_trait::async_trait]
    impl EngineBootstrap for LocalEngine {
        async fn boot(&self) -> Result<(), InitError> {
            tokio::fs::create_dir_all(&self.root).await.map_err(|e| {
                InitError::new(format!(
                    "Failed to create engine directory {}: {e}",
                    self.root.display()
                ))
            })?;

            let path = self.manifest_path();
            match tokio::fs::read_to_string(&path).await {
                Ok(raw) => {
                    let manifest = EngineManifest::parse(&raw)?;
                    manifest.check_compatible()?;
                    tracing::debug!(?manifest, "reusing engine directory");
                }
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                    let json = EngineManifest::current().to_json()?;
                    tokio::fs::write(&path, json).await.map_err(|e| {
                        InitError::new(format!(
                            "Failed to write engine manifest {}: {e}",
                            path.display()
                        ))
                    })?;
                    tracing::info!(root = %self.root.display(), "prepared new engine directory");
                }
                Err(e) => {
                    return Err(InitError::new(format!(
                        "Failed to read engine manifest {}: {e}",
                        path.display()
                    )));
                }
            }
            Ok(())
        }
    }
}
