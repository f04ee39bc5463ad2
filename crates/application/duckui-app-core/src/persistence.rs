use std::cell::RefCell;
use std::collections::BTreeMap;

use crate::ports::PreferenceStore;

#[cfg(not(target_arch = "wasm32"))]
pub use file::{data_dir, FilePreferences};

/// Preferences that live only as long as the process.
#[derive(Debug, Default)]
pub struct MemoryPreferences {
    values: RefCell<BTreeMap<String, String>>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(key: &str, value: &str) -> Self {
        let prefs = Self::new();
        prefs
            .values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        prefs
    }
}

impl PreferenceStore for MemoryPreferences {
    fn load(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> anyhow::Result<()> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod file {
    use super::*;
    use anyhow::{Context, Result};
    use directories::ProjectDirs;
    use std::fs;
    use std::io::Write;
    use std::path::{Path, PathBuf};

    const QUALIFIER: &str = "com";
    const ORG: &str = "duckui";
    const APP: &str = "duck-ui";

    fn project_dirs() -> Result<ProjectDirs> {
        ProjectDirs::from(QUALIFIER, ORG, APP)
            .ok_or_else(|| anyhow::anyhow!("Could not determine application directories"))
    }

    /// Directory the embedded engine keeps its files in.
    pub fn data_dir() -> Result<PathBuf> {
        Ok(project_dirs()?.data_dir().to_path_buf())
    }

    /// Preferences stored as one JSON object on disk.
    pub struct FilePreferences {
        path: PathBuf,
    }

    impl FilePreferences {
        pub fn new(path: impl Into<PathBuf>) -> Self {
            Self { path: path.into() }
        }

        pub fn in_config_dir() -> Result<Self> {
            let dirs = project_dirs()?;
            Ok(Self::new(dirs.config_dir().join("preferences.json")))
        }

        pub fn path(&self) -> &Path {
            &self.path
        }

        fn read_all(&self) -> Result<BTreeMap<String, String>> {
            if !self.path.exists() {
                return Ok(BTreeMap::new());
            }
            let content = fs::read_to_string(&self.path).context("Failed to read preferences")?;
            let values = serde_json::from_str(&content).context("Failed to parse preferences")?;
            Ok(values)
        }
    }

    impl PreferenceStore for FilePreferences {
        fn load(&self, key: &str) -> Result<Option<String>> {
            Ok(self.read_all()?.remove(key))
        }

        fn save(&self, key: &str, value: &str) -> Result<()> {
            let mut values = self.read_all().unwrap_or_else(|e| {
                tracing::warn!(error = %e, "discarding unreadable preferences file");
                BTreeMap::new()
            });
            values.insert(key.to_string(), value.to_string());

            if let Some(parent) = self.path.parent() {
                fs::create_dir_all(parent)?;
            }
            let json = serde_json::to_string_pretty(&values)?;
            atomic_write(&self.path, json.as_bytes()).context("Failed to write preferences")?;
            Ok(())
        }
    }

    pub(crate) fn atomic_write(path: &Path, contents: &[u8]) -> Result<()> {
        let tmp_path = {
            let mut name = path.as_os_str().to_os_string();
            name.push(".tmp");
            PathBuf::from(name)
        };

        let mut file = fs::File::create(&tmp_path)
            .with_context(|| format!("Failed to create temp file {}", tmp_path.display()))?;
        file.write_all(contents)
            .with_context(|| format!("Failed to write temp file {}", tmp_path.display()))?;
        file.sync_all()
            .with_context(|| format!("Failed to sync temp file {}", tmp_path.display()))?;
        drop(file);

        match fs::rename(&tmp_path, path) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                fs::remove_file(path).ok();
                fs::rename(&tmp_path, path).with_context(|| {
                    format!("Failed to replace destination file {}", path.display())
                })?;
            }
            Err(e) => {
                return Err(e).with_context(|| {
                    format!(
                        "Failed to rename temp file {} to {}",
                        tmp_path.display(),
                        path.display()
                    )
                });
            }
        }
        Ok(())
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn missing_file_reads_as_empty() {
            let dir = tempfile::tempdir().unwrap();
            let prefs = FilePreferences::new(dir.path().join("preferences.json"));
            assert_eq!(prefs.load("vite-ui-theme").unwrap(), None);
        }

        #[test]
        fn save_keeps_other_keys() {
            let dir = tempfile::tempdir().unwrap();
            let prefs = FilePreferences::new(dir.path().join("nested").join("preferences.json"));
            prefs.save("a", "1").unwrap();
            prefs.save("b", "2").unwrap();
            prefs.save("a", "3").unwrap();

            assert_eq!(prefs.load("a").unwrap().as_deref(), Some("3"));
            assert_eq!(prefs.load("b").unwrap().as_deref(), Some("2"));
            assert!(!dir.path().join("nested").join("preferences.json.tmp").exists());
        }

        #[test]
        fn corrupt_file_is_replaced_on_save() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("preferences.json");
            fs::write(&path, "not json").unwrap();
            let prefs = FilePreferences::new(&path);

            assert!(prefs.load("a").is_err());
            prefs.save("a", "1").unwrap();
            assert_eq!(prefs.load("a").unwrap().as_deref(), Some("1"));
        }
    }
}
