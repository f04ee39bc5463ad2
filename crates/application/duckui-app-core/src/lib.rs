#[cfg(not(target_arch = "wasm32"))]
mod async_runtime;
pub mod boundary;
pub mod commands;
pub mod engine;
pub mod error;
pub mod gate;
pub mod local_engine;
pub mod navigation;
pub mod persistence;
pub mod ports;
pub mod shell;
pub mod theme;
pub mod toast;
pub mod unload;

pub use boundary::{BoundaryOutput, RenderBoundary, RenderFailure, FALLBACK_MESSAGE};
pub use commands::AppCommand;
pub use engine::{EngineStore, InitTrigger};
pub use error::{require_mount_target, RenderError, StartupError};
pub use gate::{Gated, InitGate};
pub use local_engine::EngineManifest;
#[cfg(not(target_arch = "wasm32"))]
pub use local_engine::LocalEngine;
pub use navigation::{History, NavKind};
#[cfg(not(target_arch = "wasm32"))]
pub use persistence::FilePreferences;
pub use persistence::MemoryPreferences;
pub use ports::*;
pub use shell::{AppShell, ShellFrame};
pub use theme::ThemeProvider;
pub use toast::{Toast, ToastId, ToastLevel, Toaster, ToasterConfig};
pub use unload::{LocalUnloadHost, UnloadGuard, UnloadVerdict};

pub use duckui_core::{BasePath, EngineFlags, EngineInitState, InitError, Theme, View};
