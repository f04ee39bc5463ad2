use duckui_core::InitError;

/// Starts the embedded analytical engine.
#[async_trait::async_trait]
pub trait EngineBootstrap: Send + Sync + 'static {
    async fn boot(&self) -> Result<(), InitError>;
}

/// Key/value storage for user preferences that outlive a session.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> anyhow::Result<Option<String>>;
    fn save(&self, key: &str, value: &str) -> anyhow::Result<()>;
}

/// The event handed to unload listeners.
pub trait UnloadEvent {
    /// Ask the host to confirm with the user before leaving.
    fn prevent_default(&mut self);
}

pub type UnloadListener = Box<dyn FnMut(&mut dyn UnloadEvent)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub u64);

/// Something that can be closed or navigated away from: a browser window or a
/// native viewport.
pub trait UnloadHost {
    fn add_unload_listener(&self, listener: UnloadListener) -> ListenerId;

    /// Returns `false` when no listener with this id was installed.
    fn remove_unload_listener(&self, id: ListenerId) -> bool;
}

impl<P: PreferenceStore + ?Sized> PreferenceStore for Box<P> {
    fn load(&self, key: &str) -> anyhow::Result<Option<String>> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &str) -> anyhow::Result<()> {
        (**self).save(key, value)
    }
}
