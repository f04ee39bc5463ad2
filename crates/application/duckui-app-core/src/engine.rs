use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};

use duckui_config::ENGINE_NAME;
use duckui_core::{EngineFlags, EngineInitState, InitError};
use tokio::sync::watch;

use crate::ports::EngineBootstrap;

pub type ChangeNotifier = Arc<dyn Fn() + Send + Sync>;

/// What a call to [`EngineStore::initialize`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitTrigger {
    Started,
    AlreadyLoading,
    AlreadyReady,
}

/// Owner of the engine lifecycle.
///
/// The store is the only writer of [`EngineInitState`]; everything else reads
/// snapshots or subscribes to changes. Clones share the same engine.
#[derive(Clone)]
pub struct EngineStore {
    inner: Arc<Inner>,
}

struct Inner {
    state: watch::Sender<EngineInitState>,
    bootstrap: Arc<dyn EngineBootstrap>,
    attempts: AtomicU64,
    notifier: OnceLock<ChangeNotifier>,
}

impl EngineStore {
    pub fn new(bootstrap: impl EngineBootstrap) -> Self {
        Self::from_shared(Arc::new(bootstrap))
    }

    pub fn from_shared(bootstrap: Arc<dyn EngineBootstrap>) -> Self {
        let (state, _) = watch::channel(EngineInitState::Cold);
        Self {
            inner: Arc::new(Inner {
                state,
                bootstrap,
                attempts: AtomicU64::new(0),
                notifier: OnceLock::new(),
            }),
        }
    }

    /// Register a callback run after every state change, e.g. to schedule a
    /// repaint. Only the first registration is kept.
    pub fn on_change(&self, notifier: impl Fn() + Send + Sync + 'static) {
        if self.inner.notifier.set(Arc::new(notifier)).is_err() {
            tracing::debug!("engine change notifier already registered");
        }
    }

    /// Start engine initialization unless it is in flight or done.
    ///
    /// Returns immediately; the attempt completes in the background.
    pub fn initialize(&self) -> InitTrigger {
        let mut trigger = InitTrigger::Started;
        let started = self.inner.state.send_if_modified(|state| {
            if state.can_start() {
                *state = EngineInitState::Loading;
                return true;
            }
            trigger = if state.is_initialized() {
                InitTrigger::AlreadyReady
            } else {
                InitTrigger::AlreadyLoading
            };
            false
        });

        if !started {
            tracing::debug!(?trigger, "engine initialize ignored");
            return trigger;
        }

        let attempt = self.inner.attempts.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::info!(attempt, "initializing {ENGINE_NAME}");
        self.inner.notify();
        self.spawn_attempt(attempt);
        InitTrigger::Started
    }

    pub fn snapshot(&self) -> EngineInitState {
        self.inner.state.borrow().clone()
    }

    pub fn flags(&self) -> EngineFlags {
        self.inner.state.borrow().flags()
    }

    pub fn is_initialized(&self) -> bool {
        self.flags().is_initialized
    }

    pub fn is_loading(&self) -> bool {
        self.flags().is_loading
    }

    pub fn subscribe(&self) -> watch::Receiver<EngineInitState> {
        self.inner.state.subscribe()
    }

    /// Number of initialization attempts started by this store.
    pub fn attempts(&self) -> u64 {
        self.inner.attempts.load(Ordering::SeqCst)
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn spawn_attempt(&self, attempt: u64) {
        let inner = self.inner.clone();
        let spawn_res = std::thread::Builder::new()
            .name("duckui-engine-init".into())
            .spawn(move || {
                let outcome = match crate::async_runtime::runtime() {
                    Ok(rt) => rt.block_on(inner.bootstrap.boot()),
                    Err(e) => Err(InitError::new(format!(
                        "Failed to start async runtime: {e}"
                    ))),
                };
                inner.finish(attempt, outcome);
            });

        if let Err(e) = spawn_res {
            self.inner.finish(
                attempt,
                Err(InitError::new(format!(
                    "Failed to start engine worker thread: {e}"
                ))),
            );
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn spawn_attempt(&self, attempt: u64) {
        let inner = self.inner.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = inner.bootstrap.boot().await;
            inner.finish(attempt, outcome);
        });
    }
}

impl Inner {
    fn finish(&self, attempt: u64, outcome: Result<(), InitError>) {
        let next = match outcome {
            Ok(()) => {
                tracing::info!(attempt, "{ENGINE_NAME} ready");
                EngineInitState::Ready
            }
            Err(e) => {
                tracing::error!(attempt, error = %e, "{ENGINE_NAME} failed to initialize");
                EngineInitState::Failed(e)
            }
        };
        self.state.send_replace(next);
        self.notify();
    }

    fn notify(&self) {
        if let Some(notifier) = self.notifier.get() {
            notifier();
        }
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::{wait_until, Scripted};
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn repeated_initialize_runs_one_attempt() {
        let boot = Scripted::ok().held();
        let store = EngineStore::new(boot.clone());

        assert_eq!(store.initialize(), InitTrigger::Started);
        assert_eq!(store.initialize(), InitTrigger::AlreadyLoading);
        assert_eq!(store.initialize(), InitTrigger::AlreadyLoading);
        assert!(store.is_loading());

        boot.release();
        assert!(wait_until(|| store.is_initialized()));
        assert_eq!(store.initialize(), InitTrigger::AlreadyReady);
        assert_eq!(store.attempts(), 1);
        assert_eq!(boot.calls(), 1);
    }

    #[test]
    fn failure_is_published_and_allows_a_new_attempt() {
        let boot = Scripted::with_outcomes(vec![Err(InitError::new("disk full")), Ok(())]);
        let store = EngineStore::new(boot.clone());

        store.initialize();
        assert!(wait_until(|| store.snapshot().failure().is_some()));
        assert_eq!(
            store.snapshot(),
            EngineInitState::Failed(InitError::new("disk full"))
        );

        assert_eq!(store.initialize(), InitTrigger::Started);
        assert!(wait_until(|| store.is_initialized()));
        assert_eq!(store.attempts(), 2);
    }

    #[test]
    fn notifier_fires_on_each_transition() {
        let boot = Scripted::ok();
        let store = EngineStore::new(boot);
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();
        store.on_change(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        store.initialize();
        assert!(wait_until(|| store.is_initialized()));
        // Cold -> Loading, Loading -> Ready
        assert!(wait_until(|| hits.load(Ordering::SeqCst) == 2));
    }

    #[test]
    fn subscribers_observe_loading_before_ready() {
        let boot = Scripted::ok().held();
        let store = EngineStore::new(boot.clone());
        let rx = store.subscribe();
        assert_eq!(*rx.borrow(), EngineInitState::Cold);

        store.initialize();
        assert_eq!(*rx.borrow(), EngineInitState::Loading);
        boot.release();
        assert!(wait_until(|| *rx.borrow() == EngineInitState::Ready));
    }
}
