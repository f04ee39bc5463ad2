use std::cell::RefCell;
use std::rc::Rc;

use anyhow::anyhow;
use duckui_app_core::{
    require_mount_target, AppShell, BasePath, EngineBootstrap, EngineManifest, EngineStore,
    History, InitError, ListenerId, NavKind, PreferenceStore, StartupError, ThemeProvider,
    UnloadEvent, UnloadHost, UnloadListener,
};
use tracing_subscriber::layer::SubscriberExt;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::app::DuckUiApp;
use crate::bootstrap::Preferences;

/// localStorage key of the engine manifest.
const MANIFEST_KEY: &str = "duckui-engine";

fn js_error(value: JsValue) -> anyhow::Error {
    anyhow!("{value:?}")
}

fn local_storage() -> anyhow::Result<web_sys::Storage> {
    web_sys::window()
        .ok_or_else(|| anyhow!("no global window"))?
        .local_storage()
        .map_err(js_error)?
        .ok_or_else(|| anyhow!("localStorage is disabled"))
}

/// Preferences kept in the browser's localStorage.
pub struct LocalStoragePreferences;

impl PreferenceStore for LocalStoragePreferences {
    fn load(&self, key: &str) -> anyhow::Result<Option<String>> {
        local_storage()?.get_item(key).map_err(js_error)
    }

    fn save(&self, key: &str, value: &str) -> anyhow::Result<()> {
        local_storage()?.set_item(key, value).map_err(js_error)
    }
}

/// Engine startup in the browser: storage must be usable and hold no data
/// from a newer build.
pub struct BrowserEngine;

#[async_trait::async_trait]
impl EngineBootstrap for BrowserEngine {
    async fn boot(&self) -> Result<(), InitError> {
        let storage = local_storage()
            .map_err(|e| InitError::new(format!("Browser storage is unavailable: {e}")))?;
        let stored = storage
            .get_item(MANIFEST_KEY)
            .map_err(|e| InitError::new(format!("Failed to read engine manifest: {e:?}")))?;
        match stored {
            Some(raw) => EngineManifest::parse(&raw)?.check_compatible(),
            None => {
                let json = EngineManifest::current().to_json()?;
                storage
                    .set_item(MANIFEST_KEY, &json)
                    .map_err(|e| InitError::new(format!("Failed to write engine manifest: {e:?}")))
            }
        }
    }
}

type BeforeUnloadClosure = Closure<dyn FnMut(web_sys::BeforeUnloadEvent)>;

struct BrowserUnloadEvent<'a>(&'a web_sys::BeforeUnloadEvent);

impl UnloadEvent for BrowserUnloadEvent<'_> {
    fn prevent_default(&mut self) {
        self.0.prevent_default();
        // Some browsers only prompt when a return value is set.
        self.0.set_return_value("");
    }
}

#[derive(Default)]
struct WebListeners {
    next_id: u64,
    entries: Vec<(ListenerId, BeforeUnloadClosure)>,
}

/// Unload host backed by the window's `beforeunload` event.
#[derive(Clone)]
pub struct WebUnloadHost {
    window: web_sys::Window,
    inner: Rc<RefCell<WebListeners>>,
}

impl WebUnloadHost {
    pub fn new(window: web_sys::Window) -> Self {
        Self {
            window,
            inner: Rc::default(),
        }
    }
}

impl UnloadHost for WebUnloadHost {
    fn add_unload_listener(&self, mut listener: UnloadListener) -> ListenerId {
        let closure = BeforeUnloadClosure::new(move |event: web_sys::BeforeUnloadEvent| {
            let mut event = BrowserUnloadEvent(&event);
            listener(&mut event as &mut dyn UnloadEvent);
        });
        if let Err(e) = self
            .window
            .add_event_listener_with_callback("beforeunload", closure.as_ref().unchecked_ref())
        {
            tracing::warn!(error = ?e, "failed to install beforeunload listener");
        }

        let mut inner = self.inner.borrow_mut();
        inner.next_id += 1;
        let id = ListenerId(inner.next_id);
        inner.entries.push((id, closure));
        id
    }

    fn remove_unload_listener(&self, id: ListenerId) -> bool {
        let mut inner = self.inner.borrow_mut();
        let Some(pos) = inner.entries.iter().position(|(entry, _)| *entry == id) else {
            return false;
        };
        let (_, closure) = inner.entries.remove(pos);
        if let Err(e) = self
            .window
            .remove_event_listener_with_callback("beforeunload", closure.as_ref().unchecked_ref())
        {
            tracing::warn!(error = ?e, "failed to remove beforeunload listener");
        }
        true
    }
}

/// Repaints when the browser's back or forward buttons change the location;
/// the listener is removed on drop.
struct PopStateListener {
    window: web_sys::Window,
    closure: Closure<dyn FnMut()>,
}

impl PopStateListener {
    fn install(window: web_sys::Window, ctx: eframe::egui::Context) -> Self {
        let closure = Closure::<dyn FnMut()>::new(move || ctx.request_repaint());
        if let Err(e) =
            window.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())
        {
            tracing::warn!(error = ?e, "failed to install popstate listener");
        }
        Self { window, closure }
    }
}

impl Drop for PopStateListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("popstate", self.closure.as_ref().unchecked_ref());
    }
}

/// Browser console logging, filtered at `info` like the native build.
fn setup_logging() {
    let config = tracing_wasm::WASMLayerConfigBuilder::new()
        .set_max_level(tracing::Level::INFO)
        .build();
    let subscriber = tracing_subscriber::registry().with(tracing_wasm::WASMLayer::new(config));
    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn frontend_error(context: &str, value: JsValue) -> StartupError {
    StartupError::Frontend(format!("{context}: {value:?}"))
}

/// Entry point called by the page's loader script.
#[wasm_bindgen]
pub async fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    setup_logging();
    tracing::info!(version = duckui_config::version(), "starting Duck UI");

    start_app().await.map_err(|e| {
        tracing::error!(error = %e, "startup failed");
        JsValue::from_str(&e.to_string())
    })
}

async fn start_app() -> Result<(), StartupError> {
    let window =
        web_sys::window().ok_or_else(|| StartupError::Frontend("no global window".into()))?;
    let document = window
        .document()
        .ok_or_else(|| StartupError::Frontend("no document".into()))?;
    let canvas = require_mount_target(
        document
            .get_element_by_id(duckui_config::ROOT_ELEMENT_ID)
            .and_then(|el| el.dyn_into::<web_sys::HtmlCanvasElement>().ok()),
        duckui_config::ROOT_ELEMENT_ID,
    )?;

    let base = BasePath::parse(&duckui_config::base_path());
    let location = window.location();
    let initial = location
        .pathname()
        .map_err(|e| frontend_error("failed to read location", e))?;
    let address_bar = window
        .history()
        .map_err(|e| frontend_error("history API unavailable", e))?;
    let history = History::new(base, initial).with_sink(move |url, kind| {
        let result = match kind {
            NavKind::Push => address_bar.push_state_with_url(&JsValue::NULL, "", Some(url)),
            NavKind::Replace => address_bar.replace_state_with_url(&JsValue::NULL, "", Some(url)),
        };
        if let Err(e) = result {
            tracing::warn!(error = ?e, "failed to update the address bar");
        }
    });

    let preferences: Preferences = Box::new(LocalStoragePreferences);
    let shell = AppShell::new(
        EngineStore::new(BrowserEngine),
        WebUnloadHost::new(window.clone()),
        history,
        ThemeProvider::with_defaults(preferences),
    );

    eframe::WebRunner::new()
        .start(
            canvas,
            eframe::WebOptions::default(),
            Box::new(move |cc| {
                crate::theme::setup(&cc.egui_ctx);
                let ctx = cc.egui_ctx.clone();
                shell.engine().on_change(move || ctx.request_repaint());
                let popstate = PopStateListener::install(window, cc.egui_ctx.clone());
                Ok(Box::new(DuckUiApp::new(shell).with_location_source(
                    move || {
                        // Ties the popstate listener to the app's lifetime.
                        let _alive = &popstate;
                        location.pathname().ok()
                    },
                )))
            }),
        )
        .await
        .map_err(|e| frontend_error("failed to start the renderer", e))
}
