use duckui_core::View;

use crate::boundary::{BoundaryOutput, RenderBoundary, RenderFailure};
use crate::commands::AppCommand;
use crate::engine::EngineStore;
use crate::error::RenderError;
use crate::gate::{Gated, InitGate};
use crate::navigation::History;
use crate::ports::{PreferenceStore, UnloadHost};
use crate::theme::ThemeProvider;
use crate::toast::Toaster;
use crate::unload::UnloadGuard;

/// What the frontend should draw for the current frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellFrame<T> {
    Loading { message: String },
    Recovery(RenderFailure),
    View(T),
}

/// The navigation shell once the gate has opened: the unload guard and the
/// views' own state live exactly as long as this does.
struct Mounted<H: UnloadHost, V> {
    _unload: UnloadGuard<H>,
    views: V,
}

/// Everything below the render-failure boundary.
struct Subtree<H: UnloadHost, V> {
    gate: InitGate,
    mounted: Option<Mounted<H, V>>,
}

/// Root composition: boundary, then gate, then navigation and views.
///
/// The engine store, history, theme and toaster sit outside the boundary and
/// survive a retry; the gate, unload guard and view state do not.
pub struct AppShell<H, V, P>
where
    H: UnloadHost + Clone + 'static,
    V: Default + 'static,
    P: PreferenceStore,
{
    engine: EngineStore,
    boundary: RenderBoundary<Subtree<H, V>>,
    host: H,
    history: History,
    theme: ThemeProvider<P>,
    toaster: Toaster,
}

impl<H, V, P> AppShell<H, V, P>
where
    H: UnloadHost + Clone + 'static,
    V: Default + 'static,
    P: PreferenceStore,
{
    pub fn new(engine: EngineStore, host: H, history: History, theme: ThemeProvider<P>) -> Self {
        Self {
            engine,
            boundary: RenderBoundary::new(|| Subtree {
                gate: InitGate::new(),
                mounted: None,
            }),
            host,
            history,
            theme,
            toaster: Toaster::default(),
        }
    }

    pub fn with_toaster(mut self, toaster: Toaster) -> Self {
        self.toaster = toaster;
        self
    }

    /// Render one frame. `draw` receives the routed view and the views' state
    /// and only runs once the engine is ready.
    pub fn render<T>(
        &mut self,
        draw: impl FnOnce(View, &mut V) -> Result<T, RenderError>,
    ) -> ShellFrame<T> {
        let Self {
            engine,
            boundary,
            host,
            history,
            ..
        } = self;
        let view = history.current_view();

        let output = boundary.render(|subtree| {
            let Subtree { gate, mounted } = subtree;
            gate.render(engine, || {
                let mounted = mounted.get_or_insert_with(|| Mounted {
                    _unload: UnloadGuard::install(host.clone()),
                    views: V::default(),
                });
                draw(view, &mut mounted.views)
            })
        });

        match output {
            BoundaryOutput::Content(Gated::Open(value)) => ShellFrame::View(value),
            BoundaryOutput::Content(Gated::Loading { message }) => ShellFrame::Loading { message },
            BoundaryOutput::Recovery(failure) => ShellFrame::Recovery(failure),
        }
    }

    pub fn dispatch(&mut self, cmd: AppCommand) {
        match cmd {
            AppCommand::Navigate(path) => self.history.push(&path),
            AppCommand::Back => {
                self.history.back();
            }
            AppCommand::Forward => {
                self.history.forward();
            }
            AppCommand::RetryRender => self.boundary.reset(),
            AppCommand::SetTheme(theme) => {
                if let Err(e) = self.theme.set_theme(theme) {
                    tracing::warn!(error = %e, %theme, "failed to persist theme preference");
                }
            }
            AppCommand::Notify { level, message } => {
                self.toaster.push(level, message);
            }
            AppCommand::DismissToast(id) => {
                self.toaster.dismiss(id);
            }
        }
    }

    pub fn engine(&self) -> &EngineStore {
        &self.engine
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut History {
        &mut self.history
    }

    pub fn theme(&self) -> &ThemeProvider<P> {
        &self.theme
    }

    pub fn toaster(&self) -> &Toaster {
        &self.toaster
    }

    pub fn toaster_mut(&mut self) -> &mut Toaster {
        &mut self.toaster
    }

    pub fn failure(&self) -> Option<&RenderFailure> {
        self.boundary.failure()
    }

    /// Whether the navigation shell is mounted, i.e. the gate has opened and
    /// no failure has discarded it since.
    pub fn is_mounted(&self) -> bool {
        self.boundary
            .subtree()
            .is_some_and(|s| s.mounted.is_some())
    }
}
