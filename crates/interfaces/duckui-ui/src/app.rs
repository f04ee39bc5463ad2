use crate::components::confirm_exit::{self, ExitChoice};
use crate::components::header::{self, NavInfo};
use crate::components::toaster;
use crate::bootstrap::Preferences;
use crate::screens::{connections, home, loading, not_found, recovery};
use crate::theme;
use crate::views::Views;
use duckui_app_core::{
    AppCommand, AppShell, RenderError, ShellFrame, Theme, UnloadHost, UnloadVerdict, View,
};
use eframe::egui;
use egui_taffy::taffy::prelude::{auto, length, percent};
use egui_taffy::{taffy, tui, TuiBuilderLogic};
use web_time::Instant;

/// Runs the host's unload listeners when the window is asked to close.
pub type CloseHook = Box<dyn Fn() -> UnloadVerdict>;

/// Reads a location changed outside the app, e.g. by the browser's back
/// button.
pub type LocationSource = Box<dyn Fn() -> Option<String>>;

pub struct DuckUiApp<H: UnloadHost + Clone + 'static> {
    shell: AppShell<H, Views, Preferences>,
    on_close: Option<CloseHook>,
    location_source: Option<LocationSource>,
    applied_theme: Option<Theme>,
    confirming_exit: bool,
    closing: bool,
}

impl<H: UnloadHost + Clone + 'static> DuckUiApp<H> {
    pub fn new(shell: AppShell<H, Views, Preferences>) -> Self {
        Self {
            shell,
            on_close: None,
            location_source: None,
            applied_theme: None,
            confirming_exit: false,
            closing: false,
        }
    }

    pub fn with_close_hook(mut self, hook: impl Fn() -> UnloadVerdict + 'static) -> Self {
        self.on_close = Some(Box::new(hook));
        self
    }

    pub fn with_location_source(mut self, source: impl Fn() -> Option<String> + 'static) -> Self {
        self.location_source = Some(Box::new(source));
        self
    }

    fn sync_location(&mut self) {
        if let Some(location) = self.location_source.as_ref().and_then(|source| source()) {
            self.shell.history_mut().sync_external(&location);
        }
    }

    fn sync_theme(&mut self, ctx: &egui::Context) {
        let current = self.shell.theme().theme();
        if self.applied_theme != Some(current) {
            tracing::debug!(theme = %current, "applying theme");
            theme::apply(ctx, current);
            self.applied_theme = Some(current);
        }
    }

    fn handle_close_request(&mut self, ctx: &egui::Context) {
        if self.closing || !ctx.input(|i| i.viewport().close_requested()) {
            return;
        }
        let Some(hook) = &self.on_close else {
            return;
        };
        if hook() == UnloadVerdict::ConfirmRequested {
            tracing::info!("close intercepted, asking for confirmation");
            ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
            self.confirming_exit = true;
        }
    }

    fn nav_info(&self) -> NavInfo {
        let history = self.shell.history();
        NavInfo {
            location: history.location().to_string(),
            view: history.current_view(),
            can_go_back: history.can_go_back(),
            can_go_forward: history.can_go_forward(),
            theme: self.shell.theme().theme(),
        }
    }
}

impl<H: UnloadHost + Clone + 'static> eframe::App for DuckUiApp<H> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.sync_location();
        self.sync_theme(ctx);
        self.handle_close_request(ctx);

        let now = Instant::now();
        self.shell.toaster_mut().prune(now);
        if let Some(wait) = self.shell.toaster().next_expiry(now) {
            ctx.request_repaint_after(wait);
        }

        ctx.options_mut(|options| {
            options.max_passes = std::num::NonZeroUsize::MIN.saturating_add(2);
        });
        ctx.all_styles_mut(|style| {
            // Width-independent text measurement for egui_taffy's multi-pass layout.
            style.wrap_mode = Some(egui::TextWrapMode::Extend);
        });

        let nav = self.nav_info();
        let mut commands = Vec::new();

        egui::CentralPanel::default().show(ctx, |ui| {
            let frame = self
                .shell
                .render(|view, views| draw_shell(ui, &nav, view, views, &mut commands));
            match frame {
                ShellFrame::View(()) => {}
                ShellFrame::Loading { message } => loading::draw(ui, &message),
                ShellFrame::Recovery(failure) => {
                    if recovery::draw(ui, &failure) {
                        commands.push(AppCommand::RetryRender);
                    }
                }
            }
        });

        toaster::draw(ctx, self.shell.toaster(), &mut commands);

        if self.confirming_exit {
            match confirm_exit::draw(ctx) {
                ExitChoice::Pending => {}
                ExitChoice::Stay => self.confirming_exit = false,
                ExitChoice::Leave => {
                    self.confirming_exit = false;
                    self.closing = true;
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            }
        }

        for cmd in commands {
            tracing::debug!(?cmd, "dispatch");
            self.shell.dispatch(cmd);
        }
    }
}

/// Header plus the routed view. The first error raised by either is
/// returned to the render-failure boundary.
fn draw_shell(
    ui: &mut egui::Ui,
    nav: &NavInfo,
    view: View,
    views: &mut Views,
    commands: &mut Vec<AppCommand>,
) -> Result<(), RenderError> {
    let mut outcome = Ok(());
    tui(ui, ui.id().with("shell"))
        .reserve_available_space()
        .style(taffy::Style {
            flex_direction: taffy::FlexDirection::Column,
            size: percent(1.),
            min_size: taffy::Size {
                width: percent(1.),
                height: length(0.0),
            },
            ..Default::default()
        })
        .show(|tui| {
            tui.style(taffy::Style {
                size: taffy::Size {
                    width: percent(1.),
                    height: length(36.0),
                },
                flex_shrink: 0.0,
                ..Default::default()
            })
            .add(|tui| outcome = header::draw(tui, nav, commands));

            tui.style(taffy::Style {
                flex_direction: taffy::FlexDirection::Column,
                size: taffy::Size {
                    width: percent(1.),
                    height: auto(),
                },
                flex_grow: 1.0,
                flex_basis: length(0.0),
                min_size: taffy::Size {
                    width: length(0.0),
                    height: length(0.0),
                },
                overflow: taffy::Point {
                    x: taffy::Overflow::Hidden,
                    y: taffy::Overflow::Hidden,
                },
                padding: length(16.0),
                gap: length(8.0),
                ..Default::default()
            })
            .add(|tui| {
                let drawn = match view {
                    View::Home => home::draw(tui, commands),
                    View::Connections => connections::draw(tui, &mut views.connections, commands),
                    View::NotFound => not_found::draw(tui, &nav.location, commands),
                };
                if outcome.is_ok() {
                    outcome = drawn;
                }
            });
        });
    outcome
}
