mod common;

use common::{wait_until, ScriptedBoot};
use duckui_app_core::{
    AppCommand, AppShell, BasePath, EngineStore, History, LocalUnloadHost, MemoryPreferences,
    RenderError, RenderFailure, ShellFrame, Theme, ThemeProvider, ToastLevel, UnloadVerdict, View,
    FALLBACK_MESSAGE,
};

#[derive(Default)]
struct Views {
    visits: u32,
}

type Shell = AppShell<LocalUnloadHost, Views, MemoryPreferences>;

fn shell(boot: ScriptedBoot, host: &LocalUnloadHost) -> Shell {
    AppShell::new(
        EngineStore::new(boot),
        host.clone(),
        History::at_root(BasePath::root()),
        ThemeProvider::with_defaults(MemoryPreferences::new()),
    )
}

fn routed(shell: &mut Shell) -> ShellFrame<View> {
    shell.render(|view, _| Ok(view))
}

fn ready(shell: &mut Shell) {
    let _ = routed(shell);
    let engine = shell.engine().clone();
    assert!(wait_until(|| engine.is_initialized()), "engine never became ready");
}

#[test]
fn loading_screen_until_engine_is_ready_then_routes() {
    let host = LocalUnloadHost::new();
    let boot = ScriptedBoot::ok().held();
    let mut shell = shell(boot.clone(), &host);

    let loading = ShellFrame::Loading {
        message: "Initializing DuckDB".to_string(),
    };
    assert_eq!(routed(&mut shell), loading);
    assert_eq!(routed(&mut shell), loading);
    assert!(!shell.is_mounted());
    assert_eq!(host.listener_count(), 0);

    boot.release();
    let engine = shell.engine().clone();
    assert!(wait_until(|| engine.is_initialized()));

    assert_eq!(routed(&mut shell), ShellFrame::View(View::Home));
    assert!(shell.is_mounted());

    shell.dispatch(AppCommand::Navigate("/connections".into()));
    assert_eq!(routed(&mut shell), ShellFrame::View(View::Connections));
    shell.dispatch(AppCommand::Navigate("/anything-else".into()));
    assert_eq!(routed(&mut shell), ShellFrame::View(View::NotFound));
    shell.dispatch(AppCommand::Back);
    assert_eq!(routed(&mut shell), ShellFrame::View(View::Connections));
    shell.dispatch(AppCommand::Forward);
    assert_eq!(routed(&mut shell), ShellFrame::View(View::NotFound));

    assert_eq!(engine.attempts(), 1);
    assert_eq!(boot.calls(), 1);
}

#[test]
fn view_panic_shows_recovery_and_retry_starts_fresh() {
    let host = LocalUnloadHost::new();
    let mut shell = shell(ScriptedBoot::ok(), &host);
    ready(&mut shell);

    let count = |shell: &mut Shell| {
        shell.render(|_, views| {
            views.visits += 1;
            Ok(views.visits)
        })
    };
    assert_eq!(count(&mut shell), ShellFrame::View(1));
    assert_eq!(count(&mut shell), ShellFrame::View(2));

    let frame = shell.render(|_, _| -> Result<u32, RenderError> { panic!("chart failed") });
    assert_eq!(
        frame,
        ShellFrame::Recovery(RenderFailure {
            message: "chart failed".into()
        })
    );
    assert!(!shell.is_mounted());
    assert_eq!(host.listener_count(), 0);

    // Still recovering: the subtree is not attempted again until retry.
    assert!(matches!(count(&mut shell), ShellFrame::Recovery(_)));

    shell.dispatch(AppCommand::RetryRender);
    assert_eq!(count(&mut shell), ShellFrame::View(1));
    assert_eq!(host.listener_count(), 1);
    assert_eq!(shell.engine().attempts(), 1);
}

#[test]
fn error_without_message_uses_fallback_text() {
    let host = LocalUnloadHost::new();
    let mut shell = shell(ScriptedBoot::ok(), &host);
    ready(&mut shell);

    let frame = shell.render(|_, _| -> Result<(), RenderError> { Err(RenderError::view("")) });
    assert_eq!(
        frame,
        ShellFrame::Recovery(RenderFailure {
            message: FALLBACK_MESSAGE.into()
        })
    );
    assert_eq!(shell.failure().map(|f| f.message.as_str()), Some(FALLBACK_MESSAGE));
}

#[test]
fn init_failure_surfaces_and_retry_reinitializes() {
    let host = LocalUnloadHost::new();
    let boot = ScriptedBoot::failing_then_ok("wasm bundle missing");
    let mut shell = shell(boot.clone(), &host);

    assert!(matches!(routed(&mut shell), ShellFrame::Loading { .. }));
    let engine = shell.engine().clone();
    assert!(wait_until(|| engine.snapshot().failure().is_some()));

    assert_eq!(
        routed(&mut shell),
        ShellFrame::Recovery(RenderFailure {
            message: "wasm bundle missing".into()
        })
    );

    shell.dispatch(AppCommand::RetryRender);
    assert!(matches!(routed(&mut shell), ShellFrame::Loading { .. }));
    assert!(wait_until(|| engine.is_initialized()));
    assert_eq!(routed(&mut shell), ShellFrame::View(View::Home));

    assert_eq!(engine.attempts(), 2);
    assert_eq!(boot.calls(), 2);
}

#[test]
fn unload_is_intercepted_only_while_the_shell_is_mounted() {
    let host = LocalUnloadHost::new();
    let mut shell = shell(ScriptedBoot::ok(), &host);

    assert_eq!(host.dispatch_unload(), UnloadVerdict::Proceed);
    ready(&mut shell);
    let _ = routed(&mut shell);

    for _ in 0..3 {
        assert_eq!(host.dispatch_unload(), UnloadVerdict::ConfirmRequested);
    }

    drop(shell);
    assert_eq!(host.listener_count(), 0);
    assert_eq!(host.dispatch_unload(), UnloadVerdict::Proceed);
}

#[test]
fn base_path_scopes_routing() {
    let host = LocalUnloadHost::new();
    let mut shell = AppShell::<_, Views, _>::new(
        EngineStore::new(ScriptedBoot::ok()),
        host.clone(),
        History::new(BasePath::parse("/duck-ui/"), "/duck-ui/connections"),
        ThemeProvider::with_defaults(MemoryPreferences::new()),
    );
    let _ = shell.render(|view, _| Ok(view));
    let engine = shell.engine().clone();
    assert!(wait_until(|| engine.is_initialized()));

    assert_eq!(shell.render(|view, _| Ok(view)), ShellFrame::View(View::Connections));
    shell.dispatch(AppCommand::Navigate("/".into()));
    assert_eq!(shell.history().location(), "/duck-ui");
    assert_eq!(shell.render(|view, _| Ok(view)), ShellFrame::View(View::Home));
}

#[test]
fn theme_and_toast_commands_reach_their_owners() {
    let host = LocalUnloadHost::new();
    let mut shell = shell(ScriptedBoot::ok(), &host);
    assert_eq!(shell.theme().theme(), Theme::Dark);

    shell.dispatch(AppCommand::SetTheme(Theme::Light));
    assert_eq!(shell.theme().theme(), Theme::Light);

    shell.dispatch(AppCommand::Notify {
        level: ToastLevel::Success,
        message: "Connection saved".into(),
    });
    let id = shell.toaster().visible()[0].id;
    shell.dispatch(AppCommand::DismissToast(id));
    assert!(shell.toaster().is_empty());
}
