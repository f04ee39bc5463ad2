mod app;
mod bootstrap;
mod components;
mod screens;
mod theme;
mod utils;
mod views;
#[cfg(target_arch = "wasm32")]
mod web;

pub use app::DuckUiApp;
pub use views::Views;

#[cfg(not(target_arch = "wasm32"))]
pub use native::{run, LaunchOptions};

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use crate::{app, bootstrap, theme};
    use duckui_app_core::{AppShell, BasePath, History, LocalUnloadHost, ThemeProvider};
    use tracing_subscriber::{EnvFilter, FmtSubscriber};

    fn setup_logging() {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    }

    #[derive(Debug, Clone)]
    pub struct LaunchOptions {
        /// In-app path to open instead of the home view.
        pub initial_path: Option<String>,
        pub base_path: String,
    }

    impl Default for LaunchOptions {
        fn default() -> Self {
            Self {
                initial_path: None,
                base_path: duckui_config::base_path(),
            }
        }
    }

    fn initial_history(options: &LaunchOptions) -> History {
        let base = BasePath::parse(&options.base_path);
        match options.initial_path.as_deref() {
            Some(path) => {
                let location = base.join(path);
                History::new(base, location)
            }
            None => History::at_root(base),
        }
    }

    pub fn run(options: LaunchOptions) -> eframe::Result<()> {
        setup_logging();
        tracing::info!(
            version = duckui_config::version(),
            base_path = %options.base_path,
            "starting Duck UI"
        );

        let history = initial_history(&options);
        let native_options = eframe::NativeOptions {
            viewport: eframe::egui::ViewportBuilder::default()
                .with_inner_size([1100.0, 720.0])
                .with_min_inner_size([640.0, 480.0])
                .with_title("Duck UI"),
            ..Default::default()
        };

        eframe::run_native(
            "Duck UI",
            native_options,
            Box::new(move |cc| {
                theme::setup(&cc.egui_ctx);

                let engine = bootstrap::native::engine();
                let ctx = cc.egui_ctx.clone();
                engine.on_change(move || ctx.request_repaint());

                let host = LocalUnloadHost::new();
                let theme = ThemeProvider::with_defaults(bootstrap::native::preferences());
                let shell = AppShell::new(engine, host.clone(), history, theme);

                Ok(Box::new(
                    app::DuckUiApp::new(shell).with_close_hook(move || host.dispatch_unload()),
                ))
            }),
        )
    }

}
