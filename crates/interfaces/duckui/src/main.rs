#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "duckui", version = duckui_config::version(), about = "Explore data with DuckDB")]
struct Cli {
    /// In-app path to open, e.g. /connections
    path: Option<String>,

    /// Base path the router is mounted under [default: the value baked in at
    /// build time, else /]
    #[arg(long, env = duckui_config::BASE_PATH_ENV)]
    base_path: Option<String>,
}

impl Cli {
    fn launch_options(self) -> duckui_ui::LaunchOptions {
        let defaults = duckui_ui::LaunchOptions::default();
        duckui_ui::LaunchOptions {
            initial_path: self.path,
            base_path: self.base_path.unwrap_or(defaults.base_path),
        }
    }
}

fn main() {
    let options = Cli::parse().launch_options();
    if let Err(err) = duckui_ui::run(options) {
        eprintln!("Duck UI failed: {err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_path_and_base() {
        let options = Cli::try_parse_from(["duckui", "/connections", "--base-path", "/duck-ui"])
            .unwrap()
            .launch_options();
        assert_eq!(options.initial_path.as_deref(), Some("/connections"));
        assert_eq!(options.base_path, "/duck-ui");
    }

    #[test]
    fn missing_flag_falls_back_to_configured_base_path() {
        std::env::remove_var(duckui_config::BASE_PATH_ENV);
        let cli = Cli::try_parse_from(["duckui"]).unwrap();
        assert_eq!(cli.base_path, None);

        let expected = option_env!("DUCK_UI_BASEPATH").unwrap_or(duckui_config::DEFAULT_BASE_PATH);
        assert_eq!(cli.launch_options().base_path, expected);
        assert_eq!(expected, duckui_config::base_path());
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
