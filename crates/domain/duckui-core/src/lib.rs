pub mod init;
pub mod route;
pub mod theme;

pub use init::{EngineFlags, EngineInitState, InitError};
pub use route::{resolve, BasePath, RouteDef, RoutePattern, View, ROUTES};
pub use theme::Theme;
