use percent_encoding::percent_decode_str;
use serde::{Deserialize, Serialize};

/// The routable views of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum View {
    Home,
    Connections,
    NotFound,
}

impl View {
    /// Canonical in-app path, `None` for the fallback view.
    pub fn path(self) -> Option<&'static str> {
        match self {
            View::Home => Some("/"),
            View::Connections => Some("/connections"),
            View::NotFound => None,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            View::Home => "Home",
            View::Connections => "Connections",
            View::NotFound => "Not Found",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoutePattern {
    Exact(&'static str),
    Any,
}

impl RoutePattern {
    fn matches(&self, path: &str) -> bool {
        match self {
            RoutePattern::Exact(p) => p.eq_ignore_ascii_case(path),
            RoutePattern::Any => true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteDef {
    pub pattern: RoutePattern,
    pub view: View,
}

/// Declared routes, evaluated in order. The wildcard must stay last.
pub const ROUTES: &[RouteDef] = &[
    RouteDef {
        pattern: RoutePattern::Exact("/"),
        view: View::Home,
    },
    RouteDef {
        pattern: RoutePattern::Exact("/connections"),
        view: View::Connections,
    },
    RouteDef {
        pattern: RoutePattern::Any,
        view: View::NotFound,
    },
];

/// Select the view for an in-app path. First match wins.
pub fn resolve(path: &str) -> View {
    let path = normalize_path(path);
    ROUTES
        .iter()
        .find(|r| r.pattern.matches(&path))
        .map(|r| r.view)
        .unwrap_or(View::NotFound)
}

/// Drop query and fragment, percent-decode, and trim trailing slashes.
/// An empty path is the root.
pub fn normalize_path(path: &str) -> String {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let decoded = percent_decode_str(&path[..end]).decode_utf8_lossy();
    let trimmed = decoded.trim_end_matches('/');
    if trimmed.is_empty() {
        return "/".to_string();
    }
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}

/// Prefix the router is mounted under. The root base is stored as `""`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BasePath(String);

impl BasePath {
    pub fn root() -> Self {
        Self(String::new())
    }

    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim().trim_matches('/');
        if trimmed.is_empty() {
            Self::root()
        } else {
            Self(format!("/{trimmed}"))
        }
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        if self.is_root() {
            "/"
        } else {
            &self.0
        }
    }

    /// In-app path for a full location, or `None` when the location lies
    /// outside the base.
    pub fn strip(&self, location: &str) -> Option<String> {
        if self.is_root() {
            return Some(location.to_string());
        }
        let head = location.get(..self.0.len())?;
        if !head.eq_ignore_ascii_case(&self.0) {
            return None;
        }
        let rest = &location[self.0.len()..];
        match rest.chars().next() {
            None => Some("/".to_string()),
            Some('/') => Some(rest.to_string()),
            Some('?') | Some('#') => Some(format!("/{rest}")),
            Some(_) => None,
        }
    }

    /// Full location for an in-app path.
    pub fn join(&self, path: &str) -> String {
        let path = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{path}")
        };
        if self.is_root() {
            path
        } else if path == "/" {
            self.0.clone()
        } else {
            format!("{}{}", self.0, path)
        }
    }

    pub fn resolve(&self, location: &str) -> View {
        self.strip(location)
            .map(|p| resolve(&p))
            .unwrap_or(View::NotFound)
    }
}

impl std::fmt::Display for BasePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_handles_query_fragment_and_slashes() {
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path("///"), "/");
        assert_eq!(normalize_path("/connections/"), "/connections");
        assert_eq!(normalize_path("/connections?tab=1#top"), "/connections");
        assert_eq!(normalize_path("connections"), "/connections");
        assert_eq!(normalize_path("/conn%65ctions"), "/connections");
    }

    #[test]
    fn wildcard_is_last() {
        assert_eq!(ROUTES.last().map(|r| r.pattern), Some(RoutePattern::Any));
    }

    #[test]
    fn base_path_parse_variants() {
        assert!(BasePath::parse("").is_root());
        assert!(BasePath::parse("/").is_root());
        assert_eq!(BasePath::parse("/duck-ui/").as_str(), "/duck-ui");
        assert_eq!(BasePath::parse("duck-ui").as_str(), "/duck-ui");
        assert_eq!(BasePath::root().to_string(), "/");
    }

    #[test]
    fn base_path_strip_and_join() {
        let base = BasePath::parse("/duck-ui/");
        assert_eq!(base.strip("/duck-ui").as_deref(), Some("/"));
        assert_eq!(base.strip("/duck-ui/").as_deref(), Some("/"));
        assert_eq!(
            base.strip("/duck-ui/connections").as_deref(),
            Some("/connections")
        );
        assert_eq!(base.strip("/duck-ui?x=1").as_deref(), Some("/?x=1"));
        assert_eq!(base.strip("/duck-uix"), None);
        assert_eq!(base.strip("/other"), None);
        assert_eq!(base.strip(""), None);

        assert_eq!(base.join("/"), "/duck-ui");
        assert_eq!(base.join("/connections"), "/duck-ui/connections");
        assert_eq!(BasePath::root().join("connections"), "/connections");
    }
}
