use duckui_core::{BasePath, View};

/// How a location change should be mirrored by a [`HistorySink`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKind {
    Push,
    Replace,
}

pub type HistorySink = Box<dyn Fn(&str, NavKind)>;

/// Navigation history of the running application.
///
/// Locations are full paths including the base path. The current view is
/// always derived from the current location, never stored.
pub struct History {
    base: BasePath,
    entries: Vec<String>,
    index: usize,
    sink: Option<HistorySink>,
}

impl History {
    pub fn new(base: BasePath, initial_location: impl Into<String>) -> Self {
        let initial = initial_location.into();
        let initial = if initial.is_empty() {
            base.join("/")
        } else {
            initial
        };
        Self {
            base,
            entries: vec![initial],
            index: 0,
            sink: None,
        }
    }

    /// Start at the root of `base`.
    pub fn at_root(base: BasePath) -> Self {
        let root = base.join("/");
        Self::new(base, root)
    }

    /// Mirror pushed locations somewhere else, e.g. the browser address bar.
    pub fn with_sink(mut self, sink: impl Fn(&str, NavKind) + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    pub fn base(&self) -> &BasePath {
        &self.base
    }

    pub fn location(&self) -> &str {
        &self.entries[self.index]
    }

    pub fn current_view(&self) -> View {
        self.base.resolve(self.location())
    }

    /// Navigate to an in-app path. Pushing the current location is a no-op.
    pub fn push(&mut self, path: &str) {
        let location = self.base.join(path);
        if location == self.location() {
            return;
        }
        self.entries.truncate(self.index + 1);
        self.entries.push(location);
        self.index += 1;
        tracing::debug!(location = %self.location(), "navigate");
        self.mirror(NavKind::Push);
    }

    pub fn replace(&mut self, path: &str) {
        self.entries[self.index] = self.base.join(path);
        self.mirror(NavKind::Replace);
    }

    fn mirror(&self, kind: NavKind) {
        if let Some(sink) = &self.sink {
            sink(self.location(), kind);
        }
    }

    /// Observe a location change made outside the application. The sink is
    /// not told, the change came from there.
    ///
    /// A location matching the previous or next entry moves the cursor there,
    /// so browser back and forward walk the same history.
    pub fn sync_external(&mut self, location: &str) {
        if location == self.location() {
            return;
        }
        if self.index > 0 && self.entries[self.index - 1] == location {
            self.index -= 1;
        } else if self.entries.get(self.index + 1).is_some_and(|next| next == location) {
            self.index += 1;
        } else {
            self.entries.truncate(self.index + 1);
            self.entries.push(location.to_string());
            self.index += 1;
        }
        tracing::debug!(location = %self.location(), "external navigation");
    }

    pub fn can_go_back(&self) -> bool {
        self.index > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    pub fn back(&mut self) -> bool {
        if !self.can_go_back() {
            return false;
        }
        self.index -= 1;
        self.mirror(NavKind::Replace);
        true
    }

    pub fn forward(&mut self) -> bool {
        if !self.can_go_forward() {
            return false;
        }
        self.index += 1;
        self.mirror(NavKind::Replace);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn push_back_forward() {
        let mut history = History::at_root(BasePath::root());
        assert_eq!(history.current_view(), View::Home);

        history.push("/connections");
        assert_eq!(history.current_view(), View::Connections);
        history.push("/missing");
        assert_eq!(history.current_view(), View::NotFound);

        assert!(history.back());
        assert_eq!(history.location(), "/connections");
        assert!(history.back());
        assert!(!history.back());
        assert_eq!(history.current_view(), View::Home);

        assert!(history.forward());
        history.push("/");
        assert!(!history.can_go_forward());
        assert_eq!(history.location(), "/");
    }

    #[test]
    fn locations_carry_the_base_path() {
        let mut history = History::new(BasePath::parse("/duck-ui"), "");
        assert_eq!(history.location(), "/duck-ui");
        assert_eq!(history.current_view(), View::Home);

        history.push("/connections");
        assert_eq!(history.location(), "/duck-ui/connections");
        assert_eq!(history.current_view(), View::Connections);

        history.sync_external("/elsewhere");
        assert_eq!(history.current_view(), View::NotFound);
    }

    #[test]
    fn external_back_and_forward_move_the_cursor() {
        let mut history = History::at_root(BasePath::root());
        history.push("/connections");
        history.push("/missing");

        history.sync_external("/connections");
        assert_eq!(history.current_view(), View::Connections);
        history.sync_external("/");
        assert_eq!(history.current_view(), View::Home);
        assert!(!history.can_go_back());
        assert!(history.can_go_forward());

        history.sync_external("/connections");
        history.sync_external("/missing");
        assert_eq!(history.current_view(), View::NotFound);
        assert!(!history.can_go_forward());

        // Repeated back/forward does not grow the history.
        for _ in 0..5 {
            history.sync_external("/connections");
            history.sync_external("/missing");
        }
        assert_eq!(history.entries.len(), 3);

        history.sync_external("/elsewhere");
        assert_eq!(history.entries.len(), 4);
        assert!(!history.can_go_forward());
    }

    #[test]
    fn pushing_the_same_location_is_ignored() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = seen.clone();
        let mut history =
            History::at_root(BasePath::root()).with_sink(move |l, kind| {
                log.borrow_mut().push((l.to_string(), kind))
            });

        history.push("/");
        history.push("/connections");
        history.push("/connections");
        assert_eq!(
            *seen.borrow(),
            vec![("/connections".to_string(), NavKind::Push)]
        );
        assert!(history.back());
        assert!(!history.back());
        history.sync_external("/connections");
        assert_eq!(
            seen.borrow().last(),
            Some(&("/".to_string(), NavKind::Replace))
        );
    }
}
