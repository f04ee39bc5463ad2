/// State owned by the routed views. It lives inside the gated subtree, so a
/// render failure followed by a retry starts from a clean slate.
#[derive(Debug, Default)]
pub struct Views {
    pub connections: ConnectionsState,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Default)]
pub struct ConnectionsState {
    pub saved: Vec<Connection>,
    pub draft_name: String,
    pub draft_url: String,
}

impl ConnectionsState {
    /// Validate the draft and save it, clearing the form on success.
    pub fn submit(&mut self) -> Result<&Connection, String> {
        let name = self.draft_name.trim();
        let url = self.draft_url.trim();
        if name.is_empty() {
            return Err("Connection name is required".to_string());
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err("Connection URL must start with http:// or https://".to_string());
        }
        if self.saved.iter().any(|c| c.name.eq_ignore_ascii_case(name)) {
            return Err(format!("A connection named \"{name}\" already exists"));
        }
        self.saved.push(Connection {
            name: name.to_string(),
            url: url.to_string(),
        });
        self.draft_name.clear();
        self.draft_url.clear();
        Ok(&self.saved[self.saved.len() - 1])
    }

    pub fn remove(&mut self, index: usize) -> Option<Connection> {
        (index < self.saved.len()).then(|| self.saved.remove(index))
    }
}
