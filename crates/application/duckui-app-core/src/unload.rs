use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::ports::{ListenerId, UnloadEvent, UnloadHost, UnloadListener};

/// Asks the host to confirm before the application is closed.
///
/// The listener is installed on construction and removed on drop.
pub struct UnloadGuard<H: UnloadHost> {
    host: H,
    id: ListenerId,
}

impl<H: UnloadHost> UnloadGuard<H> {
    pub fn install(host: H) -> Self {
        let id = host.add_unload_listener(Box::new(|event: &mut dyn UnloadEvent| {
            event.prevent_default();
        }));
        tracing::debug!(?id, "unload guard installed");
        Self { host, id }
    }

    pub fn id(&self) -> ListenerId {
        self.id
    }
}

impl<H: UnloadHost> Drop for UnloadGuard<H> {
    fn drop(&mut self) {
        if self.host.remove_unload_listener(self.id) {
            tracing::debug!(id = ?self.id, "unload guard removed");
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnloadVerdict {
    Proceed,
    ConfirmRequested,
}

#[derive(Default)]
struct LocalEvent {
    prevented: bool,
}

impl UnloadEvent for LocalEvent {
    fn prevent_default(&mut self) {
        self.prevented = true;
    }
}

#[derive(Default)]
struct Listeners {
    next_id: Cell<u64>,
    entries: RefCell<Vec<(ListenerId, UnloadListener)>>,
    /// Listeners taken out by an ongoing dispatch that are still installed.
    dispatching: RefCell<Vec<ListenerId>>,
}

/// In-process unload host. Native windows route their close requests
/// through it; tests use it to simulate leaving the page.
#[derive(Clone, Default)]
pub struct LocalUnloadHost {
    inner: Rc<Listeners>,
}

impl LocalUnloadHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn listener_count(&self) -> usize {
        self.inner.entries.borrow().len()
    }

    /// Run every listener for one unload attempt.
    ///
    /// Listeners may add or remove listeners while running. A listener removed
    /// before its turn is skipped; one added during dispatch first runs on the
    /// next attempt.
    pub fn dispatch_unload(&self) -> UnloadVerdict {
        let mut running = std::mem::take(&mut *self.inner.entries.borrow_mut());
        *self.inner.dispatching.borrow_mut() = running.iter().map(|(id, _)| *id).collect();

        let mut event = LocalEvent::default();
        for (id, listener) in running.iter_mut() {
            if !self.inner.dispatching.borrow().contains(id) {
                continue;
            }
            listener(&mut event as &mut dyn UnloadEvent);
        }

        let still_installed = std::mem::take(&mut *self.inner.dispatching.borrow_mut());
        running.retain(|(id, _)| still_installed.contains(id));
        let mut entries = self.inner.entries.borrow_mut();
        running.append(&mut *entries);
        *entries = running;

        if event.prevented {
            UnloadVerdict::ConfirmRequested
        } else {
            UnloadVerdict::Proceed
        }
    }
}

impl UnloadHost for LocalUnloadHost {
    fn add_unload_listener(&self, listener: UnloadListener) -> ListenerId {
        let id = ListenerId(self.inner.next_id.get());
        self.inner.next_id.set(id.0 + 1);
        self.inner.entries.borrow_mut().push((id, listener));
        id
    }

    fn remove_unload_listener(&self, id: ListenerId) -> bool {
        let mut entries = self.inner.entries.borrow_mut();
        if let Some(pos) = entries.iter().position(|(existing, _)| *existing == id) {
            entries.remove(pos);
            return true;
        }
        let mut dispatching = self.inner.dispatching.borrow_mut();
        match dispatching.iter().position(|existing| *existing == id) {
            Some(pos) => {
                dispatching.remove(pos);
                true
            }
            None => false,
        }
    }
}
