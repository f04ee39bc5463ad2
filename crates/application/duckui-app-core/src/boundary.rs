use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::error::RenderError;

pub const FALLBACK_MESSAGE: &str = "An unexpected error occurred while rendering the application.";

/// A failure captured from the subtree, shown on the recovery screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderFailure {
    pub message: String,
}

impl RenderFailure {
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            Self {
                message: FALLBACK_MESSAGE.to_string(),
            }
        } else {
            Self { message }
        }
    }

    fn from_error(err: &RenderError) -> Self {
        Self::new(err.to_string())
    }

    fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        if let Some(s) = payload.downcast_ref::<&'static str>() {
            Self::new(*s)
        } else if let Some(s) = payload.downcast_ref::<String>() {
            Self::new(s.clone())
        } else {
            Self::new(String::new())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoundaryOutput<T> {
    Content(T),
    Recovery(RenderFailure),
}

/// Catches errors and panics raised while rendering a subtree.
///
/// The subtree state `S` is built from `init` when first needed and dropped
/// on failure, so a reset starts over from the initial state.
///
/// Panics are only caught where they unwind. On `wasm32-unknown-unknown`
/// a panic aborts the instance, so views there report failures as
/// `RenderError`.
pub struct RenderBoundary<S> {
    init: Box<dyn Fn() -> S>,
    subtree: Option<S>,
    failure: Option<RenderFailure>,
    generation: u64,
}

impl<S> RenderBoundary<S> {
    pub fn new(init: impl Fn() -> S + 'static) -> Self {
        Self {
            init: Box::new(init),
            subtree: None,
            failure: None,
            generation: 0,
        }
    }

    pub fn render<T>(
        &mut self,
        f: impl FnOnce(&mut S) -> Result<T, RenderError>,
    ) -> BoundaryOutput<T> {
        if let Some(failure) = &self.failure {
            return BoundaryOutput::Recovery(failure.clone());
        }

        let init = &self.init;
        let subtree = self.subtree.get_or_insert_with(|| init());
        let outcome = catch_unwind(AssertUnwindSafe(|| f(subtree)));

        let failure = match outcome {
            Ok(Ok(value)) => return BoundaryOutput::Content(value),
            Ok(Err(err)) => RenderFailure::from_error(&err),
            Err(payload) => RenderFailure::from_panic(payload),
        };

        tracing::warn!(
            generation = self.generation,
            message = %failure.message,
            "render failure caught; showing recovery screen"
        );
        self.subtree = None;
        self.failure = Some(failure.clone());
        BoundaryOutput::Recovery(failure)
    }

    /// Clear the captured failure; the next render rebuilds the subtree.
    pub fn reset(&mut self) {
        if self.failure.take().is_some() {
            tracing::info!(generation = self.generation, "retrying render");
        }
        self.subtree = None;
        self.generation += 1;
    }

    pub fn failure(&self) -> Option<&RenderFailure> {
        self.failure.as_ref()
    }

    pub fn subtree(&self) -> Option<&S> {
        self.subtree.as_ref()
    }

    /// Number of resets so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
