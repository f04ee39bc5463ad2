#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use duckui_app_core::{EngineBootstrap, InitError};
use tokio::sync::Semaphore;

/// Bootstrap with scripted outcomes. A held bootstrap waits for `release`.
#[derive(Clone, Default)]
pub struct ScriptedBoot {
    outcomes: Arc<Mutex<VecDeque<Result<(), InitError>>>>,
    calls: Arc<AtomicUsize>,
    hold: Option<Arc<Semaphore>>,
}

impl ScriptedBoot {
    pub fn ok() -> Self {
        Self::default()
    }

    pub fn failing_then_ok(message: &str) -> Self {
        Self {
            outcomes: Arc::new(Mutex::new(vec![Err(InitError::new(message))].into())),
            ..Self::default()
        }
    }

    pub fn held(mut self) -> Self {
        self.hold = Some(Arc::new(Semaphore::new(0)));
        self
    }

    pub fn release(&self) {
        if let Some(hold) = &self.hold {
            hold.add_permits(1);
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl EngineBootstrap for ScriptedBoot {
    async fn boot(&self) -> Result<(), InitError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(hold) = &self.hold {
            hold.acquire()
                .await
                .map_err(|e| InitError::new(e.to_string()))?
                .forget();
        }
        self.outcomes.lock().unwrap().pop_front().unwrap_or(Ok(()))
    }
}

pub fn wait_until(mut cond: impl FnMut() -> bool) -> bool {
    let deadline = Instant::now() + Duration::from_secs(3);
    while Instant::now() < deadline {
        if cond() {
            return true;
        }
        std::thread::sleep(Duration::from_millis(5));
    }
    false
}
