//! Per-visit view state
//!
//! Each page visit owns a fresh session: the design viewer gets a zoom state,
//! the print page gets a configuration and a submission gate. Nothing is
//! shared between sessions and nothing outlives the process.

mod store;

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info};

use crate::domain::{Design, PrintConfiguration, ZoomState};
use crate::order::SubmissionGate;

pub use store::SessionStore;

/// Design viewer visit
#[derive(Debug, Clone)]
pub struct DetailSession {
    pub design: Arc<Design>,
    pub zoom: ZoomState,
}

impl DetailSession {
    pub fn new(design: Arc<Design>) -> Self {
        DetailSession {
            design,
            zoom: ZoomState::new(),
        }
    }
}

/// Print configuration visit
#[derive(Debug, Clone)]
pub struct PrintSession {
    pub design: Arc<Design>,
    pub config: PrintConfiguration,
    pub gate: SubmissionGate,
}

impl PrintSession {
    pub fn new(design: Arc<Design>) -> Self {
        PrintSession {
            design,
            config: PrintConfiguration::default(),
            gate: SubmissionGate::new(),
        }
    }
}

/// All live sessions
#[derive(Default)]
pub struct Sessions {
    pub detail: SessionStore<DetailSession>,
    pub print: SessionStore<PrintSession>,
}

impl Sessions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.detail.len() + self.print.len()
    }

    pub fn evict_idle(&self, ttl: Duration) -> usize {
        self.detail.evict_idle(ttl) + self.print.evict_idle(ttl)
    }

    /// Periodically drop abandoned sessions
    pub fn spawn_sweeper(self: Arc<Self>, interval: Duration, ttl: Duration) {
        actix_web::rt::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            loop {
                ticker.tick().await;
                let evicted = self.evict_idle(ttl);
                if evicted > 0 {
                    info!(evicted, remaining = self.len(), "Evicted idle sessions");
                } else {
                    debug!(remaining = self.len(), "No idle sessions to evict");
                }
            }
        });
    }
}
