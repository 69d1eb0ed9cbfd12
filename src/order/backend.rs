//! Print backend seam

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

use crate::domain::{Design, PrintConfiguration};
use crate::estimate::Estimate;

/// Backend errors
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Print job rejected: {0}")]
    Rejected(String),
    #[error("Print backend unavailable: {0}")]
    Unavailable(String),
}

/// Everything a backend needs to accept a job
#[derive(Debug, Clone)]
pub struct PrintJob {
    pub design: Arc<Design>,
    pub config: PrintConfiguration,
    pub estimate: Estimate,
}

impl PrintJob {
    pub fn new(design: Arc<Design>, config: PrintConfiguration) -> Self {
        PrintJob {
            estimate: Estimate::for_config(&config),
            design,
            config,
        }
    }
}

/// Destination for print jobs
#[async_trait]
pub trait PrintBackend: Send + Sync {
    /// Backend name for logs
    fn name(&self) -> &'static str;

    /// Hand a job to the printer. Returns once the job is accepted.
    async fn submit(&self, job: &PrintJob) -> Result<(), BackendError>;
}

/// Stand-in backend: waits a fixed delay and always accepts
pub struct SimulatedPrintBackend {
    delay: Duration,
}

impl SimulatedPrintBackend {
    pub fn new(delay: Duration) -> Self {
        SimulatedPrintBackend { delay }
    }
}

#[async_trait]
impl PrintBackend for SimulatedPrintBackend {
    fn name(&self) -> &'static str {
        "simulated"
    }

    async fn submit(&self, job: &PrintJob) -> Result<(), BackendError> {
        debug!(
            design_id = %job.design.id,
            delay_ms = self.delay.as_millis() as u64,
            "Simulating print submission"
        );
        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}
