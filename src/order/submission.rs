//! Single-flight submission flow

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;
use tracing::{info, instrument, warn};

use crate::domain::{Design, NavigationIntent, PrintConfiguration};

use super::backend::{BackendError, PrintBackend, PrintJob};
use super::confirmation::OrderConfirmation;

/// Submission errors
#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("A submission is already in progress")]
    AlreadyProcessing,
    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// Processing flag for one print session
///
/// Cloning shares the flag.
#[derive(Debug, Clone, Default)]
pub struct SubmissionGate {
    processing: Arc<AtomicBool>,
}

impl SubmissionGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_processing(&self) -> bool {
        self.processing.load(Ordering::Acquire)
    }

    /// Enter `Processing`, or `None` if a submission is already in flight
    pub fn try_begin(&self) -> Option<ProcessingGuard> {
        self.processing
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| ProcessingGuard {
                processing: Arc::clone(&self.processing),
            })
    }
}

/// Holds the gate in `Processing`; dropping it returns to `Idle`
///
/// The guard is released on success, on failure, and when the submitting
/// future is dropped mid-flight.
#[derive(Debug)]
pub struct ProcessingGuard {
    processing: Arc<AtomicBool>,
}

impl Drop for ProcessingGuard {
    fn drop(&mut self) {
        self.processing.store(false, Ordering::Release);
    }
}

/// Result of a completed submission
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionOutcome {
    pub confirmation: OrderConfirmation,
    pub navigate_to: NavigationIntent,
}

/// Submit the current configuration of a session
///
/// `on_success` runs after the backend accepts the job and before the gate is
/// released, so whatever it retires cannot be submitted a second time.
#[instrument(skip_all, fields(design_id = %design.id, backend = backend.name()))]
pub async fn submit_order<F>(
    gate: &SubmissionGate,
    backend: &dyn PrintBackend,
    design: Arc<Design>,
    config: PrintConfiguration,
    on_success: F,
) -> Result<SubmissionOutcome, SubmissionError>
where
    F: FnOnce(),
{
    let guard = gate.try_begin().ok_or_else(|| {
        warn!("Submission refused, another one is in progress");
        SubmissionError::AlreadyProcessing
    })?;

    let job = PrintJob::new(design, config);
    info!(
        copies = job.config.copies.get(),
        estimated_cost = %job.estimate.cost,
        "Submitting print job"
    );

    if let Err(e) = backend.submit(&job).await {
        warn!(error = %e, "Print submission failed");
        drop(guard);
        return Err(e.into());
    }

    let confirmation = OrderConfirmation::new(&job.design.name, &job.config);
    on_success();
    drop(guard);

    info!("Print job submitted");

    Ok(SubmissionOutcome {
        confirmation,
        navigate_to: NavigationIntent::CatalogRoot,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Complexity, Copies, PaperSize};
    use crate::order::SimulatedPrintBackend;
    use async_trait::async_trait;
    use std::time::Duration;
    use tokio_test::{assert_pending, assert_ready, task};

    struct RejectingBackend;

    #[async_trait]
    impl PrintBackend for RejectingBackend {
        fn name(&self) -> &'static str {
            "rejecting"
        }

        async fn submit(&self, _job: &PrintJob) -> Result<(), BackendError> {
            Err(BackendError::Rejected("printer offline".to_string()))
        }
    }

    fn unicorn() -> Arc<Design> {
        Arc::new(Design {
            id: "d1".to_string(),
            name: "Unicorn".to_string(),
            image_url: "/designs/d1.png".to_string(),
            description: String::new(),
            category: "Fantasia".to_string(),
            tags: Vec::new(),
            complexity: Complexity::Easy,
        })
    }

    fn config() -> PrintConfiguration {
        PrintConfiguration {
            size: PaperSize::A3,
            copies: Copies::clamped(2),
            ..Default::default()
        }
    }

    #[test]
    fn test_gate_is_single_flight() {
        let gate = SubmissionGate::new();
        let guard = gate.try_begin();
        assert!(guard.is_some());
        assert!(gate.is_processing());
        assert!(gate.try_begin().is_none());

        drop(guard);
        assert!(!gate.is_processing());
        assert!(gate.try_begin().is_some());
    }

    #[tokio::test]
    async fn test_successful_submission() {
        let gate = SubmissionGate::new();
        let backend = SimulatedPrintBackend::new(Duration::from_millis(5));

        let outcome = submit_order(&gate, &backend, unicorn(), config(), || {}).await.unwrap();

        assert_eq!(outcome.navigate_to, NavigationIntent::CatalogRoot);
        assert_eq!(outcome.confirmation.design_name, "Unicorn");
        assert_eq!(outcome.confirmation.size, PaperSize::A3);
        assert_eq!(outcome.confirmation.copies.get(), 2);
        assert!(!gate.is_processing());
    }

    #[tokio::test]
    async fn test_second_submit_while_processing_is_refused() {
        let gate = SubmissionGate::new();
        let backend = SimulatedPrintBackend::new(Duration::from_millis(50));

        let mut first = task::spawn(submit_order(&gate, &backend, unicorn(), config(), || {}));
        assert_pending!(first.poll());
        assert!(gate.is_processing());

        let second = submit_order(&gate, &backend, unicorn(), config(), || {}).await;
        assert!(matches!(second, Err(SubmissionError::AlreadyProcessing)));
        assert!(gate.is_processing());

        tokio::time::sleep(Duration::from_millis(80)).await;
        let outcome = assert_ready!(first.poll());
        assert!(outcome.is_ok());
        assert!(!gate.is_processing());
    }

    #[tokio::test]
    async fn test_gate_held_while_completing() {
        let gate = SubmissionGate::new();
        let backend = SimulatedPrintBackend::new(Duration::from_millis(5));
        let mut held = false;

        submit_order(&gate, &backend, unicorn(), config(), || {
            held = gate.is_processing() && gate.try_begin().is_none();
        })
        .await
        .unwrap();

        assert!(held);
        assert!(!gate.is_processing());
    }

    #[tokio::test]
    async fn test_failure_returns_to_idle() {
        let gate = SubmissionGate::new();

        let mut completed = false;

        let result = submit_order(&gate, &RejectingBackend, unicorn(), config(), || completed = true).await;

        assert!(matches!(result, Err(SubmissionError::Backend(BackendError::Rejected(_)))));
        assert!(!completed);
        assert!(!gate.is_processing());
    }

    #[tokio::test]
    async fn test_dropped_submission_releases_gate() {
        let gate = SubmissionGate::new();
        let backend = SimulatedPrintBackend::new(Duration::from_secs(60));

        let mut inflight = task::spawn(submit_order(&gate, &backend, unicorn(), config(), || {}));
        assert_pending!(inflight.poll());
        assert!(gate.is_processing());

        drop(inflight);
        assert!(!gate.is_processing());
    }
}
