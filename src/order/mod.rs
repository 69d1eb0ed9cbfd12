//! Order submission
//!
//! A submission moves a print session from `Idle` to `Processing` and back.
//! While processing, further submissions are refused. The print backend is a
//! trait so the simulated backend can be swapped for a real one that may fail.

mod backend;
mod confirmation;
mod submission;

pub use backend::{PrintBackend, SimulatedPrintBackend};
pub use confirmation::configuration_summary;

#[cfg(test)]
pub use backend::{BackendError, PrintJob};
pub use submission::{submit_order, SubmissionError, SubmissionGate, SubmissionOutcome};
