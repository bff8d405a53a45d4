//! Batch pipeline: resumable window scheduling and the sequential runner.

pub mod runner;
pub mod scheduler;

pub use runner::{run_batch, BatchSummary};
pub use scheduler::WindowScheduler;
