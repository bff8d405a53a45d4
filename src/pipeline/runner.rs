//! Sequential batch runner.
//!
//! Windows run strictly in order so the result log stays aligned with
//! the scheduler's positional resume contract. Each record is appended
//! and flushed before the next window starts; the first fatal error
//! halts the batch, leaving everything already appended valid for the
//! next resume.

use anyhow::{Context, Result};
use tracing::{error, info};

use crate::config::RunConfig;
use crate::llm::ReasoningBackend;
use crate::panel::orchestrator::process_window;
use crate::pipeline::scheduler::WindowScheduler;
use crate::storage::ResultLog;
use crate::types::LogRow;

/// Summary of one batch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub windows_processed: usize,
    pub windows_skipped: usize,
    pub total_windows: usize,
}

/// Run the batch over `rows`, resuming from the log's record count.
pub async fn run_batch(
    backend: &dyn ReasoningBackend,
    rows: &[LogRow],
    log: &mut ResultLog,
    config: &RunConfig,
) -> Result<BatchSummary> {
    let completed = log.records_written();
    let scheduler = WindowScheduler::new(
        rows,
        config.windowing.window_size,
        config.windowing.stride,
        completed,
    );
    let total_windows = scheduler.total_windows();

    if completed >= total_windows {
        info!(completed, total_windows, "All windows already processed");
        return Ok(BatchSummary {
            windows_processed: 0,
            windows_skipped: completed,
            total_windows,
        });
    }

    info!(
        rows = rows.len(),
        total_windows,
        resuming_from = completed,
        backend = backend.backend_name(),
        "Starting batch run"
    );

    let mut processed = 0;
    for window in scheduler {
        let index = window.index;
        info!(
            window = index,
            rows = window.rows.len(),
            full = window.is_full,
            "Processing window"
        );
        let record = process_window(backend, &window, &config.panel.stances)
            .await
            .inspect_err(|err| {
                error!(window = index, %err, "Window processing failed, halting batch");
            })
            .with_context(|| format!("window {index} failed"))?;

        log.append(&record)
            .with_context(|| format!("failed to persist window {index}"))?;
        processed += 1;

        info!(
            window = index,
            done = index + 1,
            total = total_windows,
            "Window persisted"
        );
    }

    info!(processed, total_windows, "Batch run complete");

    Ok(BatchSummary {
        windows_processed: processed,
        windows_skipped: completed,
        total_windows,
    })
}
