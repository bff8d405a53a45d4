//! Resumable window iteration over the log table.
//!
//! Windows start at fixed stride multiples (0, S, 2S, ...) and span
//! `window_size` rows, clipped at the end of the table. Context blocks
//! of up to one stride's rows are attached on each side. Resumption is
//! purely positional: `k` completed windows means the next start is
//! `k * stride`, with no per-window bookkeeping.

use crate::types::{LogRow, LogWindow};

/// Produces successive [`LogWindow`]s over a fixed table.
pub struct WindowScheduler<'a> {
    rows: &'a [LogRow],
    window_size: usize,
    stride: usize,
    /// Index of the next window (not the next row).
    next_window: usize,
}

impl<'a> WindowScheduler<'a> {
    /// Create a scheduler resuming after `completed_windows` windows.
    ///
    /// `window_size` and `stride` must be non-zero (enforced by config
    /// validation before any scheduler is built).
    pub fn new(
        rows: &'a [LogRow],
        window_size: usize,
        stride: usize,
        completed_windows: usize,
    ) -> Self {
        debug_assert!(window_size > 0, "window_size must be non-zero");
        debug_assert!(stride > 0, "stride must be non-zero");
        Self {
            rows,
            window_size,
            stride,
            next_window: completed_windows,
        }
    }

    /// Total number of windows the table yields.
    pub fn total_windows(&self) -> usize {
        self.rows.len().div_ceil(self.stride)
    }

    /// Remaining windows from the current position.
    pub fn remaining(&self) -> usize {
        self.total_windows().saturating_sub(self.next_window)
    }

    fn build(&self, index: usize) -> Option<LogWindow> {
        let start = index * self.stride;
        if start >= self.rows.len() {
            return None;
        }
        let end = (start + self.window_size).min(self.rows.len());
        let up_start = start.saturating_sub(self.stride);
        let down_end = (end + self.stride).min(self.rows.len());

        Some(LogWindow {
            index,
            rows: self.rows[start..end].to_vec(),
            up_context: self.rows[up_start..start].to_vec(),
            down_context: self.rows[end..down_end].to_vec(),
            is_full: end - start == self.window_size,
        })
    }
}

impl Iterator for WindowScheduler<'_> {
    type Item = LogWindow;

    fn next(&mut self) -> Option<LogWindow> {
        let window = self.build(self.next_window)?;
        self.next_window += 1;
        Some(window)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(n: usize) -> Vec<LogRow> {
        (0..n)
            .map(|i| LogRow {
                depth: 2800.0 + i as f64 * 0.5,
                gr: 70.0,
                ild_log10: 0.6,
                delta_phi: 7.0,
                phind: 12.0,
                pe: 3.5,
                nm_m: 1.0,
                relpos: 0.5,
                predicted_facies: None,
            })
            .collect()
    }

    #[test]
    fn test_forty_rows_yield_three_windows() {
        let table = rows(40);
        let windows: Vec<_> = WindowScheduler::new(&table, 16, 16, 0).collect();

        assert_eq!(windows.len(), 3);
        assert_eq!(windows[0].index, 0);
        assert_eq!(windows[0].rows.len(), 16);
        assert!(windows[0].is_full);
        assert!(windows[0].up_context.is_empty());
        assert_eq!(windows[0].down_context.len(), 16);

        assert_eq!(windows[1].rows.len(), 16);
        assert_eq!(windows[1].up_context.len(), 16);
        assert_eq!(windows[1].down_context.len(), 8);

        // Trailing partial window: 8 rows, no down context.
        assert_eq!(windows[2].rows.len(), 8);
        assert!(!windows[2].is_full);
        assert!(windows[2].down_context.is_empty());
        assert_eq!(windows[2].rows[0].depth, 2800.0 + 32.0 * 0.5);
    }

    #[test]
    fn test_resume_skips_completed_windows() {
        let table = rows(40);
        let mut scheduler = WindowScheduler::new(&table, 16, 16, 2);
        assert_eq!(scheduler.remaining(), 1);

        let window = scheduler.next().unwrap();
        assert_eq!(window.index, 2);
        assert_eq!(window.rows[0].depth, 2800.0 + 32.0 * 0.5);
        assert!(scheduler.next().is_none());
    }

    #[test]
    fn test_resume_past_end_yields_nothing() {
        let table = rows(40);
        let mut scheduler = WindowScheduler::new(&table, 16, 16, 3);
        assert_eq!(scheduler.remaining(), 0);
        assert!(scheduler.next().is_none());
    }

    #[test]
    fn test_overlapping_windows_when_stride_smaller() {
        let table = rows(20);
        let windows: Vec<_> = WindowScheduler::new(&table, 8, 4, 0).collect();
        assert_eq!(windows.len(), 5);
        assert_eq!(windows[1].rows[0].depth, windows[0].rows[4].depth);
        // Context never exceeds one stride.
        assert_eq!(windows[1].up_context.len(), 4);
    }

    #[test]
    #[should_panic(expected = "stride must be non-zero")]
    fn test_zero_stride_is_rejected() {
        let table = rows(4);
        let _ = WindowScheduler::new(&table, 16, 0, 0);
    }

    #[test]
    fn test_empty_table() {
        let table = rows(0);
        let mut scheduler = WindowScheduler::new(&table, 16, 16, 0);
        assert_eq!(scheduler.total_windows(), 0);
        assert!(scheduler.next().is_none());
    }
}
