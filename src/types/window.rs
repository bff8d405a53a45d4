//! Depth-ordered log rows and the sliding window handed to the panel.

use serde::{Deserialize, Serialize};

use super::facies::{Environment, FaciesLabel};

/// One depth sample from the well-log table.
///
/// Column meanings follow the Hugoton/Panoma facies dataset convention:
/// GR (gamma ray), ILD_log10 (resistivity, log10), DeltaPHI (neutron -
/// density porosity difference), PHIND (average porosity), PE
/// (photoelectric factor), NM_M (non-marine/marine indicator), RELPOS
/// (relative stratigraphic position). `predicted_facies` is the prior
/// model's label, optional because unlabeled exports exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRow {
    #[serde(rename = "Depth")]
    pub depth: f64,
    #[serde(rename = "GR")]
    pub gr: f64,
    #[serde(rename = "ILD_log10")]
    pub ild_log10: f64,
    #[serde(rename = "DeltaPHI")]
    pub delta_phi: f64,
    #[serde(rename = "PHIND")]
    pub phind: f64,
    #[serde(rename = "PE")]
    pub pe: f64,
    #[serde(rename = "NM_M")]
    pub nm_m: f64,
    #[serde(rename = "RELPOS")]
    pub relpos: f64,
    #[serde(rename = "Predicted_Facies", skip_serializing_if = "Option::is_none")]
    pub predicted_facies: Option<FaciesLabel>,
}

impl LogRow {
    pub fn environment(&self) -> Environment {
        Environment::from_indicator(self.nm_m)
    }
}

/// Feature columns rendered into prompts, in table order.
pub const FEATURE_COLUMNS: [&str; 8] = [
    "Depth", "GR", "ILD_log10", "DeltaPHI", "PHIND", "PE", "NM_M", "RELPOS",
];

/// Header of the prior model's predicted-label column.
pub const PREDICTED_COLUMN: &str = "Predicted_Facies";

/// One scheduling step: the target rows plus adjacent context slices.
///
/// Created by the window scheduler, read-only afterward, and discarded
/// once the window's result record is emitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogWindow {
    /// Zero-based window index (start row / stride).
    pub index: usize,
    /// Target rows to classify.
    pub rows: Vec<LogRow>,
    /// Up to one stride of rows above the target (empty at the top of the well).
    pub up_context: Vec<LogRow>,
    /// Up to one stride of rows below the target (empty at total depth).
    pub down_context: Vec<LogRow>,
    /// True iff the target holds exactly the nominal window size
    /// (the final window of a table may be short).
    pub is_full: bool,
}

impl LogWindow {
    /// Render rows as a fixed-width text table for prompt inclusion.
    ///
    /// `include_predicted` controls whether the prior model's label
    /// column appears; the planner and trend prompts hide it.
    pub fn render_table(rows: &[LogRow], include_predicted: bool) -> String {
        let mut out = String::new();
        for (i, col) in FEATURE_COLUMNS.iter().enumerate() {
            if i > 0 {
                out.push_str("  ");
            }
            out.push_str(&format!("{col:>10}"));
        }
        if include_predicted {
            out.push_str(&format!("  {PREDICTED_COLUMN:>26}"));
        }
        out.push('\n');

        for row in rows {
            let values = [
                row.depth,
                row.gr,
                row.ild_log10,
                row.delta_phi,
                row.phind,
                row.pe,
                row.nm_m,
                row.relpos,
            ];
            for (i, v) in values.iter().enumerate() {
                if i > 0 {
                    out.push_str("  ");
                }
                out.push_str(&format!("{v:>10.3}"));
            }
            if include_predicted {
                let label = row
                    .predicted_facies
                    .map_or("-", FaciesLabel::name);
                out.push_str(&format!("  {label:>26}"));
            }
            out.push('\n');
        }
        out
    }

    /// Target table as prompt text.
    pub fn target_table(&self, include_predicted: bool) -> String {
        Self::render_table(&self.rows, include_predicted)
    }

    /// Up-context + target + down-context concatenated, predicted label
    /// excluded. Used by trend analysis.
    pub fn context_table(&self) -> String {
        let mut all = Vec::with_capacity(
            self.up_context.len() + self.rows.len() + self.down_context.len(),
        );
        all.extend_from_slice(&self.up_context);
        all.extend_from_slice(&self.rows);
        all.extend_from_slice(&self.down_context);
        Self::render_table(&all, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(depth: f64, predicted: Option<FaciesLabel>) -> LogRow {
        LogRow {
            depth,
            gr: 65.0,
            ild_log10: 0.55,
            delta_phi: 8.1,
            phind: 12.3,
            pe: 3.2,
            nm_m: 1.0,
            relpos: 0.8,
            predicted_facies: predicted,
        }
    }

    #[test]
    fn test_render_table_hides_predicted_column() {
        let rows = vec![row(2793.0, Some(FaciesLabel::Mudstone))];
        let hidden = LogWindow::render_table(&rows, false);
        let shown = LogWindow::render_table(&rows, true);

        assert!(!hidden.contains(PREDICTED_COLUMN));
        assert!(!hidden.contains("Mudstone"));
        assert!(shown.contains(PREDICTED_COLUMN));
        assert!(shown.contains("Mudstone"));
    }

    #[test]
    fn test_render_table_marks_missing_predicted() {
        let rows = vec![row(2793.0, None)];
        let shown = LogWindow::render_table(&rows, true);
        assert!(shown.lines().nth(1).is_some_and(|l| l.ends_with('-')));
    }

    #[test]
    fn test_context_table_concatenates_all_slices() {
        let window = LogWindow {
            index: 0,
            rows: vec![row(2794.0, None)],
            up_context: vec![row(2793.0, None)],
            down_context: vec![row(2795.0, None)],
            is_full: false,
        };
        let text = window.context_table();
        // Header + three data rows
        assert_eq!(text.lines().count(), 4);
        assert!(text.contains("2793.000"));
        assert!(text.contains("2795.000"));
    }
}
