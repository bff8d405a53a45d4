//! Panel vote aggregation.
//!
//! Per-depth plurality voting over the stance outputs. The aggregated
//! sequence spans the longest stance sequence: a stance whose label
//! sequence is shorter abstains from the missing positions instead of
//! disqualifying the whole stance, and no position is padded past what
//! some stance actually voted for. Ties resolve to the label first
//! proposed by the earliest stance in the configured panel order.

use tracing::warn;

use crate::types::{AggregationResult, FaciesLabel, PanelOutput};

/// Aggregate stance outputs into one label per voted depth position.
///
/// The returned `final_labels` has the length of the longest stance
/// sequence (zero when every stance abstained entirely). Every position
/// inside that span has at least one vote by construction; the
/// [`FaciesLabel::Unknown`] fallback only guards against an impossible
/// empty tally.
pub fn aggregate_panel(outputs: &[PanelOutput]) -> AggregationResult {
    let span = outputs
        .iter()
        .map(|o| o.labels.len())
        .max()
        .unwrap_or(0);

    let mut final_labels = Vec::with_capacity(span);
    let mut agreement_per_depth = Vec::with_capacity(span);

    for position in 0..span {
        // (label, votes) pairs in first-seen order, so ties resolve to
        // the earliest stance's proposal.
        let mut tally: Vec<(FaciesLabel, usize)> = Vec::new();
        for output in outputs {
            if let Some(&label) = output.labels.get(position) {
                match tally.iter_mut().find(|(l, _)| *l == label) {
                    Some((_, count)) => *count += 1,
                    None => tally.push((label, 1)),
                }
            }
        }

        let total: usize = tally.iter().map(|(_, count)| count).sum();
        if total == 0 {
            warn!(position, "No panel votes for depth point, emitting UNKNOWN");
            final_labels.push(FaciesLabel::Unknown);
            agreement_per_depth.push(0.0);
            continue;
        }

        let (winner, wins) = tally
            .iter()
            .enumerate()
            .max_by_key(|&(idx, &(_, count))| (count, std::cmp::Reverse(idx)))
            .map(|(_, entry)| *entry)
            .unwrap_or((FaciesLabel::Unknown, 0));

        final_labels.push(winner);
        #[allow(clippy::cast_precision_loss)]
        agreement_per_depth.push(wins as f64 / total as f64);
    }

    let global_agreement = if agreement_per_depth.is_empty() {
        0.0
    } else {
        #[allow(clippy::cast_precision_loss)]
        let mean = agreement_per_depth.iter().sum::<f64>() / agreement_per_depth.len() as f64;
        mean
    };

    AggregationResult {
        final_labels_before_env_fix: final_labels.clone(),
        final_labels,
        agreement_per_depth,
        global_agreement,
    }
}
