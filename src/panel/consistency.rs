//! Environment/facies consistency repair.
//!
//! The NM_M column is a hard constraint: a non-marine depth point can
//! never carry a strictly marine facies and vice versa. Violations are
//! repaired by falling back to the prior model's predicted label when
//! that label is itself consistent, otherwise to a fixed per-environment
//! default. The pass is idempotent and never introduces new violations.

use tracing::warn;

use crate::types::{
    ConsistencyCorrection, ConsistencyReport, Environment, FaciesLabel, LogRow,
};

/// Default substitute when the prior prediction cannot be used.
fn environment_default(env: Environment) -> FaciesLabel {
    match env {
        Environment::NonMarine => FaciesLabel::NonmarineSandstone,
        Environment::Marine => FaciesLabel::Wackestone,
        Environment::Other(_) => FaciesLabel::Unknown,
    }
}

/// Repair environment violations in `labels` against the window rows.
///
/// `labels` is modified in place; the returned report records every
/// correction with the old label, the replacement, and a reason naming
/// the violated constraint.
pub fn enforce_environment_consistency(
    rows: &[LogRow],
    labels: &mut [FaciesLabel],
) -> ConsistencyReport {
    let mut details = Vec::new();

    for (index, (row, label)) in rows.iter().zip(labels.iter_mut()).enumerate() {
        let env = row.environment();
        if !env.forbids(*label) {
            continue;
        }

        let replacement = match row.predicted_facies {
            Some(predicted) if !env.forbids(predicted) => predicted,
            _ => environment_default(env),
        };

        let reason = match env {
            Environment::NonMarine => {
                "NM_M=1 (non-marine), but label is strictly marine; corrected."
            }
            Environment::Marine => {
                "NM_M=2 (marine), but label is strictly non-marine; corrected."
            }
            Environment::Other(_) => continue,
        };

        warn!(
            index,
            nm_m = env.indicator(),
            old = %label,
            new = %replacement,
            "Environment consistency violation"
        );

        details.push(ConsistencyCorrection {
            index,
            env: env.indicator(),
            old_label: *label,
            new_label: replacement,
            reason: reason.to_string(),
        });
        *label = replacement;
    }

    ConsistencyReport {
        num_corrections: details.len(),
        details,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(nm_m: f64, predicted: Option<FaciesLabel>) -> LogRow {
        LogRow {
            depth: 2800.0,
            gr: 70.0,
            ild_log10: 0.6,
            delta_phi: 7.0,
            phind: 12.0,
            pe: 3.5,
            nm_m,
            relpos: 0.5,
            predicted_facies: predicted,
        }
    }

    #[test]
    fn test_nonmarine_env_rejects_strict_marine_label() {
        let rows = vec![row(1.0, Some(FaciesLabel::Mudstone))];
        let mut labels = vec![FaciesLabel::Dolomite];
        let report = enforce_environment_consistency(&rows, &mut labels);

        assert_eq!(labels, vec![FaciesLabel::Mudstone]);
        assert_eq!(report.num_corrections, 1);
        let correction = &report.details[0];
        assert_eq!(correction.env, 1);
        assert_eq!(correction.old_label, FaciesLabel::Dolomite);
        assert_eq!(correction.new_label, FaciesLabel::Mudstone);
        assert!(correction.reason.contains("NM_M=1"));
    }

    #[test]
    fn test_marine_env_rejects_strict_nonmarine_label() {
        let rows = vec![row(2.0, None)];
        let mut labels = vec![FaciesLabel::NonmarineSandstone];
        let report = enforce_environment_consistency(&rows, &mut labels);

        assert_eq!(labels, vec![FaciesLabel::Wackestone]);
        assert!(report.details[0].reason.contains("NM_M=2"));
    }

    #[test]
    fn test_inconsistent_prior_falls_back_to_default() {
        // Prior prediction itself violates the environment, so the
        // fixed default is used instead.
        let rows = vec![row(1.0, Some(FaciesLabel::Dolomite))];
        let mut labels = vec![FaciesLabel::Wackestone];
        enforce_environment_consistency(&rows, &mut labels);
        assert_eq!(labels, vec![FaciesLabel::NonmarineSandstone]);
    }

    #[test]
    fn test_ambiguous_labels_pass_both_environments() {
        let rows = vec![row(1.0, None), row(2.0, None)];
        let mut labels = vec![FaciesLabel::Mudstone, FaciesLabel::MarineSiltstoneAndShale];
        let report = enforce_environment_consistency(&rows, &mut labels);
        assert_eq!(report.num_corrections, 0);
    }

    #[test]
    fn test_unknown_label_never_flagged() {
        let rows = vec![row(1.0, None), row(2.0, None)];
        let mut labels = vec![FaciesLabel::Unknown, FaciesLabel::Unknown];
        let report = enforce_environment_consistency(&rows, &mut labels);
        assert_eq!(report.num_corrections, 0);
    }

    #[test]
    fn test_non_standard_indicator_imposes_no_constraint() {
        let rows = vec![row(0.0, None)];
        let mut labels = vec![FaciesLabel::Dolomite];
        let report = enforce_environment_consistency(&rows, &mut labels);
        assert_eq!(report.num_corrections, 0);
        assert_eq!(labels, vec![FaciesLabel::Dolomite]);
    }

    #[test]
    fn test_repair_is_idempotent() {
        let rows = vec![row(2.0, Some(FaciesLabel::NonmarineFineSiltstone))];
        let mut labels = vec![FaciesLabel::NonmarineSandstone];
        let first = enforce_environment_consistency(&rows, &mut labels);
        assert_eq!(first.num_corrections, 1);
        assert_eq!(labels, vec![FaciesLabel::Wackestone]);

        let second = enforce_environment_consistency(&rows, &mut labels);
        assert_eq!(second.num_corrections, 0);
        assert_eq!(labels, vec![FaciesLabel::Wackestone]);
    }
}
