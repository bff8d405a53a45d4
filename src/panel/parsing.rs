//! Decision-answer parsing.
//!
//! Stance replies are best-effort: a malformed reply must never abort
//! the window, it just contributes no votes. Labels outside the nine
//! known categories are kept positionally as `Unknown` so the vote
//! alignment across stances is preserved.

use serde::Deserialize;
use tracing::warn;

use crate::types::FaciesLabel;

/// Outcome of parsing one stance's raw decision answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelParse {
    /// The reply was the expected `{"answer": [...]}` object.
    Parsed(Vec<FaciesLabel>),
    /// The reply was not parseable; the raw text is kept for the log.
    Malformed(String),
}

impl LabelParse {
    /// The parsed labels, or an empty slice for a malformed reply.
    pub fn labels(&self) -> &[FaciesLabel] {
        match self {
            Self::Parsed(labels) => labels,
            Self::Malformed(_) => &[],
        }
    }
}

#[derive(Debug, Deserialize)]
struct AnswerObject {
    answer: Vec<String>,
}

/// Parse one stance's raw answer into a per-depth label sequence.
///
/// Unknown label strings map to [`FaciesLabel::Unknown`] with a warning
/// rather than shifting later positions; anything that is not the
/// expected JSON object is [`LabelParse::Malformed`].
pub fn parse_labels(raw: &str) -> LabelParse {
    let parsed: AnswerObject = match serde_json::from_str(raw) {
        Ok(parsed) => parsed,
        Err(err) => {
            warn!(%err, "Decision answer is not the expected JSON object, discarding");
            return LabelParse::Malformed(raw.to_string());
        }
    };

    let labels = parsed
        .answer
        .iter()
        .map(|name| {
            FaciesLabel::parse(name).unwrap_or_else(|| {
                warn!(label = %name, "Out-of-vocabulary facies label in decision answer");
                FaciesLabel::Unknown
            })
        })
        .collect();

    LabelParse::Parsed(labels)
}
