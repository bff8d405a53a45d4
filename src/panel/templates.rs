//! Decision-prompt assembly.
//!
//! Pure formatting, no model calls: a fixed task preamble, the knowledge
//! sections that actually ran, the window table (predicted label shown
//! and flagged as a weak reference), the NM_M rule block, the required
//! output format, and a stance-specific closing block.

use crate::types::{KnowledgeContext, LogWindow, PanelStance};

/// System instruction for the strict-JSON classification calls.
pub const DECISION_SYSTEM: &str = r#"Please give your answer in json in the following format:
{
  "answer": ["X1", "X2", ...]
}
here X1 means the classification result for each depth point.
There are only nine categories: 'Nonmarine sandstone', 'Nonmarine coarse siltstone', 'Nonmarine fine siltstone',
'Marine siltstone and shale', 'Mudstone', 'Wackestone', 'Dolomite', 'Packstone-grainstone', 'Phylloid-algal bafflestone'.
Your result for each depth point should be one of the nine categories above.
"#;

/// Assemble the stance-independent body of the decision prompt.
fn build_base_prompt(window: &LogWindow, knowledge: &KnowledgeContext) -> String {
    let mut parts: Vec<String> = Vec::new();

    parts.push(
        "You are a petroleum well log data analysis expert. \
         Please classify each depth point (each row/sample) in the Well Log Facies Dataset \
         into one of 9 lithofacies categories using the provided well log features.\n"
            .to_string(),
    );

    if let Some(text) = &knowledge.feature_descriptions {
        parts.push(format!("{text}\n"));
    }
    if let Some(text) = &knowledge.label_descriptions {
        parts.push(format!("{text}\n"));
    }
    if let Some(text) = &knowledge.classification_suggestions {
        parts.push(format!("{text}\n"));
    }

    parts.push("## Data to be Classified:\n".to_string());
    parts.push("### Well Log Data to Classify:\n".to_string());
    parts.push(format!("{}\n", window.target_table(true)));

    parts.push(
        "The Predicted_Facies column is provided by a prior model as a weak reference. \
         You may refine or override it based on your expert analysis of the well log features.\n"
            .to_string(),
    );

    if let Some(trend) = &knowledge.trend {
        parts.push(format!(
            "\nHere is the trend analysis results to assist your classification:\n\
             ### Trend Analysis Results:\n\
             {}\n",
            trend.answer
        ));
    }

    parts.push(
        "In the features, NM_M means non-marine or marine.\n\
         1 means non-marine. The label can only be one of: \
         Nonmarine sandstone, Nonmarine coarse siltstone, Nonmarine fine siltstone, \
         Marine siltstone and shale, Mudstone.\n\
         2 means marine. The label can only be one of: \
         Wackestone, Dolomite, Packstone-grainstone, Phylloid-algal bafflestone, \
         Marine siltstone and shale, Mudstone.\n"
            .to_string(),
    );

    parts.push(
        "You must output a JSON object in the following format:\n\
         { \"answer\": [\"X1\", \"X2\", ...] }\n\
         Each Xi is the facies label for the corresponding depth point, \
         strictly chosen from the 9 categories above.\n"
            .to_string(),
    );

    parts.join("\n")
}

/// Stance-specific closing block.
fn stance_tail(stance: PanelStance) -> &'static str {
    match stance {
        PanelStance::Expert => {
            "\n## Decision Preference (EXPERT MODE)\n\
             - Rely primarily on expert feature descriptions, label definitions, and heuristic rules.\n\
             - Treat the prior model's Predicted_Facies only as a weak prior that can be freely overridden.\n"
        }
        PanelStance::ModelAware => {
            "\n## Decision Preference (MODEL-AWARE MODE)\n\
             - Use the prior model's Predicted_Facies as a strong prior.\n\
             - Only change the predicted label when multiple evidence sources clearly indicate inconsistency.\n"
        }
        PanelStance::TrendFocus => {
            "\n## Decision Preference (TREND-FOCUSED MODE)\n\
             - Emphasize vertical continuity and trend patterns across the window and its context.\n\
             - Avoid frequent, noisy facies switching between adjacent depth points unless strongly supported by logs.\n"
        }
        PanelStance::Balanced => {
            "\n## Decision Preference\n\
             - Use a balanced combination of all information sources.\n"
        }
    }
}

/// Build one styled decision prompt.
pub fn build_decision_prompt(
    stance: PanelStance,
    window: &LogWindow,
    knowledge: &KnowledgeContext,
) -> String {
    let mut prompt = build_base_prompt(window, knowledge);
    prompt.push_str(stance_tail(stance));
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FaciesLabel, LogRow, TrendArtifact};

    fn window() -> LogWindow {
        LogWindow {
            index: 0,
            rows: vec![LogRow {
                depth: 2793.0,
                gr: 77.45,
                ild_log10: 0.664,
                delta_phi: 9.9,
                phind: 11.915,
                pe: 4.6,
                nm_m: 1.0,
                relpos: 1.0,
                predicted_facies: Some(FaciesLabel::Mudstone),
            }],
            up_context: Vec::new(),
            down_context: Vec::new(),
            is_full: true,
        }
    }

    #[test]
    fn test_knowledge_sections_only_when_present() {
        let empty = KnowledgeContext::default();
        let prompt = build_decision_prompt(PanelStance::Balanced, &window(), &empty);
        assert!(!prompt.contains("descriptions of various features"));
        assert!(!prompt.contains("Trend Analysis Results"));

        let full = KnowledgeContext {
            feature_descriptions: Some("Here are the descriptions of various features:\n".into()),
            label_descriptions: None,
            classification_suggestions: None,
            trend: Some(TrendArtifact {
                prompt: String::new(),
                rationale: String::new(),
                answer: "GR rises with depth.".into(),
            }),
        };
        let prompt = build_decision_prompt(PanelStance::Balanced, &window(), &full);
        assert!(prompt.contains("descriptions of various features"));
        assert!(prompt.contains("GR rises with depth."));
    }

    #[test]
    fn test_predicted_column_shown_and_flagged() {
        let prompt =
            build_decision_prompt(PanelStance::Expert, &window(), &KnowledgeContext::default());
        assert!(prompt.contains("Predicted_Facies"));
        assert!(prompt.contains("Mudstone"));
        assert!(prompt.contains("weak reference"));
    }

    #[test]
    fn test_rule_block_lists_both_environments() {
        let prompt =
            build_decision_prompt(PanelStance::Expert, &window(), &KnowledgeContext::default());
        assert!(prompt.contains("1 means non-marine"));
        assert!(prompt.contains("2 means marine"));
        assert!(prompt.contains("{ \"answer\": [\"X1\", \"X2\", ...] }"));
    }

    #[test]
    fn test_each_stance_gets_its_own_tail() {
        let w = window();
        let knowledge = KnowledgeContext::default();
        let expert = build_decision_prompt(PanelStance::Expert, &w, &knowledge);
        let model_aware = build_decision_prompt(PanelStance::ModelAware, &w, &knowledge);
        let trend = build_decision_prompt(PanelStance::TrendFocus, &w, &knowledge);
        let balanced = build_decision_prompt(PanelStance::Balanced, &w, &knowledge);

        assert!(expert.contains("EXPERT MODE"));
        assert!(model_aware.contains("MODEL-AWARE MODE"));
        assert!(trend.contains("TREND-FOCUSED MODE"));
        assert!(balanced.contains("balanced combination"));
    }
}
