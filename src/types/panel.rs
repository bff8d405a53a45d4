//! Panel-side types: tool selection, stances, per-stance outputs, the
//! aggregated verdict, and the result record appended to the output log.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::facies::FaciesLabel;
use super::window::LogRow;

// ============================================================================
// Tool selection
// ============================================================================

/// The fixed set of context-gathering tools the planner may select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolName {
    FeatureDescription,
    LabelDescription,
    ClassificationSuggestions,
    TrendAnalysis,
    NeighborFinding,
}

impl ToolName {
    /// All tools, in registry order.
    pub const ALL: [ToolName; 5] = [
        ToolName::FeatureDescription,
        ToolName::LabelDescription,
        ToolName::ClassificationSuggestions,
        ToolName::TrendAnalysis,
        ToolName::NeighborFinding,
    ];

    /// Map a planner-emitted tool name onto the enum.
    ///
    /// Accepts the aliases reasoning models produce in practice for the
    /// suggestions and neighbor tools. Returns `None` for unknown names;
    /// the planner ignores those rather than failing.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim() {
            "expert_feature_description_tool" => Some(ToolName::FeatureDescription),
            "expert_label_description_tool" => Some(ToolName::LabelDescription),
            "classification_suggestions_tool" | "expert_classification_suggestions_tool" => {
                Some(ToolName::ClassificationSuggestions)
            }
            "trend_analysis_tool" => Some(ToolName::TrendAnalysis),
            "neighbor_finding_tool" | "neighbor_find_tool" => Some(ToolName::NeighborFinding),
            _ => None,
        }
    }

    /// Canonical wire name, as advertised to the planner.
    pub fn wire_name(self) -> &'static str {
        match self {
            ToolName::FeatureDescription => "expert_feature_description_tool",
            ToolName::LabelDescription => "expert_label_description_tool",
            ToolName::ClassificationSuggestions => "expert_classification_suggestions_tool",
            ToolName::TrendAnalysis => "trend_analysis_tool",
            ToolName::NeighborFinding => "neighbor_finding_tool",
        }
    }
}

impl fmt::Display for ToolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// Outcome of one planning call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolSelection {
    /// Deduplicated tools in registry order.
    pub tools: Vec<ToolName>,
    /// The planner's reasoning text.
    pub rationale: String,
    /// The raw JSON answer as returned by the model.
    pub raw_answer: String,
}

impl ToolSelection {
    pub fn includes(&self, tool: ToolName) -> bool {
        self.tools.contains(&tool)
    }
}

// ============================================================================
// Knowledge artifacts
// ============================================================================

/// Trend-analysis output kept alongside the prose so the result record
/// preserves the full exchange.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendArtifact {
    pub prompt: String,
    pub rationale: String,
    pub answer: String,
}

/// Everything the selected knowledge tools contributed for one window.
///
/// Fields are `None` when the corresponding tool was not selected (or,
/// for `trend`, when the tool ran but upstream produced nothing).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KnowledgeContext {
    pub feature_descriptions: Option<String>,
    pub label_descriptions: Option<String>,
    pub classification_suggestions: Option<String>,
    pub trend: Option<TrendArtifact>,
}

// ============================================================================
// Panel stances
// ============================================================================

/// Decision-emphasis profile controlling a prompt's closing block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelStance {
    /// Rely on domain knowledge; the prior model's label is a weak prior.
    Expert,
    /// Treat the prior model's label as a strong prior.
    ModelAware,
    /// Penalize noisy label switching between adjacent depths.
    TrendFocus,
    /// Neutral combination of all sources.
    Balanced,
}

impl PanelStance {
    /// The default three-member panel.
    pub const DEFAULT_PANEL: [PanelStance; 3] =
        [PanelStance::Expert, PanelStance::ModelAware, PanelStance::TrendFocus];

    pub fn as_str(self) -> &'static str {
        match self {
            PanelStance::Expert => "expert",
            PanelStance::ModelAware => "model_aware",
            PanelStance::TrendFocus => "trend_focus",
            PanelStance::Balanced => "balanced",
        }
    }
}

impl fmt::Display for PanelStance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One stance's complete output for a window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelOutput {
    pub stance: PanelStance,
    pub prompt: String,
    pub rationale: String,
    pub raw_answer: String,
    pub labels: Vec<FaciesLabel>,
}

// ============================================================================
// Aggregation and repair
// ============================================================================

/// Deterministic plurality-vote result across the panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregationResult {
    /// Winning label per depth, before consistency repair.
    pub final_labels_before_env_fix: Vec<FaciesLabel>,
    /// Winning label per depth, after consistency repair.
    pub final_labels: Vec<FaciesLabel>,
    /// Fraction of votes agreeing with the winner at each depth, in [0, 1].
    pub agreement_per_depth: Vec<f64>,
    /// Mean of the per-depth agreements; 0.0 for an empty window.
    pub global_agreement: f64,
}

/// One substitution made by the consistency-repair pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsistencyCorrection {
    pub index: usize,
    pub env: i64,
    pub old_label: FaciesLabel,
    pub new_label: FaciesLabel,
    pub reason: String,
}

/// Summary of the repair pass over one window.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConsistencyReport {
    pub num_corrections: usize,
    pub details: Vec<ConsistencyCorrection>,
}

// ============================================================================
// Result record
// ============================================================================

/// The structured `{"answer": [...]}` object that closes every record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinalAnswer {
    pub answer: Vec<FaciesLabel>,
}

/// One line of the append-only output log. Written once per processed
/// window and never mutated; the count of these records is the sole
/// resumability state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultRecord {
    pub window_index: usize,
    /// UTC completion time of the window's processing.
    pub completed_at: chrono::DateTime<chrono::Utc>,
    pub window_rows: Vec<LogRow>,
    pub up_context: Vec<LogRow>,
    pub down_context: Vec<LogRow>,
    pub is_full_window: bool,
    pub tool_selection: ToolSelection,
    pub knowledge: KnowledgeContext,
    pub panel: Vec<PanelOutput>,
    pub aggregation: AggregationResult,
    pub consistency: ConsistencyReport,
    /// The expert stance's prompt, kept as the representative explanation.
    pub primary_prompt: String,
    /// The expert stance's reasoning text.
    pub primary_rationale: String,
    pub final_answer: FinalAnswer,
}
