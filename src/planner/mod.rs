//! Tool planner: decides which knowledge tools to run for a window.
//!
//! One JSON-mode reasoning call over the window's feature table (the
//! prior model's predicted-label column is deliberately hidden so it
//! cannot bias tool selection). The response must parse as
//! `{"tools": [{"name": ..., "why": ...}]}`; an unparseable response is
//! fatal for the window, while unknown tool names inside a valid
//! response are ignored.

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{info, warn};

use crate::llm::{ModelRequest, ReasoningBackend};
use crate::types::{LogWindow, ToolName, ToolSelection};

/// System instruction for the planning call.
const PLANNER_SYSTEM: &str = r#"You are a planning agent for well-log facies classification.

Return ONLY valid JSON in the following format:
{
  "tools": [
    {"name": "expert_feature_description_tool", "why": "reason ..."},
    {"name": "trend_analysis_tool", "why": "reason ..."}
  ]
}

- The "name" must be one of:
  - "expert_feature_description_tool"
  - "expert_label_description_tool"
  - "classification_suggestions_tool"
  - "trend_analysis_tool"
  - "neighbor_finding_tool"
- "why" should briefly explain why this tool is selected.
"#;

/// Build the planning prompt: tool catalogue, selection guidelines, and
/// the window's feature table with the predicted-label column hidden.
pub fn build_planner_prompt(window: &LogWindow) -> String {
    format!(
        "You are an expert planner deciding which tools to run for well-log classification.\n\
         \n\
         Here are the tools you can use:\n\
         \n\
         1. expert_feature_description_tool\n\
         \x20  - defines and explains key features in well-log data that are critical for classification.\n\
         \n\
         2. expert_label_description_tool\n\
         \x20  - provides detailed descriptions of classification labels based on domain knowledge.\n\
         \n\
         3. expert_classification_suggestions_tool\n\
         \x20  - provides rule-based suggestions and heuristic patterns for mapping logs to lithofacies.\n\
         \n\
         4. trend_analysis_tool\n\
         \x20  - analyzes trends in well-log data (including up/down/target windows) to identify patterns and vertical continuity.\n\
         \n\
         5. neighbor_finding_tool\n\
         \x20  - finds similar well-log cases from a database using a k-nearest-neighbor approach (currently a placeholder).\n\
         \n\
         Selection guidelines:\n\
         - Use a single tool when the pattern is simple and one perspective is clearly sufficient.\n\
         - Use multiple tools when:\n\
         \x20 - Both trend analysis and expert knowledge are needed.\n\
         \x20 - Patterns are complex or ambiguous.\n\
         \x20 - You want both heuristic rules and data-driven references.\n\
         \n\
         OUTPUT FORMAT:\n\
         Return valid JSON exactly as shown:\n\
         {{\n\
         \x20 \"tools\": [\n\
         \x20   {{\"name\": \"XXX\", \"why\": \"Brief reason for selection XXX\"}},\n\
         \x20   ...\n\
         \x20 ]\n\
         }}\n\
         \n\
         WELL LOG DATA TO CLASSIFY (partial table, Predicted_Facies hidden here):\n\
         {table}\n\
         Analyze the data characteristics and select 1-5 tools that best complement each other.\n\
         Return ONLY the JSON object described above.\n",
        table = window.target_table(false)
    )
}

#[derive(Debug, Deserialize)]
struct ToolCallList {
    #[serde(default)]
    tools: Vec<ToolCallEntry>,
}

#[derive(Debug, Deserialize)]
struct ToolCallEntry {
    name: String,
    #[serde(default)]
    #[allow(dead_code)]
    why: String,
}

/// Parse the planner's raw JSON answer into a deduplicated tool set.
///
/// Unknown tool names are warned about and dropped; a response that is
/// not the expected JSON structure is an error (fatal for the window).
/// The returned set is ordered by the fixed registry order, not by the
/// model's listing order, so downstream prompt sections are stable.
pub fn parse_selection(raw: &str) -> Result<Vec<ToolName>> {
    let parsed: ToolCallList =
        serde_json::from_str(raw).context("Planner answer is not the expected JSON structure")?;

    let mut selected = Vec::new();
    for entry in &parsed.tools {
        match ToolName::parse(&entry.name) {
            Some(tool) => {
                if !selected.contains(&tool) {
                    selected.push(tool);
                }
            }
            None => {
                warn!(name = %entry.name, "Planner selected unknown tool, ignoring");
            }
        }
    }

    Ok(ToolName::ALL
        .into_iter()
        .filter(|t| selected.contains(t))
        .collect())
}

/// Run one planning call for the window.
pub async fn select_tools(
    backend: &dyn ReasoningBackend,
    window: &LogWindow,
) -> Result<ToolSelection> {
    let prompt = build_planner_prompt(window);
    let reply = backend
        .generate(ModelRequest::json(PLANNER_SYSTEM, prompt))
        .await
        .context("Tool-planning model call failed")?;

    let tools = parse_selection(&reply.answer)?;

    info!(
        window = window.index,
        tools = %tools.iter().copied().map(ToolName::wire_name).collect::<Vec<_>>().join(", "),
        "Planner selected tools"
    );

    Ok(ToolSelection {
        tools,
        rationale: reply.rationale,
        raw_answer: reply.answer,
    })
}
