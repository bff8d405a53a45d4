//! Per-window decision flow.
//!
//! One window passes through four phases: tool planning, knowledge
//! gathering, the parallel stance panel, and aggregation plus
//! environment repair. Planning and knowledge failures are fatal for
//! the window, as is any stance failure other than an expired call
//! budget; a timed-out stance only costs its votes.

use anyhow::Result;
use futures::future::join_all;
use tracing::{info, warn};

use crate::knowledge;
use crate::llm::{ModelRequest, ModelTimeout, ReasoningBackend};
use crate::panel::aggregation::aggregate_panel;
use crate::panel::consistency::enforce_environment_consistency;
use crate::panel::parsing::parse_labels;
use crate::panel::templates::{build_decision_prompt, DECISION_SYSTEM};
use crate::planner;
use crate::types::{
    FinalAnswer, KnowledgeContext, LogWindow, PanelOutput, PanelStance, ResultRecord, ToolName,
};

/// Run the selected knowledge tools in registry order.
async fn gather_knowledge(
    backend: &dyn ReasoningBackend,
    window: &LogWindow,
    selected: &[ToolName],
) -> Result<KnowledgeContext> {
    let mut context = KnowledgeContext::default();
    for tool in knowledge::registry() {
        if selected.contains(&tool.name()) {
            tool.produce(window, backend, &mut context).await?;
        }
    }
    Ok(context)
}

/// Issue one stance's decision call and parse its answer.
///
/// A timed-out call degrades to an output with no labels so the rest of
/// the panel still aggregates; any other failure is propagated and the
/// window is re-attempted on the next run.
async fn run_stance(
    backend: &dyn ReasoningBackend,
    stance: PanelStance,
    prompt: String,
) -> Result<PanelOutput> {
    match backend
        .generate(ModelRequest::json(DECISION_SYSTEM, prompt.clone()))
        .await
    {
        Ok(reply) => {
            let labels = parse_labels(&reply.answer).labels().to_vec();
            Ok(PanelOutput {
                stance,
                prompt,
                rationale: reply.rationale,
                raw_answer: reply.answer,
                labels,
            })
        }
        Err(err) if err.is::<ModelTimeout>() => {
            warn!(stance = %stance, %err, "Stance decision call timed out, abstaining");
            Ok(PanelOutput {
                stance,
                prompt,
                rationale: String::new(),
                raw_answer: String::new(),
                labels: Vec::new(),
            })
        }
        Err(err) => Err(err.context(format!("{stance} stance decision call failed"))),
    }
}

/// Process one window end to end and build its result record.
pub async fn process_window(
    backend: &dyn ReasoningBackend,
    window: &LogWindow,
    stances: &[PanelStance],
) -> Result<ResultRecord> {
    let tool_selection = planner::select_tools(backend, window).await?;
    let knowledge = gather_knowledge(backend, window, &tool_selection.tools).await?;

    let calls = stances.iter().map(|&stance| {
        let prompt = build_decision_prompt(stance, window, &knowledge);
        run_stance(backend, stance, prompt)
    });
    let panel: Vec<PanelOutput> = join_all(calls)
        .await
        .into_iter()
        .collect::<Result<_>>()?;

    let mut aggregation = aggregate_panel(&panel);
    let consistency =
        enforce_environment_consistency(&window.rows, &mut aggregation.final_labels);

    info!(
        window = window.index,
        agreement = aggregation.global_agreement,
        corrections = consistency.num_corrections,
        "Window decided"
    );

    // Keep the expert stance's exchange as the representative one; fall
    // back to the first configured stance when expert is not on the panel.
    let primary = panel
        .iter()
        .find(|o| o.stance == PanelStance::Expert)
        .or_else(|| panel.first());
    let (primary_prompt, primary_rationale) = primary
        .map(|o| (o.prompt.clone(), o.rationale.clone()))
        .unwrap_or_default();

    Ok(ResultRecord {
        window_index: window.index,
        completed_at: chrono::Utc::now(),
        window_rows: window.rows.clone(),
        up_context: window.up_context.clone(),
        down_context: window.down_context.clone(),
        is_full_window: window.is_full,
        tool_selection,
        knowledge,
        final_answer: FinalAnswer {
            answer: aggregation.final_labels.clone(),
        },
        panel,
        aggregation,
        consistency,
        primary_prompt,
        primary_rationale,
    })
}
