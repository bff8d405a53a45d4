//! Knowledge tools: the context-gathering providers the planner selects.
//!
//! Each tool implements the [`KnowledgeTool`] trait and writes its
//! contribution into the per-window [`KnowledgeContext`]. Four tools are
//! stateless prose generators over fixed domain tables; trend analysis
//! issues one extra model call over the window plus its context; neighbor
//! finding is a contract-honoring no-op placeholder.
//!
//! ## Registry
//!
//! `registry()` returns one provider per [`ToolName`]; the orchestrator
//! looks providers up from the planner's selected set and runs them in
//! registry order, so the prompt sections appear deterministically.

pub mod domain;
pub mod trend;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::debug;

use crate::llm::{ModelRequest, ReasoningBackend};
use crate::types::{KnowledgeContext, LogWindow, ToolName, TrendArtifact};

/// Trait for context-gathering knowledge providers.
///
/// Each tool declares its name and writes exactly the fields it owns
/// into the accumulating [`KnowledgeContext`]; it never reads other
/// tools' output.
#[async_trait]
pub trait KnowledgeTool: Send + Sync {
    /// Which planner-selectable tool this provider implements.
    fn name(&self) -> ToolName;

    /// Produce this tool's contribution for the window.
    async fn produce(
        &self,
        window: &LogWindow,
        backend: &dyn ReasoningBackend,
        context: &mut KnowledgeContext,
    ) -> Result<()>;
}

/// Create the full provider set, one per tool name, in registry order.
pub fn registry() -> Vec<Box<dyn KnowledgeTool>> {
    vec![
        Box::new(FeatureDescriptionTool),
        Box::new(LabelDescriptionTool),
        Box::new(ClassificationSuggestionsTool),
        Box::new(TrendAnalysisTool),
        Box::new(NeighborFindingTool),
    ]
}

// ============================================================================
// Static prose providers
// ============================================================================

/// Describes the log features used for classification.
pub struct FeatureDescriptionTool;

#[async_trait]
impl KnowledgeTool for FeatureDescriptionTool {
    fn name(&self) -> ToolName {
        ToolName::FeatureDescription
    }

    async fn produce(
        &self,
        _window: &LogWindow,
        _backend: &dyn ReasoningBackend,
        context: &mut KnowledgeContext,
    ) -> Result<()> {
        context.feature_descriptions = Some(domain::feature_descriptions_text());
        Ok(())
    }
}

/// Describes the nine lithofacies labels.
pub struct LabelDescriptionTool;

#[async_trait]
impl KnowledgeTool for LabelDescriptionTool {
    fn name(&self) -> ToolName {
        ToolName::LabelDescription
    }

    async fn produce(
        &self,
        _window: &LogWindow,
        _backend: &dyn ReasoningBackend,
        context: &mut KnowledgeContext,
    ) -> Result<()> {
        context.label_descriptions = Some(domain::label_descriptions_text());
        Ok(())
    }
}

/// Heuristic log-signature rules plus the general analysis framework.
pub struct ClassificationSuggestionsTool;

#[async_trait]
impl KnowledgeTool for ClassificationSuggestionsTool {
    fn name(&self) -> ToolName {
        ToolName::ClassificationSuggestions
    }

    async fn produce(
        &self,
        _window: &LogWindow,
        _backend: &dyn ReasoningBackend,
        context: &mut KnowledgeContext,
    ) -> Result<()> {
        context.classification_suggestions = Some(domain::classification_suggestions_text());
        Ok(())
    }
}

// ============================================================================
// Trend analysis (stateful per window, one model call)
// ============================================================================

/// Analyzes up/target/down trends via one extra reasoning call.
pub struct TrendAnalysisTool;

#[async_trait]
impl KnowledgeTool for TrendAnalysisTool {
    fn name(&self) -> ToolName {
        ToolName::TrendAnalysis
    }

    async fn produce(
        &self,
        window: &LogWindow,
        backend: &dyn ReasoningBackend,
        context: &mut KnowledgeContext,
    ) -> Result<()> {
        let prompt = trend::build_trend_prompt(window);
        let reply = backend
            .generate(ModelRequest::freeform(prompt.clone()))
            .await
            .context("Trend-analysis model call failed")?;

        debug!(
            window = window.index,
            answer_len = reply.answer.len(),
            "Trend analysis complete"
        );

        context.trend = Some(TrendArtifact {
            prompt,
            rationale: reply.rationale,
            answer: reply.answer,
        });
        Ok(())
    }
}

// ============================================================================
// Neighbor finding (placeholder)
// ============================================================================

/// Nearest-neighbor well lookup. Not yet implemented: selecting it must
/// leave the window's context untouched, so unimplemented tools remain
/// safely selectable.
pub struct NeighborFindingTool;

#[async_trait]
impl KnowledgeTool for NeighborFindingTool {
    fn name(&self) -> ToolName {
        ToolName::NeighborFinding
    }

    async fn produce(
        &self,
        window: &LogWindow,
        _backend: &dyn ReasoningBackend,
        _context: &mut KnowledgeContext,
    ) -> Result<()> {
        debug!(window = window.index, "Neighbor finding selected (placeholder, no effect)");
        Ok(())
    }
}
