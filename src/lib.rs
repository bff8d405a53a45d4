//! Lithopanel: windowed-ensemble lithofacies classification for well logs.
//!
//! A depth-ordered log table is cut into stride-aligned windows; each
//! window passes through a tool planner, a set of knowledge tools, a
//! panel of styled reasoning calls, plurality-vote aggregation, and an
//! environment consistency repair pass. One JSON record per window is
//! appended to the output log, which doubles as the resume state.
//!
//! ## Architecture
//!
//! - **Acquisition**: CSV table loading with header-resolved columns
//! - **Pipeline**: resumable window scheduling and the sequential runner
//! - **Planner**: per-window tool selection via one JSON-mode call
//! - **Knowledge**: the planner-selectable context providers
//! - **Panel**: styled decision prompts, voting, and consistency repair
//! - **Storage**: the append-only JSONL result log

pub mod acquisition;
pub mod config;
pub mod knowledge;
pub mod llm;
pub mod panel;
pub mod pipeline;
pub mod planner;
pub mod storage;
pub mod types;

pub use config::RunConfig;
pub use llm::{ModelReply, ModelRequest, ModelTimeout, OpenAiCompatBackend, ReasoningBackend};
pub use pipeline::{run_batch, BatchSummary, WindowScheduler};
pub use storage::{ResultLog, ResultLogError};
pub use types::{
    AggregationResult, ConsistencyReport, Environment, FaciesLabel, KnowledgeContext, LogRow,
    LogWindow, PanelOutput, PanelStance, ResultRecord, ToolName, ToolSelection,
};
