//! Shared data structures for the windowed facies-classification pipeline
//!
//! This module defines the core types flowing between pipeline steps:
//! - LogRow / LogWindow (depth-ordered table slices from the scheduler)
//! - FaciesLabel / Environment (label taxonomy and hard constraint)
//! - ToolName / ToolSelection / KnowledgeContext (planner and tools)
//! - PanelStance / PanelOutput / AggregationResult (panel decisions)
//! - ConsistencyReport / ResultRecord (repair pass and log output)

mod facies;
mod panel;
mod window;

pub use facies::*;
pub use panel::*;
pub use window::*;
