//! The decision panel: styled prompts, parallel stance calls, vote
//! aggregation, and environment consistency repair.

pub mod aggregation;
pub mod consistency;
pub mod orchestrator;
pub mod parsing;
pub mod templates;

pub use aggregation::aggregate_panel;
pub use consistency::enforce_environment_consistency;
pub use orchestrator::process_window;
pub use parsing::{parse_labels, LabelParse};
pub use templates::{build_decision_prompt, DECISION_SYSTEM};
