//! Run Configuration Module
//!
//! Provides batch-run configuration loaded from TOML files, replacing
//! hardcoded windowing and model-endpoint values with operator-tunable ones.
//!
//! ## Loading Order
//!
//! 1. `LITHOPANEL_CONFIG` environment variable (path to TOML file)
//! 2. `lithopanel.toml` in the current working directory
//! 3. Built-in defaults (reference run: window 16, stride 16, three stances)
//!
//! The loaded [`RunConfig`] is threaded explicitly: `main` owns it and
//! passes it (or its sections) to the backend and the batch runner.

mod run_config;

pub use run_config::*;
