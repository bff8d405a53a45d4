//! Run Configuration - windowing, panel composition, and model endpoint
//!
//! Each struct implements `Default` with values matching the reference
//! run, ensuring zero-change behavior when no config file is present.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::types::PanelStance;

// ============================================================================
// Top-Level Config
// ============================================================================

/// Root configuration for one classification batch run.
///
/// Load with `RunConfig::load()` which searches:
/// 1. `$LITHOPANEL_CONFIG` env var
/// 2. `./lithopanel.toml`
/// 3. Built-in defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunConfig {
    /// Window size and stride over the depth-ordered table
    #[serde(default)]
    pub windowing: WindowingConfig,

    /// Panel composition
    #[serde(default)]
    pub panel: PanelConfig,

    /// Reasoning-model endpoint
    #[serde(default)]
    pub model: ModelConfig,
}

/// Windowing parameters. The reference configuration sets stride equal
/// to window size so windows are contiguous and non-overlapping, but the
/// two are independent knobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowingConfig {
    #[serde(default = "default_window_size")]
    pub window_size: usize,
    #[serde(default = "default_stride")]
    pub stride: usize,
}

fn default_window_size() -> usize {
    16
}

fn default_stride() -> usize {
    16
}

impl Default for WindowingConfig {
    fn default() -> Self {
        Self {
            window_size: default_window_size(),
            stride: default_stride(),
        }
    }
}

/// Which stances sit on the panel, in vote-collection order.
///
/// The order matters: the aggregator's tie-break is first-seen-wins over
/// this ordering, and the first stance listed should be `expert` so its
/// prompt/rationale can serve as the record's primary explanation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelConfig {
    #[serde(default = "default_stances")]
    pub stances: Vec<PanelStance>,
}

fn default_stances() -> Vec<PanelStance> {
    PanelStance::DEFAULT_PANEL.to_vec()
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            stances: default_stances(),
        }
    }
}

/// Reasoning-model endpoint settings for the OpenAI-compatible backend.
///
/// The API key is read from `$LITHOPANEL_API_KEY` at backend construction,
/// never from the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_model_name")]
    pub model: String,
    /// Per-call timeout in seconds. A timed-out stance call degrades to
    /// an empty vote list; a timed-out planning call is fatal for the window.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.deepseek.com".to_string()
}

fn default_model_name() -> String {
    "deepseek-reasoner".to_string()
}

fn default_timeout_secs() -> u64 {
    600
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model_name(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

// ============================================================================
// Loading
// ============================================================================

impl RunConfig {
    /// Load configuration using the standard search order:
    /// 1. `$LITHOPANEL_CONFIG` environment variable
    /// 2. `./lithopanel.toml` in the current working directory
    /// 3. Built-in defaults (reference run values)
    pub fn load() -> Self {
        if let Ok(path) = std::env::var("LITHOPANEL_CONFIG") {
            let p = PathBuf::from(&path);
            if p.exists() {
                match Self::load_from_file(&p) {
                    Ok(config) => {
                        info!(path = %p.display(), "Loaded run config from LITHOPANEL_CONFIG");
                        return config;
                    }
                    Err(e) => {
                        warn!(path = %p.display(), error = %e, "Failed to load config from LITHOPANEL_CONFIG, falling back");
                    }
                }
            } else {
                warn!(path = %path, "LITHOPANEL_CONFIG points to non-existent file, falling back");
            }
        }

        let local = Path::new("lithopanel.toml");
        if local.exists() {
            match Self::load_from_file(local) {
                Ok(config) => {
                    info!("Loaded run config from ./lithopanel.toml");
                    return config;
                }
                Err(e) => {
                    warn!(error = %e, "Failed to load ./lithopanel.toml, using defaults");
                }
            }
        }

        info!("No config file found, using built-in defaults");
        Self::default()
    }

    /// Load and validate a specific TOML file.
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that cannot schedule a single window.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.windowing.window_size == 0 {
            anyhow::bail!("windowing.window_size must be at least 1");
        }
        if self.windowing.stride == 0 {
            anyhow::bail!("windowing.stride must be at least 1");
        }
        if self.panel.stances.is_empty() {
            anyhow::bail!("panel.stances must name at least one stance");
        }
        if self.model.timeout_secs == 0 {
            anyhow::bail!("model.timeout_secs must be at least 1");
        }
        Ok(())
    }
}
