//! Engine configuration.
//!
//! The only tunables are the cascade guards. Everything else about the engine
//! is fixed behavior.
//!
//! # Example
//! ```json
//! { "max_cascade_depth": 64, "detect_cycles": true }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{CascadeError, Result};

/// Default nesting limit for a single notification cascade.
pub const DEFAULT_MAX_CASCADE_DEPTH: usize = 256;

/// Guards applied while a change notification cascades through the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Maximum nesting of dependents below the property that changed.
    pub max_cascade_depth: usize,

    /// Fail with [`CascadeError::CycleDetected`] when a cascade reaches a
    /// property already on its own notification path. When disabled, only
    /// the depth limit stops a cyclic cascade.
    pub detect_cycles: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_cascade_depth: DEFAULT_MAX_CASCADE_DEPTH,
            detect_cycles: true,
        }
    }
}

impl EngineConfig {
    /// Parse and validate a JSON configuration. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_cascade_depth == 0 {
            return Err(CascadeError::Config(
                "max_cascade_depth must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn with_max_cascade_depth(mut self, depth: usize) -> Self {
        self.max_cascade_depth = depth;
        self
    }

    pub fn with_cycle_detection(mut self, enabled: bool) -> Self {
        self.detect_cycles = enabled;
        self
    }
}
