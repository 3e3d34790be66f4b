//! # RESOLVER CONFIGURATION
//!
//! Guards applied to every container created by a registry.

use crate::errors::{error_codes, InjectError};
use serde::{Deserialize, Serialize};

/// **RESOLVER CONFIGURATION**
///
/// **PURPOSE**: Bounds nested resolution so cyclic dependency graphs fail fast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// **CYCLE DETECTION** - Reject re-entry into a name already being resolved
    pub detect_cycles: bool,

    /// **MAXIMUM NESTING** - Upper bound on nested resolutions within one container
    pub max_resolution_depth: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            detect_cycles: true,
            max_resolution_depth: 64,
        }
    }
}

impl ResolverConfig {
    /// **JSON LOADER** - Missing fields fall back to defaults
    pub fn from_json(json: &str) -> Result<Self, InjectError> {
        let config: Self = serde_json::from_str(json).map_err(|e| InjectError::Configuration {
            code: error_codes::INVALID_CONFIG.to_string(),
            message: format!("Invalid resolver config: {}", e),
        })?;

        if config.max_resolution_depth == 0 {
            return Err(InjectError::Configuration {
                code: error_codes::INVALID_CONFIG.to_string(),
                message: "max_resolution_depth must be at least 1".to_string(),
            });
        }

        Ok(config)
    }
}
