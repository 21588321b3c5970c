//! `[validate]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [validate]
//! max_depth = 4               # deepest allowed nesting; top-level groups are depth 1
//! ```

use crate::nav::DEFAULT_MAX_DEPTH;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidateConfig {
    /// Maximum sidebar nesting depth.
    pub max_depth: usize,
}

impl Default for ValidateConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
