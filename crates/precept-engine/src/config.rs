//! Configuration types for PolicyEngine

use serde::{Deserialize, Serialize};

/// Main engine configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Maximum rule-tree depth the engine will traverse
    ///
    /// Traversal recurses once per nesting level, so externally supplied
    /// trees should run with a limit. `None` accepts any depth.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,
}

impl EngineConfig {
    /// Create a configuration with no depth limit
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum accepted rule-tree depth
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }
}
