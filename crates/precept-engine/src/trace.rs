//! Evaluation tracing types
//!
//! These structures capture which rules matched during a traced evaluation,
//! so callers can explain why an input was accepted or rejected.

use serde::{Deserialize, Serialize};

/// Trace of a single rule evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleTrace {
    /// The rule condition as a display string (e.g., "length >= 8")
    pub condition: String,

    /// The evaluation result for this node
    pub satisfied: bool,

    /// The composite type if this is a composite node ("all" or "any")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_type: Option<String>,

    /// Nested traces for composite rules, in child order
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub children: Vec<RuleTrace>,
}

impl RuleTrace {
    /// Create a leaf trace
    pub fn leaf(condition: String, satisfied: bool) -> Self {
        Self {
            condition,
            satisfied,
            group_type: None,
            children: Vec::new(),
        }
    }

    /// Create a composite trace ("all" or "any")
    pub fn group(group_type: &str, children: Vec<RuleTrace>, satisfied: bool) -> Self {
        Self {
            condition: format!("{}:[...]", group_type),
            satisfied,
            group_type: Some(group_type.to_string()),
            children,
        }
    }

    /// Total number of nodes in this trace, counting self
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(RuleTrace::node_count).sum::<usize>()
    }
}
