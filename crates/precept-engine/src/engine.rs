//! High-level policy engine facade

use precept_core::Rule;
use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::describe;
use crate::error::{EngineError, Result};
use crate::evaluator;
use crate::trace::RuleTrace;

/// Result of a traced evaluation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Evaluation {
    /// Whether the input satisfied the rule tree
    pub satisfied: bool,

    /// Per-node evaluation trace
    pub trace: RuleTrace,
}

/// Policy engine holding an immutable rule tree
///
/// The free functions `evaluate` and `describe` traverse without limits;
/// the engine applies the configured depth guard first, so it is the entry
/// point for trees received from untrusted callers.
#[derive(Debug, Clone)]
pub struct PolicyEngine {
    rule: Rule,
    config: EngineConfig,
}

impl PolicyEngine {
    /// Create an engine with the default configuration
    pub fn new(rule: Rule) -> Self {
        Self::with_config(rule, EngineConfig::default())
    }

    /// Create an engine with an explicit configuration
    pub fn with_config(rule: Rule, config: EngineConfig) -> Self {
        tracing::debug!(
            "PolicyEngine::with_config: nodes={}, depth={}, max_depth={:?}",
            rule.node_count(),
            rule.depth(),
            config.max_depth
        );
        Self { rule, config }
    }

    /// The rule tree this engine evaluates
    pub fn rule(&self) -> &Rule {
        &self.rule
    }

    /// The engine configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    fn check_depth(&self) -> Result<()> {
        if let Some(max) = self.config.max_depth {
            let depth = self.rule.depth();
            if depth > max {
                return Err(EngineError::DepthExceeded { depth, max });
            }
        }
        Ok(())
    }

    /// Test whether `input` satisfies the rule tree
    pub fn evaluate(&self, input: &str) -> Result<bool> {
        self.check_depth()?;
        Ok(evaluator::evaluate(&self.rule, input))
    }

    /// Render the rule tree as indented requirement text
    pub fn describe(&self) -> Result<String> {
        self.check_depth()?;
        Ok(describe::describe(&self.rule))
    }

    /// Evaluate `input` and explain the outcome with a per-node trace
    pub fn explain(&self, input: &str) -> Result<Evaluation> {
        self.check_depth()?;
        let trace = evaluator::evaluate_with_trace(&self.rule, input);
        Ok(Evaluation {
            satisfied: trace.satisfied,
            trace,
        })
    }

    /// Check the rule tree's parameters for suspicious values
    pub fn validate(&self) -> Result<()> {
        self.rule.validate()?;
        Ok(())
    }
}
