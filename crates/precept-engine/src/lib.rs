//! PRECEPT Engine - Evaluation and description algorithms for PRECEPT rule trees
//!
//! This crate provides the two core algorithms over `precept_core::Rule`
//! trees, each implemented as a visitor:
//! - Satisfaction evaluation: does a string input satisfy the tree?
//! - Requirements description: render the tree as indented requirement text
//!
//! plus traced evaluation and a `PolicyEngine` facade with a configurable
//! depth guard for externally supplied trees.

pub mod config;
pub mod describe;
pub mod engine;
pub mod error;
pub mod evaluator;
pub mod trace;

// Re-export main types
pub use config::EngineConfig;
pub use describe::{describe, Describer};
pub use engine::{Evaluation, PolicyEngine};
pub use error::{EngineError, Result};
pub use evaluator::{evaluate, evaluate_with_trace, Satisfaction};
pub use trace::RuleTrace;
