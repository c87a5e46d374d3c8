//! Traced evaluation example
//!
//! This example demonstrates:
//! - Evaluating an input with a per-node trace
//! - Serializing the trace for downstream tooling

use precept_core::Rule;
use precept_engine::{EngineConfig, PolicyEngine};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Traced Evaluation Example ===\n");

    let policy = Rule::all(vec![
        Rule::min_length(8),
        Rule::any(vec![
            Rule::contains('!'),
            Rule::contains_any_of("?.,".chars()),
        ]),
    ]);

    let engine = PolicyEngine::with_config(policy, EngineConfig::new().with_max_depth(16));

    let evaluation = engine.explain("hello world")?;
    println!("Input: \"hello world\"");
    println!("Satisfied: {}", evaluation.satisfied);
    println!("Trace:\n{}", serde_json::to_string_pretty(&evaluation.trace)?);

    let evaluation = engine.explain("hello world!")?;
    println!("\nInput: \"hello world!\"");
    println!("Satisfied: {}", evaluation.satisfied);
    println!("Trace:\n{}", serde_json::to_string_pretty(&evaluation.trace)?);

    Ok(())
}
