//! Password policy example
//!
//! This example demonstrates:
//! - Building a rule tree with the constructor helpers
//! - Rendering the requirements description
//! - Evaluating candidate inputs against the policy

use precept_core::Rule;
use precept_engine::PolicyEngine;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Password Policy Example ===\n");

    // Policy: at least 8 characters, an '@', and one of '!' or "?.,"
    let policy = Rule::all(vec![
        Rule::min_length(8),
        Rule::contains('@'),
        Rule::any(vec![
            Rule::contains('!'),
            Rule::contains_any_of("?.,".chars()),
        ]),
    ]);

    let engine = PolicyEngine::new(policy);
    engine.validate()?;

    println!("Requirements:");
    print!("{}", engine.describe()?);

    let candidates = ["short@", "longenough@", "user@example!", "user.example?"];

    println!("\nCandidates:");
    for candidate in candidates {
        let satisfied = engine.evaluate(candidate)?;
        println!("  {:<16} -> {}", candidate, if satisfied { "ok" } else { "rejected" });
    }

    Ok(())
}
