//! Rule tree definitions for PRECEPT
//!
//! This module contains:
//! - The `Rule` tree node type
//! - The visitor protocol used to run algorithms over a rule tree

pub mod rule;
pub mod visitor;

pub use rule::Rule;
pub use visitor::RuleVisitor;
