//! Visitor protocol for rule-tree algorithms
//!
//! An algorithm over a rule tree is a `RuleVisitor` implementation: one
//! callback per rule variant, producing `Output` values. Dispatch lives on
//! the node (`Rule::accept`), so adding an algorithm touches no node code,
//! while adding a rule variant adds a trait method and breaks every existing
//! visitor at compile time.

use super::rule::Rule;

/// An algorithm over a rule tree, with one callback per rule variant
///
/// None of the methods has a default body; every visitor must handle every
/// variant. Visitors that need per-call input (a candidate string, an output
/// buffer) carry it as their own state.
pub trait RuleVisitor {
    /// Result type produced for each visited node
    type Output;

    /// Called for an `All` composite with its child rules
    fn visit_all(&mut self, rules: &[Rule]) -> Self::Output;

    /// Called for an `Any` composite with its child rules
    fn visit_any(&mut self, rules: &[Rule]) -> Self::Output;

    /// Called for a `MinLength` rule
    fn visit_min_length(&mut self, min: i64) -> Self::Output;

    /// Called for a `ContainsChar` rule
    fn visit_contains_char(&mut self, ch: char) -> Self::Output;

    /// Called for a `ContainsAnyOf` rule
    fn visit_contains_any_of(&mut self, chars: &[char]) -> Self::Output;
}

impl Rule {
    /// Route this node to the visitor callback for its own variant
    ///
    /// Recursion into children is up to the visitor; composite callbacks
    /// receive the child slice and call `accept` on each child as needed.
    pub fn accept<V: RuleVisitor>(&self, visitor: &mut V) -> V::Output {
        match self {
            Rule::All { rules } => visitor.visit_all(rules),
            Rule::Any { rules } => visitor.visit_any(rules),
            Rule::MinLength { min } => visitor.visit_min_length(*min),
            Rule::ContainsChar { ch } => visitor.visit_contains_char(*ch),
            Rule::ContainsAnyOf { chars } => visitor.visit_contains_any_of(chars),
        }
    }
}
