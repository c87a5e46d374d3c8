//! Rule tree node definitions

use serde::{Deserialize, Serialize};

/// Rule tree node
///
/// A rule tree is built once and then only read. Composite nodes own their
/// children, so the tree is acyclic by construction. Child order matters for
/// description output but not for satisfaction semantics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Rule {
    /// All child rules must be satisfied (AND logic)
    All {
        /// Child rules, in declared order
        rules: Vec<Rule>,
    },

    /// At least one child rule must be satisfied (OR logic)
    Any {
        /// Child rules, in declared order
        rules: Vec<Rule>,
    },

    /// The input must have at least `min` characters
    ///
    /// Length is counted in Unicode scalar values. The threshold is signed:
    /// a zero or negative threshold is satisfied by every input.
    MinLength { min: i64 },

    /// The input must contain the character
    ContainsChar { ch: char },

    /// The input must contain at least one of the characters
    ///
    /// The list is read as a set of distinct characters for evaluation, but
    /// keeps its declared order for description output. An empty list is
    /// never satisfied.
    ContainsAnyOf { chars: Vec<char> },
}

impl Rule {
    /// Create an All rule (every child must be satisfied)
    pub fn all(rules: Vec<Rule>) -> Self {
        Rule::All { rules }
    }

    /// Create an Any rule (at least one child must be satisfied)
    pub fn any(rules: Vec<Rule>) -> Self {
        Rule::Any { rules }
    }

    /// Create a minimum-length rule
    pub fn min_length(min: i64) -> Self {
        Rule::MinLength { min }
    }

    /// Create a required-character rule
    pub fn contains(ch: char) -> Self {
        Rule::ContainsChar { ch }
    }

    /// Create a character-from-set rule
    pub fn contains_any_of<I>(chars: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        Rule::ContainsAnyOf {
            chars: chars.into_iter().collect(),
        }
    }

    /// Total number of nodes in this tree, counting self
    pub fn node_count(&self) -> usize {
        match self {
            Rule::All { rules } | Rule::Any { rules } => {
                1 + rules.iter().map(Rule::node_count).sum::<usize>()
            }
            _ => 1,
        }
    }

    /// Maximum nesting depth of this tree
    ///
    /// A leaf has depth 1; a composite has one more than its deepest child.
    /// An empty composite has depth 1.
    pub fn depth(&self) -> usize {
        match self {
            Rule::All { rules } | Rule::Any { rules } => {
                1 + rules.iter().map(Rule::depth).max().unwrap_or(0)
            }
            _ => 1,
        }
    }
}
