//! Requirements description rendering
//!
//! Renders a rule tree as nested human-readable text describing what an
//! input must satisfy. The output format is load-bearing for callers that
//! show it to end users, so it is pinned exactly by the tests here: one
//! line per node, pre-order, and a two-character prefix per nesting level
//! where the innermost unit is the "- " marker.

use precept_core::{Rule, RuleVisitor};

const INDENT_UNIT: &str = "  ";
const CHILD_MARKER: &str = "- ";

/// Visitor that renders a rule tree into an indented requirement list
///
/// The output buffer is shared across the whole traversal; the nesting
/// level is saved and restored around each descent into children.
pub struct Describer {
    out: String,
    level: usize,
}

impl Describer {
    /// Create a describer with an empty buffer at root level
    pub fn new() -> Self {
        Self {
            out: String::new(),
            level: 0,
        }
    }

    /// Consume the describer, returning the rendered text
    pub fn into_text(self) -> String {
        self.out
    }

    /// Append one heading line at the current nesting level
    ///
    /// Root lines carry no prefix. A line at level L > 0 is prefixed by
    /// L - 1 indent units followed by the marker, so the prefix is 2·L
    /// characters wide and always ends in "- ".
    fn push_line(&mut self, heading: &str) {
        if self.level > 0 {
            for _ in 0..self.level - 1 {
                self.out.push_str(INDENT_UNIT);
            }
            self.out.push_str(CHILD_MARKER);
        }
        self.out.push_str(heading);
        self.out.push('\n');
    }

    fn descend(&mut self, rules: &[Rule]) {
        self.level += 1;
        for rule in rules {
            rule.accept(self);
        }
        self.level -= 1;
    }
}

impl Default for Describer {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleVisitor for Describer {
    type Output = ();

    fn visit_all(&mut self, rules: &[Rule]) {
        self.push_line("All the following conditions must be true:");
        self.descend(rules);
    }

    fn visit_any(&mut self, rules: &[Rule]) {
        self.push_line("One of the following conditions must be true:");
        self.descend(rules);
    }

    fn visit_min_length(&mut self, min: i64) {
        let heading = format!("The value must have at least {} characters", min);
        self.push_line(&heading);
    }

    fn visit_contains_char(&mut self, ch: char) {
        let heading = format!("The value must contain the character {}", ch);
        self.push_line(&heading);
    }

    fn visit_contains_any_of(&mut self, chars: &[char]) {
        let set: String = chars.iter().collect();
        let heading = format!(
            "The value must contain at least one of these characters: {}",
            set
        );
        self.push_line(&heading);
    }
}

/// Render the rule tree as indented requirement text
pub fn describe(rule: &Rule) -> String {
    let mut describer = Describer::new();
    rule.accept(&mut describer);
    describer.into_text()
}
