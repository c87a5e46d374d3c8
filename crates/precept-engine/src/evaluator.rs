//! Satisfaction evaluation logic

use precept_core::{Rule, RuleVisitor};

use crate::trace::RuleTrace;

/// Visitor that tests a string input against a rule tree
///
/// Composite visits short-circuit: `All` stops at the first failing child,
/// `Any` at the first satisfied one. The result is a pure function of tree
/// and input, so the cut is unobservable.
pub struct Satisfaction<'a> {
    input: &'a str,
}

impl<'a> Satisfaction<'a> {
    /// Create an evaluator for one candidate input
    pub fn new(input: &'a str) -> Self {
        Self { input }
    }
}

impl RuleVisitor for Satisfaction<'_> {
    type Output = bool;

    fn visit_all(&mut self, rules: &[Rule]) -> bool {
        // All children must be satisfied; empty is vacuously true
        for rule in rules {
            if !rule.accept(self) {
                return false;
            }
        }
        true
    }

    fn visit_any(&mut self, rules: &[Rule]) -> bool {
        // At least one child must be satisfied; empty is vacuously false
        for rule in rules {
            if rule.accept(self) {
                return true;
            }
        }
        false
    }

    fn visit_min_length(&mut self, min: i64) -> bool {
        self.input.chars().count() as i64 >= min
    }

    fn visit_contains_char(&mut self, ch: char) -> bool {
        self.input.contains(ch)
    }

    fn visit_contains_any_of(&mut self, chars: &[char]) -> bool {
        chars.iter().any(|&ch| self.input.contains(ch))
    }
}

/// Test whether `input` satisfies the rule tree
pub fn evaluate(rule: &Rule, input: &str) -> bool {
    let satisfied = rule.accept(&mut Satisfaction::new(input));
    tracing::debug!("evaluate: rule={:?}, satisfied={}", rule, satisfied);
    satisfied
}

/// Visitor that evaluates a rule tree while recording a per-node trace
///
/// Unlike `Satisfaction` this never short-circuits: every child is visited
/// so the trace is complete. The root outcome always equals `evaluate`'s.
struct Tracer<'a> {
    input: &'a str,
}

impl RuleVisitor for Tracer<'_> {
    type Output = RuleTrace;

    fn visit_all(&mut self, rules: &[Rule]) -> RuleTrace {
        let mut children = Vec::with_capacity(rules.len());
        for rule in rules {
            children.push(rule.accept(self));
        }
        let satisfied = children.iter().all(|child| child.satisfied);
        RuleTrace::group("all", children, satisfied)
    }

    fn visit_any(&mut self, rules: &[Rule]) -> RuleTrace {
        let mut children = Vec::with_capacity(rules.len());
        for rule in rules {
            children.push(rule.accept(self));
        }
        let satisfied = children.iter().any(|child| child.satisfied);
        RuleTrace::group("any", children, satisfied)
    }

    fn visit_min_length(&mut self, min: i64) -> RuleTrace {
        let satisfied = self.input.chars().count() as i64 >= min;
        RuleTrace::leaf(format!("length >= {}", min), satisfied)
    }

    fn visit_contains_char(&mut self, ch: char) -> RuleTrace {
        let satisfied = self.input.contains(ch);
        RuleTrace::leaf(format!("contains '{}'", ch), satisfied)
    }

    fn visit_contains_any_of(&mut self, chars: &[char]) -> RuleTrace {
        let satisfied = chars.iter().any(|&ch| self.input.contains(ch));
        let set: String = chars.iter().collect();
        RuleTrace::leaf(format!("contains any of \"{}\"", set), satisfied)
    }
}

/// Evaluate `input` against the rule tree, recording a trace of every node
pub fn evaluate_with_trace(rule: &Rule, input: &str) -> RuleTrace {
    let trace = rule.accept(&mut Tracer { input });
    tracing::debug!(
        "evaluate_with_trace: nodes={}, satisfied={}",
        trace.node_count(),
        trace.satisfied
    );
    trace
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Vacuous Composites
    // =========================================================================

    #[test]
    fn test_empty_all_is_satisfied() {
        let rule = Rule::all(vec![]);
        assert!(evaluate(&rule, ""));
        assert!(evaluate(&rule, "anything"));
    }

    #[test]
    fn test_empty_any_is_not_satisfied() {
        let rule = Rule::any(vec![]);
        assert!(!evaluate(&rule, ""));
        assert!(!evaluate(&rule, "anything"));
    }

    #[test]
    fn test_empty_character_set_is_never_satisfied() {
        let rule = Rule::contains_any_of(std::iter::empty());
        assert!(!evaluate(&rule, ""));
        assert!(!evaluate(&rule, "abc?"));
    }

    // =========================================================================
    // Leaf Semantics
    // =========================================================================

    #[test]
    fn test_min_length_boundary() {
        let rule = Rule::min_length(8);
        assert!(evaluate(&rule, "12345678"));
        assert!(!evaluate(&rule, "1234567"));
    }

    #[test]
    fn test_min_length_zero_and_negative() {
        assert!(evaluate(&Rule::min_length(0), ""));
        assert!(evaluate(&Rule::min_length(-1), ""));
        assert!(evaluate(&Rule::min_length(-100), "x"));
    }

    #[test]
    fn test_min_length_counts_chars_not_bytes() {
        // Two scalar values, eight bytes
        let rule = Rule::min_length(3);
        assert!(!evaluate(&rule, "\u{1f44b}\u{1f30d}"));
        assert!(evaluate(&Rule::min_length(2), "\u{1f44b}\u{1f30d}"));
    }

    #[test]
    fn test_contains_char() {
        let rule = Rule::contains('@');
        assert!(evaluate(&rule, "user@example"));
        assert!(!evaluate(&rule, "user.example"));
        assert!(!evaluate(&rule, ""));
    }

    #[test]
    fn test_contains_any_of() {
        let rule = Rule::contains_any_of("?.,".chars());
        assert!(evaluate(&rule, "end."));
        assert!(evaluate(&rule, "why?"));
        assert!(!evaluate(&rule, "hello"));
    }

    // =========================================================================
    // Composite Laws
    // =========================================================================

    #[test]
    fn test_all_is_conjunction() {
        let t1 = Rule::min_length(3);
        let t2 = Rule::contains('x');

        for input in ["", "ax", "xxxx", "abcd"] {
            let combined = evaluate(&Rule::all(vec![t1.clone(), t2.clone()]), input);
            let separate = evaluate(&t1, input) && evaluate(&t2, input);
            assert_eq!(combined, separate, "input {:?}", input);
        }
    }

    #[test]
    fn test_any_is_disjunction() {
        let t1 = Rule::min_length(3);
        let t2 = Rule::contains('x');

        for input in ["", "ax", "xxxx", "abcd"] {
            let combined = evaluate(&Rule::any(vec![t1.clone(), t2.clone()]), input);
            let separate = evaluate(&t1, input) || evaluate(&t2, input);
            assert_eq!(combined, separate, "input {:?}", input);
        }
    }

    // =========================================================================
    // Scenarios
    // =========================================================================

    #[test]
    fn test_password_policy_scenario() {
        // At least 8 chars and an '@'
        let rule = Rule::all(vec![Rule::min_length(8), Rule::contains('@')]);

        assert!(evaluate(&rule, "ab@defgh"));
        assert!(!evaluate(&rule, "short@"));
    }

    #[test]
    fn test_punctuation_policy_scenario() {
        // Either a '!' or one of "?.,"
        let rule = Rule::any(vec![
            Rule::contains('!'),
            Rule::contains_any_of("?.,".chars()),
        ]);

        assert!(!evaluate(&rule, "hello world"));
        assert!(evaluate(&rule, "hello!"));
    }

    // =========================================================================
    // Traced Evaluation
    // =========================================================================

    #[test]
    fn test_trace_matches_evaluate() {
        let rule = Rule::all(vec![
            Rule::min_length(8),
            Rule::any(vec![Rule::contains('!'), Rule::contains_any_of("?.,".chars())]),
        ]);

        for input in ["hello", "longenough!", "short!", "with a dot."] {
            let trace = evaluate_with_trace(&rule, input);
            assert_eq!(trace.satisfied, evaluate(&rule, input), "input {:?}", input);
        }
    }

    #[test]
    fn test_trace_is_complete() {
        // Traced evaluation visits every node even when a cut is possible
        let rule = Rule::any(vec![
            Rule::contains('h'),
            Rule::contains('!'),
            Rule::min_length(2),
        ]);

        let trace = evaluate_with_trace(&rule, "hello");
        assert_eq!(trace.node_count(), rule.node_count());
        assert_eq!(trace.children.len(), 3);
        assert!(trace.children[0].satisfied);
        assert!(!trace.children[1].satisfied);
        assert!(trace.children[2].satisfied);
    }

    #[test]
    fn test_trace_condition_strings() {
        let trace = evaluate_with_trace(&Rule::min_length(8), "12345678");
        assert_eq!(trace.condition, "length >= 8");
        assert!(trace.satisfied);

        let trace = evaluate_with_trace(&Rule::contains_any_of("?.,".chars()), "x");
        assert_eq!(trace.condition, "contains any of \"?.,\"");
        assert!(!trace.satisfied);
    }

    #[test]
    fn test_trace_vacuous_composites() {
        let trace = evaluate_with_trace(&Rule::all(vec![]), "x");
        assert!(trace.satisfied);
        assert!(trace.children.is_empty());

        let trace = evaluate_with_trace(&Rule::any(vec![]), "x");
        assert!(!trace.satisfied);
    }
}
