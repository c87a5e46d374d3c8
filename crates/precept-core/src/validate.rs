//! Rule parameter validation
//!
//! Satisfaction and description are total over any well-formed tree, so
//! nothing here runs on the evaluation path. `Rule::validate` is an opt-in
//! check for parameters that are legal but almost certainly mistakes: a
//! negative length threshold (satisfied by every input) or an empty
//! character set (satisfied by none).

use crate::ast::{Rule, RuleVisitor};
use crate::error::{CoreError, Result};

/// Visitor that checks rule parameters for suspicious values
struct ParamChecker;

impl RuleVisitor for ParamChecker {
    type Output = Result<()>;

    fn visit_all(&mut self, rules: &[Rule]) -> Result<()> {
        for rule in rules {
            rule.accept(self)?;
        }
        Ok(())
    }

    fn visit_any(&mut self, rules: &[Rule]) -> Result<()> {
        for rule in rules {
            rule.accept(self)?;
        }
        Ok(())
    }

    fn visit_min_length(&mut self, min: i64) -> Result<()> {
        if min < 0 {
            return Err(CoreError::InvalidParameter(format!(
                "negative minimum length {} is satisfied by every input",
                min
            )));
        }
        Ok(())
    }

    fn visit_contains_char(&mut self, _ch: char) -> Result<()> {
        Ok(())
    }

    fn visit_contains_any_of(&mut self, chars: &[char]) -> Result<()> {
        if chars.is_empty() {
            return Err(CoreError::InvalidParameter(
                "empty character set is never satisfied".to_string(),
            ));
        }
        for (i, ch) in chars.iter().enumerate() {
            if chars[..i].contains(ch) {
                return Err(CoreError::InvalidParameter(format!(
                    "duplicate character '{}' in character set",
                    ch
                )));
            }
        }
        Ok(())
    }
}

impl Rule {
    /// Check every node's parameters, failing on the first suspicious value
    ///
    /// Never called by evaluation or description; trees that fail this check
    /// still evaluate per the documented vacuous semantics.
    pub fn validate(&self) -> Result<()> {
        self.accept(&mut ParamChecker)
    }
}
