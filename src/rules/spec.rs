// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Caller-supplied rule descriptions.

use std::fmt;
use std::sync::Arc;

use regex::Regex;

use super::context::EvalContext;
use super::outcome::{RuleFn, RuleOutcome};

/// A rule description as supplied by the caller, before normalization.
///
/// Strings are preset references parsed by the codec, regular expressions
/// test the value, predicates are called directly, and lists are flattened
/// in declared order.
#[derive(Clone)]
pub enum RuleSpec {
    /// A preset reference string, e.g. `"min-length:3|username"`.
    Preset(String),
    /// A pattern the value must match.
    Pattern(Regex),
    /// A predicate called with the evaluation context and the value.
    Predicate(RuleFn),
    /// An ordered list of rules, normalized in place.
    List(Vec<RuleSpec>),
}

impl RuleSpec {
    /// Build a predicate rule from a closure.
    ///
    /// The closure receives the validator's context and the value; return
    /// any [`RuleOutcome`], or a `bool` via `.into()`.
    pub fn predicate<F>(f: F) -> Self
    where
        F: Fn(&EvalContext, &str) -> RuleOutcome + Send + Sync + 'static,
    {
        RuleSpec::Predicate(Arc::new(f))
    }
}

impl From<&str> for RuleSpec {
    fn from(spec: &str) -> Self {
        RuleSpec::Preset(spec.to_string())
    }
}

impl From<String> for RuleSpec {
    fn from(spec: String) -> Self {
        RuleSpec::Preset(spec)
    }
}

impl From<Regex> for RuleSpec {
    fn from(pattern: Regex) -> Self {
        RuleSpec::Pattern(pattern)
    }
}

impl From<Vec<RuleSpec>> for RuleSpec {
    fn from(rules: Vec<RuleSpec>) -> Self {
        RuleSpec::List(rules)
    }
}

impl<const N: usize> From<[RuleSpec; N]> for RuleSpec {
    fn from(rules: [RuleSpec; N]) -> Self {
        RuleSpec::List(rules.into())
    }
}

impl fmt::Debug for RuleSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleSpec::Preset(spec) => write!(f, "Preset({:?})", spec),
            RuleSpec::Pattern(pattern) => write!(f, "Pattern(/{}/)", pattern.as_str()),
            RuleSpec::Predicate(_) => write!(f, "Predicate(..)"),
            RuleSpec::List(rules) => f.debug_list().entries(rules).finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        let spec: RuleSpec = "min-length:3".into();
        assert!(matches!(spec, RuleSpec::Preset(s) if s == "min-length:3"));
    }

    #[test]
    fn test_from_regex() {
        let spec: RuleSpec = Regex::new(r"1\d{10}").unwrap().into();
        assert!(matches!(spec, RuleSpec::Pattern(_)));
    }

    #[test]
    fn test_from_list() {
        let spec: RuleSpec = vec![RuleSpec::from("a"), RuleSpec::from("b")].into();
        match spec {
            RuleSpec::List(rules) => assert_eq!(rules.len(), 2),
            other => panic!("expected List, got {:?}", other),
        }
    }

    #[test]
    fn test_predicate() {
        let spec = RuleSpec::predicate(|_ctx, value| (value.len() > 2).into());
        assert!(matches!(spec, RuleSpec::Predicate(_)));
    }

    #[test]
    fn test_debug_rendering() {
        let spec: RuleSpec = "mobile".into();
        assert_eq!(format!("{:?}", spec), "Preset(\"mobile\")");

        let spec: RuleSpec = Regex::new(r"\d+").unwrap().into();
        assert_eq!(format!("{:?}", spec), "Pattern(/\\d+/)");
    }
}
