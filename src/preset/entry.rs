// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Preset entries: named rule templates.

use std::fmt;
use std::sync::Arc;

use crate::rules::{EvalContext, RuleOutcome};

/// The callable form of a parametrized preset predicate.
///
/// Receives the evaluation context, the value, and the arguments parsed
/// from the rule string.
pub type PresetFn = Arc<dyn Fn(&EvalContext, &str, &[String]) -> RuleOutcome + Send + Sync>;

/// A registry entry: either a parametrized predicate or an alias group
/// expanding to other rule strings.
#[derive(Clone)]
pub enum PresetEntry {
    /// A predicate taking `arity` arguments from the rule string.
    Predicate {
        /// Number of arguments the rule string must supply.
        arity: usize,
        /// The predicate itself.
        apply: PresetFn,
    },
    /// An ordered list of rule strings, expanded in place where the alias
    /// is referenced. Arguments given to an alias are ignored.
    Alias(Vec<String>),
}

impl PresetEntry {
    /// Build a predicate entry declaring how many rule string arguments it
    /// takes.
    pub fn predicate<F>(arity: usize, f: F) -> Self
    where
        F: Fn(&EvalContext, &str, &[String]) -> RuleOutcome + Send + Sync + 'static,
    {
        PresetEntry::Predicate {
            arity,
            apply: Arc::new(f),
        }
    }

    /// Build an argument-less predicate entry from a plain boolean check.
    pub fn simple<F>(f: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self::predicate(0, move |_ctx, value, _args| f(value).into())
    }

    /// Build an alias entry from a list of rule strings.
    pub fn alias<I, S>(specs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        PresetEntry::Alias(specs.into_iter().map(Into::into).collect())
    }

    /// The declared argument count, or `None` for an alias.
    pub fn arity(&self) -> Option<usize> {
        match self {
            PresetEntry::Predicate { arity, .. } => Some(*arity),
            PresetEntry::Alias(_) => None,
        }
    }
}

impl fmt::Debug for PresetEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PresetEntry::Predicate { arity, .. } => {
                write!(f, "Predicate(arity={})", arity)
            }
            PresetEntry::Alias(specs) => write!(f, "Alias({:?})", specs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_entry() {
        let entry = PresetEntry::simple(|value| !value.is_empty());
        assert_eq!(entry.arity(), Some(0));

        match entry {
            PresetEntry::Predicate { apply, .. } => {
                let ctx = EvalContext::empty();
                assert!(matches!(apply(&ctx, "x", &[]), RuleOutcome::Pass));
                assert!(matches!(apply(&ctx, "", &[]), RuleOutcome::Fail));
            }
            other => panic!("expected Predicate, got {:?}", other),
        }
    }

    #[test]
    fn test_predicate_entry_arity() {
        let entry = PresetEntry::predicate(2, |_ctx, _value, _args| RuleOutcome::Pass);
        assert_eq!(entry.arity(), Some(2));
    }

    #[test]
    fn test_alias_entry() {
        let entry = PresetEntry::alias(["min-length:6", "username"]);
        assert_eq!(entry.arity(), None);
        match entry {
            PresetEntry::Alias(specs) => {
                assert_eq!(specs, vec!["min-length:6", "username"]);
            }
            other => panic!("expected Alias, got {:?}", other),
        }
    }
}
