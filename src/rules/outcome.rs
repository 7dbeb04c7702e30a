// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule results and the normalized rule form.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use futures::future::BoxFuture;

use crate::error::RaisedError;

use super::context::EvalContext;

/// The result of applying a single rule to a value.
///
/// `Pending` carries a future whose resolution is interpreted again as a
/// [`RuleOutcome`], so an asynchronous rule may itself resolve to another
/// pending outcome.
pub enum RuleOutcome {
    /// The rule passed; evaluation moves on to the next rule.
    Pass,
    /// The rule failed without an error. A normal negative result.
    Fail,
    /// The rule failed with an error of its own.
    Raised(RaisedError),
    /// The rule is asynchronous; await the future for the real outcome.
    Pending(BoxFuture<'static, RuleOutcome>),
}

impl RuleOutcome {
    /// Fail with an error, preserving the given message or cause.
    pub fn raise(err: impl Into<RaisedError>) -> Self {
        RuleOutcome::Raised(err.into())
    }

    /// Defer the outcome to a future.
    pub fn pending<F>(future: F) -> Self
    where
        F: Future<Output = RuleOutcome> + Send + 'static,
    {
        RuleOutcome::Pending(Box::pin(future))
    }
}

impl From<bool> for RuleOutcome {
    fn from(pass: bool) -> Self {
        if pass {
            RuleOutcome::Pass
        } else {
            RuleOutcome::Fail
        }
    }
}

impl<E> From<std::result::Result<bool, E>> for RuleOutcome
where
    E: Into<RaisedError>,
{
    fn from(result: std::result::Result<bool, E>) -> Self {
        match result {
            Ok(pass) => pass.into(),
            Err(err) => RuleOutcome::raise(err),
        }
    }
}

impl fmt::Debug for RuleOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleOutcome::Pass => write!(f, "Pass"),
            RuleOutcome::Fail => write!(f, "Fail"),
            RuleOutcome::Raised(err) => write!(f, "Raised({})", err),
            RuleOutcome::Pending(_) => write!(f, "Pending(..)"),
        }
    }
}

/// The uniform callable form every rule is reduced to.
pub type RuleFn = Arc<dyn Fn(&EvalContext, &str) -> RuleOutcome + Send + Sync>;

/// A single normalized rule: a label for diagnostics plus the callable.
///
/// Owned exclusively by the validator that built it.
#[derive(Clone)]
pub(crate) struct NormalizedRule {
    label: String,
    apply: RuleFn,
}

impl NormalizedRule {
    pub(crate) fn new(label: impl Into<String>, apply: RuleFn) -> Self {
        Self {
            label: label.into(),
            apply,
        }
    }

    /// The rule's diagnostic label (preset name, pattern, or `<predicate>`).
    pub(crate) fn label(&self) -> &str {
        &self.label
    }

    /// Apply the rule to a value.
    pub(crate) fn apply(&self, context: &EvalContext, value: &str) -> RuleOutcome {
        (self.apply)(context, value)
    }
}

impl fmt::Debug for NormalizedRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NormalizedRule({})", self.label)
    }
}
