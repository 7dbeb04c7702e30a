// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Sequential rule evaluation.
//!
//! Rules run strictly in declared order; evaluation stops at the first
//! failing or erroring rule. Synchronous rules are applied eagerly — the
//! walk only suspends when a rule actually returns a pending future.

use crate::error::{Result, ValidatorError};

use super::context::EvalContext;
use super::outcome::{NormalizedRule, RuleOutcome};

/// Evaluate `value` against the normalized rules.
///
/// Returns `Ok(true)` if every rule passes (trivially so for an empty
/// list), `Ok(false)` on the first plain failure, and `Err` on the first
/// rule-raised error. Rules after the first failure are never invoked.
pub(crate) async fn evaluate(
    rules: &[NormalizedRule],
    value: &str,
    context: &EvalContext,
) -> Result<bool> {
    for rule in rules {
        let mut outcome = rule.apply(context, value);

        // A pending outcome may itself resolve to another pending outcome;
        // keep settling until the rule reaches a final verdict.
        loop {
            match outcome {
                RuleOutcome::Pass => break,
                RuleOutcome::Fail => {
                    tracing::trace!("Rule '{}' failed", rule.label());
                    return Ok(false);
                }
                RuleOutcome::Raised(err) => {
                    tracing::trace!("Rule '{}' raised: {}", rule.label(), err);
                    return Err(ValidatorError::Raised(err));
                }
                RuleOutcome::Pending(future) => outcome = future.await,
            }
        }
    }

    Ok(true)
}
