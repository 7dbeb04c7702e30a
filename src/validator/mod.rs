// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The validator: owns the normalized rule list and runs evaluations.

mod defaults;
mod options;

pub use defaults::Defaults;
pub use options::ValidatorOptions;

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::codec::Codec;
use crate::error::{Result, ValidatorError};
use crate::preset::{PresetMap, RegistryView};
use crate::rules::{evaluate, normalize, EvalContext, NormalizedRule, RuleSpec};

/// A compiled validator.
///
/// Rules are normalized eagerly at construction and at every [`add`]; a
/// construction error means no validator exists. The rule list is
/// append-only and immutable during evaluation, so a `Validator` can run
/// any number of concurrent [`validate`] calls.
///
/// [`add`]: Validator::add
/// [`validate`]: Validator::validate
///
/// # Example
///
/// ```no_run
/// use value_validator::{PresetEntry, Validator, ValidatorOptions};
///
/// # async fn demo() -> value_validator::Result<()> {
/// let options = ValidatorOptions::new()
///     .preset("min-length", PresetEntry::predicate(1, |_ctx, v, args| {
///         (v.len() >= args[0].parse().unwrap_or(0)).into()
///     }))?;
///
/// let validator = Validator::with_options("min-length:3", options)?;
/// assert!(validator.validate("hello").await?);
/// assert!(!validator.validate("hi").await?);
/// # Ok(())
/// # }
/// ```
pub struct Validator {
    rules: Vec<NormalizedRule>,
    codec: Arc<dyn Codec>,
    presets: PresetMap,
    context: EvalContext,
}

impl Validator {
    /// Build a validator from a rule spec with default options.
    pub fn new(spec: impl Into<RuleSpec>) -> Result<Self> {
        Self::with_options(spec, ValidatorOptions::default())
    }

    /// Build a validator from a rule spec and explicit options.
    pub fn with_options(spec: impl Into<RuleSpec>, options: ValidatorOptions) -> Result<Self> {
        let mut validator = Self::from_options(options);
        validator.push_spec(spec.into())?;
        tracing::debug!("Built validator with {} rule(s)", validator.rules.len());
        Ok(validator)
    }

    /// A validator with no rules; every value passes.
    pub fn empty() -> Self {
        Self::from_options(ValidatorOptions::default())
    }

    fn from_options(options: ValidatorOptions) -> Self {
        let (codec, presets) = options.into_parts();
        Self {
            rules: Vec::new(),
            codec,
            presets,
            context: EvalContext::empty(),
        }
    }

    /// Normalize `spec` and append its rules. Chainable.
    ///
    /// Fails with the same errors as construction; on failure the validator
    /// is consumed, so a partially extended rule list is never observable.
    pub fn add(mut self, spec: impl Into<RuleSpec>) -> Result<Self> {
        self.push_spec(spec.into())?;
        Ok(self)
    }

    /// Set the evaluation context shared by all rule invocations. Chainable.
    pub fn context<T: Any + Send + Sync>(mut self, context: T) -> Self {
        self.context = EvalContext::new(context);
        self
    }

    /// Number of normalized rules, after preset expansion.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Evaluate a value against all rules, in declared order.
    ///
    /// Resolves to `Ok(true)` when every rule passes, `Ok(false)` on the
    /// first plain failure, and `Err` with the triggering error on the
    /// first rule-raised error. Evaluation stops at the first failure.
    pub async fn validate(&self, value: &str) -> Result<bool> {
        evaluate(&self.rules, value, &self.context).await
    }

    /// Two-channel variant of [`validate`](Validator::validate).
    ///
    /// Invokes `callback(error, pass)` once the evaluation settles:
    /// `(None, true)` on success, `(Some(err), false)` when a rule raised
    /// an error, `(None, false)` on a plain failure.
    pub async fn check<F>(&self, value: &str, callback: F)
    where
        F: FnOnce(Option<ValidatorError>, bool),
    {
        match self.validate(value).await {
            Ok(pass) => callback(None, pass),
            Err(err) => callback(Some(err), false),
        }
    }

    fn push_spec(&mut self, spec: RuleSpec) -> Result<()> {
        let view = RegistryView::new(&self.presets);
        let mut rules = normalize(&spec, &view, self.codec.as_ref())?;
        self.rules.append(&mut rules);
        Ok(())
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("rules", &self.rules)
            .field("context", &self.context)
            .finish()
    }
}
