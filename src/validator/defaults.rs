// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Validator factory with baked-in options.

use crate::error::Result;
use crate::rules::RuleSpec;

use super::options::ValidatorOptions;
use super::Validator;

/// A factory that stamps shared options onto every validator it creates.
///
/// Useful when many validators share the same preset map or codec without
/// touching the global registry.
///
/// # Example
///
/// ```no_run
/// use value_validator::{Defaults, PresetEntry, ValidatorOptions};
///
/// # fn demo() -> value_validator::Result<()> {
/// let defaults = Defaults::new(
///     ValidatorOptions::new()
///         .preset("mobile", PresetEntry::simple(|v| v.starts_with('1')))?,
/// );
///
/// let a = defaults.validator("mobile")?;
/// let b = defaults.validator("mobile")?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Defaults {
    options: ValidatorOptions,
}

impl Defaults {
    /// Create a factory from the options every validator will share.
    pub fn new(options: ValidatorOptions) -> Self {
        Self { options }
    }

    /// Build a validator from a rule spec, using the shared options.
    pub fn validator(&self, spec: impl Into<RuleSpec>) -> Result<Validator> {
        Validator::with_options(spec, self.options.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidatorError;
    use crate::preset::PresetEntry;
    use crate::rules::RuleOutcome;
    use lazy_static::lazy_static;
    use regex::Regex;

    fn shared_defaults() -> Defaults {
        lazy_static! {
            static ref MOBILE: Regex = Regex::new(r"1\d{10}").unwrap();
        }

        Defaults::new(
            ValidatorOptions::new()
                .presets([
                    (
                        "min-length",
                        PresetEntry::predicate(1, |_ctx, value, args| {
                            (value.len() >= args[0].parse().unwrap_or(0)).into()
                        }),
                    ),
                    (
                        "max-length",
                        PresetEntry::predicate(1, |_ctx, value, args| {
                            (value.len() <= args[0].parse().unwrap_or(0)).into()
                        }),
                    ),
                    (
                        "between",
                        PresetEntry::predicate(2, |_ctx, value, args| {
                            let min: usize = args[0].parse().unwrap_or(0);
                            let max: usize = args[1].parse().unwrap_or(usize::MAX);
                            (value.len() >= min && value.len() <= max).into()
                        }),
                    ),
                    ("mobile", PresetEntry::simple(|value| MOBILE.is_match(value))),
                    (
                        "username",
                        PresetEntry::predicate(0, |_ctx, value, _args| {
                            let value = value.to_string();
                            RuleOutcome::pending(async move {
                                if value == "foo" {
                                    RuleOutcome::raise("foo already taken")
                                } else {
                                    RuleOutcome::Pass
                                }
                            })
                        }),
                    ),
                    (
                        "min-length-6-username",
                        PresetEntry::alias(["min-length:6", "username"]),
                    ),
                ])
                .unwrap(),
        )
    }

    #[tokio::test]
    async fn test_factory_presets_apply() {
        let defaults = shared_defaults();

        assert!(defaults
            .validator("mobile")
            .unwrap()
            .validate("18800001111")
            .await
            .unwrap());

        assert!(!defaults
            .validator("max-length:3")
            .unwrap()
            .validate("1234")
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_factory_multi_argument_preset() {
        let defaults = shared_defaults();
        let validator = defaults.validator("between:2,6").unwrap();
        assert!(validator.validate("1234").await.unwrap());
        assert!(!validator.validate("1").await.unwrap());
        assert!(!validator.validate("1234567").await.unwrap());
    }

    #[tokio::test]
    async fn test_factory_alias_group() {
        let defaults = shared_defaults();
        let validator = defaults.validator("min-length-6-username").unwrap();
        assert!(!validator.validate("foo").await.unwrap());
        assert!(validator.validate("barbarian").await.unwrap());
    }

    #[test]
    fn test_factory_construction_errors_still_fail() {
        let defaults = shared_defaults();
        let err = defaults.validator("max-length:1,2").unwrap_err();
        assert!(matches!(err, ValidatorError::ArgumentCount { .. }));
    }

    #[test]
    fn test_factory_does_not_touch_global_registry() {
        // The factory's presets are instance-scoped: a plain validator
        // cannot see them.
        let err = Validator::new("between:2,6").unwrap_err();
        assert!(matches!(err, ValidatorError::UnknownPreset { .. }));
    }
}
