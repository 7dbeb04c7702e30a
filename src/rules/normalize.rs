// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule normalization.
//!
//! Reduces every [`RuleSpec`] shape to a flat, ordered list of normalized
//! rules. Normalization is eager: unknown presets, argument count
//! mismatches, and malformed rule strings all fail here, never during
//! evaluation.

use std::sync::Arc;

use regex::Regex;

use crate::codec::Codec;
use crate::error::{Result, ValidatorError};
use crate::preset::{PresetEntry, PresetFn, RegistryView};

use super::context::EvalContext;
use super::outcome::NormalizedRule;
use super::spec::RuleSpec;

/// Normalize a rule spec into the flat rule list.
pub(crate) fn normalize(
    spec: &RuleSpec,
    registry: &RegistryView<'_>,
    codec: &dyn Codec,
) -> Result<Vec<NormalizedRule>> {
    let mut rules = Vec::new();
    let mut expanding = Vec::new();
    normalize_into(spec, registry, codec, &mut expanding, &mut rules)?;
    Ok(rules)
}

fn normalize_into(
    spec: &RuleSpec,
    registry: &RegistryView<'_>,
    codec: &dyn Codec,
    expanding: &mut Vec<String>,
    out: &mut Vec<NormalizedRule>,
) -> Result<()> {
    match spec {
        RuleSpec::Preset(text) => decode_preset(text, registry, codec, expanding, out),
        RuleSpec::Pattern(pattern) => {
            out.push(pattern_rule(pattern.clone()));
            Ok(())
        }
        RuleSpec::Predicate(apply) => {
            out.push(NormalizedRule::new("<predicate>", apply.clone()));
            Ok(())
        }
        RuleSpec::List(list) => {
            for rule in list {
                normalize_into(rule, registry, codec, expanding, out)?;
            }
            Ok(())
        }
    }
}

fn decode_preset(
    text: &str,
    registry: &RegistryView<'_>,
    codec: &dyn Codec,
    expanding: &mut Vec<String>,
    out: &mut Vec<NormalizedRule>,
) -> Result<()> {
    for token in codec.decode(text) {
        if token.name.is_empty() {
            return Err(ValidatorError::InvalidRule {
                rendered: text.to_string(),
            });
        }

        match registry.resolve(&token.name)? {
            PresetEntry::Predicate { arity, apply } => {
                if arity != token.args.len() {
                    return Err(ValidatorError::ArgumentCount {
                        preset: token.name,
                        expected: arity,
                        actual: token.args.len(),
                    });
                }
                out.push(bound_rule(token.to_string(), apply, token.args));
            }
            PresetEntry::Alias(specs) => {
                if expanding.iter().any(|name| *name == token.name) {
                    return Err(ValidatorError::InvalidRule {
                        rendered: format!("recursive preset alias '{}'", token.name),
                    });
                }
                if !token.args.is_empty() {
                    tracing::debug!(
                        "Alias preset '{}' ignores arguments: {:?}",
                        token.name,
                        token.args
                    );
                }

                expanding.push(token.name);
                for sub in &specs {
                    decode_preset(sub, registry, codec, expanding, out)?;
                }
                expanding.pop();
            }
        }
    }
    Ok(())
}

/// Bind the parsed arguments to a preset predicate as trailing parameters.
fn bound_rule(label: String, apply: PresetFn, args: Vec<String>) -> NormalizedRule {
    NormalizedRule::new(
        label,
        Arc::new(move |ctx: &EvalContext, value: &str| apply(ctx, value, &args)),
    )
}

fn pattern_rule(pattern: Regex) -> NormalizedRule {
    let label = format!("/{}/", pattern.as_str());
    NormalizedRule::new(
        label,
        Arc::new(move |_ctx: &EvalContext, value: &str| pattern.is_match(value).into()),
    )
}
