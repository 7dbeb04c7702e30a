// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! value-validator - Rule-Based Value Validation
//!
//! A small engine that checks a value against an ordered list of rules,
//! stopping at the first failure.
//!
//! # Features
//!
//! - **Rule Mini-Language**: Build rule chains from strings like
//!   `"min-length:3|username"`, parsed by a swappable codec
//! - **Presets**: Named, parametrized rule templates in a process-wide
//!   registry, with per-validator overrides and alias groups
//! - **Sync and Async Rules**: Plain predicates, regular expressions, and
//!   future-returning rules evaluated through one uniform contract
//! - **Fail-Fast Construction**: Unknown presets, bad argument counts, and
//!   malformed rule strings are rejected before a validator exists
//! - **Short-Circuit Evaluation**: Rules run in declared order; the first
//!   failure or error wins
//!
//! # Example
//!
//! ```no_run
//! use value_validator::{PresetEntry, Validator, ValidatorOptions};
//!
//! # async fn demo() -> value_validator::Result<()> {
//! let options = ValidatorOptions::new()
//!     .preset("min-length", PresetEntry::predicate(1, |_ctx, v, args| {
//!         (v.len() >= args[0].parse().unwrap_or(0)).into()
//!     }))?
//!     .preset("mobile", PresetEntry::simple(|v| v.starts_with('1')))?;
//!
//! let validator = Validator::with_options("min-length:3|mobile", options)?;
//!
//! assert!(validator.validate("18800001111").await?);
//! assert!(!validator.validate("28800001111").await?);
//! # Ok(())
//! # }
//! ```

// Module declarations
pub mod codec;
pub mod error;
pub mod preset;
pub mod rules;
pub mod validator;

// Re-exports for convenience
pub use codec::{Codec, DefaultCodec, RuleToken};
pub use error::{PresetScope, RaisedError, Result, ValidatorError};
pub use preset::{register_preset, register_presets, PresetEntry, PresetFn, PresetMap};
pub use rules::{EvalContext, RuleFn, RuleOutcome, RuleSpec};
pub use validator::{Defaults, Validator, ValidatorOptions};
