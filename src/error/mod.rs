// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for value-validator.
//!
//! Structural errors (invalid rules, preset problems) surface while a
//! validator is being built or a preset is being registered. [`RaisedError`]
//! is the only kind that surfaces during evaluation.

use std::fmt;
use thiserror::Error;

/// The main error type for value-validator operations.
#[derive(Error, Debug)]
pub enum ValidatorError {
    /// A rule of unrecognized shape was supplied.
    #[error("Invalid rule: {rendered}")]
    InvalidRule { rendered: String },

    /// A preset name referenced in a rule string has no registry entry.
    #[error("Unknown preset: '{name}'")]
    UnknownPreset { name: String },

    /// The number of arguments parsed from a rule string does not match
    /// the preset's declared arity.
    #[error("Preset '{preset}' expects {expected} argument(s), got {actual}")]
    ArgumentCount {
        preset: String,
        expected: usize,
        actual: usize,
    },

    /// A preset name was registered twice within the same scope.
    #[error("Preset '{name}' is already registered ({scope})")]
    DuplicatePreset { name: String, scope: PresetScope },

    /// A rule produced an error while evaluating a value.
    #[error("{0}")]
    Raised(#[from] RaisedError),
}

/// The registry scope in which a duplicate preset name collided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresetScope {
    /// The process-wide registry.
    Global,
    /// A single validator's preset map.
    Instance,
}

impl fmt::Display for PresetScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PresetScope::Global => write!(f, "global"),
            PresetScope::Instance => write!(f, "instance"),
        }
    }
}

/// An error raised by a rule itself during evaluation.
///
/// Displays as exactly the message the rule produced, so callers that
/// compare error messages see the rule's own wording.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct RaisedError {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl RaisedError {
    /// Create a raised error from a plain message.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Create a raised error that preserves the original cause.
    pub fn with_source(source: Box<dyn std::error::Error + Send + Sync>) -> Self {
        Self {
            message: source.to_string(),
            source: Some(source),
        }
    }
}

impl From<String> for RaisedError {
    fn from(message: String) -> Self {
        Self::message(message)
    }
}

impl From<&str> for RaisedError {
    fn from(message: &str) -> Self {
        Self::message(message)
    }
}

impl From<Box<dyn std::error::Error + Send + Sync>> for RaisedError {
    fn from(source: Box<dyn std::error::Error + Send + Sync>) -> Self {
        Self::with_source(source)
    }
}

/// Result type alias for value-validator operations.
pub type Result<T> = std::result::Result<T, ValidatorError>;
