// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Validator construction options.

use std::fmt;
use std::sync::Arc;

use crate::codec::{Codec, DefaultCodec};
use crate::error::Result;
use crate::preset::{PresetEntry, PresetMap};

/// Options recognized when constructing a validator: a custom codec and
/// instance-scoped presets.
///
/// Instance presets shadow same-named global presets for validators built
/// with these options, which also keeps tests from leaking state through
/// the global registry.
#[derive(Clone, Default)]
pub struct ValidatorOptions {
    codec: Option<Arc<dyn Codec>>,
    presets: PresetMap,
}

impl ValidatorOptions {
    /// Create empty options: default codec, no instance presets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the rule string codec.
    pub fn codec<C: Codec + 'static>(mut self, codec: C) -> Self {
        self.codec = Some(Arc::new(codec));
        self
    }

    /// Add an instance-scoped preset.
    ///
    /// Fails with `DuplicatePreset` (instance scope) if the name was
    /// already added to these options.
    pub fn preset(mut self, name: impl Into<String>, entry: PresetEntry) -> Result<Self> {
        self.presets.register(name, entry)?;
        Ok(self)
    }

    /// Add several instance-scoped presets, in iteration order, fail-fast.
    pub fn presets<I, S>(mut self, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, PresetEntry)>,
        S: Into<String>,
    {
        for (name, entry) in entries {
            self.presets.register(name, entry)?;
        }
        Ok(self)
    }

    pub(crate) fn into_parts(self) -> (Arc<dyn Codec>, PresetMap) {
        let codec = self.codec.unwrap_or_else(|| Arc::new(DefaultCodec));
        (codec, self.presets)
    }
}

impl fmt::Debug for ValidatorOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatorOptions")
            .field("codec", &self.codec.as_ref().map(|_| "custom"))
            .field("presets", &self.presets)
            .finish()
    }
}
