// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Global and instance-scoped preset registries.
//!
//! The global registry is process-wide and additive only: names are
//! registered once and never removed. A validator may also carry its own
//! [`PresetMap`] whose entries shadow global ones at lookup.

use std::collections::HashMap;
use std::sync::RwLock;

use lazy_static::lazy_static;

use crate::error::{PresetScope, Result, ValidatorError};

use super::entry::PresetEntry;

lazy_static! {
    /// Process-wide preset registry.
    static ref GLOBAL_PRESETS: RwLock<HashMap<String, PresetEntry>> =
        RwLock::new(HashMap::new());
}

/// Register a preset in the global registry.
///
/// Fails with `DuplicatePreset` if the name is already registered globally.
pub fn register_preset(name: impl Into<String>, entry: PresetEntry) -> Result<()> {
    let name = name.into();
    let mut presets = GLOBAL_PRESETS
        .write()
        .expect("global preset registry poisoned");

    if presets.contains_key(&name) {
        return Err(ValidatorError::DuplicatePreset {
            name,
            scope: PresetScope::Global,
        });
    }

    tracing::debug!("Registering global preset: {}", name);
    presets.insert(name, entry);
    Ok(())
}

/// Register several presets, in iteration order.
///
/// Fail-fast: the first duplicate aborts the remaining registrations, but
/// entries registered before the failure stay in effect.
pub fn register_presets<I, S>(entries: I) -> Result<()>
where
    I: IntoIterator<Item = (S, PresetEntry)>,
    S: Into<String>,
{
    for (name, entry) in entries {
        register_preset(name, entry)?;
    }
    Ok(())
}

/// An instance-scoped preset map.
///
/// Entries here shadow same-named global presets when the owning validator
/// resolves a rule string.
#[derive(Debug, Clone, Default)]
pub struct PresetMap {
    entries: HashMap<String, PresetEntry>,
}

impl PresetMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a preset in this map.
    ///
    /// Fails with `DuplicatePreset` if the name is already present in this
    /// map. Shadowing a global preset is allowed.
    pub fn register(&mut self, name: impl Into<String>, entry: PresetEntry) -> Result<()> {
        let name = name.into();
        if self.entries.contains_key(&name) {
            return Err(ValidatorError::DuplicatePreset {
                name,
                scope: PresetScope::Instance,
            });
        }
        self.entries.insert(name, entry);
        Ok(())
    }

    /// Look up an entry in this map only.
    pub fn get(&self, name: &str) -> Option<&PresetEntry> {
        self.entries.get(name)
    }

    /// Whether the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries in the map.
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Read-only lookup view combining an instance map with the global registry.
pub(crate) struct RegistryView<'a> {
    local: &'a PresetMap,
}

impl<'a> RegistryView<'a> {
    pub(crate) fn new(local: &'a PresetMap) -> Self {
        Self { local }
    }

    /// Resolve a preset name: instance map first, then the global registry.
    pub(crate) fn resolve(&self, name: &str) -> Result<PresetEntry> {
        if let Some(entry) = self.local.get(name) {
            return Ok(entry.clone());
        }

        let presets = GLOBAL_PRESETS
            .read()
            .expect("global preset registry poisoned");
        presets
            .get(name)
            .cloned()
            .ok_or_else(|| ValidatorError::UnknownPreset {
                name: name.to_string(),
            })
    }
}
