// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Preset module: named rule templates and their registries.
//!
//! A preset is a named, optionally parametrized rule resolved from rule
//! strings like `"min-length:3"`. Presets live in a process-wide registry
//! or in a per-validator [`PresetMap`].

mod entry;
mod registry;

pub use entry::{PresetEntry, PresetFn};
pub use registry::{register_preset, register_presets, PresetMap};

pub(crate) use registry::RegistryView;
