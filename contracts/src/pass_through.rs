//! # Pass-through Blueprint
//!
//! A blueprint that inherits every default hook. Registration, requests,
//! job calls and results are all accepted; membership changes are refused;
//! slashing and disputes originate from the manager itself.

use crate::hooks::BlueprintServiceManager;

/// The blueprint with no overrides.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassThroughBlueprint;

impl PassThroughBlueprint {
    pub fn new() -> Self {
        Self
    }
}

impl BlueprintServiceManager for PassThroughBlueprint {}
