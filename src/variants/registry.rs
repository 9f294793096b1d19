// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Lookup of block variants by their `type` discriminator.

use std::collections::BTreeMap;

use crate::{BlockVariant, Error};

use super::{EfficiencyConverter, Generic};

/// Creates a fresh, default-initialized block variant.
pub type VariantConstructor = fn() -> Box<dyn BlockVariant>;

/// Resolves block variants from their `type` discriminator.
///
/// The [`Default`] registry knows the built-in variants; more can be added
/// with [`register`][BlockRegistry::register].
#[derive(Clone, Debug)]
pub struct BlockRegistry {
    constructors: BTreeMap<String, VariantConstructor>,
}

impl BlockRegistry {
    /// Creates a registry without any variants.
    pub fn empty() -> Self {
        Self {
            constructors: BTreeMap::new(),
        }
    }

    /// Registers a variant, replacing any previous one with the same name.
    pub fn register(&mut self, type_name: impl Into<String>, constructor: VariantConstructor) {
        self.constructors.insert(type_name.into(), constructor);
    }

    /// Creates a new variant of the given type.
    pub fn create(&self, type_name: &str) -> Result<Box<dyn BlockVariant>, Error> {
        self.constructors
            .get(type_name)
            .map(|constructor| constructor())
            .ok_or_else(|| Error::unknown_block_type(format!("Unknown block type: {type_name}")))
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.constructors.contains_key(type_name)
    }

    /// Returns the registered discriminators, in alphabetical order.
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.constructors.keys().map(String::as_str)
    }
}

impl Default for BlockRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register(Generic::TYPE_NAME, generic);
        registry.register(EfficiencyConverter::ALTERNATOR, alternator);
        registry.register(EfficiencyConverter::ELECTRIC_MOTOR, electric_motor);
        registry
    }
}

fn generic() -> Box<dyn BlockVariant> {
    Box::new(Generic)
}

fn alternator() -> Box<dyn BlockVariant> {
    Box::new(EfficiencyConverter::alternator())
}

fn electric_motor() -> Box<dyn BlockVariant> {
    Box::new(EfficiencyConverter::electric_motor())
}
