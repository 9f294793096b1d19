// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! The built-in block variants, and the registry that resolves variants from
//! their discriminator strings.

mod converter;
mod generic;
mod registry;

pub use converter::EfficiencyConverter;
pub use generic::Generic;
pub use registry::{BlockRegistry, VariantConstructor};
