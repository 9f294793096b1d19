// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! The parameterless block variant.

use crate::{Block, BlockVariant, ConnectionFamilies, ConnectionTable};

/// A block without parameters whose balance is all inputs minus all outputs.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Generic;

impl Generic {
    pub const TYPE_NAME: &'static str = "Generic";
}

impl BlockVariant for Generic {
    fn type_name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    fn connection_families(&self) -> ConnectionFamilies {
        ConnectionFamilies {
            main: "BlockConnections",
            support: None,
        }
    }

    fn exergy_balance(&self, block: &Block, table: &ConnectionTable) -> f64 {
        table.sum_exergy(block.input_connections()) - table.sum_exergy(block.output_connections())
    }
}
