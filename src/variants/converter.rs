// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Single-efficiency converters, like alternators and electric motors.

use crate::{
    Block, BlockVariant, ConnectionFamilies, ConnectionTable, Error, TableCell, XmlElement,
    ZoneType,
};

const MECHANICAL: &str = "MechanicalConnections";
const ELECTRICAL: &str = "ElectricalConnections";

/// A device converting one physical flow into another with a constant
/// efficiency.
///
/// The connections of the converted flow are kept on the support block, and
/// the support block's net exergy enters the block scaled by `efficiency`.
#[derive(Clone, Debug, PartialEq)]
pub struct EfficiencyConverter {
    type_name: &'static str,
    families: ConnectionFamilies,
    efficiency: f64,
}

impl EfficiencyConverter {
    pub const ALTERNATOR: &'static str = "Alternator";
    pub const ELECTRIC_MOTOR: &'static str = "Electric Motor";

    /// Mechanical power in, electrical power out.
    pub fn alternator() -> Self {
        Self {
            type_name: Self::ALTERNATOR,
            families: ConnectionFamilies {
                main: ELECTRICAL,
                support: Some(MECHANICAL),
            },
            efficiency: 1.0,
        }
    }

    /// Electrical power in, mechanical power out.
    pub fn electric_motor() -> Self {
        Self {
            type_name: Self::ELECTRIC_MOTOR,
            families: ConnectionFamilies {
                main: MECHANICAL,
                support: Some(ELECTRICAL),
            },
            efficiency: 1.0,
        }
    }

    pub fn with_efficiency(mut self, efficiency: f64) -> Self {
        self.efficiency = efficiency;
        self
    }

    pub fn efficiency(&self) -> f64 {
        self.efficiency
    }
}

impl BlockVariant for EfficiencyConverter {
    fn type_name(&self) -> &'static str {
        self.type_name
    }

    fn connection_families(&self) -> ConnectionFamilies {
        self.families
    }

    fn exergy_balance(&self, block: &Block, table: &ConnectionTable) -> f64 {
        let through = block.support_block().and_then(|s| s.connection_with_main());
        let inputs: f64 = block
            .input_connections()
            .iter()
            .map(|index| {
                let value = table.exergy_value(*index);
                if Some(*index) == through {
                    value * self.efficiency
                } else {
                    value
                }
            })
            .sum();
        inputs - table.sum_exergy(block.output_connections())
    }

    fn export_xml_other_parameters(&self) -> XmlElement {
        XmlElement::new("Other").with_attribute("efficiency", self.efficiency)
    }

    fn append_xml_other_parameters(&mut self, element: &XmlElement) -> Result<(), Error> {
        let efficiency: f64 = element.parse_attribute("efficiency")?;
        if !efficiency.is_finite() {
            return Err(Error::parse(format!(
                "Invalid value for `efficiency` on element <{}>: {efficiency}",
                element.name()
            )));
        }
        self.efficiency = efficiency;
        Ok(())
    }

    fn excel_parameter_count(&self) -> usize {
        1
    }

    fn append_excel_parameters(&mut self, cells: &[TableCell]) -> Result<(), Error> {
        let cell = cells.first().ok_or_else(|| {
            Error::parse(format!("Missing efficiency for {}.", self.type_name))
        })?;
        self.efficiency = cell.as_f64()?;
        Ok(())
    }

    fn can_be_removed_in_pf_definition(&self) -> Option<bool> {
        Some(false)
    }

    fn return_other_zone_connections(
        &self,
        _zone_type: ZoneType,
        _input_connection: u64,
    ) -> Vec<u64> {
        vec![]
    }
}
