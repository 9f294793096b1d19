// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module contains the trait that needs to be implemented by every
//! concrete block variant.

use crate::{Block, ConnectionTable, Error, TableCell, XmlElement, ZoneType};

/// The XML element names under which a variant exports its connections.
///
/// A variant has a support block exactly when `support` is `Some`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConnectionFamilies {
    /// Family of the connections registered on the block itself.
    pub main: &'static str,
    /// Family of the connections registered on the support block.
    pub support: Option<&'static str>,
}

/**
This trait needs to be implemented by the types that represent a kind of
block.

A [`Block`] holds the connection lists, and delegates everything that depends
on the kind of device it models to its variant.  Variants are looked up by
their [`type_name`][BlockVariant::type_name] through a
[`BlockRegistry`][crate::BlockRegistry].

<details>
<summary>Example implementation of a lossless splitter:</summary>

```ignore
use exergy_network_graph::{Block, BlockVariant, ConnectionFamilies, ConnectionTable};

#[derive(Debug)]
struct Splitter;

impl BlockVariant for Splitter {
    fn type_name(&self) -> &'static str {
        "Splitter"
    }

    fn connection_families(&self) -> ConnectionFamilies {
        ConnectionFamilies {
            main: "FluidConnections",
            support: None,
        }
    }

    fn exergy_balance(&self, block: &Block, table: &ConnectionTable) -> f64 {
        let inputs: f64 = block
            .input_connections()
            .iter()
            .filter_map(|i| table.find_connection_by_index(*i))
            .map(|c| c.exergy_value())
            .sum();
        let outputs: f64 = block
            .output_connections()
            .iter()
            .filter_map(|i| table.find_connection_by_index(*i))
            .map(|c| c.exergy_value())
            .sum();
        inputs - outputs
    }
}
```

</details>
*/
pub trait BlockVariant: std::fmt::Debug {
    /// Returns the discriminator this variant is registered under.
    fn type_name(&self) -> &'static str;

    /// Returns the XML families the block's connections are exported under.
    fn connection_families(&self) -> ConnectionFamilies;

    /// Computes the exergy balance of the given block.
    fn exergy_balance(&self, block: &Block, table: &ConnectionTable) -> f64;

    /// Serializes the variant specific parameters as attributes of an
    /// `<Other>` element.
    fn export_xml_other_parameters(&self) -> XmlElement {
        XmlElement::new("Other")
    }

    /// Reads back the parameters written by
    /// [`export_xml_other_parameters`][BlockVariant::export_xml_other_parameters].
    fn append_xml_other_parameters(&mut self, _element: &XmlElement) -> Result<(), Error> {
        Ok(())
    }

    /// Returns how many leading cells of a tabular connection row hold
    /// variant specific parameters.
    fn excel_parameter_count(&self) -> usize {
        0
    }

    /// Reads the variant specific parameters from the leading cells of a
    /// tabular connection row.
    ///
    /// `cells` holds at most [`excel_parameter_count`][Self::excel_parameter_count]
    /// cells.  On error, the variant must be left unchanged.
    fn append_excel_parameters(&mut self, _cells: &[TableCell]) -> Result<(), Error> {
        Ok(())
    }

    /// Returns `Some(false)` if blocks of this kind must never be removed
    /// during the product/fuel definition pass, `None` to follow the
    /// network's default.
    fn can_be_removed_in_pf_definition(&self) -> Option<bool> {
        None
    }

    /// Returns the other connections of the block that share a zone of the
    /// given type with `input_connection`.
    fn return_other_zone_connections(
        &self,
        _zone_type: ZoneType,
        _input_connection: u64,
    ) -> Vec<u64> {
        vec![]
    }
}
