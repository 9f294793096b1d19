// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

/*!
# Exergy Network Graph

This is a library for representing the blocks of an energy plant and the
exergy streams between them as a directed graph, and for computing the exergy
balance of each block.

## Blocks, connections and the `Network`

The main struct is [`Network`].  It owns every [`Block`] of the plant, and a
[`ConnectionTable`] holding every [`Connection`].  Blocks only refer to their
connections by index, so all lookups go through the network.

Each block has a variant implementing the [`BlockVariant`] trait, which
decides how the block's exergy balance is computed, which connection families
it serializes, and whether it has a [`SupportBlock`].  Variants are created
from their discriminator strings by a [`BlockRegistry`], which knows the
built-in [`Generic`] and [`EfficiencyConverter`] variants, and can be extended
with custom ones.

## Calculation

Once a block has an input, it can be prepared for calculation with
[`prepare_for_calculation`][Network::prepare_for_calculation].  This appends
an automatically generated useful-effect connection carrying the block's net
output.  [`calculate`][Network::calculate] does this for every ready block, in
topological order.

## Import and export

Networks can be written to XML with [`export_xml`][Network::export_xml] and
read back with [`from_xml`][Network::from_xml].  Connections of individual
blocks can also be imported from spreadsheet rows, with
[`append_excel_connection_list`][Network::append_excel_connection_list].
*/

mod block;
pub use block::{Block, BlockState};

mod block_traits;
pub use block_traits::{BlockVariant, ConnectionFamilies};

mod config;
pub use config::NetworkConfig;

mod connection;
pub use connection::{Connection, ConnectionTable};

mod error;
pub use error::Error;

mod network;
pub use network::{iterators, Network};

mod support_block;
pub use support_block::SupportBlock;

mod table;
pub use table::TableCell;

mod variants;
pub use variants::{BlockRegistry, EfficiencyConverter, Generic, VariantConstructor};

mod xml;
pub use xml::XmlElement;

mod zone;
pub use zone::ZoneType;
