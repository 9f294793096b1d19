// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! A graph representation of the blocks of a plant and the exergy streams
//! between them.

mod calculation;
mod creation;
mod retrieval;
mod table_import;
mod xml_io;

pub mod iterators;

#[cfg(test)]
mod test_utils;

use crate::{Block, BlockRegistry, ConnectionTable, NetworkConfig};
use petgraph::stable_graph::{NodeIndex, StableDiGraph};
use std::collections::HashMap;

/// `Block`s stored in a `StableDiGraph` instance can be addressed with
/// `NodeIndex`es.
///
/// `BlockIndexMap` stores the corresponding `NodeIndex` for any block id, so
/// that blocks in the `StableDiGraph` can be retrieved from their ids.
pub(crate) type BlockIndexMap = HashMap<u64, NodeIndex>;

/// The plant: every block, every connection, and the graph they form.
///
/// An edge `a -> b` exists in the graph whenever some connection leaves
/// block `a` and enters block `b`.  Connections themselves live in the
/// [`ConnectionTable`], which is the only place they are stored.
#[derive(Debug)]
pub struct Network {
    graph: StableDiGraph<Block, ()>,
    block_indices: BlockIndexMap,
    connections: ConnectionTable,
    registry: BlockRegistry,
    config: NetworkConfig,
}
