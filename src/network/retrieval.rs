// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Methods for retrieving blocks and connections from a [`Network`].

use crate::iterators::{Blocks, Connections, Neighbors};
use crate::{Block, Connection, ConnectionTable, Error, Network};

/// `Block` and `Connection` retrieval.
impl Network {
    /// Returns the block with the given `id`, if it exists.
    pub fn block(&self, id: u64) -> Result<&Block, Error> {
        self.block_indices
            .get(&id)
            .map(|i| &self.graph[*i])
            .ok_or_else(|| Error::block_not_found(format!("Block with id {id} not found.")))
    }

    /// Returns an iterator over the blocks in the network.
    pub fn blocks(&self) -> Blocks {
        Blocks {
            graph: &self.graph,
            iter: self.graph.node_indices(),
        }
    }

    /// Returns an iterator over the user-facing connections in the network,
    /// in ascending index order.  Automatically generated connections are
    /// skipped.
    pub fn connections(&self) -> Connections {
        Connections {
            iter: self.connections.iter(),
        }
    }

    /// Returns an iterator over every connection in the network, including
    /// the automatically generated ones.
    pub fn all_connections(&self) -> impl Iterator<Item = &Connection> {
        self.connections.iter()
    }

    /// Returns the network's connection-index table.
    pub fn connection_table(&self) -> &ConnectionTable {
        &self.connections
    }

    /// Returns the connection with the given index, or `None` if there is no
    /// such connection.
    pub fn find_connection_by_index(&self, index: u64) -> Option<&Connection> {
        self.connections.find_connection_by_index(index)
    }

    /// Returns an iterator over the useful-effect connections created by
    /// prepared blocks.
    pub fn useful_effects(&self) -> impl Iterator<Item = &Connection> {
        self.connections.iter().filter(|c| c.is_useful_effect())
    }

    /// Returns an iterator over the blocks feeding into the block with the
    /// given `id`.
    ///
    /// Returns an error if the given `id` does not exist.
    pub fn predecessors(&self, id: u64) -> Result<Neighbors, Error> {
        self.neighbors(id, petgraph::Direction::Incoming)
    }

    /// Returns an iterator over the blocks fed by the block with the given
    /// `id`.
    ///
    /// Returns an error if the given `id` does not exist.
    pub fn successors(&self, id: u64) -> Result<Neighbors, Error> {
        self.neighbors(id, petgraph::Direction::Outgoing)
    }

    fn neighbors(&self, id: u64, direction: petgraph::Direction) -> Result<Neighbors, Error> {
        let index = self.node_index(id)?;
        Ok(Neighbors {
            graph: &self.graph,
            iter: self.graph.neighbors_directed(index, direction),
        })
    }
}
