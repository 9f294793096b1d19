// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Methods for building up and tearing down a [`Network`].

use petgraph::stable_graph::{NodeIndex, StableDiGraph};

use crate::block::Displaced;
use crate::{
    Block, BlockRegistry, BlockVariant, Connection, ConnectionTable, Error, NetworkConfig,
};

use super::{BlockIndexMap, Network};

/// `Network` instantiation and mutation.
impl Network {
    /// Creates an empty network that knows the built-in block variants.
    pub fn new(config: NetworkConfig) -> Self {
        Self::with_registry(BlockRegistry::default(), config)
    }

    /// Creates an empty network that resolves block types through the given
    /// registry.
    pub fn with_registry(registry: BlockRegistry, config: NetworkConfig) -> Self {
        Self {
            graph: StableDiGraph::default(),
            block_indices: BlockIndexMap::new(),
            connections: ConnectionTable::new(),
            registry,
            config,
        }
    }

    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    pub fn registry(&self) -> &BlockRegistry {
        &self.registry
    }

    /// Creates a block of the given registered type.
    ///
    /// Returns an error if the id is taken or the type is unknown.
    pub fn add_block(
        &mut self,
        id: u64,
        type_name: &str,
        name: impl Into<String>,
    ) -> Result<u64, Error> {
        let variant = self.registry.create(type_name)?;
        self.insert_block(Block::new(id, name, type_name, variant))
    }

    /// Creates a block around an already configured variant, which doesn't
    /// need to be registered.
    pub fn add_block_with_variant(
        &mut self,
        id: u64,
        name: impl Into<String>,
        variant: Box<dyn BlockVariant>,
    ) -> Result<u64, Error> {
        let type_name = variant.type_name();
        self.insert_block(Block::new(id, name, type_name, variant))
    }

    pub(super) fn insert_block(&mut self, block: Block) -> Result<u64, Error> {
        let id = block.id();
        if self.block_indices.contains_key(&id) {
            return Err(Error::invalid_graph(format!(
                "Duplicate block ID found: {id}"
            )));
        }
        let idx = self.graph.add_node(block);
        self.block_indices.insert(id, idx);
        Ok(id)
    }

    /// Removes a block from the network.
    ///
    /// The connections generated by the block are removed too, and every
    /// other connection is detached from it.
    pub fn remove_block(&mut self, id: u64) -> Result<Block, Error> {
        let idx = self.node_index(id)?;
        self.block_indices.remove(&id);
        let block = self.graph.remove_node(idx).ok_or_else(|| {
            Error::internal(format!("Block {id} missing from the graph."))
        })?;

        for index in block.connection_indices() {
            let generated = self
                .connections
                .find_connection_by_index(index)
                .is_some_and(|c| c.automatically_generated() && c.from_block() == Some(id));
            if generated {
                self.connections.remove(index);
                self.detach_everywhere(index);
                continue;
            }
            if let Some(connection) = self.connections.find_connection_by_index_mut(index) {
                if connection.from_block == Some(id) {
                    connection.from_block = None;
                }
                if connection.to_block == Some(id) {
                    connection.to_block = None;
                }
            }
        }

        self.rebuild_edges();
        Ok(block)
    }

    /// Registers a new user connection with the given index.
    ///
    /// Returns an error if the index is `0` or already taken.
    pub fn add_connection_with_index(
        &mut self,
        index: u64,
        name: impl Into<String>,
    ) -> Result<u64, Error> {
        self.connections
            .insert(Connection::new(index, None).with_name(name))
    }

    /// Creates and registers a new automatically generated connection leaving
    /// the given block.
    pub fn append_connection(&mut self, from_block: u64) -> Result<u64, Error> {
        let idx = self.node_index(from_block)?;
        let index = self.connections.append_connection(Some(from_block));
        let connection = self.connections.find_connection_by_index_mut(index);
        self.graph[idx].add_connection(connection, false, None)?;
        Ok(index)
    }

    pub fn set_exergy_value(&mut self, index: u64, exergy_value: f64) -> Result<(), Error> {
        self.connection_mut(index)?.exergy_value = exergy_value;
        Ok(())
    }

    pub fn set_fluid_stream(&mut self, index: u64, is_fluid_stream: bool) -> Result<(), Error> {
        self.connection_mut(index)?.is_fluid_stream = is_fluid_stream;
        Ok(())
    }

    /// Registers a connection as an input or output of a block.
    ///
    /// A `None` or unknown connection index is ignored.  With
    /// `append_to_support_block` set to `Some(0)`, the connection goes to the
    /// block's support block.  If another block held the same end of the
    /// connection, it loses it.
    pub fn add_connection(
        &mut self,
        block_id: u64,
        connection: Option<u64>,
        is_input: bool,
        append_to_support_block: Option<usize>,
    ) -> Result<(), Error> {
        let idx = self.node_index(block_id)?;
        let Some(index) = connection else {
            return Ok(());
        };

        let connection = self.connections.find_connection_by_index_mut(index);
        let displaced =
            self.graph[idx].add_connection(connection, is_input, append_to_support_block)?;
        self.apply_displaced(displaced);
        self.rebuild_edges();
        Ok(())
    }

    /// Removes a connection from the network and from every block using it.
    pub fn remove_connection(&mut self, index: u64) -> Result<Connection, Error> {
        let connection = self.connections.remove(index).ok_or_else(|| {
            Error::connection_not_found(format!("Connection with index {index} not found."))
        })?;
        self.detach_everywhere(index);
        self.rebuild_edges();
        Ok(connection)
    }

    pub(crate) fn node_index(&self, id: u64) -> Result<NodeIndex, Error> {
        self.block_indices
            .get(&id)
            .copied()
            .ok_or_else(|| Error::block_not_found(format!("Block with id {id} not found.")))
    }

    fn connection_mut(&mut self, index: u64) -> Result<&mut Connection, Error> {
        self.connections
            .find_connection_by_index_mut(index)
            .ok_or_else(|| {
                Error::connection_not_found(format!("Connection with index {index} not found."))
            })
    }

    pub(crate) fn apply_displaced(&mut self, displaced: impl IntoIterator<Item = Displaced>) {
        for Displaced { block, connection } in displaced {
            if let Some(idx) = self.block_indices.get(&block) {
                self.graph[*idx].remove_connection(connection);
            }
        }
    }

    fn detach_everywhere(&mut self, index: u64) {
        let nodes = self.graph.node_indices().collect::<Vec<_>>();
        for idx in nodes {
            self.graph[idx].remove_connection(index);
        }
    }

    /// Recreates the graph edges from the endpoints of all connections.
    pub(crate) fn rebuild_edges(&mut self) {
        self.graph.clear_edges();
        for connection in self.connections.iter() {
            let (Some(from), Some(to)) = (connection.from_block, connection.to_block) else {
                continue;
            };
            if from == to {
                continue;
            }
            if let (Some(a), Some(b)) = (self.block_indices.get(&from), self.block_indices.get(&to))
            {
                self.graph.update_edge(*a, *b, ());
            }
        }
    }
}

impl Default for Network {
    fn default() -> Self {
        Self::new(NetworkConfig::default())
    }
}
