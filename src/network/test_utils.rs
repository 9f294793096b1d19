// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module is only compiled when running unit tests and contains the
//! `NetworkBuilder`, which can declaratively build plant networks for use in
//! tests.

use crate::{EfficiencyConverter, Generic, Network, NetworkConfig};

/// Represents a block added to the `NetworkBuilder`.
#[derive(Eq, Hash, PartialEq, Copy, Clone, Debug)]
pub(crate) struct BlockHandle(u64);

impl BlockHandle {
    /// Returns the id of the block.
    pub(crate) fn id(&self) -> u64 {
        self.0
    }
}

/// A builder for creating plant networks easily, for use in tests.
///
/// Block ids and connection indices are handed out sequentially, starting
/// at 1.
pub(crate) struct NetworkBuilder {
    network: Network,
    next_block_id: u64,
    next_connection_index: u64,
}

impl NetworkBuilder {
    /// Creates a new `NetworkBuilder`.
    pub(crate) fn new() -> Self {
        Self::with_config(NetworkConfig::default())
    }

    pub(crate) fn with_config(config: NetworkConfig) -> Self {
        NetworkBuilder {
            network: Network::new(config),
            next_block_id: 1,
            next_connection_index: 1,
        }
    }

    /// Adds a block of the given registered type and returns its handle.
    pub(crate) fn block(&mut self, type_name: &str) -> BlockHandle {
        let id = self.next_block_id;
        self.next_block_id += 1;
        self.network
            .add_block(id, type_name, format!("{type_name} {id}"))
            .unwrap();
        BlockHandle(id)
    }

    /// Adds a generic block and returns its handle.
    pub(crate) fn generic(&mut self) -> BlockHandle {
        self.block(Generic::TYPE_NAME)
    }

    /// Adds an alternator with the given efficiency and returns its handle.
    pub(crate) fn alternator(&mut self, efficiency: f64) -> BlockHandle {
        self.converter(EfficiencyConverter::alternator().with_efficiency(efficiency))
    }

    /// Adds an electric motor with the given efficiency and returns its
    /// handle.
    pub(crate) fn electric_motor(&mut self, efficiency: f64) -> BlockHandle {
        self.converter(EfficiencyConverter::electric_motor().with_efficiency(efficiency))
    }

    fn converter(&mut self, converter: EfficiencyConverter) -> BlockHandle {
        let id = self.next_block_id;
        self.next_block_id += 1;
        self.network
            .add_block_with_variant(id, format!("converter {id}"), Box::new(converter))
            .unwrap();
        BlockHandle(id)
    }

    /// Adds a user connection carrying the given exergy and returns its
    /// index.
    pub(crate) fn stream(&mut self, exergy_value: f64) -> u64 {
        let index = self.next_connection_index;
        self.next_connection_index += 1;
        self.network
            .add_connection_with_index(index, format!("stream {index}"))
            .unwrap();
        self.network.set_exergy_value(index, exergy_value).unwrap();
        index
    }

    /// Registers `connection` as an input of `block`.
    pub(crate) fn input(&mut self, block: BlockHandle, connection: u64) -> &mut Self {
        self.connect(block, connection, true, None)
    }

    /// Registers `connection` as an output of `block`.
    pub(crate) fn output(&mut self, block: BlockHandle, connection: u64) -> &mut Self {
        self.connect(block, connection, false, None)
    }

    /// Registers `connection` as an input of the support block of `block`.
    pub(crate) fn support_input(&mut self, block: BlockHandle, connection: u64) -> &mut Self {
        self.connect(block, connection, true, Some(0))
    }

    /// Registers `connection` as an output of the support block of `block`.
    pub(crate) fn support_output(&mut self, block: BlockHandle, connection: u64) -> &mut Self {
        self.connect(block, connection, false, Some(0))
    }

    fn connect(
        &mut self,
        block: BlockHandle,
        connection: u64,
        is_input: bool,
        append_to_support_block: Option<usize>,
    ) -> &mut Self {
        self.network
            .add_connection(block.0, Some(connection), is_input, append_to_support_block)
            .unwrap();
        self
    }

    /// Returns the network built so far.
    pub(crate) fn build(self) -> Network {
        self.network
    }
}
