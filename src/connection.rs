// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Connections carry an exergy value between two blocks, and the
//! [`ConnectionTable`] keeps every connection of a network addressable by its
//! index.

use std::collections::{btree_map, BTreeMap};

use crate::Error;

/// A directed exergy stream between two blocks.
///
/// A connection is identified by its `index`, which is unique within a
/// network.  Index `0` is reserved and never refers to a valid connection.
#[derive(Clone, Debug)]
pub struct Connection {
    pub(crate) index: u64,
    pub(crate) name: String,
    pub(crate) exergy_value: f64,
    pub(crate) is_useful_effect: bool,
    pub(crate) is_fluid_stream: bool,
    pub(crate) automatically_generated: bool,
    pub(crate) from_block: Option<u64>,
    pub(crate) to_block: Option<u64>,
}

impl Connection {
    /// Creates a new user connection with the given index, leaving
    /// `from_block`.
    pub fn new(index: u64, from_block: Option<u64>) -> Self {
        Self {
            index,
            name: String::new(),
            exergy_value: 0.0,
            is_useful_effect: false,
            is_fluid_stream: false,
            automatically_generated: false,
            from_block,
            to_block: None,
        }
    }

    /// Sets the name of the connection.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the exergy value carried by the connection.
    pub fn with_exergy_value(mut self, exergy_value: f64) -> Self {
        self.exergy_value = exergy_value;
        self
    }

    /// Marks the connection as a fluid stream.
    pub fn with_fluid_stream(mut self, is_fluid_stream: bool) -> Self {
        self.is_fluid_stream = is_fluid_stream;
        self
    }

    pub fn index(&self) -> u64 {
        self.index
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn exergy_value(&self) -> f64 {
        self.exergy_value
    }

    pub fn is_useful_effect(&self) -> bool {
        self.is_useful_effect
    }

    pub fn is_fluid_stream(&self) -> bool {
        self.is_fluid_stream
    }

    /// Returns true if the connection was created internally to represent the
    /// net output of a block.  Such connections are never exported.
    pub fn automatically_generated(&self) -> bool {
        self.automatically_generated
    }

    /// Returns the id of the block this connection leaves, if any.
    pub fn from_block(&self) -> Option<u64> {
        self.from_block
    }

    /// Returns the id of the block this connection enters, if any.
    pub fn to_block(&self) -> Option<u64> {
        self.to_block
    }
}

impl PartialEq for Connection {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

/// The connection-index table of a network.
///
/// All connections of a network live here.  Blocks only hold the indices of
/// their connections and look them up through the table.
#[derive(Debug, Default)]
pub struct ConnectionTable {
    connections: BTreeMap<u64, Connection>,
}

impl ConnectionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates and registers a new automatically generated connection leaving
    /// `from_block`, and returns its index.
    pub fn append_connection(&mut self, from_block: Option<u64>) -> u64 {
        let index = self.next_index();
        let mut connection = Connection::new(index, from_block);
        connection.automatically_generated = true;
        self.connections.insert(index, connection);
        index
    }

    /// Registers the given connection.
    ///
    /// Returns an error if the index is `0` or already taken.
    pub fn insert(&mut self, connection: Connection) -> Result<u64, Error> {
        let index = connection.index;
        if index == 0 {
            return Err(Error::invalid_connection(
                "Connection index 0 is reserved.",
            ));
        }
        if self.connections.contains_key(&index) {
            return Err(Error::invalid_connection(format!(
                "Duplicate connection index found: {index}"
            )));
        }
        self.connections.insert(index, connection);
        Ok(index)
    }

    /// Returns the connection with the given index, or `None` if there is no
    /// such connection.
    pub fn find_connection_by_index(&self, index: u64) -> Option<&Connection> {
        self.connections.get(&index)
    }

    /// Mutable counterpart of
    /// [`find_connection_by_index`][Self::find_connection_by_index].
    pub fn find_connection_by_index_mut(&mut self, index: u64) -> Option<&mut Connection> {
        self.connections.get_mut(&index)
    }

    /// Removes the connection with the given index and returns it.
    pub fn remove(&mut self, index: u64) -> Option<Connection> {
        self.connections.remove(&index)
    }

    /// Returns the exergy value of the connection with the given index, or
    /// `0.0` if it doesn't exist.
    pub(crate) fn exergy_value(&self, index: u64) -> f64 {
        self.connections
            .get(&index)
            .map(|c| c.exergy_value)
            .unwrap_or_default()
    }

    /// Sums the exergy values of the given connections.
    pub(crate) fn sum_exergy<'a>(&self, indices: impl IntoIterator<Item = &'a u64>) -> f64 {
        indices.into_iter().map(|i| self.exergy_value(*i)).sum()
    }

    /// Returns true if the connection exists and was automatically generated.
    pub(crate) fn is_automatically_generated(&self, index: u64) -> bool {
        self.connections
            .get(&index)
            .is_some_and(|c| c.automatically_generated)
    }

    /// Returns an iterator over all connections, in ascending index order.
    pub fn iter(&self) -> btree_map::Values<'_, u64, Connection> {
        self.connections.values()
    }

    pub fn len(&self) -> usize {
        self.connections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }

    fn next_index(&self) -> u64 {
        self.connections
            .last_key_value()
            .map(|(index, _)| index + 1)
            .unwrap_or(1)
    }
}
