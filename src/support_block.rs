// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! The internal auxiliary node a block uses to keep one family of its
//! connections apart from the others.

use crate::connection::{Connection, ConnectionTable};

/// An auxiliary node owned by a single block.
///
/// Connections registered on the support block don't show up on the block's
/// own connection lists.  Once prepared, the support block feeds its net
/// exergy into the block through `connection_with_main`.
#[derive(Clone, Debug, PartialEq)]
pub struct SupportBlock {
    owner: u64,
    input_connections: Vec<u64>,
    output_connections: Vec<u64>,
    external_input_connections: Vec<u64>,
    external_output_connections: Vec<u64>,
    connection_with_main: Option<u64>,
}

impl SupportBlock {
    /// Creates an empty support block serving the block with id `owner`.
    pub(crate) fn new(owner: u64) -> Self {
        Self {
            owner,
            input_connections: Vec::new(),
            output_connections: Vec::new(),
            external_input_connections: Vec::new(),
            external_output_connections: Vec::new(),
            connection_with_main: None,
        }
    }

    /// Returns the id of the block this support block belongs to.
    pub fn owner(&self) -> u64 {
        self.owner
    }

    pub fn input_connections(&self) -> &[u64] {
        &self.input_connections
    }

    pub fn output_connections(&self) -> &[u64] {
        &self.output_connections
    }

    /// Inputs that were not automatically generated.
    pub fn external_input_connections(&self) -> &[u64] {
        &self.external_input_connections
    }

    /// Outputs that were not automatically generated.
    pub fn external_output_connections(&self) -> &[u64] {
        &self.external_output_connections
    }

    /// The connection carrying this support block's net exergy into its
    /// block, once it has been prepared.
    pub fn connection_with_main(&self) -> Option<u64> {
        self.connection_with_main
    }

    /// Registers a connection as an input or output.
    ///
    /// Adding a connection that is already registered is a no-op.
    pub(crate) fn add_connection(&mut self, connection: &Connection, is_input: bool) {
        let index = connection.index;
        if self.contains(index) {
            tracing::trace!(
                "Connection {} already registered on the support block of {}.",
                index,
                self.owner
            );
            return;
        }

        let (all, external) = if is_input {
            (
                &mut self.input_connections,
                &mut self.external_input_connections,
            )
        } else {
            (
                &mut self.output_connections,
                &mut self.external_output_connections,
            )
        };
        all.push(index);
        if !connection.automatically_generated {
            external.push(index);
        }
    }

    /// Drops the given connection from every list.
    pub(crate) fn remove_connection(&mut self, index: u64) {
        for list in [
            &mut self.input_connections,
            &mut self.output_connections,
            &mut self.external_input_connections,
            &mut self.external_output_connections,
        ] {
            list.retain(|i| *i != index);
        }
        if self.connection_with_main == Some(index) {
            self.connection_with_main = None;
        }
    }

    pub(crate) fn contains(&self, index: u64) -> bool {
        self.input_connections.contains(&index) || self.output_connections.contains(&index)
    }

    /// Sum of the input exergy minus the sum of the output exergy.
    pub fn exergy_balance(&self, table: &ConnectionTable) -> f64 {
        table.sum_exergy(&self.input_connections) - table.sum_exergy(&self.output_connections)
    }

    /// Creates or refreshes the link to the owning block.
    ///
    /// Does nothing while there are no inputs.  Otherwise makes sure
    /// `connection_with_main` exists and carries the current balance, and
    /// returns its index.
    pub(crate) fn prepare_for_calculation(&mut self, table: &mut ConnectionTable) -> Option<u64> {
        if self.input_connections.is_empty() {
            return None;
        }

        let balance = self.exergy_balance(table);
        let index = match self
            .connection_with_main
            .filter(|i| table.find_connection_by_index(*i).is_some())
        {
            Some(index) => index,
            None => {
                let index = table.append_connection(Some(self.owner));
                if let Some(link) = table.find_connection_by_index_mut(index) {
                    link.to_block = Some(self.owner);
                }
                self.connection_with_main = Some(index);
                index
            }
        };

        if let Some(link) = table.find_connection_by_index_mut(index) {
            link.exergy_value = balance;
        }
        Some(index)
    }
}
