// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Methods for computing exergy balances over a [`Network`].

use petgraph::algo::toposort;

use crate::{Error, Network, ZoneType};

/// Balance calculation and block capabilities.
impl Network {
    /// Returns true if the block with the given `id` has the inputs it needs
    /// for its balance to be computed.
    pub fn is_ready_for_calculation(&self, id: u64) -> Result<bool, Error> {
        Ok(self.block(id)?.is_ready_for_calculation())
    }

    /// Returns the current exergy balance of the block with the given `id`.
    pub fn exergy_balance(&self, id: u64) -> Result<f64, Error> {
        Ok(self.block(id)?.exergy_balance(&self.connections))
    }

    /// Prepares the block with the given `id` for calculation, and returns
    /// the index of the useful-effect connection carrying its net output.
    ///
    /// Returns an error if the block isn't ready, or was already prepared.
    pub fn prepare_for_calculation(&mut self, id: u64) -> Result<u64, Error> {
        let idx = self.node_index(id)?;
        self.graph[idx].prepare_for_calculation(&mut self.connections)
    }

    /// Prepares every ready block that hasn't been prepared yet, walking the
    /// network in topological order, and returns how many were prepared.
    ///
    /// Returns an error if the network contains a cycle.
    pub fn calculate(&mut self) -> Result<usize, Error> {
        let order = toposort(&self.graph, None).map_err(|cycle| {
            let id = self
                .graph
                .node_weight(cycle.node_id())
                .map(|b| b.id().to_string())
                .unwrap_or_default();
            Error::invalid_graph(format!("Cycle detected at block {id}."))
        })?;

        let mut prepared = 0;
        for idx in order {
            let block = &mut self.graph[idx];
            if block.is_calculated() {
                continue;
            }
            if !block.is_ready_for_calculation() {
                tracing::debug!(
                    "Skipping {}:{}, it has no inputs.",
                    block.type_name(),
                    block.id()
                );
                continue;
            }
            block.prepare_for_calculation(&mut self.connections)?;
            prepared += 1;
        }

        Ok(prepared)
    }

    /// Returns whether the block with the given `id` may be removed during
    /// the product/fuel definition pass.
    pub fn can_be_removed_in_pf_definition(&self, id: u64) -> Result<bool, Error> {
        Ok(self.block(id)?.can_be_removed_in_pf_definition(&self.config))
    }

    /// Returns the ids of the blocks that may be removed during the
    /// product/fuel definition pass, in ascending order.
    pub fn removable_blocks(&self) -> Vec<u64> {
        let mut ids = self
            .blocks()
            .filter(|b| b.can_be_removed_in_pf_definition(&self.config))
            .map(|b| b.id())
            .collect::<Vec<_>>();
        ids.sort_unstable();
        ids
    }

    /// Returns the other connections of the block with the given `id` that
    /// share a zone of the given type with `input_connection`.
    pub fn return_other_zone_connections(
        &self,
        id: u64,
        zone_type: ZoneType,
        input_connection: u64,
    ) -> Result<Vec<u64>, Error> {
        Ok(self
            .block(id)?
            .return_other_zone_connections(zone_type, input_connection))
    }
}
