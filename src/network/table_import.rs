// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Importing block connections from tabular rows.

use crate::{Error, Network, TableCell};

impl Network {
    /// Configures the block with the given `id` from a table row.
    ///
    /// The block's variant consumes its parameters from the leading cells.
    /// The remaining cells are signed connection indices: positive values are
    /// outputs, and everything else is an input.  Indices that don't resolve
    /// are skipped, unless
    /// [`reject_unresolved_connections`][crate::NetworkConfig::reject_unresolved_connections]
    /// is set.
    pub fn append_excel_connection_list(
        &mut self,
        block_id: u64,
        cells: &[TableCell],
    ) -> Result<(), Error> {
        let idx = self.node_index(block_id)?;
        let strict = self.config.reject_unresolved_connections;
        let displaced =
            self.graph[idx].append_excel_connection_list(cells, &mut self.connections, strict)?;
        self.apply_displaced(displaced);
        self.rebuild_edges();
        Ok(())
    }
}
