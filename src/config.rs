// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module contains the configuration options for the `Network`.

/// Configuration options for the `Network`.
#[derive(Clone, Default, Debug)]
pub struct NetworkConfig {
    /// Whether to keep every block during the product/fuel definition pass.
    /// When this is `true`, no block is reported as removable, regardless of
    /// what its variant declares.
    pub pin_blocks_in_pf_definition: bool,

    /// Whether connection indices that can't be resolved during XML or table
    /// import should fail the import.  When this is `false`, such entries are
    /// skipped with a warning.
    pub reject_unresolved_connections: bool,
}
