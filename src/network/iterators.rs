// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Iterators over blocks and connections in a `Network`.

use std::collections::btree_map;

use petgraph::stable_graph::{NodeIndices, StableDiGraph};

use crate::{Block, Connection};

/// An iterator over the blocks in a `Network`.
pub struct Blocks<'a> {
    pub(crate) graph: &'a StableDiGraph<Block, ()>,
    pub(crate) iter: NodeIndices<'a, Block>,
}

impl<'a> Iterator for Blocks<'a> {
    type Item = &'a Block;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|i| &self.graph[i])
    }
}

/// An iterator over the user-facing connections in a `Network`, skipping
/// the automatically generated ones.
pub struct Connections<'a> {
    pub(crate) iter: btree_map::Values<'a, u64, Connection>,
}

impl<'a> Iterator for Connections<'a> {
    type Item = &'a Connection;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.by_ref().find(|c| !c.automatically_generated())
    }
}

/// An iterator over the neighbors of a block in a `Network`.
pub struct Neighbors<'a> {
    pub(crate) graph: &'a StableDiGraph<Block, ()>,
    pub(crate) iter: petgraph::stable_graph::Neighbors<'a, ()>,
}

impl<'a> Iterator for Neighbors<'a> {
    type Item = &'a Block;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|i| &self.graph[i])
    }
}
