// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Index-addressed node storage.
//!
//! Slots are never shrunk away, so a stale [`NodeId`] always indexes a
//! valid (possibly recycled) node. Released slots go to a free list and are
//! handed out again by [`NodeArena::alloc`].

use std::ops::{Index, IndexMut};

use super::node::{Node, NodeId, ROOT};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeArena {
    nodes: Vec<Node>,
    free: Vec<NodeId>,
}

impl NodeArena {
    /// Creates an arena holding only the root.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::default()],
            free: Vec::new(),
        }
    }

    /// Allocates an empty node, reusing a released slot when one exists.
    pub fn alloc(&mut self) -> NodeId {
        match self.free.pop() {
            Some(id) => id,
            None => {
                self.nodes.push(Node::default());
                self.nodes.len() - 1
            }
        }
    }

    /// Clears a node and returns its slot to the free list.
    ///
    /// The root is never released.
    pub fn release(&mut self, id: NodeId) {
        if id == ROOT {
            return;
        }
        self.nodes[id] = Node::default();
        self.free.push(id);
    }

    /// The node in slot `id`, or `None` past the end of the arena.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Number of slots in use (allocated and not released).
    pub fn live(&self) -> usize {
        self.nodes.len() - self.free.len()
    }

    /// Total slots, including released ones.
    pub fn capacity(&self) -> usize {
        self.nodes.len()
    }
}

impl Default for NodeArena {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<NodeId> for NodeArena {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }
}

impl IndexMut<NodeId> for NodeArena {
    fn index_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id]
    }
}

#[cfg(test)]
#[path = "arena_tests.rs"]
mod tests;
