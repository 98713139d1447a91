// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Trie vertex.

use std::collections::BTreeMap;
use std::sync::Arc;

/// Index of a node inside a [`NodeArena`](super::arena::NodeArena).
pub type NodeId = usize;

/// The root always occupies the first arena slot.
pub const ROOT: NodeId = 0;

/// A single trie vertex.
///
/// Children and the failure link are arena indices, so the failure link
/// never owns its target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Node {
    /// Outgoing edges keyed by character.
    pub(crate) children: BTreeMap<char, NodeId>,
    /// Keyword ending exactly at this node (local output).
    pub(crate) keyword: Option<Arc<str>>,
    /// Effective output: the local keyword followed by everything inherited
    /// through the failure link. Only valid right after a rebuild.
    pub(crate) output: Vec<Arc<str>>,
    /// Failure link. Absent for the root and for unlinked nodes.
    pub(crate) fail: Option<NodeId>,
}

impl Node {
    /// True if some keyword ends at this node.
    pub fn is_terminal(&self) -> bool {
        self.keyword.is_some()
    }

    /// The keyword ending at this node, if any.
    pub fn keyword(&self) -> Option<&str> {
        self.keyword.as_deref()
    }

    /// Child reached by `ch`.
    pub fn child(&self, ch: char) -> Option<NodeId> {
        self.children.get(&ch).copied()
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn fail(&self) -> Option<NodeId> {
        self.fail
    }

    /// Keywords recognized when a scan lands on this node.
    pub fn output(&self) -> impl Iterator<Item = &str> {
        self.output.iter().map(|k| &**k)
    }

    /// Reset to the local output only, dropping inherited keywords.
    pub(crate) fn reset_output(&mut self) {
        self.output.clear();
        if let Some(keyword) = &self.keyword {
            self.output.push(Arc::clone(keyword));
        }
    }
}
