// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Aho-Corasick keyword automaton.
//!
//! Keywords live in a trie stored in a [`NodeArena`]. Failure links are
//! arena indices computed by [`Automaton::rebuild_failure_links`]; insertion
//! and deletion invalidate them. Under [`RebuildPolicy::Eager`] every
//! mutating call rebuilds them before returning; under
//! [`RebuildPolicy::Deferred`] the caller does.

pub mod arena;
mod links;
pub mod node;

use std::collections::BTreeSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

pub use arena::NodeArena;
pub use node::{Node, NodeId, ROOT};

/// When failure links are recomputed after a mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RebuildPolicy {
    /// Rebuild after every insert, delete and snapshot restore.
    Eager,
    /// Leave links stale until `rebuild_failure_links` is called.
    Deferred,
}

/// Multi-keyword search automaton.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Automaton {
    arena: NodeArena,
    policy: RebuildPolicy,
    keywords: usize,
    stale: bool,
}

impl Automaton {
    /// Creates an empty automaton (root only).
    pub fn new(policy: RebuildPolicy) -> Self {
        Self {
            arena: NodeArena::new(),
            policy,
            keywords: 0,
            stale: false,
        }
    }

    pub fn policy(&self) -> RebuildPolicy {
        self.policy
    }

    /// True when a mutation happened since the last rebuild.
    pub fn needs_rebuild(&self) -> bool {
        self.stale
    }

    /// Number of stored keywords.
    pub fn len(&self) -> usize {
        self.keywords
    }

    pub fn is_empty(&self) -> bool {
        self.keywords == 0
    }

    /// Read access to a node. `None` for ids the arena never handed out.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.arena.get(id)
    }

    pub(crate) fn arena(&self) -> &NodeArena {
        &self.arena
    }

    /// Inserts keywords. Empty keywords are ignored.
    pub fn insert<I, S>(&mut self, keywords: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for keyword in keywords {
            self.insert_keyword(keyword.as_ref());
        }
        self.after_mutation();
    }

    fn insert_keyword(&mut self, keyword: &str) {
        if keyword.is_empty() {
            tracing::debug!("ignoring empty keyword on insert");
            return;
        }

        let mut current = ROOT;
        for ch in keyword.chars() {
            current = match self.arena[current].child(ch) {
                Some(next) => next,
                None => {
                    let next = self.arena.alloc();
                    self.arena[current].children.insert(ch, next);
                    next
                }
            };
        }

        let node = &mut self.arena[current];
        if node.keyword.is_none() {
            node.keyword = Some(Arc::from(keyword));
            self.keywords += 1;
        }
        self.stale = true;
    }

    /// Deletes keywords. Absent keywords are ignored.
    pub fn delete<I, S>(&mut self, keywords: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for keyword in keywords {
            self.delete_keyword(keyword.as_ref());
        }
        self.after_mutation();
    }

    fn delete_keyword(&mut self, keyword: &str) {
        if keyword.is_empty() {
            tracing::debug!("ignoring empty keyword on delete");
            return;
        }

        // (parent, edge) for every step of the walk
        let mut path: Vec<(NodeId, char)> = Vec::with_capacity(keyword.len());
        let mut current = ROOT;
        for ch in keyword.chars() {
            let Some(next) = self.arena[current].child(ch) else {
                return;
            };
            path.push((current, ch));
            current = next;
        }

        let node = &mut self.arena[current];
        if node.keyword.take().is_none() {
            return;
        }
        node.output.clear();
        self.keywords -= 1;
        self.stale = true;

        if node.has_children() {
            return;
        }

        // Prune the dead suffix. An edge goes only when it is its parent's
        // sole child and does not end a keyword; a detached child is always
        // childless by then.
        while let Some((parent, ch)) = path.pop() {
            let parent_node = &self.arena[parent];
            let Some(child) = parent_node.child(ch) else {
                break;
            };
            if parent_node.children.len() != 1 || self.arena[child].is_terminal() {
                break;
            }
            self.arena[parent].children.remove(&ch);
            self.arena.release(child);
        }
    }

    /// Recomputes every failure link and effective output from scratch.
    pub fn rebuild_failure_links(&mut self) {
        let visited = links::build(&mut self.arena);
        self.stale = false;
        tracing::debug!(nodes = visited, "rebuilt failure links");
    }

    fn after_mutation(&mut self) {
        if self.stale && self.policy == RebuildPolicy::Eager {
            self.rebuild_failure_links();
        }
    }

    /// Exact lookup of a single keyword. Does not use failure links.
    pub fn search_keyword(&self, keyword: &str) -> bool {
        keyword
            .chars()
            .try_fold(ROOT, |id, ch| self.arena[id].child(ch))
            .is_some_and(|id| self.arena[id].is_terminal())
    }

    /// Returns every stored keyword that occurs somewhere in `text`.
    ///
    /// Requires failure links built since the last mutation; on a stale
    /// automaton matches may be missed.
    pub fn search_in_sentence(&self, text: &str) -> BTreeSet<String> {
        if self.stale {
            tracing::warn!("scanning with stale failure links; results may be incomplete");
        }

        let mut found = BTreeSet::new();
        let mut current = ROOT;
        for ch in text.chars() {
            while current != ROOT && self.arena[current].child(ch).is_none() {
                current = self.arena[current].fail.unwrap_or(ROOT);
            }
            current = self.arena[current].child(ch).unwrap_or(ROOT);

            for keyword in self.arena[current].output() {
                if !found.contains(keyword) {
                    found.insert(keyword.to_string());
                }
            }
        }
        found
    }

    /// Nodes reachable from the root, root included.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![ROOT];
        while let Some(id) = stack.pop() {
            count += 1;
            stack.extend(self.arena[id].children.values().copied());
        }
        count
    }

    /// Every stored keyword, in trie order.
    pub fn all_keywords(&self) -> Vec<String> {
        let mut keywords = Vec::with_capacity(self.keywords);
        let mut stack = vec![ROOT];
        while let Some(id) = stack.pop() {
            let node = &self.arena[id];
            if let Some(keyword) = node.keyword() {
                keywords.push(keyword.to_string());
            }
            // Reverse so the smallest edge is visited first.
            stack.extend(node.children.values().rev().copied());
        }
        keywords
    }

    /// Assembles an automaton from a prepared arena (snapshot restore).
    pub(crate) fn from_parts(arena: NodeArena, keywords: usize, policy: RebuildPolicy) -> Self {
        let mut automaton = Self {
            arena,
            policy,
            keywords,
            stale: true,
        };
        automaton.after_mutation();
        automaton
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
