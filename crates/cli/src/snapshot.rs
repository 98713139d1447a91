// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON snapshots of the keyword trie.
//!
//! A snapshot mirrors the trie: every node carries `isLastWord`, its
//! `children` keyed by the decimal code of the edge character, its local
//! `output`, and a `fail` field that is always null. Failure links are never
//! stored; they are rebuilt on restore according to the rebuild policy.
//!
//! Tries can be as deep as their longest keyword. Serde recursion goes
//! through `serde_stacker`, which grows the stack on the heap, and the
//! trie walks in this module and the `SnapshotNode` drop use explicit stacks.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::automaton::{Automaton, NodeArena, NodeId, ROOT, RebuildPolicy};
use crate::error::{Error, Result};

/// One node of a snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotNode {
    #[serde(default)]
    pub is_last_word: bool,
    #[serde(default)]
    pub children: BTreeMap<String, SnapshotNode>,
    #[serde(default)]
    pub output: Vec<String>,
    /// Always null. Typed as `Option<()>` so a non-null link is rejected.
    #[serde(default)]
    pub fail: Option<()>,
}

impl Drop for SnapshotNode {
    fn drop(&mut self) {
        let mut pending: Vec<SnapshotNode> =
            std::mem::take(&mut self.children).into_values().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(std::mem::take(&mut node.children).into_values());
        }
    }
}

impl Automaton {
    /// Captures topology and local outputs.
    pub fn to_snapshot(&self) -> SnapshotNode {
        // Breadth-first order puts every parent before its children, so
        // walking it backwards finishes each subtree before its parent.
        let mut order: Vec<(NodeId, Option<(usize, char)>)> = vec![(ROOT, None)];
        let mut i = 0;
        while i < order.len() {
            let (id, _) = order[i];
            for (&ch, &child) in &self.arena()[id].children {
                order.push((child, Some((i, ch))));
            }
            i += 1;
        }

        let mut built: Vec<SnapshotNode> = order
            .iter()
            .map(|&(id, _)| {
                let node = &self.arena()[id];
                SnapshotNode {
                    is_last_word: node.is_terminal(),
                    children: BTreeMap::new(),
                    output: node.keyword().map(str::to_string).into_iter().collect(),
                    fail: None,
                }
            })
            .collect();

        for pos in (1..order.len()).rev() {
            if let (_, Some((parent, ch))) = order[pos] {
                let subtree = std::mem::take(&mut built[pos]);
                built[parent].children.insert(char_key(ch), subtree);
            }
        }

        built.swap_remove(0)
    }

    /// Serializes to a JSON snapshot string.
    pub fn to_json(&self) -> Result<String> {
        let snapshot = self.to_snapshot();
        let mut ser = serde_json::Serializer::new(Vec::new());
        snapshot
            .serialize(serde_stacker::Serializer::new(&mut ser))
            .map_err(|e| malformed(e.to_string()))?;
        String::from_utf8(ser.into_inner()).map_err(|e| malformed(e.to_string()))
    }

    /// Restores an automaton from a snapshot.
    ///
    /// Fails without producing an automaton if any node is malformed.
    pub fn from_snapshot(mut snapshot: SnapshotNode, policy: RebuildPolicy) -> Result<Self> {
        if snapshot.is_last_word {
            return Err(malformed("root node cannot be terminal"));
        }

        let mut arena = NodeArena::new();
        let mut keywords = 0;
        // Depth-first, so `path` only ever changes at its tail.
        let mut path: Vec<char> = Vec::new();
        let mut stack: Vec<Pending> = Vec::new();
        push_children(&mut arena, &mut stack, &mut snapshot, ROOT, 0)?;

        while let Some(Pending {
            mut node,
            id,
            depth,
            ch,
        }) = stack.pop()
        {
            path.truncate(depth);
            path.push(ch);

            if node.is_last_word {
                if !node.output.iter().any(|k| k.chars().eq(path.iter().copied())) {
                    let label: String = path.iter().collect();
                    return Err(malformed(format!(
                        "terminal node {label:?} does not list its keyword in output"
                    )));
                }
                arena[id].keyword = Some(Arc::from(path.iter().collect::<String>()));
                keywords += 1;
            }
            push_children(&mut arena, &mut stack, &mut node, id, path.len())?;
        }

        Ok(Automaton::from_parts(arena, keywords, policy))
    }

    /// Parses a JSON snapshot string and restores it.
    pub fn from_json(json: &str, policy: RebuildPolicy) -> Result<Self> {
        let mut de = serde_json::Deserializer::from_str(json);
        // Each trie level nests two JSON objects; keywords may be long.
        de.disable_recursion_limit();
        let snapshot = SnapshotNode::deserialize(serde_stacker::Deserializer::new(&mut de))
            .map_err(|e| malformed(e.to_string()))?;
        de.end().map_err(|e| malformed(e.to_string()))?;
        Self::from_snapshot(snapshot, policy)
    }
}

/// A snapshot node waiting to be restored into arena slot `id`.
struct Pending {
    node: SnapshotNode,
    id: NodeId,
    /// Depth of the parent, i.e. the length of the parent's label.
    depth: usize,
    ch: char,
}

/// Moves a snapshot node's children onto the work stack, allocating their
/// arena slots and edges.
fn push_children(
    arena: &mut NodeArena,
    stack: &mut Vec<Pending>,
    node: &mut SnapshotNode,
    id: NodeId,
    depth: usize,
) -> Result<()> {
    for (key, child) in std::mem::take(&mut node.children) {
        let ch = parse_char_key(&key)?;
        let child_id = arena.alloc();
        arena[id].children.insert(ch, child_id);
        stack.push(Pending {
            node: child,
            id: child_id,
            depth,
            ch,
        });
    }
    Ok(())
}

fn char_key(ch: char) -> String {
    u32::from(ch).to_string()
}

/// Accepts only the canonical decimal form, so every character has exactly
/// one key and map keys can never collide.
fn parse_char_key(key: &str) -> Result<char> {
    key.parse::<u32>()
        .ok()
        .and_then(char::from_u32)
        .filter(|&ch| char_key(ch) == key)
        .ok_or_else(|| malformed(format!("invalid character code {key:?}")))
}

fn malformed(message: impl Into<String>) -> Error {
    Error::Snapshot {
        message: message.into(),
    }
}

/// Reads and restores a snapshot file.
pub fn read_file(path: &Path, policy: RebuildPolicy) -> Result<Automaton> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    tracing::debug!("restoring snapshot from {}", path.display());
    Automaton::from_json(&content, policy)
}

/// Writes a snapshot file, replacing any existing one.
pub fn write_file(path: &Path, automaton: &Automaton) -> Result<()> {
    let json = automaton.to_json()?;
    std::fs::write(path, json).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
#[path = "snapshot_tests.rs"]
mod tests;
