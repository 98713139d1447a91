// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Failure-link construction.

use std::collections::VecDeque;
use std::sync::Arc;

use super::arena::NodeArena;
use super::node::{NodeId, ROOT};

/// Recomputes failure links and effective outputs breadth-first.
///
/// A node's link and output are final before any of its children are
/// visited, so each child can extend its failure target's output.
/// Returns the number of nodes visited.
pub(super) fn build(arena: &mut NodeArena) -> usize {
    let mut queue = VecDeque::new();
    let mut visited = 1;

    arena[ROOT].fail = None;
    arena[ROOT].output.clear();

    let first_level: Vec<NodeId> = arena[ROOT].children.values().copied().collect();
    for child in first_level {
        arena[child].fail = Some(ROOT);
        arena[child].reset_output();
        queue.push_back(child);
    }

    while let Some(current) = queue.pop_front() {
        visited += 1;
        let edges: Vec<(char, NodeId)> = arena[current]
            .children
            .iter()
            .map(|(&ch, &child)| (ch, child))
            .collect();

        for (ch, child) in edges {
            let mut failure = arena[current].fail;
            while let Some(id) = failure {
                if arena[id].child(ch).is_some() {
                    break;
                }
                failure = arena[id].fail;
            }
            let target = failure.and_then(|id| arena[id].child(ch)).unwrap_or(ROOT);

            let inherited: Vec<Arc<str>> = arena[target].output.clone();
            let node = &mut arena[child];
            node.fail = Some(target);
            node.reset_output();
            node.output.extend(inherited);

            queue.push_back(child);
        }
    }

    visited
}

#[cfg(test)]
#[path = "links_tests.rs"]
mod tests;
