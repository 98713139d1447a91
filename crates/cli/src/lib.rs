//! Aho-Corasick keyword search.
//!
//! An [`Automaton`] stores keywords in a trie with failure links, answers
//! exact keyword lookups, and reports every stored keyword occurring in a
//! text in a single left-to-right pass. Keywords can be inserted and deleted
//! incrementally; the trie round-trips through a JSON snapshot.
//!
//! ```
//! use tynisearch::{Automaton, RebuildPolicy};
//!
//! let mut automaton = Automaton::new(RebuildPolicy::Eager);
//! automaton.insert(["he", "she", "his", "hers"]);
//!
//! let found = automaton.search_in_sentence("ushers");
//! assert_eq!(found.into_iter().collect::<Vec<_>>(), ["he", "hers", "she"]);
//! ```

pub mod automaton;
pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod input;
pub mod snapshot;

pub use automaton::{Automaton, RebuildPolicy};
pub use cli::{Cli, Command, OutputFormat};
pub use error::{Error, ExitCode, Result};
pub use snapshot::SnapshotNode;

#[cfg(test)]
pub mod test_utils;
