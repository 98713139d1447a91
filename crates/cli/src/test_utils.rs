//! Shared unit test utilities.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::collections::BTreeSet;

/// Keywords sharing prefixes and suffixes across multi-byte characters.
pub const KOREAN_KEYWORDS: &[&str] = &[
    "비비고",
    "비에고",
    "비에삼",
    "비비삼",
    "비비고라니",
    "비비고병특",
    "비비고병역특례",
];

/// Builds an owned set for comparing scan results.
pub fn set(keywords: &[&str]) -> BTreeSet<String> {
    keywords.iter().map(|k| k.to_string()).collect()
}
