//! Behavioral specs for configuration handling.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

/// > an unsupported config version is a config error (exit code 2)
#[test]
fn unsupported_version_fails() {
    let temp = Project::empty();
    temp.config("version = 2\n");
    temp.file("keywords.txt", "he\n");

    tyni(&["build", "keywords.txt", "-o", "trie.json"])
        .pwd(temp.path())
        .exits(2)
        .stderr_has("unsupported config version 2");
}

/// > unknown config keys warn but do not fail
#[test]
fn unknown_key_warns() {
    let temp = Project::empty();
    temp.config("[automaton]\nrebuild = \"eager\"\ncase_fold = true\n");
    temp.file("keywords.txt", "he\n");

    tyni(&["build", "keywords.txt", "-o", "trie.json"])
        .pwd(temp.path())
        .passes()
        .stderr_has("unrecognized field `automaton.case_fold`");
}

/// > an explicit --config that does not exist is a config error
#[test]
fn missing_explicit_config_fails() {
    let temp = Project::empty();
    temp.file("keywords.txt", "he\n");

    tyni(&["-C", "absent.toml", "build", "keywords.txt", "-o", "trie.json"])
        .pwd(temp.path())
        .exits(2)
        .stderr_has("config file not found");
}

/// > TYNISEARCH_CONFIG selects the config file
#[test]
fn config_from_env() {
    let temp = Project::empty();
    temp.file("custom.toml", "version = 7\n");
    temp.file("keywords.txt", "he\n");

    tyni(&["build", "keywords.txt", "-o", "trie.json"])
        .pwd(temp.path())
        .env("TYNISEARCH_CONFIG", "custom.toml")
        .exits(2);
}

/// > --rebuild overrides the configured policy
#[test]
fn rebuild_flag_overrides_config() {
    let temp = Project::empty();
    temp.config("[automaton]\nrebuild = \"lazy\"\n");
    temp.file("keywords.txt", "he\n");

    // The invalid config is never read when the flag is given.
    tyni(&["--rebuild", "deferred", "build", "keywords.txt", "-o", "trie.json"])
        .pwd(temp.path())
        .passes();
}

// =============================================================================
// LOGGING
// =============================================================================

/// > TYNISEARCH_LOG enables diagnostics on stderr
#[test]
fn log_filter_from_env() {
    let temp = Project::empty();
    temp.file("keywords.txt", "he\nshe\n");

    tyni(&["build", "keywords.txt", "-o", "trie.json"])
        .pwd(temp.path())
        .env("TYNISEARCH_LOG", "debug")
        .passes()
        .stderr_has("rebuilt failure links");
}

/// > logging is off by default
#[test]
fn logging_off_by_default() {
    let temp = Project::empty();
    temp.file("keywords.txt", "he\n");

    let run = tyni(&["build", "keywords.txt", "-o", "trie.json"])
        .pwd(temp.path())
        .passes();
    assert!(!run.stderr().contains("rebuilt failure links"));
}
