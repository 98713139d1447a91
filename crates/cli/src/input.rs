// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Reading keyword lists and scan text from files or stdin.

use std::io::Read;
use std::path::Path;

use crate::error::{Error, Result};

/// Splits a newline-separated keyword list.
///
/// Line endings are stripped; other whitespace is part of the keyword.
/// Blank lines are skipped.
pub fn parse_keyword_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Reads keywords from `path`, or stdin when no path is given.
pub fn read_keywords(path: Option<&Path>) -> Result<Vec<String>> {
    let content = match path {
        Some(path) => std::fs::read_to_string(path).map_err(|e| Error::Io {
            path: path.to_path_buf(),
            source: e,
        })?,
        None => read_stdin()?,
    };
    Ok(parse_keyword_lines(&content))
}

/// Returns the text argument, or all of stdin when none was given.
pub fn text_or_stdin(text: Option<&str>) -> Result<String> {
    match text {
        Some(text) => Ok(text.to_string()),
        None => read_stdin(),
    }
}

fn read_stdin() -> Result<String> {
    let mut content = String::new();
    std::io::stdin()
        .read_to_string(&mut content)
        .map_err(|e| Error::Io {
            path: "<stdin>".into(),
            source: e,
        })?;
    Ok(content)
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
