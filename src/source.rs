// SPDX-License-Identifier: PMPL-1.0-or-later

//! Loading the source-language localization tree.

use serde_json::Value;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default source file, relative to the working directory.
pub const DEFAULT_SOURCE: &str = "en.json";

/// Source problems abort the whole run.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("{} not found", .0.display())]
    NotFound(PathBuf),

    #[error("reading {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("parsing {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{} contains no translatable entries", .0.display())]
    Empty(PathBuf),
}

/// Read and parse the source tree.
///
/// An empty object or array, or a bare scalar root (`null`, `""`, `0`,
/// `false`), counts as [`SourceError::Empty`]: there are no keyed entries to
/// generate files from.
pub fn load_source(path: &Path) -> Result<Value, SourceError> {
    let content = fs::read_to_string(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => SourceError::NotFound(path.to_path_buf()),
        _ => SourceError::Read {
            path: path.to_path_buf(),
            source: err,
        },
    })?;

    let tree: Value = serde_json::from_str(&content).map_err(|err| SourceError::Parse {
        path: path.to_path_buf(),
        source: err,
    })?;

    if is_empty_tree(&tree) {
        return Err(SourceError::Empty(path.to_path_buf()));
    }
    Ok(tree)
}

/// Number of top-level entries (keys for an object, items for an array).
pub fn top_level_len(tree: &Value) -> usize {
    match tree {
        Value::Object(map) => map.len(),
        Value::Array(items) => items.len(),
        Value::Null => 0,
        _ => 1,
    }
}

fn is_empty_tree(tree: &Value) -> bool {
    match tree {
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => true,
    }
}
