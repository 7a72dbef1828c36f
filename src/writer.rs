// SPDX-License-Identifier: PMPL-1.0-or-later

//! Writing translated trees to `<code>.json`.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// What to do when `<code>.json` already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverwritePolicy {
    Always,
    Skip,
    Prompt,
}

impl OverwritePolicy {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "always" | "overwrite" | "force" => Some(OverwritePolicy::Always),
            "skip" | "never" | "keep" => Some(OverwritePolicy::Skip),
            "prompt" | "ask" => Some(OverwritePolicy::Prompt),
            _ => None,
        }
    }
}

/// Asks whether an existing file may be replaced.
pub trait Confirm {
    fn confirm_overwrite(&mut self, path: &Path) -> bool;
}

/// Interactive confirmation on stdin/stdout. Only `y` (any case) overwrites.
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm_overwrite(&mut self, path: &Path) -> bool {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        print!("{} already exists. Overwrite? (y/n): ", name);
        if io::stdout().flush().is_err() {
            return false;
        }
        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(_) => is_yes(&answer),
            Err(_) => false,
        }
    }
}

fn is_yes(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

/// Path the tree for `code` will be written to.
pub fn output_path(dir: &Path, code: &str) -> PathBuf {
    dir.join(format!("{}.json", code))
}

/// Whether a language should be (re)generated under the given policy.
pub fn should_write(path: &Path, policy: OverwritePolicy, confirm: &mut dyn Confirm) -> bool {
    if !path.exists() {
        return true;
    }
    match policy {
        OverwritePolicy::Always => true,
        OverwritePolicy::Skip => false,
        OverwritePolicy::Prompt => confirm.confirm_overwrite(path),
    }
}

/// Serialise a tree with two-space indentation and unescaped Unicode.
pub fn render(tree: &Value) -> Result<String> {
    serde_json::to_string_pretty(tree).context("serializing translated tree")
}

/// Write `<dir>/<code>.json`, creating `dir` if needed.
pub fn write_translation(dir: &Path, code: &str, tree: &Value) -> Result<PathBuf> {
    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    let path = output_path(dir, code);
    let content = render(tree)?;
    fs::write(&path, content).with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}
