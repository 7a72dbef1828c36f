// SPDX-License-Identifier: PMPL-1.0-or-later

//! `check` subcommand: is this directory ready for a generate run?

use crate::config::{API_KEY_ENV, LIBRE_URL_ENV};
use crate::languages::REGISTRY;
use crate::lookup;
use crate::source::{self, SourceError};
use anyhow::{anyhow, Result};
use std::env;
use std::path::Path;

pub fn run_self_diagnostics(input: &Path, out_dir: &Path) -> Result<()> {
    println!("locale-forge self-diagnostics");

    let mut checks = Vec::new();
    checks.push(Diagnostic::ok(
        "version",
        format!("locale-forge {}", env!("CARGO_PKG_VERSION")),
    ));
    checks.push(check_source(input));
    checks.push(check_out_dir(out_dir));
    checks.push(Diagnostic::ok(
        "language registry",
        format!("{} target languages", REGISTRY.len()),
    ));
    checks.push(Diagnostic::ok(
        "lookup table",
        format!("built-in terms for {}", lookup::TABLE_LANGUAGES.join(", ")),
    ));
    checks.push(check_env("LibreTranslate URL", LIBRE_URL_ENV));
    checks.push(check_env("LibreTranslate key", API_KEY_ENV));

    println!();
    for entry in &checks {
        entry.print();
    }

    if checks
        .iter()
        .any(|entry| matches!(entry.level, Level::Error))
    {
        Err(anyhow!("self-diagnostics reported issues"))
    } else {
        Ok(())
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Level {
    Ok,
    Warn,
    Error,
}

struct Diagnostic {
    label: &'static str,
    level: Level,
    detail: String,
}

impl Diagnostic {
    fn new(label: &'static str, level: Level, detail: String) -> Self {
        Self {
            label,
            level,
            detail,
        }
    }

    fn ok(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Ok, detail)
    }

    fn warning(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Warn, detail)
    }

    fn error(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Error, detail)
    }

    fn print(&self) {
        println!("  [{}] {:20} {}", self.level.tag(), self.label, self.detail);
    }
}

impl Level {
    fn tag(&self) -> &'static str {
        match self {
            Level::Ok => "OK",
            Level::Warn => "WARN",
            Level::Error => "ERR",
        }
    }
}

fn check_source(path: &Path) -> Diagnostic {
    match source::load_source(path) {
        Ok(tree) => Diagnostic::ok(
            "source file",
            format!(
                "{} parsed ({} top-level keys)",
                path.display(),
                source::top_level_len(&tree)
            ),
        ),
        Err(err @ SourceError::Empty(_)) => Diagnostic::warning("source file", err.to_string()),
        Err(err) => Diagnostic::error("source file", err.to_string()),
    }
}

fn check_out_dir(path: &Path) -> Diagnostic {
    if path.is_dir() {
        let existing = REGISTRY
            .iter()
            .filter(|(code, _)| path.join(format!("{}.json", code)).exists())
            .count();
        Diagnostic::ok(
            "output directory",
            format!(
                "{} exists ({} of {} language files present)",
                path.display(),
                existing,
                REGISTRY.len()
            ),
        )
    } else if path.exists() {
        Diagnostic::error(
            "output directory",
            format!("{} exists but is not a directory", path.display()),
        )
    } else {
        Diagnostic::warning(
            "output directory",
            format!("{} missing (created on first run)", path.display()),
        )
    }
}

fn check_env(label: &'static str, env_key: &str) -> Diagnostic {
    match env::var(env_key) {
        Ok(value) if !value.trim().is_empty() => {
            Diagnostic::ok(label, format!("configured ({})", env_key))
        }
        _ => Diagnostic::warning(label, format!("not configured (set {} to override)", env_key)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn missing_source_is_an_error() {
        let dir = TempDir::new().expect("tempdir should create");
        let check = check_source(&dir.path().join("en.json"));
        assert_eq!(check.level, Level::Error);
    }

    #[test]
    fn empty_source_is_a_warning() {
        let dir = TempDir::new().expect("tempdir should create");
        let path = dir.path().join("en.json");
        fs::write(&path, "{}").expect("fixture should write");
        assert_eq!(check_source(&path).level, Level::Warn);
    }

    #[test]
    fn out_dir_counts_existing_files() {
        let dir = TempDir::new().expect("tempdir should create");
        fs::write(dir.path().join("fr.json"), "{}").expect("fixture should write");
        let check = check_out_dir(dir.path());
        assert_eq!(check.level, Level::Ok);
        assert!(check.detail.contains("1 of 25"));
    }

    #[test]
    fn diagnostics_fail_without_source() {
        let dir = TempDir::new().expect("tempdir should create");
        assert!(run_self_diagnostics(&dir.path().join("en.json"), dir.path()).is_err());
    }
}
