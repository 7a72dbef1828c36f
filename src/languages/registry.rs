// SPDX-License-Identifier: PMPL-1.0-or-later

//! The ordered set of languages a full run generates.

use super::iso639::{is_valid_iso639_1, language_name};
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Language code → display name, in generation order.
pub const REGISTRY: &[(&str, &str)] = &[
    ("fr", "French"),
    ("de", "German"),
    ("es", "Spanish"),
    ("it", "Italian"),
    ("pt", "Portuguese"),
    ("nl", "Dutch"),
    ("sv", "Swedish"),
    ("da", "Danish"),
    ("fi", "Finnish"),
    ("no", "Norwegian"),
    ("pl", "Polish"),
    ("cs", "Czech"),
    ("sk", "Slovak"),
    ("lt", "Lithuanian"),
    ("ru", "Russian"),
    ("tr", "Turkish"),
    ("ja", "Japanese"),
    ("ko", "Korean"),
    ("zh", "Chinese"),
    ("el", "Greek"),
    ("ka", "Georgian"),
    ("iw", "Hebrew"),
    ("ms", "Malay"),
    ("id", "Indonesian"),
    ("ro", "Romanian"),
];

/// A language to generate a file for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TargetLanguage {
    /// Code as written in the output file name (`iw`, not `he`).
    pub code: String,
    pub name: String,
}

impl TargetLanguage {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }

    /// Output file name for this language.
    pub fn file_name(&self) -> String {
        format!("{}.json", self.code)
    }
}

impl fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.code, self.name)
    }
}

/// Turns an explicit list of codes into target languages.
///
/// An empty list selects the whole registry. Codes are trimmed and
/// lowercased, duplicates are dropped keeping the first occurrence, and any
/// code that is not ISO 639-1 is rejected.
pub fn resolve_targets(codes: &[String]) -> Result<Vec<TargetLanguage>> {
    if codes.is_empty() {
        return Ok(REGISTRY
            .iter()
            .map(|(code, name)| TargetLanguage::new(*code, *name))
            .collect());
    }

    let mut targets: Vec<TargetLanguage> = Vec::with_capacity(codes.len());
    for raw in codes {
        let code = raw.trim().to_ascii_lowercase();
        if code.is_empty() {
            continue;
        }
        if !is_valid_iso639_1(&code) {
            bail!("unknown language code '{}'", raw.trim());
        }
        if targets.iter().any(|t| t.code == code) {
            continue;
        }
        let name = language_name(&code).unwrap_or(code.as_str()).to_string();
        targets.push(TargetLanguage::new(code, name));
    }

    if targets.is_empty() {
        bail!("no target languages selected");
    }
    Ok(targets)
}
