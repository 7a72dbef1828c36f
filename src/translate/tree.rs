// SPDX-License-Identifier: PMPL-1.0-or-later

//! Recursive walk over a localization tree.

use super::Translator;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// Leaf counters for one translated tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeStats {
    /// String leaves seen.
    pub strings: usize,
    /// Backend returned a different string.
    pub translated: usize,
    /// Backend returned the input unchanged (e.g. lookup miss).
    pub unchanged: usize,
    /// Left alone by the skip heuristic.
    pub skipped: usize,
    /// Backend failed; source text kept.
    pub failed: usize,
}

impl TreeStats {
    pub fn merge(&mut self, other: &TreeStats) {
        self.strings += other.strings;
        self.translated += other.translated;
        self.unchanged += other.unchanged;
        self.skipped += other.skipped;
        self.failed += other.failed;
    }
}

/// Whether a string looks like an identifier rather than prose.
///
/// True for fewer than three characters, for text with at least one cased
/// character and no lowercase ones (`"API"`, `"HTTP 404"`), and for anything
/// containing an underscore.
///
/// ```
/// use locale_forge::translate::should_skip;
/// assert!(should_skip("OK"));
/// assert!(should_skip("API_KEY"));
/// assert!(should_skip("SAVE ALL"));
/// assert!(!should_skip("Save all"));
/// ```
pub fn should_skip(text: &str) -> bool {
    text.chars().count() < 3 || is_all_uppercase(text) || text.contains('_')
}

fn is_all_uppercase(text: &str) -> bool {
    let mut cased = false;
    for c in text.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            cased = true;
        }
    }
    cased
}

/// Translates every eligible string leaf of a tree into one language.
pub struct TreeTranslator<'a> {
    backend: &'a dyn Translator,
    source: &'a str,
    target: &'a str,
}

impl<'a> TreeTranslator<'a> {
    pub fn new(backend: &'a dyn Translator, source: &'a str, target: &'a str) -> Self {
        Self {
            backend,
            source,
            target,
        }
    }

    /// Returns a new tree of the same shape plus counters. The input is
    /// never modified and no error escapes.
    pub fn translate(&self, tree: &Value) -> (Value, TreeStats) {
        let mut stats = TreeStats::default();
        let translated = self.walk(tree, "root", &mut stats);
        (translated, stats)
    }

    fn walk(&self, node: &Value, path: &str, stats: &mut TreeStats) -> Value {
        match node {
            Value::Object(map) => {
                let mut out = Map::with_capacity(map.len());
                for (key, value) in map {
                    let child = format!("{}.{}", path, key);
                    out.insert(key.clone(), self.walk(value, &child, stats));
                }
                Value::Object(out)
            }
            Value::Array(items) => Value::Array(
                items
                    .iter()
                    .enumerate()
                    .map(|(i, item)| self.walk(item, &format!("{}[{}]", path, i), stats))
                    .collect(),
            ),
            Value::String(text) => Value::String(self.leaf(text, path, stats)),
            other => other.clone(),
        }
    }

    fn leaf(&self, text: &str, path: &str, stats: &mut TreeStats) -> String {
        stats.strings += 1;
        if should_skip(text) {
            stats.skipped += 1;
            return text.to_string();
        }

        debug!(path, lang = self.target, backend = self.backend.name(), "translating");
        match self.backend.translate(text, self.source, self.target) {
            Ok(translated) => {
                if translated == text {
                    stats.unchanged += 1;
                } else {
                    stats.translated += 1;
                }
                translated
            }
            Err(err) => {
                stats.failed += 1;
                warn!(
                    path,
                    lang = self.target,
                    error = %err,
                    "translation failed, keeping source text"
                );
                text.to_string()
            }
        }
    }
}

/// Shorthand for [`TreeTranslator::translate`].
pub fn translate_tree(
    tree: &Value,
    source: &str,
    target: &str,
    backend: &dyn Translator,
) -> (Value, TreeStats) {
    TreeTranslator::new(backend, source, target).translate(tree)
}
