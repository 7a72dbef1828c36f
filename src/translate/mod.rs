// SPDX-License-Identifier: PMPL-1.0-or-later

//! Translation backends and the localization tree walker.
//!
//! A backend translates one string at a time through [`Translator`]. The
//! walker in [`tree`] decides which leaves reach the backend and absorbs
//! every backend failure, so a run always produces a complete tree.

mod error;
pub mod google;
pub mod libre;
pub mod table;
mod tree;

pub use error::TranslateError;
pub use tree::{should_skip, translate_tree, TreeStats, TreeTranslator};

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

/// Per-request timeout when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// A single-string translation strategy.
///
/// Implementations must be shareable across worker threads: parallel runs
/// hand the same instance to every language.
pub trait Translator: Send + Sync {
    /// Short name used in logs and reports.
    fn name(&self) -> &str;

    /// Translate `text` from `source` to `target` (registry codes, e.g. `iw`).
    fn translate(&self, text: &str, source: &str, target: &str)
        -> Result<String, TranslateError>;
}

/// Returns every string unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct Passthrough;

impl Translator for Passthrough {
    fn name(&self) -> &str {
        "passthrough"
    }

    fn translate(
        &self,
        text: &str,
        _source: &str,
        _target: &str,
    ) -> Result<String, TranslateError> {
        Ok(text.to_string())
    }
}

/// Selectable translation strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    Libre,
    Google,
    Lookup,
    Passthrough,
}

impl BackendKind {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "libre" | "libretranslate" | "1" => Some(BackendKind::Libre),
            "google" | "googletrans" | "2" => Some(BackendKind::Google),
            "lookup" | "table" | "simple" | "3" => Some(BackendKind::Lookup),
            "passthrough" | "none" | "identity" => Some(BackendKind::Passthrough),
            _ => None,
        }
    }

    /// Pause between languages in sequential runs, to stay under the free
    /// tier rate limits.
    pub fn default_delay(&self) -> Duration {
        match self {
            BackendKind::Libre => Duration::from_secs(1),
            BackendKind::Google => Duration::from_millis(500),
            BackendKind::Lookup | BackendKind::Passthrough => Duration::ZERO,
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, BackendKind::Libre | BackendKind::Google)
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BackendKind::Libre => "libretranslate",
            BackendKind::Google => "google",
            BackendKind::Lookup => "lookup",
            BackendKind::Passthrough => "passthrough",
        };
        f.write_str(name)
    }
}

/// Everything needed to construct any backend.
#[derive(Debug, Clone)]
pub struct BackendSettings {
    pub libre_url: String,
    pub api_key: Option<String>,
    pub timeout: Duration,
    /// Extra lookup entries per language, consulted before the built-in table.
    pub lookup: HashMap<String, HashMap<String, String>>,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            libre_url: libre::DEFAULT_URL.to_string(),
            api_key: None,
            timeout: DEFAULT_TIMEOUT,
            lookup: HashMap::new(),
        }
    }
}

/// Construct the backend for `kind`.
pub fn build_backend(
    kind: BackendKind,
    settings: &BackendSettings,
) -> Result<Box<dyn Translator>> {
    let backend: Box<dyn Translator> = match kind {
        BackendKind::Libre => Box::new(libre::LibreTranslate::new(
            &settings.libre_url,
            settings.api_key.clone(),
            settings.timeout,
        )?),
        BackendKind::Google => Box::new(google::GoogleTranslate::new(settings.timeout)?),
        BackendKind::Lookup => Box::new(table::LookupTable::with_extra(settings.lookup.clone())),
        BackendKind::Passthrough => Box::new(Passthrough),
    };
    Ok(backend)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_kind_parses_menu_answers() {
        assert_eq!(BackendKind::parse("1"), Some(BackendKind::Libre));
        assert_eq!(BackendKind::parse(" Google "), Some(BackendKind::Google));
        assert_eq!(BackendKind::parse("table"), Some(BackendKind::Lookup));
        assert_eq!(BackendKind::parse("deepl"), None);
    }

    #[test]
    fn only_remote_backends_wait_between_languages() {
        assert_eq!(BackendKind::Libre.default_delay(), Duration::from_secs(1));
        assert_eq!(BackendKind::Google.default_delay(), Duration::from_millis(500));
        assert_eq!(BackendKind::Lookup.default_delay(), Duration::ZERO);
        assert!(!BackendKind::Passthrough.is_remote());
    }

    #[test]
    fn build_backend_names_match_kind() {
        let settings = BackendSettings::default();
        for (kind, name) in [
            (BackendKind::Libre, "libretranslate"),
            (BackendKind::Google, "google"),
            (BackendKind::Lookup, "lookup"),
            (BackendKind::Passthrough, "passthrough"),
        ] {
            let backend = build_backend(kind, &settings).expect("backend should build");
            assert_eq!(backend.name(), name);
        }
    }
}
