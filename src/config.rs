// SPDX-License-Identifier: PMPL-1.0-or-later

//! Generator profiles: reusable run settings in JSON or YAML.
//!
//! Precedence, lowest first: built-in defaults, profile file, environment
//! (`LOCALE_FORGE_LIBRE_URL`, `LOCALE_FORGE_API_KEY`), command-line flags.
//! The CLI applies its own flags on top of [`GeneratorProfile::backend_settings`].

use crate::translate::{libre, BackendKind, BackendSettings, DEFAULT_TIMEOUT};
use crate::writer::OverwritePolicy;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use serde_json;
use serde_yaml;
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const LIBRE_URL_ENV: &str = "LOCALE_FORGE_LIBRE_URL";
pub const API_KEY_ENV: &str = "LOCALE_FORGE_API_KEY";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GeneratorProfile {
    #[serde(default)]
    pub input: Option<PathBuf>,
    #[serde(default)]
    pub out_dir: Option<PathBuf>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub backend: Option<BackendKind>,
    #[serde(default)]
    pub source_language: Option<String>,
    #[serde(default)]
    pub libretranslate_url: Option<String>,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    #[serde(default)]
    pub delay_ms: Option<u64>,
    #[serde(default)]
    pub parallel: Option<bool>,
    #[serde(default)]
    pub overwrite: Option<OverwritePolicy>,
    /// Extra lookup-table entries: language code → source phrase → translation.
    #[serde(default)]
    pub lookup: HashMap<String, HashMap<String, String>>,
}

impl GeneratorProfile {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading generator profile {}", path.display()))?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&content)
                .with_context(|| format!("parsing json generator profile {}", path.display())),
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
                .with_context(|| format!("parsing yaml generator profile {}", path.display())),
            _ => Err(anyhow!(
                "unsupported generator profile extension for {}",
                path.display()
            )),
        }
    }

    /// Load `path` if given, otherwise start from defaults.
    pub fn load_optional(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn source_language(&self) -> &str {
        self.source_language.as_deref().unwrap_or("en")
    }

    /// Backend construction settings with environment overrides applied.
    pub fn backend_settings(&self) -> BackendSettings {
        self.backend_settings_with(|key| env::var(key).ok())
    }

    fn backend_settings_with(
        &self,
        lookup_env: impl Fn(&str) -> Option<String>,
    ) -> BackendSettings {
        let non_empty = |value: Option<String>| value.filter(|v| !v.trim().is_empty());

        let libre_url = non_empty(lookup_env(LIBRE_URL_ENV))
            .or_else(|| self.libretranslate_url.clone())
            .unwrap_or_else(|| libre::DEFAULT_URL.to_string());
        let api_key = non_empty(lookup_env(API_KEY_ENV)).or_else(|| self.api_key.clone());
        let timeout = self
            .timeout_secs
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TIMEOUT);

        BackendSettings {
            libre_url,
            api_key,
            timeout,
            lookup: self.lookup.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn loads_yaml_profile() {
        let dir = TempDir::new().expect("tempdir should create");
        let path = dir.path().join("profile.yaml");
        fs::write(
            &path,
            concat!(
                "languages: [fr, de]\n",
                "backend: lookup\n",
                "overwrite: skip\n",
                "lookup:\n",
                "  fr:\n",
                "    Watchlist: Liste de suivi\n",
            ),
        )
        .expect("profile should write");

        let profile = GeneratorProfile::load(&path).expect("profile should load");
        assert_eq!(profile.languages, vec!["fr", "de"]);
        assert_eq!(profile.backend, Some(BackendKind::Lookup));
        assert_eq!(profile.overwrite, Some(OverwritePolicy::Skip));
        assert_eq!(profile.lookup["fr"]["Watchlist"], "Liste de suivi");
        assert_eq!(profile.source_language(), "en");
    }

    #[test]
    fn loads_json_profile() {
        let dir = TempDir::new().expect("tempdir should create");
        let path = dir.path().join("profile.json");
        fs::write(
            &path,
            r#"{
                "backend": "libre",
                "libretranslate_url": "http://localhost:5000",
                "timeout_secs": 3,
                "parallel": true
            }"#,
        )
        .expect("profile should write");

        let profile = GeneratorProfile::load(&path).expect("profile should load");
        assert_eq!(profile.parallel, Some(true));
        let settings = profile.backend_settings_with(|_| None);
        assert_eq!(settings.libre_url, "http://localhost:5000");
        assert_eq!(settings.timeout, Duration::from_secs(3));
    }

    #[test]
    fn rejects_unknown_extension() {
        let dir = TempDir::new().expect("tempdir should create");
        let path = dir.path().join("profile.toml");
        fs::write(&path, "backend = 'lookup'").expect("profile should write");
        assert!(GeneratorProfile::load(&path).is_err());
    }

    #[test]
    fn environment_overrides_profile() {
        let profile = GeneratorProfile {
            libretranslate_url: Some("http://profile:5000".to_string()),
            api_key: Some("profile-key".to_string()),
            ..Default::default()
        };
        let settings = profile.backend_settings_with(|key| match key {
            LIBRE_URL_ENV => Some("http://env:5000".to_string()),
            API_KEY_ENV => Some("   ".to_string()),
            _ => None,
        });
        assert_eq!(settings.libre_url, "http://env:5000");
        assert_eq!(settings.api_key.as_deref(), Some("profile-key"));
    }

    #[test]
    fn defaults_without_profile() {
        let profile = GeneratorProfile::load_optional(None).expect("defaults should load");
        let settings = profile.backend_settings_with(|_| None);
        assert_eq!(settings.libre_url, libre::DEFAULT_URL);
        assert_eq!(settings.timeout, DEFAULT_TIMEOUT);
        assert!(settings.api_key.is_none());
    }
}
