// SPDX-License-Identifier: PMPL-1.0-or-later

//! LibreTranslate backend (`POST /translate`, form encoded).

use super::{TranslateError, Translator};
use crate::languages::canonical_code;
use anyhow::{Context, Result};
use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration;

/// Public instance that needs no API key.
pub const DEFAULT_URL: &str = "https://libretranslate.de";

const SERVICE: &str = "LibreTranslate";

pub struct LibreTranslate {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LibreResponse {
    #[serde(rename = "translatedText")]
    translated_text: Option<String>,
}

impl LibreTranslate {
    /// `base_url` may be the server root or the full `/translate` URL.
    pub fn new(base_url: &str, api_key: Option<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("building LibreTranslate HTTP client")?;
        Ok(Self {
            client,
            endpoint: endpoint_for(base_url),
            api_key: api_key.filter(|key| !key.trim().is_empty()),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn form<'a>(
        &'a self,
        text: &'a str,
        source: &'a str,
        target: &'a str,
    ) -> Vec<(&'static str, &'a str)> {
        let mut form = vec![
            ("q", text),
            ("source", canonical_code(source)),
            ("target", canonical_code(target)),
            ("format", "text"),
        ];
        if let Some(key) = &self.api_key {
            form.push(("api_key", key.as_str()));
        }
        form
    }
}

impl Translator for LibreTranslate {
    fn name(&self) -> &str {
        "libretranslate"
    }

    fn translate(&self, text: &str, source: &str, target: &str) -> Result<String, TranslateError> {
        let response = self
            .client
            .post(&self.endpoint)
            .form(&self.form(text, source, target))
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(TranslateError::Status {
                service: SERVICE,
                status: status.as_u16(),
            });
        }

        let body = response.text()?;
        parse_response(&body)
    }
}

fn endpoint_for(base_url: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    if base.ends_with("/translate") {
        base.to_string()
    } else {
        format!("{}/translate", base)
    }
}

fn parse_response(body: &str) -> Result<String, TranslateError> {
    let parsed: LibreResponse = serde_json::from_str(body)
        .map_err(|err| TranslateError::malformed(SERVICE, err.to_string()))?;
    parsed
        .translated_text
        .ok_or_else(|| TranslateError::malformed(SERVICE, "missing translatedText"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_appends_translate_path_once() {
        assert_eq!(
            endpoint_for("https://libretranslate.de"),
            "https://libretranslate.de/translate"
        );
        assert_eq!(endpoint_for("http://localhost:5000/"), "http://localhost:5000/translate");
        assert_eq!(
            endpoint_for("http://localhost:5000/translate"),
            "http://localhost:5000/translate"
        );
    }

    #[test]
    fn form_uses_current_codes_and_optional_key() {
        let timeout = Duration::from_secs(1);
        let backend = LibreTranslate::new(DEFAULT_URL, Some("secret".to_string()), timeout)
            .expect("client should build");
        let form = backend.form("Hello there", "en", "iw");
        assert!(form.contains(&("target", "he")));
        assert!(form.contains(&("format", "text")));
        assert!(form.contains(&("api_key", "secret")));

        let keyless = LibreTranslate::new(DEFAULT_URL, Some("  ".to_string()), timeout)
            .expect("client should build");
        assert!(keyless.form("Hello there", "en", "fr").iter().all(|(k, _)| *k != "api_key"));
    }

    #[test]
    fn parses_translated_text() {
        let text = parse_response(r#"{"translatedText": "Bonjour à tous"}"#)
            .expect("should parse");
        assert_eq!(text, "Bonjour à tous");
    }

    #[test]
    fn missing_field_is_malformed() {
        let err = parse_response(r#"{"error": "Too many requests"}"#).unwrap_err();
        assert!(matches!(err, TranslateError::Malformed { .. }));
        assert!(parse_response("<html>").is_err());
    }

    #[test]
    fn unreachable_server_is_request_error() {
        let backend = LibreTranslate::new("http://127.0.0.1:1", None, Duration::from_secs(2))
            .expect("client should build");
        let err = backend.translate("Hello there", "en", "fr").unwrap_err();
        assert!(matches!(err, TranslateError::Request(_)));
    }
}
