// SPDX-License-Identifier: PMPL-1.0-or-later

//! Google Translate through the keyless `translate_a/single` web endpoint.
//!
//! The response is a nested array; `body[0]` holds one segment per sentence
//! and the translated text is the first element of each segment.

use super::{TranslateError, Translator};
use crate::languages::canonical_code;
use anyhow::{Context, Result};
use reqwest::blocking::Client;
use serde_json::Value;
use std::time::Duration;

pub const ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";

const SERVICE: &str = "Google Translate";

pub struct GoogleTranslate {
    client: Client,
    endpoint: String,
}

impl GoogleTranslate {
    pub fn new(timeout: Duration) -> Result<Self> {
        Self::with_endpoint(ENDPOINT, timeout)
    }

    pub fn with_endpoint(endpoint: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("building Google Translate HTTP client")?;
        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
        })
    }
}

impl Translator for GoogleTranslate {
    fn name(&self) -> &str {
        "google"
    }

    fn translate(&self, text: &str, source: &str, target: &str) -> Result<String, TranslateError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("client", "gtx"),
                ("sl", google_code(source)),
                ("tl", google_code(target)),
                ("dt", "t"),
                ("q", text),
            ])
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

/// Google wants `zh-CN` for Simplified Chinese and `he` for Hebrew.
fn google_code(code: &str) -> &str {
    match canonical_code(code) {
        "zh" => "zh-CN",
        other => other,
    }
}

fn parse_response(body: &str) -> Result<String, TranslateError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|err| TranslateError::malformed(SERVICE, err.to_string()))?;
    let segments = value
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| TranslateError::malformed(SERVICE, "no sentence segments"))?;

    let translated: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect();

    if translated.is_empty() {
        return Err(TranslateError::malformed(SERVICE, "empty translation"));
    }
    Ok(translated)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_and_chinese_codes_mapped() {
        assert_eq!(google_code("iw"), "he");
        assert_eq!(google_code("zh"), "zh-CN");
        assert_eq!(google_code("ka"), "ka");
    }

    #[test]
    fn joins_sentence_segments() {
        let body = concat!(
            r#"[[["Bonjour. ","Hello. ",null,null,1],"#,
            r#"["Au revoir.","Goodbye.",null,null,1]],null,"en"]"#
        );
        assert_eq!(parse_response(body).expect("should parse"), "Bonjour. Au revoir.");
    }

    #[test]
    fn rejects_unexpected_shapes() {
        assert!(parse_response(r#"{"error": 1}"#).is_err());
        assert!(parse_response(r#"[[]]"#).is_err());
        assert!(parse_response("not json").is_err());
    }

    #[test]
    fn unreachable_endpoint_is_request_error() {
        let backend = GoogleTranslate::with_endpoint(
            "http://127.0.0.1:1/translate_a/single",
            Duration::from_secs(2),
        )
        .expect("client should build");
        let err = backend.translate("Good morning", "en", "de").unwrap_err();
        assert!(matches!(err, TranslateError::Request(_)));
    }
}
