// SPDX-License-Identifier: PMPL-1.0-or-later

//! Properties of the localization tree walker

use locale_forge::translate::table::LookupTable;
use locale_forge::translate::{translate_tree, Passthrough, TranslateError, Translator};
use locale_forge::writer;
use serde_json::{json, Value};

/// Appends the target code, so every translated leaf is recognisable.
struct Tagging;

impl Translator for Tagging {
    fn name(&self) -> &str {
        "tagging"
    }

    fn translate(
        &self,
        text: &str,
        _source: &str,
        target: &str,
    ) -> Result<String, TranslateError> {
        Ok(format!("{} [{}]", text, target))
    }
}

struct AlwaysFails;

impl Translator for AlwaysFails {
    fn name(&self) -> &str {
        "always-fails"
    }

    fn translate(
        &self,
        _text: &str,
        _source: &str,
        _target: &str,
    ) -> Result<String, TranslateError> {
        Err(TranslateError::Status {
            service: "test",
            status: 429,
        })
    }
}

fn fixture() -> Value {
    json!({
        "navigation": {
            "dashboard": "Dashboard",
            "settings": "Settings",
            "menu": ["Home", "Reports", {"label": "Sign out of your account"}]
        },
        "limits": {"max_urls": 500, "ratio": 0.25, "enabled": false, "note": null},
        "codes": ["API_KEY", "SEO", "OK", "ID"],
        "empty": {},
        "nothing": []
    })
}

fn assert_same_shape(a: &Value, b: &Value) {
    match (a, b) {
        (Value::Object(x), Value::Object(y)) => {
            let xk: Vec<&String> = x.keys().collect();
            let yk: Vec<&String> = y.keys().collect();
            assert_eq!(xk, yk, "object keys differ");
            for (key, value) in x {
                assert_same_shape(value, &y[key]);
            }
        }
        (Value::Array(x), Value::Array(y)) => {
            assert_eq!(x.len(), y.len(), "array lengths differ");
            for (left, right) in x.iter().zip(y) {
                assert_same_shape(left, right);
            }
        }
        (Value::String(_), Value::String(_)) => {}
        (left, right) => assert_eq!(left, right, "non-string leaves must be copied"),
    }
}

#[test]
fn test_output_has_same_shape_as_input() {
    let input = fixture();
    let (output, _) = translate_tree(&input, "en", "fr", &Tagging);
    assert_same_shape(&input, &output);
}

#[test]
fn test_non_string_leaves_copied_exactly() {
    let input = fixture();
    let (output, _) = translate_tree(&input, "en", "de", &Tagging);
    assert_eq!(output["limits"], input["limits"]);
    assert_eq!(output["empty"], json!({}));
    assert_eq!(output["nothing"], json!([]));
}

#[test]
fn test_identifier_like_strings_untouched() {
    let input = fixture();
    let (output, stats) = translate_tree(&input, "en", "es", &Tagging);
    assert_eq!(output["codes"], input["codes"]);
    assert_eq!(stats.skipped, 4);
    assert_eq!(output["navigation"]["menu"][1], "Reports [es]");
    assert_eq!(
        output["navigation"]["menu"][2]["label"],
        "Sign out of your account [es]"
    );
}

#[test]
fn test_failing_backend_keeps_every_string() {
    let input = fixture();
    let (output, stats) = translate_tree(&input, "en", "ja", &AlwaysFails);
    assert_eq!(output, input);
    assert_eq!(stats.failed, 5);
    assert_eq!(stats.translated, 0);
    assert_eq!(stats.strings, stats.failed + stats.skipped);
}

#[test]
fn test_identity_backend_round_trips() {
    let input = fixture();
    let (output, stats) = translate_tree(&input, "en", "it", &Passthrough);
    assert_eq!(output, input);
    assert_eq!(
        serde_json::to_string(&output).expect("serialize"),
        serde_json::to_string(&input).expect("serialize")
    );
    assert_eq!(stats.failed, 0);
}

#[test]
fn test_lookup_example_from_dashboard_catalog() {
    let input = json!({"Dashboard": "Dashboard", "code": "API_KEY"});
    let (output, _) = translate_tree(&input, "en", "fr", &LookupTable::new());
    assert_eq!(
        output,
        json!({"Dashboard": "Tableau de bord", "code": "API_KEY"})
    );
}

#[test]
fn test_lookup_misses_and_unknown_languages_keep_text() {
    let input = fixture();
    let table = LookupTable::new();

    let (german, stats) = translate_tree(&input, "en", "de", &table);
    assert_eq!(german["navigation"]["settings"], "Einstellungen");
    assert_eq!(german["navigation"]["menu"][0], "Startseite");
    assert_eq!(german["navigation"]["menu"][2]["label"], "Sign out of your account");
    assert!(stats.unchanged >= 1);

    let (georgian, _) = translate_tree(&input, "en", "ka", &table);
    assert_eq!(georgian, input);
}

#[test]
fn test_input_tree_is_not_modified() {
    let input = fixture();
    let before = input.clone();
    let _ = translate_tree(&input, "en", "pt", &Tagging);
    assert_eq!(input, before);
}

#[test]
fn test_integers_beyond_u64_written_back_exactly() {
    let input: Value = serde_json::from_str(
        r#"{"max_id": 123456789012345678901234567890, "title": "Largest known identifier"}"#,
    )
    .expect("fixture should parse");

    let (output, _) = translate_tree(&input, "en", "fr", &Passthrough);
    let rendered = writer::render(&output).expect("should render");

    assert!(
        rendered.contains("\"max_id\": 123456789012345678901234567890"),
        "digits lost: {}",
        rendered
    );
    assert!(!rendered.contains("e+29"));
}
