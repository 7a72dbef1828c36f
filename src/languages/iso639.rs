// SPDX-License-Identifier: PMPL-1.0-or-later

//! ISO 639-1 language code validation and naming.
//!
//! Reference: <https://www.loc.gov/standards/iso639-2/php/code_list.php>

/// Validates whether a string is a known ISO 639-1 two-letter language code.
///
/// The withdrawn codes `iw`, `in` and `ji` are accepted as well, since
/// existing localization trees are still named after them.
///
/// # Examples
/// ```
/// assert!(locale_forge::languages::is_valid_iso639_1("fr"));
/// assert!(locale_forge::languages::is_valid_iso639_1("iw"));
/// assert!(!locale_forge::languages::is_valid_iso639_1("xx"));
/// ```
pub fn is_valid_iso639_1(code: &str) -> bool {
    matches!(
        code,
        "aa" | "ab" | "af" | "ak" | "am" | "an" | "ar" | "as" | "av" | "ay" | "az"
            | "ba" | "be" | "bg" | "bh" | "bi" | "bm" | "bn" | "bo" | "br" | "bs"
            | "ca" | "ce" | "ch" | "co" | "cr" | "cs" | "cu" | "cv" | "cy"
            | "da" | "de" | "dv" | "dz"
            | "ee" | "el" | "en" | "eo" | "es" | "et" | "eu"
            | "fa" | "ff" | "fi" | "fj" | "fo" | "fr" | "fy"
            | "ga" | "gd" | "gl" | "gn" | "gu" | "gv"
            | "ha" | "he" | "hi" | "ho" | "hr" | "ht" | "hu" | "hy" | "hz"
            | "ia" | "id" | "ie" | "ig" | "ii" | "ik" | "io" | "is" | "it" | "iu"
            | "ja" | "jv"
            | "ka" | "kg" | "ki" | "kj" | "kk" | "kl" | "km" | "kn"
            | "ko" | "kr" | "ks" | "ku" | "kv" | "kw" | "ky"
            | "la" | "lb" | "lg" | "li" | "ln" | "lo" | "lt" | "lu" | "lv"
            | "mg" | "mh" | "mi" | "mk" | "ml" | "mn" | "mr" | "ms" | "mt" | "my"
            | "na" | "nb" | "nd" | "ne" | "ng" | "nl" | "nn" | "no" | "nr" | "nv" | "ny"
            | "oc" | "oj" | "om" | "or" | "os"
            | "pa" | "pi" | "pl" | "ps" | "pt"
            | "qu"
            | "rm" | "rn" | "ro" | "ru" | "rw"
            | "sa" | "sc" | "sd" | "se" | "sg" | "si" | "sk" | "sl" | "sm"
            | "sn" | "so" | "sq" | "sr" | "ss" | "st" | "su" | "sv" | "sw"
            | "ta" | "te" | "tg" | "th" | "ti" | "tk" | "tl"
            | "tn" | "to" | "tr" | "ts" | "tt" | "tw" | "ty"
            | "ug" | "uk" | "ur" | "uz"
            | "ve" | "vi" | "vo"
            | "wa" | "wo"
            | "xh"
            | "yi" | "yo"
            | "za" | "zh" | "zu"
            // withdrawn in 1989, still common in locale files
            | "iw" | "in" | "ji"
    )
}

/// Maps withdrawn ISO 639-1 codes to their current form.
///
/// Translation services reject `iw`; they want `he`. Anything that is not a
/// withdrawn code is returned unchanged.
pub fn canonical_code(code: &str) -> &str {
    match code {
        "iw" => "he",
        "in" => "id",
        "ji" => "yi",
        other => other,
    }
}

/// Returns the English name of an ISO 639-1 code.
///
/// Covers the registry languages plus a handful of common codes that may be
/// passed explicitly with `--langs`. Returns `None` for anything else.
pub fn language_name(code: &str) -> Option<&'static str> {
    match code {
        "en" => Some("English"),
        "fr" => Some("French"),
        "de" => Some("German"),
        "es" => Some("Spanish"),
        "it" => Some("Italian"),
        "pt" => Some("Portuguese"),
        "nl" => Some("Dutch"),
        "sv" => Some("Swedish"),
        "da" => Some("Danish"),
        "fi" => Some("Finnish"),
        "no" | "nb" => Some("Norwegian"),
        "pl" => Some("Polish"),
        "cs" => Some("Czech"),
        "sk" => Some("Slovak"),
        "lt" => Some("Lithuanian"),
        "ru" => Some("Russian"),
        "tr" => Some("Turkish"),
        "ja" => Some("Japanese"),
        "ko" => Some("Korean"),
        "zh" => Some("Chinese"),
        "el" => Some("Greek"),
        "ka" => Some("Georgian"),
        "iw" | "he" => Some("Hebrew"),
        "ms" => Some("Malay"),
        "id" | "in" => Some("Indonesian"),
        "ro" => Some("Romanian"),
        "ar" => Some("Arabic"),
        "hi" => Some("Hindi"),
        "vi" => Some("Vietnamese"),
        "th" => Some("Thai"),
        "uk" => Some("Ukrainian"),
        "hu" => Some("Hungarian"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_codes_accepted() {
        assert!(is_valid_iso639_1("en"));
        assert!(is_valid_iso639_1("ka"));
        assert!(is_valid_iso639_1("iw"));
        assert!(is_valid_iso639_1("zh"));
    }

    #[test]
    fn invalid_codes_rejected() {
        assert!(!is_valid_iso639_1("xx"));
        assert!(!is_valid_iso639_1(""));
        assert!(!is_valid_iso639_1("eng"));
        assert!(!is_valid_iso639_1("FR"));
    }

    #[test]
    fn withdrawn_codes_canonicalise() {
        assert_eq!(canonical_code("iw"), "he");
        assert_eq!(canonical_code("in"), "id");
        assert_eq!(canonical_code("fr"), "fr");
    }

    #[test]
    fn language_names_resolve() {
        assert_eq!(language_name("ka"), Some("Georgian"));
        assert_eq!(language_name("iw"), Some("Hebrew"));
        assert_eq!(language_name("xx"), None);
    }
}
