// SPDX-License-Identifier: PMPL-1.0-or-later

//! Offline backend backed by the built-in lookup table.

use super::{TranslateError, Translator};
use crate::lookup;
use std::collections::HashMap;

/// Exact-match phrase lookup. A miss returns the text unchanged, so this
/// backend never fails.
#[derive(Debug, Clone, Default)]
pub struct LookupTable {
    extra: HashMap<String, HashMap<String, String>>,
}

impl LookupTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds profile-supplied entries that shadow the built-in ones.
    pub fn with_extra(extra: HashMap<String, HashMap<String, String>>) -> Self {
        Self { extra }
    }

    pub fn get(&self, target: &str, text: &str) -> Option<&str> {
        self.extra
            .get(target)
            .and_then(|entries| entries.get(text))
            .map(String::as_str)
            .or_else(|| lookup::lookup(target, text))
    }
}

impl Translator for LookupTable {
    fn name(&self) -> &str {
        "lookup"
    }

    fn translate(
        &self,
        text: &str,
        _source: &str,
        target: &str,
    ) -> Result<String, TranslateError> {
        Ok(self.get(target, text).unwrap_or(text).to_string())
    }
}
