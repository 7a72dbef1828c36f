// SPDX-License-Identifier: PMPL-1.0-or-later

use thiserror::Error;

/// Why a single string could not be translated.
///
/// None of these abort a run: the tree walker logs them and keeps the
/// source text for that leaf.
#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("{service} returned HTTP {status}")]
    Status { service: &'static str, status: u16 },

    #[error("unexpected response from {service}: {detail}")]
    Malformed {
        service: &'static str,
        detail: String,
    },
}

impl TranslateError {
    pub(crate) fn malformed(service: &'static str, detail: impl Into<String>) -> Self {
        TranslateError::Malformed {
            service,
            detail: detail.into(),
        }
    }
}
