// SPDX-License-Identifier: PMPL-1.0-or-later

//! locale-forge: per-language copies of a JSON localization catalog.
//!
//! Loads a source-language tree (`en.json`), walks it, translates every
//! string leaf that looks like prose, and writes one `<code>.json` per target
//! language with the same shape.
//!
//! PIPELINE:
//! 1. **source**: load and validate the source tree.
//! 2. **translate**: skip heuristic plus a pluggable [`translate::Translator`]
//!    (LibreTranslate, Google, built-in lookup table, passthrough).
//! 3. **batch**: one language at a time with a rate-limit pause, or one
//!    rayon worker per language.
//! 4. **writer**: pretty JSON with raw Unicode, guarded by an overwrite policy.

pub mod batch;
pub mod config;
pub mod diagnostics;
pub mod languages;
pub mod lookup;
pub mod source;
pub mod translate;
pub mod writer;
