// SPDX-License-Identifier: PMPL-1.0-or-later

//! Target language registry and ISO 639-1 helpers.
//!
//! The registry is the ordered list of languages a full `generate` run
//! produces files for. Codes double as output file stems, so `iw` stays
//! `iw.json` even though translation APIs only understand `he`.
//!
//! | Code | Language   | Code | Language   |
//! |------|------------|------|------------|
//! | fr   | French     | ru   | Russian    |
//! | de   | German     | tr   | Turkish    |
//! | es   | Spanish    | ja   | Japanese   |
//! | it   | Italian    | ko   | Korean     |
//! | pt   | Portuguese | zh   | Chinese    |
//! | nl   | Dutch      | el   | Greek      |
//! | sv   | Swedish    | ka   | Georgian   |
//! | da   | Danish     | iw   | Hebrew     |
//! | fi   | Finnish    | ms   | Malay      |
//! | no   | Norwegian  | id   | Indonesian |
//! | pl   | Polish     | ro   | Romanian   |
//! | cs   | Czech      | lt   | Lithuanian |
//! | sk   | Slovak     |      |            |

mod iso639;
mod registry;

pub use iso639::{canonical_code, is_valid_iso639_1, language_name};
pub use registry::{resolve_targets, TargetLanguage, REGISTRY};
