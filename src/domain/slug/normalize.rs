// src/domain/slug/normalize.rs
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::value_objects::{Slug, SlugSource};

/// Derive a URL-safe slug from free-form text.
///
/// The transform applies, in order: canonical Unicode decomposition (NFD),
/// removal of combining marks ("café" → "cafe"), folding of every maximal
/// run of non-ASCII-alphanumeric characters into a single hyphen, trimming
/// of edge hyphens, and ASCII lowercasing. Only ASCII letters and digits
/// survive the fold, so the output never depends on the runtime's Unicode
/// alphanumeric tables; the sole Unicode-version dependency is NFD itself
/// (`unicode-normalization`). Cyrillic- or CJK-only input therefore yields
/// nothing and fails.
///
/// Deterministic, pure, and idempotent on its own output: a string that is
/// already a valid slug comes back unchanged.
///
/// # Errors
///
/// [`DomainError::Unslugifiable`] when nothing survives the fold, carrying
/// the original input for diagnostics.
pub fn normalize(source: &SlugSource) -> DomainResult<Slug> {
    let text = source.as_str();
    let mut out = String::with_capacity(text.len());
    let mut pending_separator = false;

    for ch in text.nfd().filter(|c| !is_combining_mark(*c)) {
        if ch.is_ascii_alphanumeric() {
            // A pending separator at the very start is edge trim, not a hyphen.
            if pending_separator && !out.is_empty() {
                out.push('-');
            }
            out.push(ch.to_ascii_lowercase());
            pending_separator = false;
        } else {
            pending_separator = true;
        }
    }

    if out.is_empty() {
        return Err(DomainError::Unslugifiable {
            input: text.to_owned(),
        });
    }

    Slug::new(out)
}
