//! # Image Reference Rewriting
//!
//! Fragments embed their screenshots by bare filename (`GUID-….png`). Once
//! copied into an application directory those names no longer resolve, so
//! every reference is prefixed with the relative path back to the shared
//! docs directory.
//!
//! Matching is case-insensitive and never crosses a newline. The distinct
//! matched literals are then replaced one after another, in scan order, each
//! with a plain global string replace. Every occurrence of a literal is
//! prefixed, including occurrences that sit inside a longer match. A literal
//! nested in an earlier, already-prefixed literal is prefixed again there.
//!
//! The rewrite is not idempotent: feeding already-rewritten text back in
//! prefixes every reference a second time.

use crate::model::MatchMode;
use once_cell::sync::Lazy;
use regex::Regex;

static SHORTEST_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)GUID.*?\.png").expect("valid image pattern"));
static LONGEST_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)GUID.*\.png").expect("valid image pattern"));

fn pattern(mode: MatchMode) -> &'static Regex {
    match mode {
        MatchMode::Shortest => &*SHORTEST_PATTERN,
        MatchMode::Longest => &*LONGEST_PATTERN,
    }
}

/// Outcome of rewriting one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub text: String,
    /// Distinct references that were prefixed, in order of first appearance.
    pub references: Vec<String>,
}

/// Returns every image reference in `text`, left to right, duplicates included.
pub fn find_image_refs(text: &str, mode: MatchMode) -> Vec<&str> {
    pattern(mode).find_iter(text).map(|m| m.as_str()).collect()
}

/// Joins `prefix` and `reference` the way a path join would.
pub fn prefixed(prefix: &str, reference: &str) -> String {
    if prefix.is_empty() || prefix.ends_with('/') {
        format!("{}{}", prefix, reference)
    } else {
        format!("{}/{}", prefix, reference)
    }
}

/// Prefixes every image reference in `text` with `prefix`.
pub fn rewrite_image_refs(text: &str, prefix: &str, mode: MatchMode) -> Rewrite {
    let mut references: Vec<String> = Vec::new();
    for found in find_image_refs(text, mode) {
        if !references.iter().any(|r| r == found) {
            references.push(found.to_string());
        }
    }

    let mut out = text.to_string();
    for reference in &references {
        out = out.replace(reference.as_str(), &prefixed(prefix, reference));
    }

    Rewrite {
        text: out,
        references,
    }
}
