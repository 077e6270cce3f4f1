//! Compilation ignore pattern handling.
//! Compiles the configured glob-style patterns into a matcher used to
//! exclude entries while staging pack sources, similar to .gitignore
//! semantics.

use crate::error::{Error, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};

/// Compiles a set of glob-style ignore patterns into a [`GlobSet`].
///
/// Patterns are matched against individual entry names during the copy walk,
/// so a pattern applies at every directory depth. `**/node_modules` and a
/// bare `node_modules` both prune a `node_modules` directory anywhere in the
/// tree; `*.psd` skips any file with that extension.
///
/// # Errors
/// * `Error::IgnorePattern` if a pattern fails to compile
pub fn build_ignore_set(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(Glob::new(pattern).map_err(|e| {
            Error::IgnorePattern(format!("invalid pattern '{}': {}", pattern, e))
        })?);
    }
    builder
        .build()
        .map_err(|e| Error::IgnorePattern(e.to_string()))
}

/// Returns true when an entry name is matched by the ignore set.
///
/// Anchored `**/name` patterns are tested against a synthetic nested path so
/// they behave like their gitignore counterparts even though the walk only
/// sees bare entry names.
pub fn is_ignored(ignore_set: &GlobSet, name: &str) -> bool {
    ignore_set.is_match(name) || ignore_set.is_match(format!("a/{}", name))
}
