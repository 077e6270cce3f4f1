//! Unique identifier generation for pack manifests.

use uuid::Uuid;

/// Returns a fresh random 128-bit identifier in canonical hyphenated form.
///
/// No registry of issued values is kept; the v4 space is large enough that
/// collisions across any realistic number of builds are negligible.
pub fn new_identifier() -> String {
    Uuid::new_v4().to_string()
}
