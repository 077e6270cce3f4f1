use packsmith::error::Error;
use packsmith::ignore::{build_ignore_set, is_ignored};

fn patterns(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_exact_name_match() {
    let set = build_ignore_set(&patterns(&[".git"])).unwrap();
    assert!(is_ignored(&set, ".git"));
    assert!(!is_ignored(&set, ".gitignore"));
    assert!(!is_ignored(&set, "src"));
}

#[test]
fn test_extension_match() {
    let set = build_ignore_set(&patterns(&["*.psd"])).unwrap();
    assert!(is_ignored(&set, "art.psd"));
    assert!(!is_ignored(&set, "art.png"));
}

#[test]
fn test_anchored_pattern_matches_bare_names() {
    let set = build_ignore_set(&patterns(&["**/node_modules"])).unwrap();
    assert!(is_ignored(&set, "node_modules"));
    assert!(!is_ignored(&set, "modules"));
}

#[test]
fn test_anchored_extension_pattern() {
    let set = build_ignore_set(&patterns(&["**/*.bbmodel"])).unwrap();
    assert!(is_ignored(&set, "model.bbmodel"));
    assert!(!is_ignored(&set, "model.json"));
}

#[test]
fn test_empty_pattern_set_matches_nothing() {
    let set = build_ignore_set(&[]).unwrap();
    assert!(!is_ignored(&set, "anything"));
    assert!(!is_ignored(&set, ".git"));
}

#[test]
fn test_invalid_pattern_is_rejected() {
    let err = build_ignore_set(&patterns(&["[invalid"])).unwrap_err();
    assert!(matches!(err, Error::IgnorePattern(_)));
}
