use ccplain_core::{canonicalize, resolve_charset, RecordError};
use encoding_rs::{SHIFT_JIS, UTF_8, WINDOWS_1252};
use pretty_assertions::assert_eq;

#[test]
fn canonicalize_is_idempotent() {
    for token in ["UTF-8", "utf_8", "ISO-8859-1", "cp-1252", "Shift_JIS"] {
        let once = canonicalize(token).unwrap();
        assert_eq!(canonicalize(once), Some(once), "token {token}");
    }
}

#[test]
fn underscore_and_hyphen_spellings_agree() {
    assert_eq!(canonicalize("UTF-8"), canonicalize("utf_8"));
    assert_eq!(canonicalize("Shift-JIS"), canonicalize("shift_jis"));
}

#[test]
fn internal_spaces_are_tolerated() {
    assert_eq!(resolve_charset("ISO 8859 1").unwrap(), WINDOWS_1252);
}

#[test]
fn cp_prefix_loses_its_hyphen() {
    assert_eq!(resolve_charset("cp-1252").unwrap(), WINDOWS_1252);
    assert_eq!(resolve_charset("CP-1252").unwrap(), WINDOWS_1252);
}

#[test]
fn common_tokens_resolve() {
    assert_eq!(resolve_charset("utf-8").unwrap(), UTF_8);
    assert_eq!(resolve_charset("  UTF-8  ").unwrap(), UTF_8);
    assert_eq!(resolve_charset("shift_jis").unwrap(), SHIFT_JIS);
    // WHATWG folds Latin-1 into windows-1252.
    assert_eq!(resolve_charset("ISO-8859-1").unwrap(), WINDOWS_1252);
}

#[test]
fn unknown_tokens_are_rejected() {
    for token in ["bogus-xyz", "", "utf-99"] {
        assert_eq!(
            resolve_charset(token).unwrap_err(),
            RecordError::UnknownCharset(token.to_string())
        );
        assert_eq!(canonicalize(token), None);
    }
}
