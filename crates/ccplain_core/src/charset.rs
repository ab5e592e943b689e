use encoding_rs::Encoding;

use crate::error::RecordError;

/// Normalize a declared charset token to something `Encoding::for_label`
/// understands. Whitespace and underscores become hyphens (so Python-style
/// names like `utf_8` resolve), and a `cp-` prefix loses its hyphen
/// (`cp-1252` is an alias of `cp1252` in the wild but not in the WHATWG
/// label table).
///
/// This is a best-effort alias table, not exhaustive: tokens like
/// `latin1_hungarian` or vendor-invented names still come out unknown.
fn normalize(token: &str) -> String {
    let mut label: String = token
        .trim()
        .chars()
        .map(|c| {
            if c == '_' || c.is_whitespace() {
                '-'
            } else {
                c.to_ascii_lowercase()
            }
        })
        .collect();
    if let Some(rest) = label.strip_prefix("cp-") {
        label = format!("cp{rest}");
    }
    label
}

/// Resolve a declared charset token to a loadable codec.
pub fn resolve_charset(token: &str) -> Result<&'static Encoding, RecordError> {
    Encoding::for_label(normalize(token).as_bytes())
        .ok_or_else(|| RecordError::UnknownCharset(token.to_string()))
}

/// The canonical codec name for a declared charset token, if it resolves.
///
/// Idempotent: feeding a canonical name back in yields the same name.
pub fn canonicalize(token: &str) -> Option<&'static str> {
    resolve_charset(token).ok().map(|encoding| encoding.name())
}
