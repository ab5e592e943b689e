use serde::Serialize;

/// One entry yielded by the archive-reading collaborator. Owned by the
/// iteration and consumed immediately; only `response` records are of
/// interest downstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    /// The record-type tag (`response`, `request`, `warcinfo`, ...).
    pub record_type: String,
    /// The captured target URI, if the record carries one.
    pub url: Option<String>,
    /// The capture timestamp, passed through verbatim.
    pub date: Option<String>,
    /// The captured HTTP transaction: status line, headers and body.
    pub payload: Vec<u8>,
}

/// The externally visible output unit: URL, capture date, extracted text.
/// Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    /// Source URL, never empty.
    pub url: String,
    /// Capture date, verbatim from the archive record.
    pub date: String,
    /// Extracted text; `None` when extraction found nothing, which is
    /// still a valid (if sparse) document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}
