use thiserror::Error;

/// Why a single archive record could not be turned into a document.
///
/// None of these are fatal to a run; the pipeline skips the record and
/// moves on. A non-200 status is deliberately not part of this taxonomy
/// because it is an expected outcome, not an anomaly.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RecordError {
    /// The first line of the captured transaction is not a valid HTTP
    /// status line.
    #[error("invalid status line '{0}'")]
    MalformedStatusLine(String),
    /// A non-blank line in the header block is not a `name: value` field.
    #[error("invalid field line '{0}'")]
    MalformedHeaderLine(String),
    /// The `charset=` parameter names no codec we can load.
    #[error("unknown charset '{0}'")]
    UnknownCharset(String),
    /// The payload bytes are invalid under the resolved charset.
    #[error("could not decode body as {encoding}")]
    DecodingFailure {
        /// Canonical name of the codec that rejected the bytes.
        encoding: String,
    },
}
