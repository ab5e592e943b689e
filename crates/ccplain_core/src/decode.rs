use encoding_rs::{Encoding, UTF_8};

use crate::error::RecordError;
use crate::header::{parse_response, HttpHead};

/// A fully decoded captured response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodedResponse {
    /// Status 200; the body text after the header blank line, decoded
    /// under the declared (or default UTF-8) charset.
    Ok {
        /// Body text with `\n` line separators.
        body: String,
        /// The codec the body was decoded with.
        encoding: &'static Encoding,
    },
    /// A well-formed response with a status other than 200.
    NotOk {
        /// The HTTP status code.
        status: u16,
    },
}

/// Decode the raw payload of a captured HTTP response.
///
/// The payload is first decoded as UTF-8 purely to read the header block
/// (headers are near-universally ASCII-safe, so a lossy pass is enough).
/// If the headers declare a charset other than UTF-8, the whole payload is
/// decoded again under that charset and the head re-parsed against the
/// re-decoded text: some codecs disagree with UTF-8 at the byte level, so
/// header positions and content can differ between the two passes.
pub fn decode_response(payload: &[u8]) -> Result<DecodedResponse, RecordError> {
    let (provisional, _, provisional_errors) = UTF_8.decode(payload);
    let parsed = parse_response(&provisional)?;
    let charset = match parsed.head {
        HttpHead::NotOk { status } => return Ok(DecodedResponse::NotOk { status }),
        HttpHead::Ok { charset } => charset.unwrap_or(UTF_8),
    };

    if charset == UTF_8 {
        if provisional_errors {
            return Err(RecordError::DecodingFailure {
                encoding: charset.name().to_string(),
            });
        }
        return Ok(DecodedResponse::Ok {
            body: parsed.body,
            encoding: charset,
        });
    }

    let (text, _, had_errors) = charset.decode(payload);
    if had_errors {
        return Err(RecordError::DecodingFailure {
            encoding: charset.name().to_string(),
        });
    }
    let reparsed = parse_response(&text)?;
    match reparsed.head {
        HttpHead::NotOk { status } => Ok(DecodedResponse::NotOk { status }),
        HttpHead::Ok { .. } => Ok(DecodedResponse::Ok {
            body: reparsed.body,
            encoding: charset,
        }),
    }
}
