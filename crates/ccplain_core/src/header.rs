use encoding_rs::Encoding;

use crate::charset::resolve_charset;
use crate::error::RecordError;

/// What the status line and header block of a captured transaction said.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpHead {
    /// Status 200, with the charset declared in `Content-Type`, if any.
    /// `None` means no charset was declared and UTF-8 should be assumed.
    Ok {
        /// Resolved declared charset.
        charset: Option<&'static Encoding>,
    },
    /// A well-formed response with a status other than 200. Not an error,
    /// just not worth keeping.
    NotOk {
        /// The HTTP status code.
        status: u16,
    },
}

/// Result of parsing the text of a captured HTTP transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedResponse {
    /// Outcome of the status line and header block.
    pub head: HttpHead,
    /// Everything after the first blank line, lines re-joined with `\n`.
    /// Empty for non-200 responses, which are not parsed past the status.
    pub body: String,
}

/// Parse the embedded HTTP status line, header block and body out of a
/// captured transaction.
///
/// The text is consumed line by line; `\r\n` and `\n` terminators are both
/// accepted and the body comes back with plain `\n` separators. An empty
/// input parses as a vacuous 200 with an empty body.
pub fn parse_response(text: &str) -> Result<ParsedResponse, RecordError> {
    let mut lines = text.lines();
    if let Some(line) = lines.next() {
        let status = parse_status_line(line)?;
        if status != 200 {
            return Ok(ParsedResponse {
                head: HttpHead::NotOk { status },
                body: String::new(),
            });
        }
    }

    let mut charset = None;
    for line in &mut lines {
        if line.is_empty() {
            break;
        }
        let (name, value) = split_field(line)?;
        // Exact name match, as in the archives this was written for; a
        // lowercase `content-type` never shows up in practice.
        if name == "Content-Type" {
            if let Some(token) = charset_parameter(value) {
                charset = Some(resolve_charset(token)?);
            }
        }
    }

    let body = lines.collect::<Vec<_>>().join("\n");
    Ok(ParsedResponse {
        head: HttpHead::Ok { charset },
        body,
    })
}

/// Parses `HTTP/<version> <code> <reason>`; the reason phrase may contain
/// spaces (`404 Not Found`).
fn parse_status_line(line: &str) -> Result<u16, RecordError> {
    let malformed = || RecordError::MalformedStatusLine(line.to_string());
    let rest = line.strip_prefix("HTTP").ok_or_else(malformed)?;
    let (version, rest) = rest.split_once(' ').ok_or_else(malformed)?;
    if version.is_empty() || version.chars().any(char::is_whitespace) {
        return Err(malformed());
    }
    let (code, reason) = rest.split_once(' ').ok_or_else(malformed)?;
    if code.is_empty() || reason.is_empty() || !code.chars().all(|c| c.is_ascii_digit()) {
        return Err(malformed());
    }
    code.parse::<u16>().map_err(|_| malformed())
}

/// Splits `name: value`. The single space after the colon is optional and
/// the value may be empty.
fn split_field(line: &str) -> Result<(&str, &str), RecordError> {
    let (name, rest) = line
        .split_once(':')
        .ok_or_else(|| RecordError::MalformedHeaderLine(line.to_string()))?;
    if name.is_empty() {
        return Err(RecordError::MalformedHeaderLine(line.to_string()));
    }
    Ok((name, rest.strip_prefix(' ').unwrap_or(rest)))
}

/// Pulls the value of the last `charset=` parameter out of a
/// `Content-Type` value. The keyword is case-insensitive, the value may be
/// quoted and may be followed by further `;`-separated parameters.
fn charset_parameter(value: &str) -> Option<&str> {
    let lower = value.to_ascii_lowercase();
    let position = lower.rfind("charset=")?;
    let raw = &value[position + "charset=".len()..];
    let raw = raw.split(';').next().unwrap_or(raw).trim();
    Some(raw.trim_matches([' ', '"', '\''].as_ref()))
}
