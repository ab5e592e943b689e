//! Record-decoding core: HTTP head parsing, charset resolution and body
//! decoding for captured web-archive responses. Pure functions, no I/O.
mod charset;
mod decode;
mod error;
mod header;

pub use charset::{canonicalize, resolve_charset};
pub use decode::{decode_response, DecodedResponse};
pub use error::RecordError;
pub use header::{parse_response, HttpHead, ParsedResponse};
