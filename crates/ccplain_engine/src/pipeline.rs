use ccplain_core::{decode_response, DecodedResponse};
use pipeline_logging::{pipeline_debug, pipeline_info, pipeline_trace, pipeline_warn};

use crate::extract::Extractor;
use crate::source::RecordSource;
use crate::types::Document;

/// Pull-based stream of documents over an archive source.
///
/// One record is processed to completion (decode + extract) or abandoned
/// as a unit; per-record failures narrow the stream and never abort the
/// run. At most one document is materialized at a time, so memory stays
/// constant regardless of archive size.
pub struct DocumentStream<S, E> {
    source: S,
    extractor: E,
}

impl<S: RecordSource, E: Extractor> DocumentStream<S, E> {
    pub fn new(source: S, extractor: E) -> Self {
        Self { source, extractor }
    }

    /// Advances the source until it yields a decodable 200 response or
    /// runs out of records.
    fn next_response(&mut self) -> Option<Document> {
        loop {
            let record = match self.source.next_record()? {
                Ok(record) => record,
                Err(err) => {
                    pipeline_warn!("skipping unreadable record: {err}");
                    continue;
                }
            };
            if !record.record_type.eq_ignore_ascii_case("response") {
                continue;
            }
            let (url, date) = match (record.url, record.date) {
                (Some(url), Some(date)) if !url.is_empty() => (url, date),
                _ => {
                    pipeline_warn!("skipping response record without target URI or date");
                    continue;
                }
            };
            match decode_response(&record.payload) {
                Ok(DecodedResponse::Ok { body, .. }) => {
                    let content = self.extractor.extract(&body);
                    pipeline_trace!("found document {url}");
                    return Some(Document { url, date, content });
                }
                Ok(DecodedResponse::NotOk { status }) => {
                    // The common case for archives full of redirects and
                    // error pages; kept below info.
                    pipeline_debug!("HTTP status {status}, not OK: {url}");
                }
                Err(err) => {
                    pipeline_info!("could not decode {url}: {err}");
                }
            }
        }
    }
}

impl<S: RecordSource, E: Extractor> Iterator for DocumentStream<S, E> {
    type Item = Document;

    fn next(&mut self) -> Option<Document> {
        self.next_response()
    }
}
