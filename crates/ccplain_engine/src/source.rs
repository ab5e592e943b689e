use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use flate2::bufread::MultiGzDecoder;
use thiserror::Error;
use warc::{RecordIter, WarcHeader, WarcReader};

use crate::types::RawRecord;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("could not open archive {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("unreadable record: {0}")]
    Record(String),
}

/// The archive-reading collaborator boundary: something that yields raw
/// records one at a time. A failed record read is recoverable; only
/// opening the container can fail hard.
pub trait RecordSource {
    fn next_record(&mut self) -> Option<Result<RawRecord, SourceError>>;
}

/// `RecordSource` backed by a WARC file on disk. Files ending in `.gz`
/// are decompressed on the fly; WARC archives are multi-member gzip
/// streams, one member per record.
pub struct WarcFileSource {
    records: RecordIter<BufReader<Box<dyn Read>>>,
}

impl WarcFileSource {
    pub fn open(path: &Path) -> Result<Self, SourceError> {
        let file = File::open(path).map_err(|source| SourceError::Open {
            path: path.display().to_string(),
            source,
        })?;
        let stream: Box<dyn Read> = if path.extension().and_then(|e| e.to_str()) == Some("gz") {
            Box::new(MultiGzDecoder::new(BufReader::new(file)))
        } else {
            Box::new(file)
        };
        Ok(Self {
            records: WarcReader::new(BufReader::new(stream)).iter_records(),
        })
    }
}

impl RecordSource for WarcFileSource {
    fn next_record(&mut self) -> Option<Result<RawRecord, SourceError>> {
        let record = match self.records.next()? {
            Ok(record) => record,
            Err(err) => return Some(Err(SourceError::Record(err.to_string()))),
        };
        Some(Ok(RawRecord {
            record_type: record
                .header(WarcHeader::WarcType)
                .map(|value| value.into_owned())
                .unwrap_or_default(),
            url: record
                .header(WarcHeader::TargetURI)
                .map(|value| value.into_owned()),
            date: record
                .header(WarcHeader::Date)
                .map(|value| value.into_owned()),
            payload: record.body().to_vec(),
        }))
    }
}
