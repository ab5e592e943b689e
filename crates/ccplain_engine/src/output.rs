use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use flate2::write::GzEncoder;
use flate2::Compression;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use thiserror::Error;

use crate::types::Document;

/// The two serialization shapes expected downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One JSON value per line, gzip-compressed.
    Json,
    /// A single XML document with one `<document>` element per item.
    Xml,
}

impl OutputFormat {
    /// Extension the output file gets in place of `.warc`/`.warc.gz`.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Json => "jsonl.gz",
            OutputFormat::Xml => "xml",
        }
    }
}

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("could not create output {path}: {source}")]
    Create {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("xml error: {0}")]
    Xml(#[from] quick_xml::Error),
}

/// Sink for the documents of one pipeline instance. The sink is acquired
/// once at pipeline start and released once by `finish`; a failed run
/// leaves the already-written prefix in place and surfaces the error, so
/// a truncated output file is never silently treated as complete.
pub trait DocumentWriter {
    fn write(&mut self, document: &Document) -> Result<(), OutputError>;

    /// Flushes and closes the sink. Must be called exactly once.
    fn finish(self: Box<Self>) -> Result<(), OutputError>;
}

/// Gzipped JSON-per-line output, one serialized [`Document`] per line.
pub struct JsonLinesWriter {
    encoder: GzEncoder<BufWriter<File>>,
}

impl JsonLinesWriter {
    pub fn create(path: &Path) -> Result<Self, OutputError> {
        let file = File::create(path).map_err(|source| OutputError::Create {
            path: path.display().to_string(),
            source,
        })?;
        // Level 5 trades a little compression for throughput.
        Ok(Self {
            encoder: GzEncoder::new(BufWriter::new(file), Compression::new(5)),
        })
    }
}

impl DocumentWriter for JsonLinesWriter {
    fn write(&mut self, document: &Document) -> Result<(), OutputError> {
        serde_json::to_writer(&mut self.encoder, document)?;
        self.encoder.write_all(b"\n")?;
        Ok(())
    }

    fn finish(self: Box<Self>) -> Result<(), OutputError> {
        let this = *self;
        let mut inner = this.encoder.finish()?;
        inner.flush()?;
        Ok(())
    }
}

/// A single XML document: a `<documents>` root with one `<document>` child
/// per item, each carrying `url`, `date` and `text` elements.
pub struct XmlDocumentWriter {
    writer: Writer<BufWriter<File>>,
}

impl XmlDocumentWriter {
    pub fn create(path: &Path) -> Result<Self, OutputError> {
        let file = File::create(path).map_err(|source| OutputError::Create {
            path: path.display().to_string(),
            source,
        })?;
        let mut writer = Writer::new_with_indent(BufWriter::new(file), b' ', 2);
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;
        writer.write_event(Event::Start(BytesStart::new("documents")))?;
        Ok(Self { writer })
    }

    fn text_element(&mut self, name: &str, value: &str) -> Result<(), OutputError> {
        self.writer.write_event(Event::Start(BytesStart::new(name)))?;
        self.writer.write_event(Event::Text(BytesText::new(value)))?;
        self.writer.write_event(Event::End(BytesEnd::new(name)))?;
        Ok(())
    }
}

impl DocumentWriter for XmlDocumentWriter {
    fn write(&mut self, document: &Document) -> Result<(), OutputError> {
        self.writer
            .write_event(Event::Start(BytesStart::new("document")))?;
        self.text_element("url", &document.url)?;
        self.text_element("date", &document.date)?;
        match document.content.as_deref() {
            Some(text) => self.text_element("text", text)?,
            None => self
                .writer
                .write_event(Event::Empty(BytesStart::new("text")))?,
        }
        self.writer
            .write_event(Event::End(BytesEnd::new("document")))?;
        Ok(())
    }

    fn finish(self: Box<Self>) -> Result<(), OutputError> {
        let mut this = *self;
        this.writer
            .write_event(Event::End(BytesEnd::new("documents")))?;
        let mut inner = this.writer.into_inner();
        inner.flush()?;
        Ok(())
    }
}
