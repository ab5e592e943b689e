//! ccplain engine: archive reading, the document pipeline and output writers.
mod extract;
mod naming;
mod output;
mod pipeline;
mod source;
mod types;

pub use extract::{BodyTextExtractor, Extractor, VerbatimExtractor};
pub use naming::{derive_output_path, NamingError};
pub use output::{
    DocumentWriter, JsonLinesWriter, OutputError, OutputFormat, XmlDocumentWriter,
};
pub use pipeline::DocumentStream;
pub use source::{RecordSource, SourceError, WarcFileSource};
pub use types::{Document, RawRecord};
