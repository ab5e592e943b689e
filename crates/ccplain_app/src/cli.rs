use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use ccplain_engine::OutputFormat;

/// Parses web-archive capture files into plain-text documents.
#[derive(Debug, Parser)]
#[command(name = "ccplain", version, about)]
pub struct Args {
    /// Directory the output files are written to.
    #[arg(short, long)]
    pub output_dir: PathBuf,

    /// Text extractor applied to each decoded body.
    #[arg(short, long, value_enum, default_value_t = ExtractorChoice::BodyText)]
    pub extractor: ExtractorChoice,

    /// Output serialization format.
    #[arg(short, long, value_enum, default_value_t = FormatChoice::Json)]
    pub format: FormatChoice,

    /// Write log output to this file instead of stderr.
    #[arg(short = 'l', long)]
    pub log_file: Option<PathBuf>,

    /// Log verbosity (off, error, warn, info, debug, trace).
    #[arg(short = 'L', long, default_value = "info")]
    pub log_level: log::LevelFilter,

    /// Input WARC files; each must end in .warc or .warc.gz.
    #[arg(required = true)]
    pub input_files: Vec<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExtractorChoice {
    /// DOM text of `<article>`, falling back to `<body>`.
    BodyText,
    /// The decoded body unchanged.
    Verbatim,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatChoice {
    /// Gzipped JSON-per-line.
    Json,
    /// A single XML document.
    Xml,
}

impl From<FormatChoice> for OutputFormat {
    fn from(choice: FormatChoice) -> Self {
        match choice {
            FormatChoice::Json => OutputFormat::Json,
            FormatChoice::Xml => OutputFormat::Xml,
        }
    }
}
