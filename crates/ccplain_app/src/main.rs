mod cli;
mod logging;

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use ccplain_engine::{
    derive_output_path, BodyTextExtractor, DocumentStream, DocumentWriter, Extractor,
    JsonLinesWriter, OutputFormat, VerbatimExtractor, WarcFileSource, XmlDocumentWriter,
};
use pipeline_logging::{pipeline_error, pipeline_info};

use crate::cli::{Args, ExtractorChoice};

fn main() -> ExitCode {
    let args = Args::parse();
    logging::initialize(args.log_level, args.log_file.as_deref());

    let mut failures = 0usize;
    for input in &args.input_files {
        if let Err(err) = convert_file(input, &args) {
            pipeline_error!("failed to convert {}: {err:#}", input.display());
            failures += 1;
        }
    }
    if failures > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// One pipeline instance per input file. Per-record failures are handled
/// inside the stream; anything surfacing here is a hard failure for this
/// file.
fn convert_file(input: &Path, args: &Args) -> anyhow::Result<()> {
    let format = OutputFormat::from(args.format);
    let output_path = derive_output_path(input, &args.output_dir, format)?;
    fs::create_dir_all(&args.output_dir).with_context(|| {
        format!(
            "could not create output directory {}",
            args.output_dir.display()
        )
    })?;

    let source = WarcFileSource::open(input)?;
    let extractor: Box<dyn Extractor> = match args.extractor {
        ExtractorChoice::BodyText => Box::new(BodyTextExtractor),
        ExtractorChoice::Verbatim => Box::new(VerbatimExtractor),
    };
    let mut writer: Box<dyn DocumentWriter> = match format {
        OutputFormat::Json => Box::new(JsonLinesWriter::create(&output_path)?),
        OutputFormat::Xml => Box::new(XmlDocumentWriter::create(&output_path)?),
    };

    let mut count = 0u64;
    for document in DocumentStream::new(source, extractor) {
        writer.write(&document)?;
        count += 1;
    }
    writer.finish()?;
    pipeline_info!(
        "{}: wrote {count} documents to {}",
        input.display(),
        output_path.display()
    );
    Ok(())
}
