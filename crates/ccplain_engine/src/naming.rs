use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::output::OutputFormat;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NamingError {
    #[error("input file '{0}' does not have a .warc or .warc.gz extension")]
    NotAWarcPath(String),
}

/// Derives the output path for an input archive: the `.warc`/`.warc.gz`
/// extension is replaced by the output format's and the file is placed in
/// `output_dir`.
pub fn derive_output_path(
    input: &Path,
    output_dir: &Path,
    format: OutputFormat,
) -> Result<PathBuf, NamingError> {
    let not_warc = || NamingError::NotAWarcPath(input.display().to_string());
    let name = input
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(not_warc)?;
    let stem = name
        .strip_suffix(".warc.gz")
        .or_else(|| name.strip_suffix(".warc"))
        .ok_or_else(not_warc)?;
    if stem.is_empty() {
        return Err(not_warc());
    }
    Ok(output_dir.join(format!("{stem}.{}", format.extension())))
}
