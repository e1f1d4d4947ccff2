use std::path::PathBuf;
use thiserror::Error;

/// File-level failures of a filter run.
///
/// Per-line problems (malformed records, bad dates, a short header) never
/// show up here; they are logged and absorbed by the pass.
#[derive(Error, Debug)]
pub enum FilterError {
    /// The input file does not exist
    #[error("input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// The output path names the input file, which would be truncated
    #[error("output file is the input file: {}", .0.display())]
    OutputIsInput(PathBuf),

    /// The encoding label is unknown or not ASCII compatible
    #[error("unsupported text encoding: {0}")]
    UnsupportedEncoding(String),

    /// Read or write failure during the pass
    #[error("read/write error: {0}")]
    Io(#[from] std::io::Error),

    /// A panic caught at the outer boundary
    #[error("unexpected error: {0}")]
    Unexpected(String),
}
