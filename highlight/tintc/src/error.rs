//! CLI error taxonomy.
//!
//! Classification itself is total and cannot fail; the only fallible surface
//! here is reading the file off disk.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
