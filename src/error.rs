//! Error type for the file-facing side of the tool.
//!
//! The transform itself cannot fail; only reading and writing the target do.

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum FixError {
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
    #[error("failed to replace {} with rewritten copy: {source}", path.display())]
    Persist { path: PathBuf, source: io::Error },
}
