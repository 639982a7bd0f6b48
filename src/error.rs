/// Failure to produce one icon file
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Anything that stops a single output from being written.
///
/// Caught per target by the generator; never aborts the run.
#[derive(Debug, Error)]
pub enum OutputFailure {
    #[error("failed to create directory {}: {}", path.display(), source)]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to create {}: {}", path.display(), source)]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to encode PNG {}: {}", path.display(), source)]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to write {}: {}", path.display(), source)]
    Flush {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl OutputFailure {
    /// Path the failing operation was working on
    pub fn path(&self) -> &Path {
        match self {
            OutputFailure::CreateDir { path, .. }
            | OutputFailure::Create { path, .. }
            | OutputFailure::Encode { path, .. }
            | OutputFailure::Flush { path, .. } => path.as_path(),
        }
    }
}
