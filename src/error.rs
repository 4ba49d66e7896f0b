use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("Failed to create output directory {path:?}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to write {path:?}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to print progress notice")]
    Notice(#[source] io::Error),
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] png::EncodingError),
}
