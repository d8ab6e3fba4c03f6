//! Storage errors.

use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage file {} is unavailable", .path.display())]
    Unavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to access storage file")]
    Io(#[source] io::Error),

    #[error("failed to decode stored products")]
    Decode(#[source] serde_json::Error),

    #[error("failed to encode products")]
    Encode(#[source] serde_json::Error),
}
