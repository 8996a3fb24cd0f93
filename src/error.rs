use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PadError>;

/// All errors produced by the webpad host.
///
/// Failures inside the preview pipeline itself (malformed bridge messages,
/// un-stringifiable console arguments) never reach this type — they are
/// dropped or degraded where they occur. `PadError` covers the edges that
/// can genuinely fail: the persistence file, the file watcher, and server
/// startup.
#[derive(Debug, Error)]
pub enum PadError {
    #[error("cannot access project store '{}': {source}", path.display())]
    Store {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("project store '{}' is not valid JSON: {source}", path.display())]
    StoreFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("file watcher error: {0}")]
    Watch(#[from] notify::Error),

    #[error("server error: {0}")]
    Server(std::io::Error),
}

impl PadError {
    pub fn store(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Store {
            path: path.into(),
            source,
        }
    }

    pub fn store_format(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::StoreFormat {
            path: path.into(),
            source,
        }
    }
}
