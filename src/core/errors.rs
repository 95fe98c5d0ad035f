use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("entry unavailable: {}", .path.display())]
    EntryUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("listing failed: {}", .path.display())]
    ListingFailed {
        path: PathBuf,
        #[source]
        source: Box<Error>,
    },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config error: {0}")]
    Config(String),
}

impl Error {
    pub fn listing_failed(path: impl Into<PathBuf>, source: impl Into<Error>) -> Self {
        Error::ListingFailed {
            path: path.into(),
            source: Box::new(source.into()),
        }
    }

    pub fn is_listing_failure(&self) -> bool {
        matches!(self, Error::ListingFailed { .. })
    }
}
