use thiserror::Error;

use crate::browser::SessionError;

pub mod fetcher;
pub mod models;

pub use fetcher::MetadataFetcher;
pub use models::LectureMetadata;

#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("session error: {0}")]
    Session(#[from] SessionError),

    #[error("malformed metadata: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("metadata for '{title}' lists no products")]
    NoProducts { title: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
