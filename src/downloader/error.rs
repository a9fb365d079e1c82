use thiserror::Error;

use crate::browser::SessionError;

#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid video URL: {0}")]
    InvalidUrl(String),

    #[error("access refused ({status}) for {url}")]
    AccessDenied { status: u16, url: String },

    #[error("request for {url} failed with status {status}")]
    HttpStatus { status: u16, url: String },

    #[error("session error: {0}")]
    Session(#[from] SessionError),
}
