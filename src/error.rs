use thiserror::Error;
use url::ParseError;

#[derive(Error, Debug)]
pub enum GrabError {
    #[error("FetchError: {url} answered with HTTP status {status}")]
    Fetch { url: String, status: reqwest::StatusCode },
    #[error("StateError: {0}")]
    State(&'static str),
    #[error("ExtractionError: {0}")]
    Extraction(String),
    #[error("ReqwestError: {0}")]
    Http(#[from] reqwest::Error),
    #[error("UrlError, can't parse given URL: {0}")]
    Url(#[from] ParseError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GrabError>;
