use thiserror::Error;
#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("http error: status {status}")]
    HttpError { status: u16 },
    #[error("network error: {0}")]
    NetworkError(String),
    #[error("Selector error: {0}")]
    SelectorError(String),
    #[error("serde error: {0}")]
    SerdeError(#[from] serde_json::Error),
    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<reqwest::Error> for ScrapeError {
    fn from(err: reqwest::Error) -> Self {
        ScrapeError::NetworkError(err.to_string())
    }
}

impl ScrapeError {
    /// Status code carried by an [`ScrapeError::HttpError`], if this is one
    pub fn status(&self) -> Option<u16> {
        match self {
            ScrapeError::HttpError { status } => Some(*status),
            _ => None,
        }
    }
}
