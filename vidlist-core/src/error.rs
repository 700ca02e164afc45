use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    InvalidUrl(String),

    #[error("{0}")]
    TitleUnavailable(String),

    #[error("{0}")]
    FetchFailed(String),

    #[error("Could not extract video title")]
    CouldNotExtractTitle,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
