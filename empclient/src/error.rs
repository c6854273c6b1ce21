use empcore::error::ServiceError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
    #[error(transparent)]
    InvalidEndpoint(#[from] url::ParseError),
    #[error("endpoint cannot be used as a base: {0}")]
    UnsupportedEndpoint(String),
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),
    #[error(transparent)]
    Service(#[from] ServiceError),
}
