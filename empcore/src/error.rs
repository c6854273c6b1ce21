use http::StatusCode;
use thiserror::Error;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ServiceError {
    #[cfg(feature = "reqwest")]
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Encode(#[from] serde_urlencoded::ser::Error),
    /// The server answered with a status outside of the 2xx range.
    #[error("unexpected response status: {0}")]
    Status(StatusCode),
    /// The operation addresses the entity by its identifier, but the
    /// entity has not been persisted yet.
    #[error("entity has no identifier")]
    MissingIdentifier,
}

impl ServiceError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status(status) => Some(*status),
            #[cfg(feature = "reqwest")]
            Self::Reqwest(e) => e.status(),
            _ => None,
        }
    }
}
