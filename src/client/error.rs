use reqwest::StatusCode;

#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    #[error("Failed to execute request: {0}")]
    Transport(#[from] reqwest_middleware::Error),
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Access token is not a valid header value")]
    InvalidToken(#[from] reqwest::header::InvalidHeaderValue),
}

/// Failure to obtain a usable access token. Nothing can run without one.
#[derive(thiserror::Error, Debug)]
pub enum AuthError {
    #[error("Unexpected response type {status} with data {body}")]
    UnexpectedResponse { status: StatusCode, body: String },
    #[error("Access token is null or empty")]
    BlankToken,
    #[error(transparent)]
    Client(#[from] ClientError),
}
