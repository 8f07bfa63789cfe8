use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("webhook responded with status {0}")]
    Status(StatusCode),
}

impl Error {
    ///
    /// Network failures, timeouts, `429` and `5xx` responses are worth another attempt.
    /// Errors raised while building the request and other statuses are not.
    ///
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Request(err) => !err.is_builder(),
            Error::Status(status) => {
                status.is_server_error() || *status == StatusCode::TOO_MANY_REQUESTS
            }
        }
    }
}
