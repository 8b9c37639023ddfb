//! Classification of HTTP status failures into operator-friendly errors.

use reqwest::StatusCode;

/// A download that the server refused or could not serve.
#[derive(Debug, PartialEq)]
pub enum DownloadError {
    /// HTTP 404
    NotFound(String),
    /// HTTP 401 or 403
    Forbidden(String),
    /// Other 4xx responses
    ClientError(u16),
    /// 5xx responses
    ServerError(u16),
}

impl std::fmt::Display for DownloadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DownloadError::NotFound(url) => write!(f, "Not found: {}", url),
            DownloadError::Forbidden(url) => {
                write!(f, "Access forbidden: {}. You may need authentication.", url)
            }
            DownloadError::ClientError(code) => write!(f, "Request error: HTTP {}", code),
            DownloadError::ServerError(code) => write!(f, "Server error: HTTP {}", code),
        }
    }
}

impl std::error::Error for DownloadError {}

/// Maps a failing status to a `DownloadError`. Returns `None` for statuses
/// that are not failures.
pub fn classify_status(status: StatusCode, url: &str) -> Option<DownloadError> {
    match status {
        StatusCode::NOT_FOUND => Some(DownloadError::NotFound(url.to_string())),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            Some(DownloadError::Forbidden(url.to_string()))
        }
        s if s.is_client_error() => Some(DownloadError::ClientError(s.as_u16())),
        s if s.is_server_error() => Some(DownloadError::ServerError(s.as_u16())),
        _ => None,
    }
}

/// Converts an error from `error_for_status()` into an `anyhow::Error`,
/// replacing status failures with a `DownloadError`.
pub fn check_status(error: reqwest::Error, url: &str) -> anyhow::Error {
    match error.status().and_then(|s| classify_status(s, url)) {
        Some(download_error) => anyhow::Error::from(download_error),
        None => anyhow::Error::from(error),
    }
}
