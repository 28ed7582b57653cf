//! Document retrieval traits

use alloc::string::String;
use core::fmt;

/// HTTP transport errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HttpError {
    /// Could not reach the host (DNS, TCP or TLS failure)
    Connection,
    /// No response within the transport timeout
    Timeout,
    /// Server answered with a non-success status code
    Status(u16),
    /// Response body was not valid UTF-8 or exceeded the buffer
    InvalidBody,
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpError::Connection => f.write_str("connection failed"),
            HttpError::Timeout => f.write_str("request timed out"),
            HttpError::Status(code) => write!(f, "HTTP status {}", code),
            HttpError::InvalidBody => f.write_str("invalid response body"),
        }
    }
}

/// Document fetch errors
///
/// All of these are recoverable; the poll loop retries after a delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FetchError {
    /// Transport failure
    Transport(HttpError),
    /// Metadata response was not the expected JSON object
    BadMetadata,
    /// Metadata has no download location (missing or null)
    MissingDownloadUrl,
    /// Configured location is not `owner/repo/path`
    InvalidLocation,
}

impl From<HttpError> for FetchError {
    fn from(e: HttpError) -> Self {
        FetchError::Transport(e)
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Transport(e) => fmt::Display::fmt(e, f),
            FetchError::BadMetadata => f.write_str("bad file metadata"),
            FetchError::MissingDownloadUrl => f.write_str("no download_url in metadata"),
            FetchError::InvalidLocation => f.write_str("invalid source location"),
        }
    }
}

/// Minimal HTTP GET client
#[allow(async_fn_in_trait)]
pub trait HttpClient {
    /// GET `url` and return the response body as text
    ///
    /// `authorization` is sent verbatim as the `Authorization` header when
    /// present.
    async fn get(&mut self, url: &str, authorization: Option<&str>) -> Result<String, HttpError>;
}

/// Trait for retrieving the markdown document
///
/// Implementations may resolve the location in several steps; callers only
/// ever see the final document text.
#[allow(async_fn_in_trait)]
pub trait Fetch {
    /// Fetch the document at `location`
    async fn fetch(
        &mut self,
        location: &str,
        credentials: Option<&str>,
    ) -> Result<String, FetchError>;
}
