//! GitHub contents API source
//!
//! A document is fetched in two requests: the contents API returns JSON
//! metadata for the file, whose `download_url` then yields the raw text.

use alloc::format;
use alloc::string::String;

use serde::Deserialize;

use crate::traits::{Fetch, FetchError, HttpClient};

/// Contents API root
pub const API_BASE: &str = "https://api.github.com";

/// The part of the contents API response we use
#[derive(Debug, Deserialize)]
struct ContentMetadata {
    download_url: Option<String>,
}

/// Repository location split into its parts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Location<'a> {
    owner: &'a str,
    repo: &'a str,
    path: &'a str,
}

impl<'a> Location<'a> {
    /// Parse `owner/repo/path/to/file.md`
    fn parse(location: &'a str) -> Result<Self, FetchError> {
        let mut parts = location.trim_matches('/').splitn(3, '/');
        let mut next = || {
            parts
                .next()
                .filter(|part| !part.is_empty())
                .ok_or(FetchError::InvalidLocation)
        };

        Ok(Self {
            owner: next()?,
            repo: next()?,
            path: next()?,
        })
    }

    fn metadata_url(&self) -> String {
        format!(
            "{}/repos/{}/{}/contents/{}",
            API_BASE, self.owner, self.repo, self.path
        )
    }
}

/// Document source backed by the GitHub contents API
pub struct GithubSource<H> {
    http: H,
}

impl<H: HttpClient> GithubSource<H> {
    /// Create a source using the given HTTP client
    pub fn new(http: H) -> Self {
        Self { http }
    }

    /// Get the HTTP client
    pub fn http(&self) -> &H {
        &self.http
    }
}

impl<H: HttpClient> Fetch for GithubSource<H> {
    async fn fetch(
        &mut self,
        location: &str,
        credentials: Option<&str>,
    ) -> Result<String, FetchError> {
        let location = Location::parse(location)?;
        let authorization = credentials
            .filter(|token| !token.is_empty())
            .map(|token| format!("token {}", token));
        let authorization = authorization.as_deref();

        let body = self.http.get(&location.metadata_url(), authorization).await?;
        let metadata: ContentMetadata =
            serde_json::from_str(&body).map_err(|_| FetchError::BadMetadata)?;
        let download_url = metadata
            .download_url
            .ok_or(FetchError::MissingDownloadUrl)?;

        debug!("Downloading {}", download_url.as_str());
        let document = self.http.get(&download_url, authorization).await?;
        Ok(document)
    }
}
