//! Retrieval of remote documents.
//!
//! [`RemoteFetcher`] is the seam the validation session uses to load a
//! document by reference. The HTTP implementation lives behind the `http`
//! feature; tests supply their own fetchers.

use std::future::Future;
use thiserror::Error;

/// Transport-level failures while fetching a remote document.
///
/// These are load errors, distinct from validation errors about the
/// document's content.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// The reference is not an http(s) URL
    #[error("invalid reference '{reference}'")]
    InvalidReference { reference: String },

    /// The server answered with a non-success status
    #[error("request for '{reference}' failed with status {status}")]
    Status { reference: String, status: u16 },

    /// The request could not be completed
    #[error("request for '{reference}' failed: {message}")]
    Transport { reference: String, message: String },
}

impl FetchError {
    pub fn invalid_reference(reference: impl Into<String>) -> Self {
        Self::InvalidReference {
            reference: reference.into(),
        }
    }

    pub fn status(reference: impl Into<String>, status: u16) -> Self {
        Self::Status {
            reference: reference.into(),
            status,
        }
    }

    pub fn transport(reference: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Transport {
            reference: reference.into(),
            message: message.into(),
        }
    }
}

pub type FetchResult<T> = Result<T, FetchError>;

/// Fetches the raw text behind a document reference.
pub trait RemoteFetcher: Send + Sync {
    fn fetch_text(&self, reference: &str) -> impl Future<Output = FetchResult<String>> + Send;
}

/// Whether a reference looks like an http(s) URL.
pub fn is_remote_reference(reference: &str) -> bool {
    let reference = reference.trim();
    ["http://", "https://"].iter().any(|scheme| {
        reference
            .get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
            && reference.len() > scheme.len()
    })
}

#[cfg(feature = "http")]
pub use http::HttpFetcher;

#[cfg(feature = "http")]
mod http {
    use super::{FetchError, FetchResult, RemoteFetcher, is_remote_reference};
    use log::debug;
    use std::time::Duration;

    const DEFAULT_TIMEOUT_SECS: u64 = 30;

    /// Fetches documents with a single HTTP GET. No retries.
    #[derive(Debug, Clone)]
    pub struct HttpFetcher {
        client: reqwest::Client,
    }

    impl HttpFetcher {
        pub fn new() -> FetchResult<Self> {
            Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
        }

        pub fn with_timeout(timeout: Duration) -> FetchResult<Self> {
            let client = reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .map_err(|e| FetchError::transport("<client>", e.to_string()))?;
            Ok(Self { client })
        }
    }

    impl RemoteFetcher for HttpFetcher {
        async fn fetch_text(&self, reference: &str) -> FetchResult<String> {
            if !is_remote_reference(reference) {
                return Err(FetchError::invalid_reference(reference));
            }

            debug!("GET {}", reference);
            let response = self
                .client
                .get(reference.trim())
                .send()
                .await
                .map_err(|e| FetchError::transport(reference, e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                return Err(FetchError::status(reference, status.as_u16()));
            }

            response
                .text()
                .await
                .map_err(|e| FetchError::transport(reference, e.to_string()))
        }
    }
}
