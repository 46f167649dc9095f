//! Request signing
//!
//! The uploader delegates authentication to a [`Signer`]: given the method,
//! URL, headers, and the finalized payload bytes, the signer returns the
//! complete header set to send. [`SigV4Signer`] implements AWS Signature
//! Version 4; the trait exists so tests (and non-AWS stores) can substitute
//! their own scheme.

use reqwest::header::HeaderMap;
use reqwest::{Method, Url};
use thiserror::Error;

mod credentials;
mod sigv4;

pub use credentials::Credentials;
pub use sigv4::SigV4Signer;

/// Signing errors
#[derive(Error, Debug)]
pub enum SignError {
    #[error("Missing credentials: {0}")]
    MissingCredentials(String),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Header '{0}' is not valid ASCII and cannot be signed")]
    NonAsciiHeader(String),

    #[error("URL has no host: {0}")]
    MissingHost(String),
}

/// Produces authenticated request headers.
///
/// Signing is payload-hash dependent, so the byte content must be final
/// before this is called.
pub trait Signer: Send + Sync {
    /// Return the full signed header set for the request: the input headers
    /// plus whatever authentication headers the scheme requires.
    fn headers(
        &self,
        method: &Method,
        url: &Url,
        headers: &HeaderMap,
        payload: &[u8],
    ) -> Result<HeaderMap, SignError>;
}
