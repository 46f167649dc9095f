//! Upload module
//!
//! The core of the crate: build a signed PUT request for an object and map
//! the store's response to a typed result. `put_bytes` is the single real
//! operation; `put_url` and `put_path` are byte-sourcing adapters that
//! derive a content type and delegate, so header, signing, and response
//! logic exists exactly once.

use std::path::Path;

use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Method, StatusCode, Url};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::acl::AccessControl;
use crate::config::{AddressingStyle, Config};
use crate::mime;
use crate::sign::{Credentials, SigV4Signer, SignError, Signer};
use crate::transport::{
    HttpRequest, HttpResponse, HttpTransport, ReqwestTransport, TransportError,
};

/// Upload errors
#[derive(Error, Debug)]
pub enum UploadError {
    #[error("No bucket given and no default bucket configured")]
    NoBucket,

    #[error("Invalid object URL: {0}")]
    InvalidUrl(String),

    #[error("Content type is not a valid header value: {0}")]
    InvalidContentType(String),

    #[error("Unsupported source URL scheme: {0}")]
    UnsupportedScheme(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Signing error: {0}")]
    Sign(#[from] SignError),

    #[error("Network error: {0}")]
    Transport(#[from] TransportError),

    #[error("Upload rejected with status {}", .0.status)]
    Rejected(HttpResponse),
}

impl UploadError {
    /// The store's response, when the store rejected the upload.
    pub fn response(&self) -> Option<&HttpResponse> {
        match self {
            UploadError::Rejected(response) => Some(response),
            _ => None,
        }
    }
}

/// A single object upload.
///
/// `data` and `destination` are always present; `bucket` falls back to the
/// configured default at send time.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    /// Object bytes. Must be final before the request is signed.
    pub data: Bytes,
    /// Target bucket; the configured default when `None`.
    pub bucket: Option<String>,
    /// Object key within the bucket.
    pub destination: String,
    /// Canned ACL sent as `x-amz-acl`.
    pub access: AccessControl,
    /// Content type sent as `Content-Type`.
    pub mime: String,
    /// Extra caller headers. Merged in before the mandated headers, which
    /// always win for `Content-Type` and `x-amz-acl`.
    pub headers: HeaderMap,
}

impl UploadRequest {
    /// Create an upload with the default (private) access level.
    pub fn new(
        data: impl Into<Bytes>,
        destination: impl Into<String>,
        mime: impl Into<String>,
    ) -> Self {
        Self {
            data: data.into(),
            bucket: None,
            destination: destination.into(),
            access: AccessControl::default(),
            mime: mime.into(),
            headers: HeaderMap::new(),
        }
    }

    /// Target an explicit bucket instead of the configured default.
    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = Some(bucket.into());
        self
    }

    /// Set the access level.
    pub fn with_access(mut self, access: AccessControl) -> Self {
        self.access = access;
        self
    }

    /// Attach extra request headers.
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }
}

/// The confirmed state of an object after a successful upload.
#[derive(Debug, Clone)]
pub struct UploadOutcome {
    pub data: Bytes,
    pub bucket: String,
    pub destination: String,
    pub access: AccessControl,
    pub mime: String,
}

/// Build the object URL for a bucket and key per the configured style.
fn object_url(config: &Config, bucket: &str, key: &str) -> Result<Url, UploadError> {
    let endpoint = match &config.endpoint {
        Some(endpoint) => endpoint.trim_end_matches('/').to_owned(),
        None => format!("https://s3.{}.amazonaws.com", config.region),
    };
    let key = key.trim_start_matches('/');

    let raw = match config.addressing {
        AddressingStyle::VirtualHosted => {
            let (scheme, host) = endpoint
                .split_once("://")
                .ok_or_else(|| UploadError::InvalidUrl(endpoint.clone()))?;
            format!("{scheme}://{bucket}.{host}/{key}")
        }
        AddressingStyle::Path => format!("{endpoint}/{bucket}/{key}"),
    };

    Url::parse(&raw).map_err(|e| UploadError::InvalidUrl(format!("{raw}: {e}")))
}

/// Uploads objects to an S3-compatible store.
///
/// Holds no mutable state; a single `Uploader` can be shared across tasks
/// and called concurrently. Each call issues exactly one PUT (the path/URL
/// variants add exactly one source read) with no retries; cancellation is
/// dropping the future.
pub struct Uploader {
    config: Config,
    signer: Box<dyn Signer>,
    transport: Box<dyn HttpTransport>,
}

impl Uploader {
    /// Create an uploader from its collaborators.
    pub fn new(
        config: Config,
        signer: impl Signer + 'static,
        transport: impl HttpTransport + 'static,
    ) -> Self {
        Self {
            config,
            signer: Box::new(signer),
            transport: Box::new(transport),
        }
    }

    /// Create a SigV4/reqwest uploader from configuration alone.
    ///
    /// Credentials come from the config when set, otherwise from the
    /// `AWS_*` environment variables.
    pub fn from_config(config: Config) -> Result<Self, UploadError> {
        let credentials = match Credentials::from_config(&config) {
            Ok(credentials) => credentials,
            Err(_) => Credentials::from_env()?,
        };
        let signer = SigV4Signer::new(credentials, config.region.clone());
        let transport = ReqwestTransport::new()?;
        Ok(Self::new(config, signer, transport))
    }

    /// Upload in-memory bytes.
    ///
    /// Resolves the bucket, builds the object URL, merges headers (the
    /// mandated `Content-Type` and `x-amz-acl` override caller-supplied
    /// ones so the declared access level is always honored), signs, and
    /// issues one PUT.
    ///
    /// Success is strictly HTTP 200. Other 2xx codes are treated as a
    /// rejection, matching the store contract this client was written
    /// against; branch on [`UploadError::Rejected`] to inspect them.
    #[tracing::instrument(
        name = "upload.put_bytes",
        skip(self, request),
        fields(
            bucket = tracing::field::Empty,
            key = %request.destination,
            bytes = request.data.len(),
        ),
        err
    )]
    pub async fn put_bytes(&self, request: UploadRequest) -> Result<UploadOutcome, UploadError> {
        let bucket = request
            .bucket
            .clone()
            .or_else(|| self.config.default_bucket.clone())
            .ok_or(UploadError::NoBucket)?;
        tracing::Span::current().record("bucket", bucket.as_str());

        let url = object_url(&self.config, &bucket, &request.destination)?;

        let mut headers = request.headers.clone();
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_str(&request.mime)
                .map_err(|_| UploadError::InvalidContentType(request.mime.clone()))?,
        );
        headers.insert("x-amz-acl", HeaderValue::from_static(request.access.as_str()));

        let signed = self
            .signer
            .headers(&Method::PUT, &url, &headers, &request.data)?;

        debug!(%url, "Sending PUT");
        let response = self
            .transport
            .send(HttpRequest {
                method: Method::PUT,
                url,
                headers: signed,
                body: request.data.clone(),
            })
            .await?;

        if response.status == StatusCode::OK {
            info!(
                bucket = %bucket,
                key = %request.destination,
                bytes = request.data.len(),
                acl = %request.access,
                "Upload completed"
            );
            Ok(UploadOutcome {
                data: request.data,
                bucket,
                destination: request.destination,
                access: request.access,
                mime: request.mime,
            })
        } else {
            warn!(
                bucket = %bucket,
                key = %request.destination,
                status = %response.status,
                "Upload rejected by store"
            );
            Err(UploadError::Rejected(response))
        }
    }

    /// Upload the content behind a URL.
    ///
    /// Reads the full byte content (`file://` via the filesystem,
    /// `http(s)://` via the transport), derives the content type from the
    /// URL path, and delegates to [`Uploader::put_bytes`].
    pub async fn put_url(
        &self,
        source: &Url,
        destination: impl Into<String>,
        bucket: Option<String>,
        access: AccessControl,
    ) -> Result<UploadOutcome, UploadError> {
        let mime = mime::for_path(source.path());
        let data = self.read_source(source).await?;

        let mut request = UploadRequest::new(data, destination, mime).with_access(access);
        request.bucket = bucket;
        self.put_bytes(request).await
    }

    /// Upload a local file.
    ///
    /// Resolves the path to a `file://` URL and delegates to
    /// [`Uploader::put_url`]; relative paths resolve against the current
    /// directory.
    pub async fn put_path(
        &self,
        path: impl AsRef<Path>,
        destination: impl Into<String>,
        bucket: Option<String>,
        access: AccessControl,
    ) -> Result<UploadOutcome, UploadError> {
        let path = path.as_ref();
        let absolute = if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir()?.join(path)
        };
        let source = Url::from_file_path(&absolute)
            .map_err(|_| UploadError::InvalidUrl(absolute.display().to_string()))?;
        self.put_url(&source, destination, bucket, access).await
    }

    /// Read the full byte content addressed by a source URL.
    async fn read_source(&self, source: &Url) -> Result<Bytes, UploadError> {
        match source.scheme() {
            "file" => {
                let path = source
                    .to_file_path()
                    .map_err(|_| UploadError::InvalidUrl(source.to_string()))?;
                Ok(Bytes::from(tokio::fs::read(path).await?))
            }
            "http" | "https" => {
                let response = self.transport.send(HttpRequest::get(source.clone())).await?;
                if response.status.is_success() {
                    Ok(response.body)
                } else {
                    Err(UploadError::Io(std::io::Error::other(format!(
                        "Reading {source} failed with status {}",
                        response.status
                    ))))
                }
            }
            scheme => Err(UploadError::UnsupportedScheme(scheme.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path_style_config(endpoint: &str) -> Config {
        let mut config = Config::new("us-east-1");
        config.endpoint = Some(endpoint.into());
        config.addressing = AddressingStyle::Path;
        config
    }

    #[test]
    fn test_object_url_default_endpoint_virtual_hosted() {
        let config = Config::new("eu-west-2");
        let url = object_url(&config, "assets", "images/x.png").unwrap();
        assert_eq!(
            url.as_str(),
            "https://assets.s3.eu-west-2.amazonaws.com/images/x.png"
        );
    }

    #[test]
    fn test_object_url_path_style_custom_endpoint() {
        let config = path_style_config("http://localhost:9000");
        let url = object_url(&config, "assets", "images/x.png").unwrap();
        assert_eq!(url.as_str(), "http://localhost:9000/assets/images/x.png");
    }

    #[test]
    fn test_object_url_strips_leading_slash_in_key() {
        let config = path_style_config("http://localhost:9000/");
        let url = object_url(&config, "b", "/k").unwrap();
        assert_eq!(url.as_str(), "http://localhost:9000/b/k");
    }

    #[test]
    fn test_object_url_virtual_hosted_custom_endpoint() {
        let mut config = Config::new("us-east-1");
        config.endpoint = Some("https://storage.example.com".into());
        let url = object_url(&config, "media", "a/b.txt").unwrap();
        assert_eq!(url.as_str(), "https://media.storage.example.com/a/b.txt");
    }

    #[test]
    fn test_upload_request_builder() {
        let request = UploadRequest::new(&b"data"[..], "k", "text/plain")
            .with_bucket("b")
            .with_access(AccessControl::PublicRead);
        assert_eq!(request.bucket.as_deref(), Some("b"));
        assert_eq!(request.access, AccessControl::PublicRead);
        assert_eq!(request.mime, "text/plain");
        assert!(request.headers.is_empty());
    }
}
