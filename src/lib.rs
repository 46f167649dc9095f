//! s3-putr
//!
//! A small async client for uploading objects to S3-compatible stores with
//! AWS SigV4 request signing.
//!
//! # Features
//!
//! - **Upload Only**: a single signed PUT per call, nothing else
//! - **Pluggable Seams**: `Signer` and `HttpTransport` traits for testing
//!   and non-AWS stores
//! - **Byte-Source Adapters**: upload from memory, a local path, or a URL
//! - **Default Bucket**: configured once, used when a call omits the bucket
//!
//! # Example
//!
//! ```no_run
//! use s3_putr::{AccessControl, Config, UploadRequest, Uploader};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.yaml")?;
//!     let uploader = Uploader::from_config(config)?;
//!
//!     let request = UploadRequest::new(&b"hello"[..], "docs/hello.txt", "text/plain")
//!         .with_access(AccessControl::PublicRead);
//!     let stored = uploader.put_bytes(request).await?;
//!     println!("stored {} bytes in {}", stored.data.len(), stored.bucket);
//!     Ok(())
//! }
//! ```

pub mod acl;
pub mod config;
pub mod mime;
pub mod sign;
pub mod transport;
pub mod upload;

// Re-export commonly used types
pub use acl::AccessControl;
pub use config::{AddressingStyle, Config, ConfigError};
pub use sign::{Credentials, SigV4Signer, SignError, Signer};
pub use transport::{HttpRequest, HttpResponse, HttpTransport, ReqwestTransport, TransportError};
pub use upload::{UploadError, UploadOutcome, UploadRequest, Uploader};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
