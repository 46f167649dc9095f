//! Configuration for the uploader
//!
//! Handles loading and parsing of YAML configuration files with support for
//! environment variable expansion and validation.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

mod loader;

pub use loader::ConfigLoader;

/// Validate that a URL starts with http:// or https://
fn is_valid_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// How object URLs are formed from bucket and key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AddressingStyle {
    /// `https://<bucket>.<endpoint>/<key>` (AWS default).
    #[default]
    VirtualHosted,
    /// `https://<endpoint>/<bucket>/<key>` (common for MinIO-style stores).
    Path,
}

/// Uploader configuration.
///
/// The default bucket is an explicit configuration value, not process-wide
/// state: callers that omit a bucket on an upload fall back to
/// `default_bucket`, and uploads fail up front when neither is set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Bucket used when an upload does not name one.
    #[serde(default)]
    pub default_bucket: Option<String>,

    /// Region used for signing and for the default AWS endpoint.
    pub region: String,

    /// Custom endpoint, e.g. `http://localhost:9000` for a local store.
    /// Defaults to `https://s3.<region>.amazonaws.com` when unset.
    #[serde(default)]
    pub endpoint: Option<String>,

    /// URL addressing style.
    #[serde(default)]
    pub addressing: AddressingStyle,

    /// Access key ID. Falls back to `AWS_ACCESS_KEY_ID` when unset.
    #[serde(default)]
    pub access_key: Option<String>,

    /// Secret access key. Falls back to `AWS_SECRET_ACCESS_KEY` when unset.
    #[serde(default)]
    pub secret_key: Option<String>,
}

impl Config {
    /// Create a configuration for a region with everything else defaulted.
    pub fn new(region: impl Into<String>) -> Self {
        Self {
            default_bucket: None,
            region: region.into(),
            endpoint: None,
            addressing: AddressingStyle::default(),
            access_key: None,
            secret_key: None,
        }
    }

    /// Load configuration from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        ConfigLoader::load(path)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.region.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "Region must not be empty".into(),
            ));
        }

        if let Some(ref endpoint) = self.endpoint {
            if !is_valid_http_url(endpoint) {
                return Err(ConfigError::ValidationError(format!(
                    "Invalid endpoint '{endpoint}': must start with http:// or https://"
                )));
            }

            // Object URLs are formed by splicing bucket and key around the
            // endpoint host, so a path component here would end up inside
            // the virtual-hosted host position.
            let after_scheme = endpoint.splitn(2, "://").nth(1).unwrap_or("");
            if after_scheme.trim_end_matches('/').contains('/') {
                return Err(ConfigError::ValidationError(format!(
                    "Invalid endpoint '{endpoint}': must not contain a path"
                )));
            }
        }

        if let Some(ref bucket) = self.default_bucket {
            if bucket.trim().is_empty() {
                return Err(ConfigError::ValidationError(
                    "default_bucket must not be empty when set".into(),
                ));
            }
        }

        Ok(())
    }
}
