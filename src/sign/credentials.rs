//! Credential loading
//!
//! Credentials come either from the uploader configuration or from the
//! standard `AWS_*` environment variables. Refresh and rotation are out of
//! scope; credentials are read once and held for the signer's lifetime.

use super::SignError;
use crate::config::Config;

/// Static credentials for request signing.
#[derive(Debug, Clone)]
pub struct Credentials {
    access_key_id: String,
    secret_access_key: String,
    session_token: Option<String>,
}

impl Credentials {
    /// Create new credentials
    pub fn new(access_key_id: impl Into<String>, secret_access_key: impl Into<String>) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
            session_token: None,
        }
    }

    /// Create credentials with session token (for temporary credentials)
    pub fn with_session_token(
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
        session_token: impl Into<String>,
    ) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
            session_token: Some(session_token.into()),
        }
    }

    /// Load credentials from environment variables
    ///
    /// Looks for:
    /// - `AWS_ACCESS_KEY_ID`
    /// - `AWS_SECRET_ACCESS_KEY`
    /// - `AWS_SESSION_TOKEN` (optional)
    pub fn from_env() -> Result<Self, SignError> {
        let access_key = std::env::var("AWS_ACCESS_KEY_ID")
            .map_err(|_| SignError::MissingCredentials("AWS_ACCESS_KEY_ID not set".into()))?;

        let secret_key = std::env::var("AWS_SECRET_ACCESS_KEY")
            .map_err(|_| SignError::MissingCredentials("AWS_SECRET_ACCESS_KEY not set".into()))?;

        let session_token = std::env::var("AWS_SESSION_TOKEN").ok();

        Ok(match session_token {
            Some(token) => Credentials::with_session_token(access_key, secret_key, token),
            None => Credentials::new(access_key, secret_key),
        })
    }

    /// Load credentials from configuration
    ///
    /// Uses the `access_key` and `secret_key` fields.
    pub fn from_config(config: &Config) -> Result<Self, SignError> {
        let access_key = config.access_key.as_ref().ok_or_else(|| {
            SignError::MissingCredentials("access_key not set in config".into())
        })?;

        let secret_key = config.secret_key.as_ref().ok_or_else(|| {
            SignError::MissingCredentials("secret_key not set in config".into())
        })?;

        Ok(Credentials::new(access_key.clone(), secret_key.clone()))
    }

    /// Get the access key ID
    pub fn access_key_id(&self) -> &str {
        &self.access_key_id
    }

    /// Get the secret access key
    pub fn secret_access_key(&self) -> &str {
        &self.secret_access_key
    }

    /// Get the session token (if any)
    pub fn session_token(&self) -> Option<&str> {
        self.session_token.as_deref()
    }
}
