//! Object access control levels
//!
//! S3 canned ACLs supported for uploads. The selected level is sent as the
//! `x-amz-acl` header on every PUT.

use serde::{Deserialize, Serialize};

/// Canned access control level for an uploaded object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AccessControl {
    /// Owner-only access (the store's default).
    #[default]
    Private,
    /// Anyone can read the object.
    PublicRead,
    /// Anyone can read or overwrite the object.
    PublicReadWrite,
    /// Any authenticated user of the store can read the object.
    AuthenticatedRead,
}

impl AccessControl {
    /// The wire token sent in the `x-amz-acl` header.
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessControl::Private => "private",
            AccessControl::PublicRead => "public-read",
            AccessControl::PublicReadWrite => "public-read-write",
            AccessControl::AuthenticatedRead => "authenticated-read",
        }
    }
}

impl std::fmt::Display for AccessControl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_tokens() {
        assert_eq!(AccessControl::Private.as_str(), "private");
        assert_eq!(AccessControl::PublicRead.as_str(), "public-read");
        assert_eq!(AccessControl::PublicReadWrite.as_str(), "public-read-write");
        assert_eq!(AccessControl::AuthenticatedRead.as_str(), "authenticated-read");
    }

    #[test]
    fn test_default_is_private() {
        assert_eq!(AccessControl::default(), AccessControl::Private);
    }

    #[test]
    fn test_serde_round_trip() {
        let yaml = serde_yaml::to_string(&AccessControl::PublicRead).unwrap();
        assert_eq!(yaml.trim(), "public-read");
        let parsed: AccessControl = serde_yaml::from_str("authenticated-read").unwrap();
        assert_eq!(parsed, AccessControl::AuthenticatedRead);
    }
}
