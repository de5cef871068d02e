//! Share link configuration

use http::Uri;
use serde::Deserialize;

use super::error::ValidationError;

/// Where shareable result links point
#[derive(Debug, Clone, Deserialize)]
pub struct ShareConfig {
    /// Base URL of the app; `?data=<token>` is appended
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl ShareConfig {
    /// Validate that the base URL is absolute http(s)
    pub fn validate(&self) -> Result<(), ValidationError> {
        let uri: Uri = self
            .base_url
            .parse()
            .map_err(|_| ValidationError::InvalidShareUrl)?;
        let scheme_ok = matches!(uri.scheme_str(), Some("http") | Some("https"));
        if !scheme_ok || uri.authority().is_none() {
            return Err(ValidationError::InvalidShareUrl);
        }
        Ok(())
    }
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:5173/".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_url(url: &str) -> ShareConfig {
        ShareConfig {
            base_url: url.to_string(),
        }
    }

    #[test]
    fn test_default_base_url_is_valid() {
        assert!(ShareConfig::default().validate().is_ok());
    }

    #[test]
    fn test_https_url_is_valid() {
        assert!(with_url("https://skills.example.com/sorter").validate().is_ok());
    }

    #[test]
    fn test_relative_url_is_rejected() {
        assert_eq!(
            with_url("/sorter").validate(),
            Err(ValidationError::InvalidShareUrl)
        );
    }

    #[test]
    fn test_non_http_scheme_is_rejected() {
        assert_eq!(
            with_url("ftp://example.com/").validate(),
            Err(ValidationError::InvalidShareUrl)
        );
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert_eq!(
            with_url("not a url").validate(),
            Err(ValidationError::InvalidShareUrl)
        );
    }
}
