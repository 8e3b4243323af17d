use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";
pub const BASE_URL_ENV: &str = "BLOG_API_URL";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid base url {0:?}: expected an http:// or https:// address")]
    InvalidBaseUrl(String),
}

/// Where the posts API lives. Fixed for the lifetime of a client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let base_url = base_url.trim().trim_end_matches('/');
        let host = base_url
            .strip_prefix("http://")
            .or_else(|| base_url.strip_prefix("https://"));

        match host {
            Some(host) if !host.is_empty() => Ok(Self {
                base_url: base_url.to_string(),
            }),
            _ => Err(ConfigError::InvalidBaseUrl(base_url.to_string())),
        }
    }

    /// Reads `BLOG_API_URL` (a `.env` file is honoured), falling back to
    /// [`DEFAULT_BASE_URL`].
    #[cfg(feature = "native")]
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let base_url = std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.into());
        Self::new(&base_url)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_trimmed() {
        let config = ClientConfig::new(" https://api.example.com/// ").unwrap();
        assert_eq!(config.base_url, "https://api.example.com");
    }

    #[test]
    fn non_http_urls_are_rejected() {
        assert_eq!(
            ClientConfig::new("ftp://example.com"),
            Err(ConfigError::InvalidBaseUrl("ftp://example.com".into()))
        );
        assert!(ClientConfig::new("http://").is_err());
        assert!(ClientConfig::new("").is_err());
    }

    #[test]
    fn default_points_at_local_api() {
        assert_eq!(ClientConfig::default().base_url, DEFAULT_BASE_URL);
    }
}
