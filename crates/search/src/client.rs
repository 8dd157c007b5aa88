//! HTTP client wrapper for the catalog API

use crate::error::{ClientError, ClientResult};
use reqwest::{Client as ReqwestClient, Response, StatusCode, Url};
use std::time::Duration;

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Request timeout; expiry surfaces as an ordinary request failure
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(15),
            user_agent: format!(
                "{}/{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION")
            ),
        }
    }
}

/// Thin wrapper over reqwest with a bounded timeout.
///
/// No retries: a failed search surfaces immediately and re-submission is the
/// caller's decision.
#[derive(Clone)]
pub struct Client {
    inner: ReqwestClient,
}

impl Client {
    /// Creates a client with default configuration
    pub fn new() -> ClientResult<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Creates a client with custom configuration
    pub fn with_config(config: ClientConfig) -> ClientResult<Self> {
        let inner = ReqwestClient::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(ClientError::Http)?;
        Ok(Self { inner })
    }

    /// Performs a GET, accepting only a 200 response
    pub async fn get(&self, url: Url) -> ClientResult<Response> {
        let response = self.inner.get(url).send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(ClientError::Status {
                code: status.as_u16(),
            });
        }
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(15));
        assert!(config.user_agent.starts_with("storesearch-search/"));
    }

    #[test]
    fn test_client_creation() {
        assert!(Client::new().is_ok());
    }

    #[test]
    fn test_client_with_custom_config() {
        let config = ClientConfig {
            timeout: Duration::from_secs(2),
            user_agent: "TestAgent".to_string(),
        };
        assert!(Client::with_config(config).is_ok());
    }
}
