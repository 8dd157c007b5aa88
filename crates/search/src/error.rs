//! Error types for catalog search operations

use thiserror::Error;

/// Result type for catalog search operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors that can occur while querying the catalog
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level request failure (includes timeouts)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Response arrived with a status other than 200 OK
    #[error("unexpected HTTP status {code}")]
    Status { code: u16 },

    /// Invalid URL
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Payload was not a well-formed results object
    #[error("malformed search payload: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    /// True when the failure came from the transport rather than the payload
    pub fn is_transport(&self) -> bool {
        matches!(self, ClientError::Http(_) | ClientError::Status { .. })
    }

    /// True when the request was cut off by the client timeout
    pub fn is_timeout(&self) -> bool {
        matches!(self, ClientError::Http(e) if e.is_timeout())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_display() {
        let err = ClientError::Status { code: 404 };
        assert!(err.to_string().contains("404"));
        assert!(err.is_transport());
    }

    #[test]
    fn test_decode_error_is_not_transport() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = ClientError::Decode(json_err);
        assert!(!err.is_transport());
        assert!(!err.is_timeout());
    }

    #[test]
    fn test_invalid_url_conversion() {
        let parse_err = url::Url::parse("not a url").unwrap_err();
        let err: ClientError = parse_err.into();
        assert!(err.to_string().contains("invalid URL"));
    }
}
