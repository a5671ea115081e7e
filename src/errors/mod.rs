//! Error handling module for the catalog client.
//!
//! Every failure of a request against the product endpoint ends up as a
//! [`ClientError`]. Callers log it; nothing here is shown to the user.

/// Error codes as constants to avoid stringly-typed errors.
pub mod codes {
    pub const TRANSPORT_ERROR: &str = "TRANSPORT_ERROR";
    pub const HTTP_STATUS: &str = "HTTP_STATUS";
    pub const DECODE_ERROR: &str = "DECODE_ERROR";
    pub const ENCODE_ERROR: &str = "ENCODE_ERROR";
}

/// Client error type.
#[derive(Debug)]
pub enum ClientError {
    /// Connection refused, reset, DNS failure and similar
    Transport(String),
    /// The server answered with a non-success status
    Status { status: u16, body: String },
    /// The response body was not the JSON we expected
    Decode(String),
    /// Query parameters could not be encoded
    Encode(String),
}

impl ClientError {
    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            ClientError::Transport(_) => codes::TRANSPORT_ERROR,
            ClientError::Status { .. } => codes::HTTP_STATUS,
            ClientError::Decode(_) => codes::DECODE_ERROR,
            ClientError::Encode(_) => codes::ENCODE_ERROR,
        }
    }

    /// Get the error message.
    pub fn message(&self) -> String {
        match self {
            ClientError::Transport(msg) => msg.clone(),
            ClientError::Status { status, body } if body.is_empty() => {
                format!("server responded with {}", status)
            }
            ClientError::Status { status, body } => {
                format!("server responded with {}: {}", status, body)
            }
            ClientError::Decode(msg) => msg.clone(),
            ClientError::Encode(msg) => msg.clone(),
        }
    }
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error_code(), self.message())
    }
}

impl std::error::Error for ClientError {}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return ClientError::Decode(format!("Invalid response body: {}", err));
        }
        match err.status() {
            Some(status) => ClientError::Status {
                status: status.as_u16(),
                body: String::new(),
            },
            None => ClientError::Transport(format!("Request failed: {}", err)),
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Decode(format!("JSON error: {}", err))
    }
}

impl From<serde_urlencoded::ser::Error> for ClientError {
    fn from(err: serde_urlencoded::ser::Error) -> Self {
        ClientError::Encode(format!("Query encoding error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_code() {
        let err = ClientError::Status {
            status: 404,
            body: "Product not found with ID: 9".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "HTTP_STATUS: server responded with 404: Product not found with ID: 9"
        );

        let err = ClientError::Status {
            status: 500,
            body: String::new(),
        };
        assert_eq!(err.message(), "server responded with 500");
    }

    #[test]
    fn test_json_error_maps_to_decode() {
        let json_err = serde_json::from_str::<Vec<i64>>("<html>").unwrap_err();
        let err: ClientError = json_err.into();
        assert_eq!(err.error_code(), codes::DECODE_ERROR);
    }
}
