use thiserror::Error;

#[derive(Error, Debug)]
pub enum SoapError {
    #[error("Transport error calling {endpoint}: {source}")]
    TransportError {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Malformed response (HTTP {status}): {reason}")]
    MalformedResponse {
        status: u16,
        reason: String,
        raw: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Transport,
    Protocol,
    Configuration,
    System,
}

impl SoapError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SoapError::TransportError { .. } => ErrorCategory::Transport,
            SoapError::MalformedResponse { .. } => ErrorCategory::Protocol,
            SoapError::ConfigError { .. } | SoapError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            SoapError::IoError(_) | SoapError::SerializationError(_) => ErrorCategory::System,
        }
    }

    /// Raw response text attached to a [`SoapError::MalformedResponse`].
    pub fn raw_response(&self) -> Option<&str> {
        match self {
            SoapError::MalformedResponse { raw, .. } => Some(raw),
            _ => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, SoapError::TransportError { source, .. } if source.is_timeout())
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SoapError::TransportError { .. } if self.is_timeout() => {
                "The service did not answer in time; check its load or raise timeout_seconds"
            }
            SoapError::TransportError { .. } => {
                "Check that the SOAP service is running and reachable at the configured endpoint"
            }
            SoapError::MalformedResponse { .. } => {
                "Inspect the raw response; the endpoint may not be the bestiary SOAP service"
            }
            SoapError::ConfigError { .. } | SoapError::InvalidConfigValueError { .. } => {
                "Review the configuration file and command line overrides"
            }
            SoapError::IoError(_) => "Check file paths and permissions",
            SoapError::SerializationError(_) => "Use the text output instead of --json",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SoapError::TransportError { endpoint, .. } if self.is_timeout() => {
                format!("Request to {} timed out", endpoint)
            }
            SoapError::TransportError { endpoint, .. } => {
                format!("Could not reach the SOAP service at {}", endpoint)
            }
            SoapError::MalformedResponse { status, .. } => {
                format!("The server answered with unreadable XML (HTTP {})", status)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SoapError>;
