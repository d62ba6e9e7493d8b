use std::fmt;

/// Custom error type for Explorer operations
#[derive(Debug)]
pub enum TfeError {
    /// HTTP request could not be completed (network, DNS, timeout)
    Http(reqwest::Error),
    /// Server answered 429
    RateLimited {
        /// Value of the `x-ratelimit-limit` header, if the server sent one
        limit: Option<String>,
        context: String,
    },
    /// Server answered with a non-2xx status other than 429
    UnexpectedStatus { status: u16, context: String },
    /// Response body could not be decoded into the expected shape
    Decode { context: String, message: String },
    /// Token not found in any source
    TokenNotFound(String),
    /// Failed to read or parse credentials file
    Credentials(String),
    /// Filter expression could not be parsed
    InvalidFilter(String),
}

impl TfeError {
    /// True for the 429 case, so callers can back off and retry
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, TfeError::RateLimited { .. })
    }
}

impl fmt::Display for TfeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TfeError::Http(e) => write!(f, "HTTP request failed: {}", e),
            TfeError::RateLimited { limit, context } => {
                write!(f, "rate limited while fetching {}", context)?;
                if let Some(limit) = limit {
                    write!(f, " (limit: {} requests/s)", limit)?;
                }
                write!(
                    f,
                    " - https://developer.hashicorp.com/terraform/cloud-docs/api-docs#rate-limiting"
                )
            }
            TfeError::UnexpectedStatus { status, context } => {
                write!(f, "unexpected status: {} while fetching {}", status, context)
            }
            TfeError::Decode { context, message } => {
                write!(f, "failed to decode {}: {}", context, message)
            }
            TfeError::TokenNotFound(msg) => write!(f, "{}", msg),
            TfeError::Credentials(msg) => write!(f, "{}", msg),
            TfeError::InvalidFilter(msg) => write!(f, "Invalid filter: {}", msg),
        }
    }
}

impl std::error::Error for TfeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TfeError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for TfeError {
    fn from(err: reqwest::Error) -> Self {
        TfeError::Http(err)
    }
}

/// Result type alias for Explorer operations
pub type Result<T> = std::result::Result<T, TfeError>;
