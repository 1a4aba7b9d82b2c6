/*!
 * Error types for the lingoswitch translation core.
 *
 * Two layers of errors exist: `ProviderError` covers transport-level
 * failures inside a backend client, while `TranslationError` is the
 * taxonomy the orchestration service and factory expose to callers.
 * The boundary layer maps `TranslationError` kinds to status codes.
 */

use thiserror::Error;

/// Errors that can occur when calling a backend translation API
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error when making an API request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String,
    },

    /// Error establishing or maintaining a connection
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Error related to rate limiting
    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),

    /// Error with authentication
    #[error("Authentication error: {0}")]
    AuthenticationError(String),
}

/// Errors surfaced by the dispatch core to the boundary layer
#[derive(Error, Debug)]
pub enum TranslationError {
    /// Malformed input: empty text, size limits exceeded, same-language pair
    #[error("Validation error: {0}")]
    Validation(String),

    /// The active provider rejected the source/target combination
    #[error("Invalid language pair: {source} -> {target}")]
    InvalidLanguagePair {
        /// Source language code
        // `r#source` is the same identifier as `source`, but keeps thiserror's
        // name-based source-field detection from requiring `String: Error`.
        r#source: String,
        /// Target language code
        target: String,
    },

    /// The backend call failed (network, auth, quota, model error)
    #[error("Provider unavailable: {0}")]
    ProviderUnavailable(#[from] ProviderError),

    /// The configured or requested engine name matches no known provider
    #[error("Unknown translation engine: {0}")]
    UnknownEngine(String),

    /// Anything uncategorized; logged in full, reported generically
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl TranslationError {
    /// Stable machine-readable code for the boundary layer
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::InvalidLanguagePair { .. } => "INVALID_LANGUAGE_PAIR",
            Self::ProviderUnavailable(_) => "PROVIDER_UNAVAILABLE",
            Self::UnknownEngine(_) => "UNKNOWN_ENGINE",
            Self::Unexpected(_) => "UNEXPECTED_ERROR",
        }
    }

    /// Whether the caller can fix this by changing the request
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::InvalidLanguagePair { .. }
        )
    }
}

impl From<anyhow::Error> for TranslationError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unexpected(error.to_string())
    }
}
