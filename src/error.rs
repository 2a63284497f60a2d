//! Error types for the Coralogix provider.

use thiserror::Error;

/// Errors raised while validating, translating or applying a resource.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The requested resource was not found.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// The configuration is structurally invalid or internally inconsistent.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A value has no mapping in the lookup table of its domain.
    #[error("Unknown {domain} token: {token}")]
    UnknownToken {
        /// The enumerated domain that was searched, e.g. `"timeframe"`.
        domain: &'static str,
        /// The offending value, rendered for display.
        token: String,
    },

    /// A provider configuration error occurred.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The requested resource type is unknown.
    #[error("Unknown resource type: {0}")]
    UnknownResource(String),

    /// A serialization/deserialization error occurred.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A gRPC transport error occurred.
    #[error("Transport error: {0}")]
    Transport(#[from] tonic::transport::Error),

    /// Resource already exists (create conflict).
    #[error("Resource already exists: {0}")]
    AlreadyExists(String),

    /// Permission denied (authentication/authorization failure).
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// Quota or rate limit exceeded.
    #[error("Resource exhausted: {0}")]
    ResourceExhausted(String),

    /// Service temporarily unavailable.
    #[error("Service unavailable: {0}")]
    Unavailable(String),

    /// Operation timed out.
    #[error("Deadline exceeded: {0}")]
    DeadlineExceeded(String),

    /// Operation failed due to current state (precondition not met).
    #[error("Failed precondition: {0}")]
    FailedPrecondition(String),

    /// Operation not implemented.
    #[error("Unimplemented: {0}")]
    Unimplemented(String),

    /// The backend rejected the request as malformed.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The backend failed for a reason not covered above.
    #[error("Backend error: {0}")]
    Internal(String),
}

impl ProviderError {
    /// Build an [`ProviderError::UnknownToken`] for `domain`.
    pub fn unknown_token(domain: &'static str, token: impl std::fmt::Debug) -> Self {
        Self::UnknownToken {
            domain,
            token: format!("{:?}", token),
        }
    }

    /// Whether the backend reported that the resource no longer exists.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Get the error message as a string.
    pub fn message(&self) -> &str {
        match self {
            Self::NotFound(msg) => msg,
            Self::Validation(msg) => msg,
            Self::UnknownToken { token, .. } => token,
            Self::Configuration(msg) => msg,
            Self::UnknownResource(msg) => msg,
            Self::Serialization(_err) => "serialization error (see Debug output)",
            Self::Transport(_err) => "transport error (see Debug output)",
            Self::AlreadyExists(msg) => msg,
            Self::PermissionDenied(msg) => msg,
            Self::ResourceExhausted(msg) => msg,
            Self::Unavailable(msg) => msg,
            Self::DeadlineExceeded(msg) => msg,
            Self::FailedPrecondition(msg) => msg,
            Self::Unimplemented(msg) => msg,
            Self::InvalidRequest(msg) => msg,
            Self::Internal(msg) => msg,
        }
    }
}

impl From<tonic::Status> for ProviderError {
    fn from(status: tonic::Status) -> Self {
        let msg = status.message().to_string();
        match status.code() {
            tonic::Code::NotFound => Self::NotFound(msg),
            tonic::Code::InvalidArgument | tonic::Code::OutOfRange => Self::InvalidRequest(msg),
            tonic::Code::AlreadyExists => Self::AlreadyExists(msg),
            tonic::Code::PermissionDenied | tonic::Code::Unauthenticated => {
                Self::PermissionDenied(msg)
            },
            tonic::Code::ResourceExhausted => Self::ResourceExhausted(msg),
            tonic::Code::Unavailable => Self::Unavailable(msg),
            tonic::Code::DeadlineExceeded => Self::DeadlineExceeded(msg),
            tonic::Code::FailedPrecondition | tonic::Code::Aborted => {
                Self::FailedPrecondition(msg)
            },
            tonic::Code::Unimplemented => Self::Unimplemented(msg),
            _ => Self::Internal(format!("{:?}: {}", status.code(), msg)),
        }
    }
}

impl From<tokio::time::error::Elapsed> for ProviderError {
    fn from(err: tokio::time::error::Elapsed) -> Self {
        Self::DeadlineExceeded(err.to_string())
    }
}
