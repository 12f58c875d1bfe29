//! Error types shared across the repldata workspace.

/// Core error type for the repldata workspace.
#[derive(Debug, thiserror::Error)]
pub enum ReplDataError {
    /// Invalid AWS account ID format.
    #[error("invalid AWS account ID: {0} (must be 12-digit numeric string)")]
    InvalidAccountId(String),

    /// Invalid CloudFormation logical ID.
    #[error("invalid logical ID: {0} (must be 1-255 alphanumeric characters)")]
    InvalidLogicalId(String),

    /// Invalid CloudFormation stack name.
    #[error(
        "invalid stack name: {0} (must start with a letter, use only letters, digits, and hyphens, and be at most 128 characters)"
    )]
    InvalidStackName(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Convenience result type for repldata operations.
pub type ReplDataResult<T> = Result<T, ReplDataError>;
