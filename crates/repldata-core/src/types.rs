//! Validated identifier newtypes shared across the workspace.

use std::fmt;

/// AWS Account ID (12-digit string).
///
/// Used as the deployment-target default and as the optional destination
/// account on a replication rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct AccountId(String);

impl AccountId {
    /// Account ID assumed when no deployment target is configured.
    pub const DEFAULT: &str = "000000000000";

    /// Create a new account ID from a string.
    ///
    /// # Errors
    /// Returns an error if the account ID is not a 12-digit numeric string.
    pub fn new(id: impl Into<String>) -> Result<Self, crate::ReplDataError> {
        let id = id.into();
        if id.len() != 12 || !id.chars().all(|c| c.is_ascii_digit()) {
            return Err(crate::ReplDataError::InvalidAccountId(id));
        }
        Ok(Self(id))
    }

    /// Get the account ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for AccountId {
    fn default() -> Self {
        Self(Self::DEFAULT.to_owned())
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// AWS Region identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct AwsRegion(String);

impl AwsRegion {
    /// Region assumed when no deployment target is configured.
    pub const DEFAULT: &str = "us-east-1";

    /// Create a new region.
    #[must_use]
    pub fn new(region: impl Into<String>) -> Self {
        Self(region.into())
    }

    /// Get the region as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for AwsRegion {
    fn default() -> Self {
        Self(Self::DEFAULT.to_owned())
    }
}

impl fmt::Display for AwsRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// CloudFormation logical resource ID.
///
/// Logical IDs name resources and outputs within a single template. They are
/// restricted to 1-255 alphanumeric ASCII characters.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub struct LogicalId(String);

impl LogicalId {
    /// Maximum logical ID length in characters.
    const MAX_LEN: usize = 255;

    /// Create a new logical ID from a string.
    ///
    /// # Errors
    /// Returns an error if the ID is empty, longer than 255 characters, or
    /// contains anything but ASCII letters and digits.
    pub fn new(id: impl Into<String>) -> Result<Self, crate::ReplDataError> {
        let id = id.into();
        if id.is_empty() || id.len() > Self::MAX_LEN || !id.chars().all(|c| c.is_ascii_alphanumeric())
        {
            return Err(crate::ReplDataError::InvalidLogicalId(id));
        }
        Ok(Self(id))
    }

    /// Get the logical ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LogicalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// CloudFormation stack name.
///
/// Stack names must start with a letter, contain only letters, digits, and
/// hyphens, and be at most 128 characters long.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub struct StackName(String);

impl StackName {
    /// Maximum stack name length in characters.
    const MAX_LEN: usize = 128;

    /// Create a new stack name from a string.
    ///
    /// # Errors
    /// Returns an error if the name violates the CloudFormation stack naming
    /// rules.
    pub fn new(name: impl Into<String>) -> Result<Self, crate::ReplDataError> {
        let name = name.into();
        let starts_with_letter = name.chars().next().is_some_and(|c| c.is_ascii_alphabetic());
        let valid_chars = name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-');
        if !starts_with_letter || !valid_chars || name.len() > Self::MAX_LEN {
            return Err(crate::ReplDataError::InvalidStackName(name));
        }
        Ok(Self(name))
    }

    /// Get the stack name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StackName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_create_valid_account_id() {
        let id = AccountId::new("123456789012").unwrap();
        assert_eq!(id.as_str(), "123456789012");
    }

    #[test]
    fn test_should_reject_invalid_account_id() {
        assert!(AccountId::new("12345").is_err());
        assert!(AccountId::new("abcdefghijkl").is_err());
        assert!(AccountId::new("1234567890123").is_err());
    }

    #[test]
    fn test_should_use_default_account_id() {
        let id = AccountId::default();
        assert_eq!(id.as_str(), "000000000000");
    }

    #[test]
    fn test_should_create_region() {
        let region = AwsRegion::new("eu-west-1");
        assert_eq!(region.as_str(), "eu-west-1");
    }

    #[test]
    fn test_should_create_valid_logical_id() {
        let id = LogicalId::new("MasterBucket").unwrap();
        assert_eq!(id.as_str(), "MasterBucket");
    }

    #[test]
    fn test_should_reject_invalid_logical_id() {
        assert!(LogicalId::new("").is_err());
        assert!(LogicalId::new("master-bucket").is_err());
        assert!(LogicalId::new("Master Bucket").is_err());
        assert!(LogicalId::new("a".repeat(256)).is_err());
    }

    #[test]
    fn test_should_create_valid_stack_name() {
        let name = StackName::new("S3ReplicationDataSinkB").unwrap();
        assert_eq!(name.as_str(), "S3ReplicationDataSinkB");
    }

    #[test]
    fn test_should_reject_invalid_stack_name() {
        assert!(StackName::new("").is_err());
        assert!(StackName::new("1stack").is_err());
        assert!(StackName::new("-stack").is_err());
        assert!(StackName::new("stack_a").is_err());
        assert!(StackName::new(format!("a{}", "b".repeat(128))).is_err());
    }
}
