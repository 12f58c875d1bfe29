//! `AWS::S3::Bucket` and `AWS::S3::BucketPolicy` property types.
//!
//! [`BucketProperties`] defaults to the access posture every bucket in this
//! platform carries: object ownership enforced on the bucket owner, public
//! access fully blocked, and SSE-S3 encryption. Versioning and replication
//! are opt-in per bucket.

use repldata_core::AccountId;
use serde::Serialize;
use typed_builder::TypedBuilder;

use crate::StrValue;
use crate::iam::PolicyDocument;

// ---------------------------------------------------------------------------
// Enumerated property values
// ---------------------------------------------------------------------------

/// S3 object ownership setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ObjectOwnership {
    /// ACLs are disabled; the bucket owner owns every object.
    BucketOwnerEnforced,
    /// The bucket owner owns objects written with `bucket-owner-full-control`.
    BucketOwnerPreferred,
    /// The writing account owns the object.
    ObjectWriter,
}

impl ObjectOwnership {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BucketOwnerEnforced => "BucketOwnerEnforced",
            Self::BucketOwnerPreferred => "BucketOwnerPreferred",
            Self::ObjectWriter => "ObjectWriter",
        }
    }
}

impl std::fmt::Display for ObjectOwnership {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Server-side encryption algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SseAlgorithm {
    /// S3-managed keys.
    #[serde(rename = "AES256")]
    Aes256,
    /// KMS-managed keys.
    #[serde(rename = "aws:kms")]
    AwsKms,
}

impl SseAlgorithm {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Aes256 => "AES256",
            Self::AwsKms => "aws:kms",
        }
    }
}

impl std::fmt::Display for SseAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bucket versioning status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum VersioningStatus {
    /// Versioning is enabled.
    Enabled,
    /// Versioning was enabled and is now suspended.
    Suspended,
}

/// Status of a replication rule or of delete-marker replication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RuleStatus {
    /// The rule applies.
    Enabled,
    /// The rule is ignored.
    Disabled,
}

// ---------------------------------------------------------------------------
// Bucket posture configuration
// ---------------------------------------------------------------------------

/// Ownership controls for a bucket.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct OwnershipControls {
    /// Ownership rules (CloudFormation models this as a list with one entry).
    pub rules: Vec<OwnershipControlsRule>,
}

impl OwnershipControls {
    /// Ownership controls enforcing bucket-owner ownership of all objects.
    #[must_use]
    pub fn enforced() -> Self {
        Self {
            rules: vec![OwnershipControlsRule {
                object_ownership: ObjectOwnership::BucketOwnerEnforced,
            }],
        }
    }
}

/// A single ownership rule.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct OwnershipControlsRule {
    /// The object ownership setting.
    pub object_ownership: ObjectOwnership,
}

/// Public access block configuration.
///
/// AWS defines exactly four boolean fields for this configuration.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
#[allow(clippy::struct_excessive_bools)]
pub struct PublicAccessBlockConfiguration {
    /// Whether Amazon S3 should block public ACLs for this bucket.
    pub block_public_acls: bool,
    /// Whether Amazon S3 should block public bucket policies.
    pub block_public_policy: bool,
    /// Whether Amazon S3 should ignore public ACLs for this bucket.
    pub ignore_public_acls: bool,
    /// Whether Amazon S3 should restrict public bucket policies.
    pub restrict_public_buckets: bool,
}

impl PublicAccessBlockConfiguration {
    /// Block every form of public access.
    #[must_use]
    pub fn block_all() -> Self {
        Self {
            block_public_acls: true,
            block_public_policy: true,
            ignore_public_acls: true,
            restrict_public_buckets: true,
        }
    }
}

/// Server-side encryption configuration for a bucket.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct BucketEncryption {
    /// Encryption rules (one per bucket in practice).
    pub server_side_encryption_configuration: Vec<ServerSideEncryptionRule>,
}

impl BucketEncryption {
    /// SSE-S3 encryption with S3-managed keys.
    #[must_use]
    pub fn s3_managed() -> Self {
        Self {
            server_side_encryption_configuration: vec![ServerSideEncryptionRule {
                server_side_encryption_by_default: ServerSideEncryptionByDefault {
                    sse_algorithm: SseAlgorithm::Aes256,
                },
            }],
        }
    }
}

/// A single server-side encryption rule.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ServerSideEncryptionRule {
    /// The default encryption applied to new objects.
    pub server_side_encryption_by_default: ServerSideEncryptionByDefault,
}

/// Default encryption applied to objects written without explicit settings.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ServerSideEncryptionByDefault {
    /// The encryption algorithm.
    #[serde(rename = "SSEAlgorithm")]
    pub sse_algorithm: SseAlgorithm,
}

/// Versioning configuration for a bucket.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct VersioningConfiguration {
    /// The versioning status.
    pub status: VersioningStatus,
}

impl VersioningConfiguration {
    /// Versioning enabled.
    #[must_use]
    pub fn enabled() -> Self {
        Self {
            status: VersioningStatus::Enabled,
        }
    }
}

// ---------------------------------------------------------------------------
// Replication configuration
// ---------------------------------------------------------------------------

/// Replication configuration attached to a source bucket.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReplicationConfiguration {
    /// ARN of the role S3 assumes to replicate objects.
    pub role: StrValue,
    /// Ordered replication rules, one per destination.
    pub rules: Vec<ReplicationRule>,
}

/// A single replication rule.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReplicationRule {
    /// The replication destination.
    pub destination: ReplicationDestination,
    /// Whether the rule applies.
    pub status: RuleStatus,
    /// Rule priority; lower numbers win on overlapping rules.
    pub priority: u32,
    /// Object filter selecting what the rule replicates.
    pub filter: ReplicationRuleFilter,
    /// Whether delete markers are replicated.
    pub delete_marker_replication: DeleteMarkerReplication,
}

/// Destination of a replication rule.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReplicationDestination {
    /// ARN of the destination bucket.
    pub bucket: StrValue,
    /// Destination account for cross-account replication. Unset for the
    /// same-account rules this platform emits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<AccountId>,
    /// Ownership translation for cross-account replication.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_control_translation: Option<AccessControlTranslation>,
}

impl ReplicationDestination {
    /// A same-account destination identified by bucket ARN.
    #[must_use]
    pub fn bucket(arn: StrValue) -> Self {
        Self {
            bucket: arn,
            account: None,
            access_control_translation: None,
        }
    }
}

/// Ownership translation applied to replicated objects.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AccessControlTranslation {
    /// The replica owner (`Destination`).
    pub owner: String,
}

/// Object filter of a replication rule.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReplicationRuleFilter {
    /// Key prefix the rule applies to.
    pub prefix: String,
}

impl ReplicationRuleFilter {
    /// A filter matching every object (empty prefix).
    #[must_use]
    pub fn everything() -> Self {
        Self {
            prefix: String::new(),
        }
    }
}

/// Delete-marker replication setting of a rule.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteMarkerReplication {
    /// Whether delete markers are replicated.
    pub status: RuleStatus,
}

impl DeleteMarkerReplication {
    /// Delete-marker replication enabled.
    #[must_use]
    pub fn enabled() -> Self {
        Self {
            status: RuleStatus::Enabled,
        }
    }
}

// ---------------------------------------------------------------------------
// Resource properties
// ---------------------------------------------------------------------------

/// Properties of an `AWS::S3::Bucket`.
///
/// The builder defaults encode the platform-wide bucket posture; callers opt
/// into versioning and replication only.
#[derive(Debug, Clone, Serialize, TypedBuilder)]
#[serde(rename_all = "PascalCase")]
pub struct BucketProperties {
    /// Explicit bucket name. Unset, so the provisioning engine generates a
    /// unique physical name.
    #[builder(default, setter(strip_option, into))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket_name: Option<String>,

    /// Ownership controls; defaults to bucket-owner enforced.
    #[builder(default = OwnershipControls::enforced())]
    pub ownership_controls: OwnershipControls,

    /// Public access block; defaults to blocking everything.
    #[builder(default = PublicAccessBlockConfiguration::block_all())]
    pub public_access_block_configuration: PublicAccessBlockConfiguration,

    /// Server-side encryption; defaults to SSE-S3.
    #[builder(default = BucketEncryption::s3_managed())]
    pub bucket_encryption: BucketEncryption,

    /// Versioning configuration.
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub versioning_configuration: Option<VersioningConfiguration>,

    /// Replication configuration (requires versioning).
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replication_configuration: Option<ReplicationConfiguration>,
}

/// Properties of an `AWS::S3::BucketPolicy`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct BucketPolicyProperties {
    /// Name of the bucket the policy attaches to (a `Ref` in practice).
    pub bucket: StrValue,
    /// The policy document.
    pub policy_document: PolicyDocument,
}
