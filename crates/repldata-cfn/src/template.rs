//! Template envelope types.
//!
//! A [`Template`] is the unit handed to the provisioning engine: a map of
//! logical IDs to [`Resource`]s plus optional exported [`Output`]s. The
//! envelope serializes to the standard CloudFormation JSON document shape.

use std::collections::BTreeMap;

use repldata_core::LogicalId;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::StrValue;
use crate::iam::RoleProperties;
use crate::s3::{BucketPolicyProperties, BucketProperties};

/// Template format version emitted on every template.
const FORMAT_VERSION: &str = "2010-09-09";

/// A CloudFormation template document.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Template {
    /// Template format version (always `2010-09-09`).
    #[serde(rename = "AWSTemplateFormatVersion")]
    pub format_version: String,

    /// Human-readable template description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Resources declared by this template, keyed by logical ID.
    pub resources: BTreeMap<LogicalId, Resource>,

    /// Exported outputs, keyed by logical ID.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub outputs: BTreeMap<LogicalId, Output>,
}

impl Default for Template {
    fn default() -> Self {
        Self {
            format_version: FORMAT_VERSION.to_owned(),
            description: None,
            resources: BTreeMap::new(),
            outputs: BTreeMap::new(),
        }
    }
}

/// The deletion policy attached to a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DeletionPolicy {
    /// Delete the resource when its stack is deleted.
    Delete,
    /// Keep the resource when its stack is deleted.
    Retain,
    /// Snapshot the resource before deletion (not valid for buckets).
    Snapshot,
}

impl DeletionPolicy {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Delete => "Delete",
            Self::Retain => "Retain",
            Self::Snapshot => "Snapshot",
        }
    }
}

impl std::fmt::Display for DeletionPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The typed properties of a resource, together with its CloudFormation
/// resource type string.
#[derive(Debug, Clone)]
pub enum ResourceKind {
    /// An `AWS::S3::Bucket`.
    S3Bucket(Box<BucketProperties>),
    /// An `AWS::S3::BucketPolicy`.
    S3BucketPolicy(BucketPolicyProperties),
    /// An `AWS::IAM::Role`.
    IamRole(RoleProperties),
}

impl ResourceKind {
    /// The CloudFormation resource type string.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::S3Bucket(_) => "AWS::S3::Bucket",
            Self::S3BucketPolicy(_) => "AWS::S3::BucketPolicy",
            Self::IamRole(_) => "AWS::IAM::Role",
        }
    }
}

/// A single resource entry in a template.
#[derive(Debug, Clone)]
pub struct Resource {
    /// The typed resource properties.
    pub kind: ResourceKind,
    /// Optional deletion policy.
    pub deletion_policy: Option<DeletionPolicy>,
}

impl Resource {
    /// Create an `AWS::S3::Bucket` resource.
    #[must_use]
    pub fn s3_bucket(properties: BucketProperties) -> Self {
        Self {
            kind: ResourceKind::S3Bucket(Box::new(properties)),
            deletion_policy: None,
        }
    }

    /// Create an `AWS::S3::BucketPolicy` resource.
    #[must_use]
    pub fn s3_bucket_policy(properties: BucketPolicyProperties) -> Self {
        Self {
            kind: ResourceKind::S3BucketPolicy(properties),
            deletion_policy: None,
        }
    }

    /// Create an `AWS::IAM::Role` resource.
    #[must_use]
    pub fn iam_role(properties: RoleProperties) -> Self {
        Self {
            kind: ResourceKind::IamRole(properties),
            deletion_policy: None,
        }
    }

    /// Attach a deletion policy to this resource.
    #[must_use]
    pub fn with_deletion_policy(mut self, policy: DeletionPolicy) -> Self {
        self.deletion_policy = Some(policy);
        self
    }
}

// CloudFormation puts DeletionPolicy next to Type rather than inside
// Properties, so the envelope is serialized by hand.
impl Serialize for Resource {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("Type", self.kind.type_name())?;
        if let Some(policy) = self.deletion_policy {
            map.serialize_entry("DeletionPolicy", &policy)?;
        }
        match &self.kind {
            ResourceKind::S3Bucket(p) => map.serialize_entry("Properties", p)?,
            ResourceKind::S3BucketPolicy(p) => map.serialize_entry("Properties", p)?,
            ResourceKind::IamRole(p) => map.serialize_entry("Properties", p)?,
        }
        map.end()
    }
}

/// A template output, optionally exported for cross-stack import.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Output {
    /// Human-readable description of the output.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The output value.
    pub value: StrValue,

    /// Export record making the value importable by other stacks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export: Option<Export>,
}

/// The export name of an output.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Export {
    /// Name other stacks use with `Fn::ImportValue`.
    pub name: String,
}
