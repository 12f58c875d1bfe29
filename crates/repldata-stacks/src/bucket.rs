//! The secure bucket construct and its output handle.
//!
//! Every bucket in this platform is created through [`SecureBucket::create`],
//! which pins the non-negotiable posture: object ownership enforced on the
//! bucket owner, public access fully blocked, SSE-S3 encryption, and a
//! bucket policy denying any request made without TLS. Callers choose only
//! versioning, replication, and the deletion policy.

use repldata_cfn::iam::{PolicyDocument, PolicyStatement, Principal};
use repldata_cfn::s3::{
    BucketPolicyProperties, BucketProperties, ReplicationConfiguration, VersioningConfiguration,
};
use repldata_cfn::{DeletionPolicy, Export, Output, Resource, StrValue};
use repldata_core::{LogicalId, StackName};
use typed_builder::TypedBuilder;

use crate::error::{CompositionError, CompositionResult};
use crate::stack::Stack;

/// Condition operator used by the TLS-only policy statement.
const BOOL_OPERATOR: &str = "Bool";

/// Condition key identifying non-TLS requests.
const SECURE_TRANSPORT_KEY: &str = "aws:SecureTransport";

/// Caller-tunable settings of a secure bucket.
#[derive(Debug, Clone, TypedBuilder)]
pub struct SecureBucketProps {
    /// Whether object versioning is enabled.
    #[builder(default = false)]
    pub versioned: bool,

    /// Replication configuration for the bucket, if it is a replication
    /// source.
    #[builder(default, setter(strip_option))]
    pub replication: Option<ReplicationConfiguration>,

    /// Deletion policy; this data set is rebuilt from upstream, so the
    /// default is `Delete`.
    #[builder(default = DeletionPolicy::Delete)]
    pub deletion_policy: DeletionPolicy,
}

/// Immutable handle to a created bucket.
///
/// The handle is how one resource group hands its bucket to another: it
/// resolves to a `Fn::GetAtt` when used inside its owning stack and to a
/// `Fn::ImportValue` of the ARN export anywhere else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketRef {
    stack: StackName,
    logical_id: LogicalId,
    export_name: String,
}

impl BucketRef {
    /// The stack that owns the bucket.
    #[must_use]
    pub fn stack(&self) -> &StackName {
        &self.stack
    }

    /// The bucket's logical ID within its stack.
    #[must_use]
    pub fn logical_id(&self) -> &LogicalId {
        &self.logical_id
    }

    /// The export name of the bucket's ARN.
    #[must_use]
    pub fn export_name(&self) -> &str {
        &self.export_name
    }

    /// The bucket ARN as seen from `scope`.
    #[must_use]
    pub fn arn_in(&self, scope: &Stack) -> StrValue {
        if scope.name() == &self.stack {
            StrValue::get_att(&self.logical_id, "Arn")
        } else {
            StrValue::import(&self.export_name)
        }
    }

    /// The ARN pattern covering all objects in the bucket, as seen from
    /// `scope`.
    #[must_use]
    pub fn objects_arn_in(&self, scope: &Stack) -> StrValue {
        StrValue::concat(vec![self.arn_in(scope), StrValue::lit("/*")])
    }
}

/// Factory for access-restricted, encrypted buckets.
#[derive(Debug)]
pub struct SecureBucket;

impl SecureBucket {
    /// Create a secure bucket in `stack` under `id`.
    ///
    /// Adds the bucket resource, a TLS-only bucket policy (`<id>Policy`),
    /// and an exported ARN output (`<id>Arn`), then returns the bucket
    /// handle.
    ///
    /// # Errors
    /// Returns an error if `id` (or a derived ID) is invalid or already
    /// taken in the stack.
    pub fn create(
        stack: &mut Stack,
        id: &str,
        props: SecureBucketProps,
    ) -> CompositionResult<BucketRef> {
        let builder = BucketProperties::builder();
        let bucket = match (props.versioned, props.replication) {
            (true, Some(replication)) => builder
                .versioning_configuration(VersioningConfiguration::enabled())
                .replication_configuration(replication)
                .build(),
            (true, None) => builder
                .versioning_configuration(VersioningConfiguration::enabled())
                .build(),
            // S3 only replicates out of versioned buckets.
            (false, Some(_)) => {
                return Err(CompositionError::ReplicationRequiresVersioning {
                    id: id.to_owned(),
                });
            }
            (false, None) => builder.build(),
        };

        let bucket_id = stack.add_resource(
            id,
            Resource::s3_bucket(bucket).with_deletion_policy(props.deletion_policy),
        )?;

        stack.add_resource(
            &format!("{id}Policy"),
            Resource::s3_bucket_policy(tls_only_policy(&bucket_id)),
        )?;

        let export_name = format!("{}-{id}-Arn", stack.name());
        stack.add_output(
            &format!("{id}Arn"),
            Output {
                description: None,
                value: StrValue::get_att(&bucket_id, "Arn"),
                export: Some(Export {
                    name: export_name.clone(),
                }),
            },
        )?;

        Ok(BucketRef {
            stack: stack.name().clone(),
            logical_id: bucket_id,
            export_name,
        })
    }
}

/// Bucket policy denying every request made without TLS.
fn tls_only_policy(bucket_id: &LogicalId) -> BucketPolicyProperties {
    let bucket_arn = StrValue::get_att(bucket_id, "Arn");
    let objects_arn = StrValue::concat(vec![bucket_arn.clone(), StrValue::lit("/*")]);
    BucketPolicyProperties {
        bucket: StrValue::reference(bucket_id),
        policy_document: PolicyDocument::new(vec![
            PolicyStatement::deny(["s3:*"], vec![bucket_arn, objects_arn])
                .with_principal(Principal::Any)
                .with_condition(BOOL_OPERATOR, SECURE_TRANSPORT_KEY, "false"),
        ]),
    }
}
