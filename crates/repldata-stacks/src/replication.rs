//! Replication role and rule assembly.
//!
//! The role S3 assumes needs read access on the source side and replicate
//! access on every destination, and the source bucket needs one rule per
//! destination. Both are derived from the same destination list so the role
//! always covers exactly the buckets the rules target.

use repldata_cfn::iam::{PolicyDocument, PolicyStatement, RolePolicy, RoleProperties};
use repldata_cfn::s3::{
    DeleteMarkerReplication, ReplicationDestination, ReplicationRule, ReplicationRuleFilter,
    RuleStatus,
};
use repldata_cfn::StrValue;
use repldata_core::LogicalId;

use crate::bucket::BucketRef;
use crate::stack::Stack;

/// Service principal allowed to assume the replication role.
pub const REPLICATION_SERVICE_PRINCIPAL: &str = "s3.amazonaws.com";

/// Name of the inline policy carrying the replication statements.
const POLICY_NAME: &str = "ReplicationAccess";

/// Actions the role needs on the source bucket itself.
const SOURCE_BUCKET_ACTIONS: [&str; 2] = ["s3:GetReplicationConfiguration", "s3:ListBucket"];

/// Actions the role needs on the source bucket's objects.
const SOURCE_OBJECT_ACTIONS: [&str; 6] = [
    "s3:GetObjectVersion",
    "s3:GetObjectVersionAcl",
    "s3:GetObjectVersionForReplication",
    "s3:GetObjectLegalHold",
    "s3:GetObjectVersionTagging",
    "s3:GetObjectRetention",
];

/// Actions the role needs on each destination bucket's objects.
const DESTINATION_OBJECT_ACTIONS: [&str; 5] = [
    "s3:ReplicateObject",
    "s3:ReplicateDelete",
    "s3:ReplicateTags",
    "s3:GetObjectVersionTagging",
    "s3:ObjectOwnerOverrideToBucketOwner",
];

/// Build the replication role for `source` replicating into `destinations`.
///
/// The role is trusted by the S3 service principal and carries one inline
/// policy: source-bucket read statements plus one replicate statement per
/// destination, in destination order.
pub(crate) fn replication_role(
    scope: &Stack,
    source: &LogicalId,
    destinations: &[BucketRef],
) -> RoleProperties {
    let source_arn = StrValue::get_att(source, "Arn");
    let source_objects = StrValue::concat(vec![source_arn.clone(), StrValue::lit("/*")]);

    let mut statements = vec![
        PolicyStatement::allow(SOURCE_BUCKET_ACTIONS, vec![source_arn]),
        PolicyStatement::allow(SOURCE_OBJECT_ACTIONS, vec![source_objects]),
    ];
    statements.extend(destinations.iter().map(|destination| {
        PolicyStatement::allow(
            DESTINATION_OBJECT_ACTIONS,
            vec![destination.objects_arn_in(scope)],
        )
    }));

    RoleProperties::builder()
        .assume_role_policy_document(PolicyDocument::service_trust(REPLICATION_SERVICE_PRINCIPAL))
        .path("/service-role/")
        .description("IAM service role for s3 replication")
        .policies(vec![RolePolicy {
            policy_name: POLICY_NAME.to_owned(),
            policy_document: PolicyDocument::new(statements),
        }])
        .build()
}

/// Build one replication rule per destination.
///
/// Priorities follow destination order, starting at 1. Every rule replicates
/// everything (empty prefix filter) including delete markers.
pub(crate) fn replication_rules(scope: &Stack, destinations: &[BucketRef]) -> Vec<ReplicationRule> {
    destinations
        .iter()
        .zip(1u32..)
        .map(|(destination, priority)| ReplicationRule {
            destination: ReplicationDestination::bucket(destination.arn_in(scope)),
            status: RuleStatus::Enabled,
            priority,
            filter: ReplicationRuleFilter::everything(),
            delete_marker_replication: DeleteMarkerReplication::enabled(),
        })
        .collect()
}
