//! Replication source resource group.
//!
//! The group owns the ingress path of the platform: an upload bucket where
//! producers drop objects, and a versioned master bucket that fans new and
//! changed objects out to every destination sink. The replication role and
//! the rule list are derived from the same destination handles, so the role
//! covers exactly the buckets the rules target.

use repldata_cfn::s3::ReplicationConfiguration;
use repldata_cfn::{Resource, StrValue};
use repldata_core::LogicalId;
use tracing::info;

use crate::bucket::{BucketRef, SecureBucket, SecureBucketProps};
use crate::error::{CompositionError, CompositionResult};
use crate::replication::{replication_role, replication_rules};
use crate::stack::Stack;

/// Logical ID of the ingress bucket.
const UPLOAD_BUCKET_ID: &str = "UploadBucket";

/// Logical ID of the replicated master bucket.
const MASTER_BUCKET_ID: &str = "MasterBucket";

/// Logical ID of the replication role.
const ROLE_ID: &str = "ReplicationRole";

/// A stack replicating a master bucket into a set of destination sinks.
#[derive(Debug)]
pub struct ReplicationSourceStack {
    stack: Stack,
    upload_bucket: BucketRef,
    master_bucket: BucketRef,
}

impl ReplicationSourceStack {
    /// Create the source stack, replicating into `destinations` in order.
    ///
    /// # Errors
    /// Returns [`CompositionError::NoReplicationBuckets`] — before creating
    /// any resource — if `destinations` is empty; there is no valid
    /// replication source without targets. Also fails on invalid
    /// identifiers.
    pub fn new(name: &str, destinations: &[BucketRef]) -> CompositionResult<Self> {
        if destinations.is_empty() {
            return Err(CompositionError::NoReplicationBuckets);
        }

        let mut stack = Stack::new(name)?
            .with_description("Upload and master buckets replicating into the data sinks");

        let upload_bucket = SecureBucket::create(
            &mut stack,
            UPLOAD_BUCKET_ID,
            SecureBucketProps::builder().build(),
        )?;

        // The role references the master bucket by logical ID, so it can be
        // declared first and the bucket carry its ARN from the start.
        let master_id = LogicalId::new(MASTER_BUCKET_ID)?;
        let role_id = stack.add_resource(
            ROLE_ID,
            Resource::iam_role(replication_role(&stack, &master_id, destinations)),
        )?;

        let rules = replication_rules(&stack, destinations);
        let master_bucket = SecureBucket::create(
            &mut stack,
            MASTER_BUCKET_ID,
            SecureBucketProps::builder()
                .versioned(true)
                .replication(ReplicationConfiguration {
                    role: StrValue::get_att(&role_id, "Arn"),
                    rules,
                })
                .build(),
        )?;

        info!(
            stack = %stack.name(),
            destinations = destinations.len(),
            "replication source composed"
        );
        Ok(Self {
            stack,
            upload_bucket,
            master_bucket,
        })
    }

    /// Handle to the ingress bucket.
    #[must_use]
    pub fn upload_bucket(&self) -> &BucketRef {
        &self.upload_bucket
    }

    /// Handle to the replicated master bucket.
    #[must_use]
    pub fn master_bucket(&self) -> &BucketRef {
        &self.master_bucket
    }

    /// Consume the group, yielding its stack for registration.
    #[must_use]
    pub fn into_stack(self) -> Stack {
        self.stack
    }
}
