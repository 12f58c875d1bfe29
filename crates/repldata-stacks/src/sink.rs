//! Data sink resource group.

use tracing::info;

use crate::bucket::{BucketRef, SecureBucket, SecureBucketProps};
use crate::error::CompositionResult;
use crate::stack::Stack;

/// Logical ID of the sink bucket.
const BUCKET_ID: &str = "ReferenceDataBucket";

/// A stack holding a single versioned reference-data bucket, exposed as a
/// handle for replication sources to target.
#[derive(Debug)]
pub struct DataSinkStack {
    stack: Stack,
    bucket: BucketRef,
}

impl DataSinkStack {
    /// Create the sink stack.
    ///
    /// # Errors
    /// Returns an error if `name` is not a valid stack name.
    pub fn new(name: &str) -> CompositionResult<Self> {
        let mut stack =
            Stack::new(name)?.with_description("Versioned reference-data sink bucket");
        let bucket = SecureBucket::create(
            &mut stack,
            BUCKET_ID,
            SecureBucketProps::builder().versioned(true).build(),
        )?;
        info!(stack = %stack.name(), bucket = %bucket.logical_id(), "data sink composed");
        Ok(Self { stack, bucket })
    }

    /// Handle to the sink bucket.
    #[must_use]
    pub fn bucket(&self) -> &BucketRef {
        &self.bucket
    }

    /// Consume the group, yielding its stack for registration.
    #[must_use]
    pub fn into_stack(self) -> Stack {
        self.stack
    }
}
