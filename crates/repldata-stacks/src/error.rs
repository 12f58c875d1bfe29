//! Composition error types.

use repldata_core::ReplDataError;

/// Error raised while composing or synthesizing the resource graph.
///
/// Any composition error aborts synthesis entirely; a partially built graph
/// is never emitted.
#[derive(Debug, thiserror::Error)]
pub enum CompositionError {
    /// The replication source was given an empty destination list.
    #[error("no replication buckets found")]
    NoReplicationBuckets,

    /// A replication configuration was requested on an unversioned bucket.
    #[error("bucket {id} has a replication configuration but is not versioned")]
    ReplicationRequiresVersioning {
        /// The offending bucket's logical ID.
        id: String,
    },

    /// Two resources or outputs in one stack share a logical ID.
    #[error("duplicate logical ID in stack {stack}: {id}")]
    DuplicateLogicalId {
        /// The stack holding the clash.
        stack: String,
        /// The clashing logical ID.
        id: String,
    },

    /// Two stacks in one app share a name.
    #[error("duplicate stack name: {name}")]
    DuplicateStackName {
        /// The clashing stack name.
        name: String,
    },

    /// A stack imports a value no earlier stack exports.
    #[error("stack {stack} imports {export}, which no earlier stack exports")]
    UnresolvedImport {
        /// The importing stack.
        stack: String,
        /// The missing export name.
        export: String,
    },

    /// A template failed to serialize.
    #[error("failed to serialize template for stack {stack}")]
    Serialize {
        /// The stack whose template failed.
        stack: String,
        /// The underlying serializer error.
        #[source]
        source: serde_json::Error,
    },

    /// An identifier failed validation.
    #[error(transparent)]
    Identifier(#[from] ReplDataError),
}

/// Convenience result type for composition operations.
pub type CompositionResult<T> = Result<T, CompositionError>;
