//! Stack composition for the S3 replication data platform.
//!
//! Resource groups are plain constructors: each one declares a fixed bundle
//! of resources into a [`Stack`] and exposes selected [`BucketRef`] handles.
//! Downstream groups receive upstream handles as explicit parameters, so
//! the dependency graph is resolved by construction order; [`App::synth`]
//! re-verifies it by resolving cross-stack imports against earlier exports.

mod app;
mod bucket;
mod compose;
mod error;
mod replication;
mod sink;
mod source;
mod stack;

pub use app::{App, SynthesizedStack};
pub use bucket::{BucketRef, SecureBucket, SecureBucketProps};
pub use compose::{SINK_B_STACK, SINK_C_STACK, SOURCE_A_STACK, replication_data_app};
pub use error::{CompositionError, CompositionResult};
pub use replication::REPLICATION_SERVICE_PRINCIPAL;
pub use sink::DataSinkStack;
pub use source::ReplicationSourceStack;
pub use stack::Stack;
