//! Typed model of the CloudFormation resources synthesized by this workspace.
//!
//! The model is emit-only: every type serializes with serde into the
//! PascalCase JSON shape CloudFormation expects, and nothing here reads
//! templates back. The surface is deliberately narrow — it covers exactly
//! the resource types the replication data platform declares
//! (`AWS::S3::Bucket`, `AWS::S3::BucketPolicy`, `AWS::IAM::Role`) rather
//! than the full CloudFormation schema.

pub mod iam;
pub mod s3;
mod template;
mod value;

pub use template::{DeletionPolicy, Export, Output, Resource, ResourceKind, Template};
pub use value::StrValue;
