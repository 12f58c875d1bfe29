//! Core types and configuration for the repldata infrastructure workspace.
//!
//! This crate provides the foundational building blocks shared across the
//! resource model and the stack composition layer: validated identifier
//! newtypes, the core error enum, and the synthesizer configuration.

mod config;
mod error;
mod types;

pub use config::SynthConfig;
pub use error::{ReplDataError, ReplDataResult};
pub use types::{AccountId, AwsRegion, LogicalId, StackName};
