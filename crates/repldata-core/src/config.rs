//! Synthesizer configuration.
//!
//! All configuration is driven by environment variables; every value has a
//! default so a bare invocation synthesizes into `./out` for the default
//! single-account target.

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::{AccountId, AwsRegion, ReplDataError, ReplDataResult};

/// Configuration for the template synthesizer.
///
/// # Examples
///
/// ```
/// use repldata_core::SynthConfig;
///
/// let config = SynthConfig::default();
/// assert_eq!(config.out_dir, "out");
/// assert_eq!(config.default_region.as_str(), "us-east-1");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct SynthConfig {
    /// Directory the synthesized templates are written to.
    #[builder(default = String::from("out"))]
    pub out_dir: String,

    /// Default AWS region for the deployment target.
    #[builder(default)]
    pub default_region: AwsRegion,

    /// Default AWS account for the deployment target.
    #[builder(default)]
    pub default_account: AccountId,

    /// Log level filter string (e.g. `"info"`, `"debug"`).
    #[builder(default = String::from("info"))]
    pub log_level: String,
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            out_dir: String::from("out"),
            default_region: AwsRegion::default(),
            default_account: AccountId::default(),
            log_level: String::from("info"),
        }
    }
}

impl SynthConfig {
    /// Load configuration from environment variables.
    ///
    /// Reads the following environment variables (falling back to defaults):
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `SYNTH_OUT_DIR` | `out` |
    /// | `DEFAULT_REGION` | `us-east-1` |
    /// | `DEFAULT_ACCOUNT` | `000000000000` |
    /// | `LOG_LEVEL` | `info` |
    ///
    /// # Errors
    /// Returns [`ReplDataError::Config`] if `DEFAULT_ACCOUNT` is set to a
    /// value that is not a valid 12-digit account ID.
    pub fn from_env() -> ReplDataResult<Self> {
        let mut config = Self::default();

        if let Ok(v) = std::env::var("SYNTH_OUT_DIR") {
            config.out_dir = v;
        }
        if let Ok(v) = std::env::var("DEFAULT_REGION") {
            config.default_region = AwsRegion::new(v);
        }
        if let Ok(v) = std::env::var("DEFAULT_ACCOUNT") {
            config.default_account = AccountId::new(v)
                .map_err(|e| ReplDataError::Config(format!("DEFAULT_ACCOUNT: {e}")))?;
        }
        if let Ok(v) = std::env::var("LOG_LEVEL") {
            config.log_level = v;
        }

        Ok(config)
    }
}
