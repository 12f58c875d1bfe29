//! repldata-synth - template synthesizer for the S3 replication data platform.
//!
//! Composes the platform's stacks (two data sinks plus the replication
//! source consuming them) and writes one CloudFormation template per stack
//! to the output directory, ready for the provisioning engine to deploy.
//!
//! # Usage
//!
//! ```text
//! SYNTH_OUT_DIR=out repldata-synth
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `SYNTH_OUT_DIR` | `out` | Template output directory |
//! | `DEFAULT_REGION` | `us-east-1` | Deployment-target region |
//! | `DEFAULT_ACCOUNT` | `000000000000` | Deployment-target account |
//! | `LOG_LEVEL` | `info` | Log level filter |
//! | `RUST_LOG` | *(unset)* | Fine-grained tracing filter (overrides `LOG_LEVEL`) |

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use repldata_core::SynthConfig;
use repldata_stacks::{SynthesizedStack, replication_data_app};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Synthesizer version reported at startup.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the tracing subscriber.
///
/// Uses `RUST_LOG` if set, otherwise falls back to the `LOG_LEVEL` config value.
fn init_tracing(log_level: &str) -> Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::try_new(log_level)
            .with_context(|| format!("invalid log level filter: {log_level}"))?
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    Ok(())
}

/// Write each synthesized template to `<out_dir>/<stack>.template.json`.
fn write_templates(out_dir: &Path, stacks: &[SynthesizedStack]) -> Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create output directory {}", out_dir.display()))?;

    for stack in stacks {
        let path = out_dir.join(format!("{}.template.json", stack.name));
        let mut body = serde_json::to_string_pretty(&stack.template)
            .with_context(|| format!("failed to render template for stack {}", stack.name))?;
        body.push('\n');
        fs::write(&path, body)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!(stack = %stack.name, path = %path.display(), "template written");
    }

    Ok(())
}

fn main() -> Result<()> {
    let config = SynthConfig::from_env().context("failed to load configuration")?;
    init_tracing(&config.log_level)?;

    info!(
        version = VERSION,
        account = %config.default_account,
        region = %config.default_region,
        "starting template synthesis"
    );

    let app = replication_data_app().context("composition failed")?;
    let stacks = app.synth().context("synthesis failed")?;
    write_templates(Path::new(&config.out_dir), &stacks)?;

    info!(
        stacks = stacks.len(),
        out_dir = %config.out_dir,
        "synthesis complete"
    );
    Ok(())
}
