//! The fixed platform composition.

use crate::app::App;
use crate::error::CompositionResult;
use crate::sink::DataSinkStack;
use crate::source::ReplicationSourceStack;

/// Name of the first data sink stack.
pub const SINK_B_STACK: &str = "S3ReplicationDataSinkB";

/// Name of the second data sink stack.
pub const SINK_C_STACK: &str = "S3ReplicationDataSinkC";

/// Name of the replication source stack.
pub const SOURCE_A_STACK: &str = "S3ReplicationDataSourceA";

/// Compose the replication data platform.
///
/// Builds the two data sinks first, then the replication source consuming
/// their bucket handles, and registers the stacks in that dependency order.
///
/// # Errors
/// Propagates any composition error; nothing is partially registered on
/// failure.
pub fn replication_data_app() -> CompositionResult<App> {
    let sink_b = DataSinkStack::new(SINK_B_STACK)?;
    let sink_c = DataSinkStack::new(SINK_C_STACK)?;
    let source = ReplicationSourceStack::new(
        SOURCE_A_STACK,
        &[sink_b.bucket().clone(), sink_c.bucket().clone()],
    )?;

    let mut app = App::new();
    app.add_stack(sink_b.into_stack())?;
    app.add_stack(sink_c.into_stack())?;
    app.add_stack(source.into_stack())?;
    Ok(app)
}
