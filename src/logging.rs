use crate::result::{SnapError, SnapErrorKind, SnapResult};
use tracing::Level;

/// Installs a global fmt subscriber and routes `log` records into it.
pub fn init_logging() -> SnapResult<()> {
    tracing_log::LogTracer::init()
        .map_err(|error| SnapError::new(SnapErrorKind::General(error.to_string())))?;
    let subscriber = tracing_subscriber::fmt()
        .with_thread_names(true)
        .with_max_level(Level::DEBUG)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|error| SnapError::new(SnapErrorKind::General(error.to_string())))?;
    Ok(())
}
