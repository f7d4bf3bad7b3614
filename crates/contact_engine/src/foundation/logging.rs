//! Logging utilities and structured logging support

pub use log::{debug, info, warn, error, trace};

/// Initialize the logging system
///
/// Reads the filter from `RUST_LOG`, falling back to `info`. A logger that
/// is already installed (by the host application or an earlier call) is
/// kept; that case is reported at debug level.
pub fn init() {
    let env = env_logger::Env::default().default_filter_or("info");
    if let Err(err) = env_logger::Builder::from_env(env).try_init() {
        log::debug!("Keeping existing logger: {err}");
    }
}
