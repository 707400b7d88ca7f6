//! Logging utilities

pub use log::{debug, error, info, trace, warn};

/// Initialize the logging system, defaulting to `info` when `RUST_LOG` is unset
pub fn init() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}
