//! Logging utilities
//!
//! Handle creation and teardown are reported through [`lifecycle!`], which only
//! emits in builds with debug assertions. Per-frame calls never log.

pub use log::{debug, error, info, trace, warn};

/// Log target used for lifecycle lines
pub const LIFECYCLE_TARGET: &str = "sdl2_handles::lifecycle";

/// Initialize the logging system from `RUST_LOG`, defaulting to `info`
///
/// Returns quietly if a logger is already installed.
pub fn init() {
    let env = env_logger::Env::default().default_filter_or("info");
    if env_logger::Builder::from_env(env).try_init().is_err() {
        log::debug!("logger already initialized");
    }
}

macro_rules! lifecycle {
    ($($arg:tt)+) => {
        if cfg!(debug_assertions) {
            log::debug!(target: $crate::logging::LIFECYCLE_TARGET, $($arg)+);
        }
    };
}

pub(crate) use lifecycle;
