//! Error type shared by every handle
//!
//! Each variant that follows a native failure carries the native library's
//! last-error string, captured at the failure site.

use std::path::PathBuf;
use thiserror::Error;

/// Failure of a native construction or operation call
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SdlError {
    /// A session is already live in this process
    #[error("SDL cannot be initialized twice")]
    AlreadyInitialized,

    /// Native library initialization reported failure
    #[error("Failed to initialize SDL: {native}")]
    Init {
        /// Native last-error string
        native: String,
    },

    /// A native constructor returned null
    #[error("Failed to create {what}: {native}")]
    Construction {
        /// Kind of resource that could not be created
        what: &'static str,
        /// Native last-error string
        native: String,
    },

    /// A bitmap could not be loaded into a surface
    #[error("Failed to load bitmap {}: {native}", path.display())]
    Load {
        /// Path that was requested
        path: PathBuf,
        /// Native last-error string
        native: String,
    },

    /// A native call returned a non-zero status code
    #[error("Failed to {what}: {native}")]
    Operation {
        /// Operation that failed
        what: &'static str,
        /// Native last-error string
        native: String,
    },
}

/// Result alias for handle operations
pub type SdlResult<T> = Result<T, SdlError>;

impl SdlError {
    /// Native last-error string attached to this error, if any
    pub fn native(&self) -> Option<&str> {
        match self {
            Self::AlreadyInitialized => None,
            Self::Init { native }
            | Self::Construction { native, .. }
            | Self::Load { native, .. }
            | Self::Operation { native, .. } => Some(native),
        }
    }
}
