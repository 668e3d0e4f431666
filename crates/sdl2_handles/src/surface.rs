//! Pixel buffer loaded from a bitmap file

use std::ffi::CString;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use crate::backend::Backend;
use crate::error::{SdlError, SdlResult};
use crate::logging::lifecycle;

/// Path bytes as the native library expects them; `None` on an interior NUL
#[cfg(unix)]
fn native_path(path: &Path) -> Option<CString> {
    use std::os::unix::ffi::OsStrExt;
    CString::new(path.as_os_str().as_bytes()).ok()
}

// Elsewhere the native library takes UTF-8.
#[cfg(not(unix))]
fn native_path(path: &Path) -> Option<CString> {
    path.to_str().and_then(|p| CString::new(p).ok())
}

/// Transient CPU-side image, consumed to build textures
pub struct Surface<B: Backend> {
    raw: B::Surface,
    path: PathBuf,
    _thread: PhantomData<*const B>,
}

impl<B: Backend> Surface<B> {
    /// Load a bitmap file
    ///
    /// Fails with [`SdlError::Load`] if the file is missing or malformed, or
    /// if the path holds an interior NUL byte.
    pub fn load(path: impl AsRef<Path>) -> SdlResult<Self> {
        let path = path.as_ref();
        let load_error = |native: String| SdlError::Load {
            path: path.to_path_buf(),
            native,
        };

        let c_path = native_path(path)
            .ok_or_else(|| load_error("path cannot be passed to the native library".to_string()))?;
        let raw = B::load_bmp(&c_path).ok_or_else(|| load_error(B::last_error()))?;

        lifecycle!("Surface created from {}", path.display());
        Ok(Self {
            raw,
            path: path.to_path_buf(),
            _thread: PhantomData,
        })
    }

    /// File the surface was loaded from
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub(crate) fn raw(&self) -> B::Surface {
        self.raw
    }
}

impl<B: Backend> Drop for Surface<B> {
    fn drop(&mut self) {
        unsafe { B::free_surface(self.raw) };
        lifecycle!("Surface freed ({})", self.path.display());
    }
}
