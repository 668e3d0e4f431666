//! Native window handle

use std::ffi::CString;
use std::rc::Rc;

use crate::backend::Backend;
use crate::error::{SdlError, SdlResult};
use crate::flags::{RendererFlags, WindowFlags};
use crate::logging::lifecycle;
use crate::renderer::Renderer;
use crate::session::Session;
use crate::types::Dimensions;

/// Window owned through `Rc`; keeps its session alive
pub struct Window<B: Backend> {
    raw: B::Window,
    title: String,
    dimensions: Dimensions,
    flags: WindowFlags,
    session: Rc<Session<B>>,
}

impl<B: Backend> Window<B> {
    pub(crate) fn create(
        session: Rc<Session<B>>,
        title: &str,
        dimensions: Dimensions,
        flags: WindowFlags,
    ) -> SdlResult<Self> {
        let c_title = CString::new(title).map_err(|_| SdlError::Construction {
            what: "window",
            native: "title contains a NUL byte".to_string(),
        })?;
        let raw = B::create_window(&c_title, dimensions, flags).ok_or_else(|| {
            SdlError::Construction {
                what: "window",
                native: B::last_error(),
            }
        })?;
        lifecycle!("Window '{title}' created ({}x{})", dimensions.w, dimensions.h);
        Ok(Self {
            raw,
            title: title.to_owned(),
            dimensions,
            flags,
            session,
        })
    }

    /// Create a renderer drawing into this window
    pub fn renderer(self: &Rc<Self>, flags: RendererFlags) -> SdlResult<Renderer<B>> {
        Renderer::create(Rc::clone(self), flags)
    }

    /// Title the window was created with
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Size the window was created with
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Flags the window was created with
    pub fn flags(&self) -> WindowFlags {
        self.flags
    }

    /// Session this window belongs to
    pub fn session(&self) -> &Rc<Session<B>> {
        &self.session
    }

    pub(crate) fn raw(&self) -> B::Window {
        self.raw
    }
}

impl<B: Backend> Drop for Window<B> {
    fn drop(&mut self) {
        // Renderers hold an Rc to the window, so none of them is live here.
        unsafe { B::destroy_window(self.raw) };
        lifecycle!("Window '{}' destroyed", self.title);
    }
}
