//! 2D renderer bound to a window
//!
//! Every method that wraps a native call with a status code returns
//! [`SdlError::Operation`] on failure. `present`, `copy` and `clear` go
//! straight to the backend with no logging or allocation.

use std::path::Path;
use std::rc::Rc;

use crate::backend::{check, Backend};
use crate::error::{SdlError, SdlResult};
use crate::flags::RendererFlags;
use crate::logging::lifecycle;
use crate::surface::Surface;
use crate::texture::Texture;
use crate::types::{BlendMode, Color, Flip, Point, Rect};
use crate::window::Window;

/// Parameters of a transformed texture copy
///
/// `None` keeps the native defaults: the whole render target for `dst`, the
/// whole texture for `src`, and the center of `dst` for `center`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CopyOptions {
    /// Destination rectangle on the render target
    pub dst: Option<Rect>,
    /// Portion of the texture to draw
    pub src: Option<Rect>,
    /// Clockwise rotation in degrees
    pub angle: f64,
    /// Rotation center relative to `dst`
    pub center: Option<Point>,
    /// Mirroring
    pub flip: Flip,
}

impl CopyOptions {
    /// Copy the whole texture into `dst`
    pub fn to(dst: Rect) -> Self {
        Self {
            dst: Some(dst),
            ..Self::default()
        }
    }

    /// Use only `src` from the texture
    #[must_use]
    pub fn from_region(mut self, src: Rect) -> Self {
        self.src = Some(src);
        self
    }

    /// Rotate by `angle` degrees around `center` (or the destination center)
    #[must_use]
    pub fn rotated(mut self, angle: f64, center: Option<Point>) -> Self {
        self.angle = angle;
        self.center = center;
        self
    }

    /// Mirror the copy
    #[must_use]
    pub fn flipped(mut self, flip: Flip) -> Self {
        self.flip = flip;
        self
    }
}

/// Renderer exclusively owning its native handle; keeps its window alive
pub struct Renderer<B: Backend> {
    raw: B::Renderer,
    window: Rc<Window<B>>,
}

impl<B: Backend> Renderer<B> {
    pub(crate) fn create(window: Rc<Window<B>>, flags: RendererFlags) -> SdlResult<Self> {
        let raw = unsafe { B::create_renderer(window.raw(), flags) }.ok_or_else(|| {
            SdlError::Construction {
                what: "renderer",
                native: B::last_error(),
            }
        })?;
        lifecycle!("Renderer created for '{}' ({flags:?})", window.title());
        Ok(Self { raw, window })
    }

    /// Window this renderer draws into
    pub fn window(&self) -> &Rc<Window<B>> {
        &self.window
    }

    /// Create a texture from a surface
    pub fn texture(&self, surface: &Surface<B>) -> SdlResult<Texture<'_, B>> {
        let raw = unsafe { B::create_texture_from_surface(self.raw, surface.raw()) }.ok_or_else(
            || SdlError::Construction {
                what: "texture from surface",
                native: B::last_error(),
            },
        )?;
        Ok(Texture::from_raw(raw))
    }

    /// Load a bitmap through a transient surface and create a texture from it
    pub fn texture_from_bmp(&self, path: impl AsRef<Path>) -> SdlResult<Texture<'_, B>> {
        let surface = Surface::load(path)?;
        self.texture(&surface)
    }

    /// Set the color used by clear and fill operations
    pub fn set_draw_color(&self, color: Color) -> SdlResult<()> {
        check::<B>(unsafe { B::set_draw_color(self.raw, color) }, "set render draw color")
    }

    /// Clear the target with the current draw color
    #[inline]
    pub fn clear(&self) -> SdlResult<()> {
        check::<B>(unsafe { B::clear(self.raw) }, "clear renderer")
    }

    /// Set the draw color, then clear
    pub fn clear_with(&self, color: Color) -> SdlResult<()> {
        self.set_draw_color(color)?;
        self.clear()
    }

    /// Fill `rect` with the draw color; `None` fills the whole target
    pub fn fill_rect(&self, rect: Option<Rect>) -> SdlResult<()> {
        check::<B>(unsafe { B::fill_rect(self.raw, rect.as_ref()) }, "fill rect")
    }

    /// Copy the whole texture into `dst`; `None` stretches over the whole target
    #[inline]
    pub fn copy(&self, texture: &Texture<'_, B>, dst: Option<Rect>) -> SdlResult<()> {
        let status = unsafe {
            B::copy_ex(self.raw, texture.raw(), None, dst.as_ref(), 0.0, None, Flip::None)
        };
        check::<B>(status, "copy texture")
    }

    /// Copy with source region, rotation and flipping
    pub fn copy_ex(&self, texture: &Texture<'_, B>, options: &CopyOptions) -> SdlResult<()> {
        let status = unsafe {
            B::copy_ex(
                self.raw,
                texture.raw(),
                options.src.as_ref(),
                options.dst.as_ref(),
                options.angle,
                options.center.as_ref(),
                options.flip,
            )
        };
        check::<B>(status, "copy texture")
    }

    /// Show everything drawn since the last present
    #[inline]
    pub fn present(&self) {
        unsafe { B::present(self.raw) };
    }

    /// Set the blend mode for draw operations
    pub fn set_blend_mode(&self, mode: BlendMode) -> SdlResult<()> {
        check::<B>(
            unsafe { B::set_draw_blend_mode(self.raw, mode) },
            "set renderer draw blend mode",
        )
    }

    /// Set the blend mode used when copying `texture`
    pub fn set_texture_blend_mode(&self, texture: &Texture<'_, B>, mode: BlendMode) -> SdlResult<()> {
        check::<B>(
            unsafe { B::set_texture_blend_mode(texture.raw(), mode) },
            "set texture blend mode",
        )
    }

    /// Tint `texture` by the color's RGB channels; alpha is ignored
    pub fn set_color_mod(&self, texture: &Texture<'_, B>, color: Color) -> SdlResult<()> {
        check::<B>(
            unsafe { B::set_texture_color_mod(texture.raw(), color.r, color.g, color.b) },
            "set texture color mod",
        )
    }
}

impl<B: Backend> Drop for Renderer<B> {
    fn drop(&mut self) {
        // Textures borrow the renderer, so none of them is live here.
        unsafe { B::destroy_renderer(self.raw) };
        lifecycle!("Renderer destroyed for '{}'", self.window.title());
    }
}
