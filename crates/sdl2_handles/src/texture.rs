//! GPU-resident image created by a renderer

use std::marker::PhantomData;

use crate::backend::Backend;
use crate::logging::lifecycle;
use crate::renderer::Renderer;

/// Texture owned by its creator's scope; cannot outlive the renderer
pub struct Texture<'r, B: Backend> {
    raw: B::Texture,
    _renderer: PhantomData<&'r Renderer<B>>,
}

impl<B: Backend> Texture<'_, B> {
    pub(crate) fn from_raw(raw: B::Texture) -> Self {
        lifecycle!("Texture created");
        Self {
            raw,
            _renderer: PhantomData,
        }
    }

    pub(crate) fn raw(&self) -> B::Texture {
        self.raw
    }
}

impl<B: Backend> Drop for Texture<'_, B> {
    fn drop(&mut self) {
        unsafe { B::destroy_texture(self.raw) };
        lifecycle!("Texture destroyed");
    }
}
