//! SDL2 backend over `sdl2-sys`
//!
//! Thin call-through: every function forwards to one native entry point and
//! converts between the crate's value types and the C structs.

use std::ffi::CStr;
use std::os::raw::c_int;
use std::ptr::{self, NonNull};

use sdl2_sys as sys;

use super::{Backend, Status};
use crate::flags::{InitFlags, RendererFlags, WindowFlags};
use crate::keyboard::Scancode;
use crate::types::{BlendMode, Color, Dimensions, Flip, Mouse, Point, Rect};

/// Marker type selecting the native SDL2 library
#[derive(Debug)]
pub enum Sdl2 {}

/// Keyboard state array owned by SDL, valid until shutdown
pub struct KeyboardState {
    keys: *const u8,
    len: usize,
}

fn to_c_int(value: u32) -> c_int {
    c_int::try_from(value).unwrap_or(c_int::MAX)
}

fn rect_to_sdl(rect: &Rect) -> sys::SDL_Rect {
    sys::SDL_Rect {
        x: rect.x,
        y: rect.y,
        w: to_c_int(rect.w),
        h: to_c_int(rect.h),
    }
}

fn point_to_sdl(point: &Point) -> sys::SDL_Point {
    sys::SDL_Point { x: point.x, y: point.y }
}

fn blend_to_sdl(mode: BlendMode) -> sys::SDL_BlendMode {
    match mode {
        BlendMode::None => sys::SDL_BlendMode::SDL_BLENDMODE_NONE,
        BlendMode::Blend => sys::SDL_BlendMode::SDL_BLENDMODE_BLEND,
        BlendMode::Add => sys::SDL_BlendMode::SDL_BLENDMODE_ADD,
        BlendMode::Mod => sys::SDL_BlendMode::SDL_BLENDMODE_MOD,
        BlendMode::Mul => sys::SDL_BlendMode::SDL_BLENDMODE_MUL,
    }
}

fn flip_to_sdl(flip: Flip) -> sys::SDL_RendererFlip {
    match flip {
        Flip::None => sys::SDL_RendererFlip::SDL_FLIP_NONE,
        Flip::Horizontal => sys::SDL_RendererFlip::SDL_FLIP_HORIZONTAL,
        Flip::Vertical => sys::SDL_RendererFlip::SDL_FLIP_VERTICAL,
    }
}

const fn button_mask(button: u32) -> u32 {
    1 << (button - 1)
}

impl Backend for Sdl2 {
    type Window = NonNull<sys::SDL_Window>;
    type Renderer = NonNull<sys::SDL_Renderer>;
    type Texture = NonNull<sys::SDL_Texture>;
    type Surface = NonNull<sys::SDL_Surface>;
    type Event = sys::SDL_Event;
    type Keyboard = KeyboardState;

    fn was_init() -> bool {
        unsafe { sys::SDL_WasInit(0) != 0 }
    }

    fn init(flags: InitFlags) -> Status {
        unsafe { sys::SDL_Init(flags.bits()) }
    }

    unsafe fn quit() {
        sys::SDL_Quit();
    }

    fn last_error() -> String {
        let message = unsafe { sys::SDL_GetError() };
        if message.is_null() {
            return String::new();
        }
        unsafe { CStr::from_ptr(message) }.to_string_lossy().into_owned()
    }

    fn create_window(title: &CStr, size: Dimensions, flags: WindowFlags) -> Option<Self::Window> {
        let window = unsafe {
            sys::SDL_CreateWindow(
                title.as_ptr(),
                0,
                0,
                to_c_int(size.w),
                to_c_int(size.h),
                flags.bits(),
            )
        };
        NonNull::new(window)
    }

    unsafe fn destroy_window(window: Self::Window) {
        sys::SDL_DestroyWindow(window.as_ptr());
    }

    unsafe fn create_renderer(window: Self::Window, flags: RendererFlags) -> Option<Self::Renderer> {
        NonNull::new(sys::SDL_CreateRenderer(window.as_ptr(), -1, flags.bits()))
    }

    unsafe fn destroy_renderer(renderer: Self::Renderer) {
        sys::SDL_DestroyRenderer(renderer.as_ptr());
    }

    fn load_bmp(path: &CStr) -> Option<Self::Surface> {
        let surface = unsafe {
            let stream = sys::SDL_RWFromFile(path.as_ptr(), b"rb\0".as_ptr().cast());
            if stream.is_null() {
                return None;
            }
            sys::SDL_LoadBMP_RW(stream, 1)
        };
        NonNull::new(surface)
    }

    unsafe fn free_surface(surface: Self::Surface) {
        sys::SDL_FreeSurface(surface.as_ptr());
    }

    unsafe fn create_texture_from_surface(
        renderer: Self::Renderer,
        surface: Self::Surface,
    ) -> Option<Self::Texture> {
        NonNull::new(sys::SDL_CreateTextureFromSurface(renderer.as_ptr(), surface.as_ptr()))
    }

    unsafe fn destroy_texture(texture: Self::Texture) {
        sys::SDL_DestroyTexture(texture.as_ptr());
    }

    unsafe fn set_draw_color(renderer: Self::Renderer, color: Color) -> Status {
        sys::SDL_SetRenderDrawColor(renderer.as_ptr(), color.r, color.g, color.b, color.a)
    }

    unsafe fn clear(renderer: Self::Renderer) -> Status {
        sys::SDL_RenderClear(renderer.as_ptr())
    }

    unsafe fn fill_rect(renderer: Self::Renderer, rect: Option<&Rect>) -> Status {
        let rect = rect.map(rect_to_sdl);
        let rect_ptr = rect.as_ref().map_or(ptr::null(), |r| r as *const sys::SDL_Rect);
        sys::SDL_RenderFillRect(renderer.as_ptr(), rect_ptr)
    }

    unsafe fn copy_ex(
        renderer: Self::Renderer,
        texture: Self::Texture,
        src: Option<&Rect>,
        dst: Option<&Rect>,
        angle: f64,
        center: Option<&Point>,
        flip: Flip,
    ) -> Status {
        let src = src.map(rect_to_sdl);
        let dst = dst.map(rect_to_sdl);
        let center = center.map(point_to_sdl);
        sys::SDL_RenderCopyEx(
            renderer.as_ptr(),
            texture.as_ptr(),
            src.as_ref().map_or(ptr::null(), |r| r as *const sys::SDL_Rect),
            dst.as_ref().map_or(ptr::null(), |r| r as *const sys::SDL_Rect),
            angle,
            center.as_ref().map_or(ptr::null(), |p| p as *const sys::SDL_Point),
            flip_to_sdl(flip),
        )
    }

    unsafe fn present(renderer: Self::Renderer) {
        sys::SDL_RenderPresent(renderer.as_ptr());
    }

    unsafe fn set_draw_blend_mode(renderer: Self::Renderer, mode: BlendMode) -> Status {
        sys::SDL_SetRenderDrawBlendMode(renderer.as_ptr(), blend_to_sdl(mode))
    }

    unsafe fn set_texture_blend_mode(texture: Self::Texture, mode: BlendMode) -> Status {
        sys::SDL_SetTextureBlendMode(texture.as_ptr(), blend_to_sdl(mode))
    }

    unsafe fn set_texture_color_mod(texture: Self::Texture, r: u8, g: u8, b: u8) -> Status {
        sys::SDL_SetTextureColorMod(texture.as_ptr(), r, g, b)
    }

    fn empty_event() -> Self::Event {
        // Plain-data union; all-zero is a valid value.
        unsafe { std::mem::zeroed() }
    }

    unsafe fn poll_event(event: &mut Self::Event) -> bool {
        sys::SDL_PollEvent(event) != 0
    }

    fn event_type(event: &Self::Event) -> u32 {
        unsafe { event.type_ }
    }

    fn event_keycode(event: &Self::Event) -> i32 {
        unsafe { event.key.keysym.sym }
    }

    unsafe fn keyboard() -> Self::Keyboard {
        let mut len: c_int = 0;
        let keys = sys::SDL_GetKeyboardState(&mut len);
        KeyboardState {
            keys,
            len: usize::try_from(len).unwrap_or(0),
        }
    }

    unsafe fn scancode_pressed(keyboard: &Self::Keyboard, scancode: Scancode) -> bool {
        let index = scancode.index();
        if keyboard.keys.is_null() || index >= keyboard.len {
            return false;
        }
        // SDL rewrites the array while pumping events; read through the pointer each time.
        keyboard.keys.add(index).read() != 0
    }

    unsafe fn mouse() -> Mouse {
        let (mut x, mut y): (c_int, c_int) = (0, 0);
        let buttons = sys::SDL_GetMouseState(&mut x, &mut y);
        Mouse {
            x,
            y,
            left: buttons & button_mask(sys::SDL_BUTTON_LEFT) != 0,
            middle: buttons & button_mask(sys::SDL_BUTTON_MIDDLE) != 0,
            right: buttons & button_mask(sys::SDL_BUTTON_RIGHT) != 0,
        }
    }

    fn ticks() -> u32 {
        unsafe { sys::SDL_GetTicks() }
    }
}
