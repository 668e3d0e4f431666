//! Instrumented backend for tests
//!
//! Keeps one native-library stand-in per thread. Every create/destroy pair is
//! counted, destroying a handle twice panics, and shutting down while windows,
//! renderers or textures are still live panics. Omitted copy parameters are
//! resolved the way the native renderer resolves them so tests can observe
//! the effective rectangles.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet, VecDeque};
use std::ffi::CStr;
use std::path::PathBuf;
use std::time::Instant;

use super::{Backend, Status};
use crate::flags::{InitFlags, RendererFlags, WindowFlags};
use crate::keyboard::{EventType, Keycode, Scancode};
use crate::types::{BlendMode, Color, Dimensions, Flip, Mouse, Point, Rect};

/// Marker type selecting the mock library
#[derive(Debug)]
pub(crate) enum Mock {}

/// Resource kinds tracked by the counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Kind {
    Window,
    Renderer,
    Surface,
    Texture,
}

/// Opaque mock handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct Handle(u64);

/// Native calls that tests can force to fail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Call {
    Init,
    CreateWindow,
    CreateRenderer,
    CreateTexture,
    SetDrawColor,
    Clear,
    FillRect,
    Copy,
    SetBlendMode,
    SetTextureBlendMode,
    SetColorMod,
}

/// Effective parameters of the last texture copy
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct CopyRecord {
    pub src: Rect,
    pub dst: Rect,
    pub angle: f64,
    pub center: Point,
    pub flip: Flip,
}

#[derive(Debug, Clone, Copy)]
enum Resource {
    Window { size: Dimensions },
    Renderer { target: Dimensions },
    Surface { size: Dimensions },
    Texture { size: Dimensions, renderer: Handle },
}

impl Resource {
    const fn kind(&self) -> Kind {
        match self {
            Self::Window { .. } => Kind::Window,
            Self::Renderer { .. } => Kind::Renderer,
            Self::Surface { .. } => Kind::Surface,
            Self::Texture { .. } => Kind::Texture,
        }
    }
}

/// Polled event record
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct MockEvent {
    type_: u32,
    keycode: i32,
}

struct State {
    init_flags: Option<InitFlags>,
    init_calls: u32,
    quit_calls: u32,
    started: Option<Instant>,
    next_id: u64,
    live: HashMap<Handle, Resource>,
    created: HashMap<Kind, u32>,
    destroyed: HashMap<Kind, u32>,
    error: String,
    failing: HashSet<Call>,
    events: VecDeque<MockEvent>,
    pending_keys: Vec<(Scancode, bool)>,
    keys: Vec<bool>,
    mouse: Mouse,
    draw_color: Color,
    draw_blend_mode: BlendMode,
    texture_blend_mode: Option<BlendMode>,
    color_mod: Option<(u8, u8, u8)>,
    last_fill: Option<Rect>,
    last_copy: Option<CopyRecord>,
    clears: u32,
    presents: u32,
}

impl Default for State {
    fn default() -> Self {
        Self {
            init_flags: None,
            init_calls: 0,
            quit_calls: 0,
            started: None,
            next_id: 1,
            live: HashMap::new(),
            created: HashMap::new(),
            destroyed: HashMap::new(),
            error: String::new(),
            failing: HashSet::new(),
            events: VecDeque::new(),
            pending_keys: Vec::new(),
            keys: vec![false; Scancode::COUNT],
            mouse: Mouse::default(),
            draw_color: Color::BLACK,
            draw_blend_mode: BlendMode::None,
            texture_blend_mode: None,
            color_mod: None,
            last_fill: None,
            last_copy: None,
            clears: 0,
            presents: 0,
        }
    }
}

impl State {
    fn fails(&mut self, call: Call) -> bool {
        if self.failing.remove(&call) {
            self.error = format!("Injected {call:?} failure");
            true
        } else {
            false
        }
    }

    fn insert(&mut self, resource: Resource) -> Handle {
        let handle = Handle(self.next_id);
        self.next_id += 1;
        *self.created.entry(resource.kind()).or_default() += 1;
        self.live.insert(handle, resource);
        handle
    }

    fn remove(&mut self, handle: Handle, kind: Kind) {
        match self.live.remove(&handle) {
            Some(resource) if resource.kind() == kind => {
                *self.destroyed.entry(kind).or_default() += 1;
            }
            other => panic!("{kind:?} {handle:?} released while not live (found {other:?})"),
        }
    }

    fn get(&self, handle: Handle) -> Resource {
        *self
            .live
            .get(&handle)
            .unwrap_or_else(|| panic!("use of released handle {handle:?}"))
    }

    fn renderer_target(&self, handle: Handle) -> Dimensions {
        match self.get(handle) {
            Resource::Renderer { target } => target,
            other => panic!("{handle:?} is not a renderer: {other:?}"),
        }
    }

    fn live_count(&self, kind: Kind) -> usize {
        self.live.values().filter(|r| r.kind() == kind).count()
    }

    fn error(&mut self, message: impl Into<String>) -> Status {
        self.error = message.into();
        -1
    }
}

thread_local! {
    static STATE: RefCell<State> = RefCell::new(State::default());
}

fn with<R>(f: impl FnOnce(&mut State) -> R) -> R {
    STATE.with(|state| f(&mut state.borrow_mut()))
}

fn full(size: Dimensions) -> Rect {
    Rect::new(0, 0, size.w, size.h)
}

// Test controls

/// Forget everything recorded on this thread
pub(crate) fn reset() {
    with(|s| *s = State::default());
}

pub(crate) fn created(kind: Kind) -> u32 {
    with(|s| s.created.get(&kind).copied().unwrap_or(0))
}

pub(crate) fn destroyed(kind: Kind) -> u32 {
    with(|s| s.destroyed.get(&kind).copied().unwrap_or(0))
}

pub(crate) fn live(kind: Kind) -> usize {
    with(|s| s.live_count(kind))
}

pub(crate) fn init_calls() -> u32 {
    with(|s| s.init_calls)
}

pub(crate) fn quit_calls() -> u32 {
    with(|s| s.quit_calls)
}

/// Make the next `call` report failure
pub(crate) fn fail_next(call: Call) {
    with(|s| {
        s.failing.insert(call);
    });
}

pub(crate) fn push_event(kind: EventType, keycode: Keycode) {
    with(|s| {
        s.events.push_back(MockEvent {
            type_: kind.to_raw(),
            keycode: keycode.0,
        });
    });
}

/// Change a key's state during the next event pump
pub(crate) fn queue_key(scancode: Scancode, pressed: bool) {
    with(|s| s.pending_keys.push((scancode, pressed)));
}

pub(crate) fn set_mouse(mouse: Mouse) {
    with(|s| s.mouse = mouse);
}

pub(crate) fn last_copy() -> Option<CopyRecord> {
    with(|s| s.last_copy)
}

pub(crate) fn last_fill() -> Option<Rect> {
    with(|s| s.last_fill)
}

pub(crate) fn draw_color() -> Color {
    with(|s| s.draw_color)
}

pub(crate) fn draw_blend_mode() -> BlendMode {
    with(|s| s.draw_blend_mode)
}

pub(crate) fn texture_blend_mode() -> Option<BlendMode> {
    with(|s| s.texture_blend_mode)
}

pub(crate) fn color_mod() -> Option<(u8, u8, u8)> {
    with(|s| s.color_mod)
}

pub(crate) fn clears() -> u32 {
    with(|s| s.clears)
}

pub(crate) fn presents() -> u32 {
    with(|s| s.presents)
}

/// Minimal uncompressed 24-bit BMP with the given size
pub(crate) fn bmp_bytes(width: i32, height: i32) -> Vec<u8> {
    let row = ((width * 3 + 3) / 4 * 4) as usize;
    let pixels = row * height.unsigned_abs() as usize;
    let file_size = 54 + pixels;
    let mut bytes = Vec::with_capacity(file_size);
    bytes.extend_from_slice(b"BM");
    bytes.extend_from_slice(&(file_size as u32).to_le_bytes());
    bytes.extend_from_slice(&[0; 4]);
    bytes.extend_from_slice(&54u32.to_le_bytes());
    bytes.extend_from_slice(&40u32.to_le_bytes());
    bytes.extend_from_slice(&width.to_le_bytes());
    bytes.extend_from_slice(&height.to_le_bytes());
    bytes.extend_from_slice(&1u16.to_le_bytes());
    bytes.extend_from_slice(&24u16.to_le_bytes());
    bytes.extend_from_slice(&[0; 24]);
    bytes.resize(file_size, 0xff);
    bytes
}

/// Write a bitmap into the temp directory and return its path
pub(crate) fn write_bmp(name: &str, width: i32, height: i32) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "sdl2_handles_{}_{name}.bmp",
        std::process::id()
    ));
    std::fs::write(&path, bmp_bytes(width, height)).expect("write test bitmap");
    path
}

#[cfg(unix)]
fn path_from_c(path: &CStr) -> PathBuf {
    use std::os::unix::ffi::OsStrExt;
    PathBuf::from(std::ffi::OsStr::from_bytes(path.to_bytes()))
}

#[cfg(not(unix))]
fn path_from_c(path: &CStr) -> PathBuf {
    PathBuf::from(path.to_string_lossy().into_owned())
}

fn parse_bmp(bytes: &[u8]) -> Option<Dimensions> {
    if bytes.len() < 26 || &bytes[..2] != b"BM" {
        return None;
    }
    let width = i32::from_le_bytes(bytes[18..22].try_into().ok()?);
    let height = i32::from_le_bytes(bytes[22..26].try_into().ok()?);
    Some(Dimensions::new(width.unsigned_abs(), height.unsigned_abs()))
}

impl Backend for Mock {
    type Window = Handle;
    type Renderer = Handle;
    type Texture = Handle;
    type Surface = Handle;
    type Event = MockEvent;
    type Keyboard = ();

    fn was_init() -> bool {
        with(|s| s.init_flags.is_some())
    }

    fn init(flags: InitFlags) -> Status {
        with(|s| {
            s.init_calls += 1;
            if s.fails(Call::Init) {
                return -1;
            }
            s.init_flags = Some(flags);
            s.started = Some(Instant::now());
            0
        })
    }

    unsafe fn quit() {
        with(|s| {
            for kind in [Kind::Window, Kind::Renderer, Kind::Texture] {
                assert_eq!(s.live_count(kind), 0, "shutdown with live {kind:?} handles");
            }
            s.quit_calls += 1;
            s.init_flags = None;
            s.started = None;
        });
    }

    fn last_error() -> String {
        with(|s| s.error.clone())
    }

    fn create_window(_title: &CStr, size: Dimensions, _flags: WindowFlags) -> Option<Handle> {
        with(|s| {
            if s.fails(Call::CreateWindow) {
                return None;
            }
            if !s.init_flags.is_some_and(|f| f.contains(InitFlags::VIDEO)) {
                s.error("Video subsystem has not been initialized");
                return None;
            }
            Some(s.insert(Resource::Window { size }))
        })
    }

    unsafe fn destroy_window(window: Handle) {
        with(|s| s.remove(window, Kind::Window));
    }

    unsafe fn create_renderer(window: Handle, _flags: RendererFlags) -> Option<Handle> {
        with(|s| {
            let Resource::Window { size } = s.get(window) else {
                panic!("{window:?} is not a window");
            };
            if s.fails(Call::CreateRenderer) {
                return None;
            }
            Some(s.insert(Resource::Renderer { target: size }))
        })
    }

    unsafe fn destroy_renderer(renderer: Handle) {
        with(|s| s.remove(renderer, Kind::Renderer));
    }

    fn load_bmp(path: &CStr) -> Option<Handle> {
        let path = path_from_c(path);
        let bytes = std::fs::read(&path);
        with(|s| {
            let Ok(bytes) = bytes else {
                s.error(format!("Couldn't open {}", path.display()));
                return None;
            };
            let Some(size) = parse_bmp(&bytes) else {
                s.error("File is not a Windows BMP file");
                return None;
            };
            Some(s.insert(Resource::Surface { size }))
        })
    }

    unsafe fn free_surface(surface: Handle) {
        with(|s| s.remove(surface, Kind::Surface));
    }

    unsafe fn create_texture_from_surface(renderer: Handle, surface: Handle) -> Option<Handle> {
        with(|s| {
            s.renderer_target(renderer);
            let Resource::Surface { size } = s.get(surface) else {
                panic!("{surface:?} is not a surface");
            };
            if s.fails(Call::CreateTexture) {
                return None;
            }
            Some(s.insert(Resource::Texture { size, renderer }))
        })
    }

    unsafe fn destroy_texture(texture: Handle) {
        with(|s| s.remove(texture, Kind::Texture));
    }

    unsafe fn set_draw_color(renderer: Handle, color: Color) -> Status {
        with(|s| {
            s.renderer_target(renderer);
            if s.fails(Call::SetDrawColor) {
                return -1;
            }
            s.draw_color = color;
            0
        })
    }

    unsafe fn clear(renderer: Handle) -> Status {
        with(|s| {
            s.renderer_target(renderer);
            if s.fails(Call::Clear) {
                return -1;
            }
            s.clears += 1;
            0
        })
    }

    unsafe fn fill_rect(renderer: Handle, rect: Option<&Rect>) -> Status {
        with(|s| {
            let target = s.renderer_target(renderer);
            if s.fails(Call::FillRect) {
                return -1;
            }
            s.last_fill = Some(rect.copied().unwrap_or_else(|| full(target)));
            0
        })
    }

    unsafe fn copy_ex(
        renderer: Handle,
        texture: Handle,
        src: Option<&Rect>,
        dst: Option<&Rect>,
        angle: f64,
        center: Option<&Point>,
        flip: Flip,
    ) -> Status {
        with(|s| {
            let target = s.renderer_target(renderer);
            let Resource::Texture { size, renderer: owner } = s.get(texture) else {
                panic!("{texture:?} is not a texture");
            };
            if owner != renderer {
                return s.error("Texture was not created with this renderer");
            }
            if s.fails(Call::Copy) {
                return -1;
            }
            let dst = dst.copied().unwrap_or_else(|| full(target));
            let center = center
                .copied()
                .unwrap_or_else(|| Point::new((dst.w / 2) as i32, (dst.h / 2) as i32));
            s.last_copy = Some(CopyRecord {
                src: src.copied().unwrap_or_else(|| full(size)),
                dst,
                angle,
                center,
                flip,
            });
            0
        })
    }

    unsafe fn present(renderer: Handle) {
        with(|s| {
            s.renderer_target(renderer);
            s.presents += 1;
        });
    }

    unsafe fn set_draw_blend_mode(renderer: Handle, mode: BlendMode) -> Status {
        with(|s| {
            s.renderer_target(renderer);
            if s.fails(Call::SetBlendMode) {
                return -1;
            }
            s.draw_blend_mode = mode;
            0
        })
    }

    unsafe fn set_texture_blend_mode(texture: Handle, mode: BlendMode) -> Status {
        with(|s| {
            s.get(texture);
            if s.fails(Call::SetTextureBlendMode) {
                return -1;
            }
            s.texture_blend_mode = Some(mode);
            0
        })
    }

    unsafe fn set_texture_color_mod(texture: Handle, r: u8, g: u8, b: u8) -> Status {
        with(|s| {
            s.get(texture);
            if s.fails(Call::SetColorMod) {
                return -1;
            }
            s.color_mod = Some((r, g, b));
            0
        })
    }

    fn empty_event() -> MockEvent {
        MockEvent::default()
    }

    unsafe fn poll_event(event: &mut MockEvent) -> bool {
        with(|s| {
            for (scancode, pressed) in std::mem::take(&mut s.pending_keys) {
                s.keys[scancode.index()] = pressed;
            }
            match s.events.pop_front() {
                Some(next) => {
                    *event = next;
                    true
                }
                None => false,
            }
        })
    }

    fn event_type(event: &MockEvent) -> u32 {
        event.type_
    }

    fn event_keycode(event: &MockEvent) -> i32 {
        event.keycode
    }

    unsafe fn keyboard() {}

    unsafe fn scancode_pressed(_keyboard: &(), scancode: Scancode) -> bool {
        with(|s| s.keys.get(scancode.index()).copied().unwrap_or(false))
    }

    unsafe fn mouse() -> Mouse {
        with(|s| s.mouse)
    }

    fn ticks() -> u32 {
        with(|s| {
            s.started
                .map_or(0, |start| start.elapsed().as_millis() as u32)
        })
    }
}
