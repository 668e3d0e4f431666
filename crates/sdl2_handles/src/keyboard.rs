//! Event type tags, key codes and scan codes
//!
//! Key codes and scan codes are newtypes over the native integers so values
//! without a named constant still round-trip.

/// Kind of the most recently polled event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    /// User requested application exit
    Quit,
    /// Window state change
    Window,
    /// Key pressed
    KeyDown,
    /// Key released
    KeyUp,
    /// Text entered
    TextInput,
    /// Cursor moved
    MouseMotion,
    /// Mouse button pressed
    MouseButtonDown,
    /// Mouse button released
    MouseButtonUp,
    /// Wheel scrolled
    MouseWheel,
    /// Any other native event type
    Other(u32),
}

impl EventType {
    /// Map a native event type tag
    pub const fn from_raw(raw: u32) -> Self {
        match raw {
            0x100 => Self::Quit,
            0x200 => Self::Window,
            0x300 => Self::KeyDown,
            0x301 => Self::KeyUp,
            0x303 => Self::TextInput,
            0x400 => Self::MouseMotion,
            0x401 => Self::MouseButtonDown,
            0x402 => Self::MouseButtonUp,
            0x403 => Self::MouseWheel,
            other => Self::Other(other),
        }
    }

    /// Native event type tag
    pub const fn to_raw(self) -> u32 {
        match self {
            Self::Quit => 0x100,
            Self::Window => 0x200,
            Self::KeyDown => 0x300,
            Self::KeyUp => 0x301,
            Self::TextInput => 0x303,
            Self::MouseMotion => 0x400,
            Self::MouseButtonDown => 0x401,
            Self::MouseButtonUp => 0x402,
            Self::MouseWheel => 0x403,
            Self::Other(raw) => raw,
        }
    }
}

/// Layout-dependent virtual key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Keycode(pub i32);

/// Scan codes that are not printable characters are tagged with this bit
const SCANCODE_MASK: i32 = 1 << 30;

const fn from_scancode(code: Scancode) -> Keycode {
    Keycode(code.0 as i32 | SCANCODE_MASK)
}

#[allow(missing_docs)]
impl Keycode {
    pub const UNKNOWN: Self = Self(0);
    pub const BACKSPACE: Self = Self(8);
    pub const TAB: Self = Self(9);
    pub const RETURN: Self = Self(13);
    pub const ESCAPE: Self = Self(27);
    pub const SPACE: Self = Self(32);
    pub const NUM_0: Self = Self(b'0' as i32);
    pub const NUM_1: Self = Self(b'1' as i32);
    pub const NUM_2: Self = Self(b'2' as i32);
    pub const NUM_3: Self = Self(b'3' as i32);
    pub const NUM_4: Self = Self(b'4' as i32);
    pub const NUM_5: Self = Self(b'5' as i32);
    pub const NUM_6: Self = Self(b'6' as i32);
    pub const NUM_7: Self = Self(b'7' as i32);
    pub const NUM_8: Self = Self(b'8' as i32);
    pub const NUM_9: Self = Self(b'9' as i32);
    pub const A: Self = Self(b'a' as i32);
    pub const B: Self = Self(b'b' as i32);
    pub const C: Self = Self(b'c' as i32);
    pub const D: Self = Self(b'd' as i32);
    pub const E: Self = Self(b'e' as i32);
    pub const F: Self = Self(b'f' as i32);
    pub const G: Self = Self(b'g' as i32);
    pub const H: Self = Self(b'h' as i32);
    pub const I: Self = Self(b'i' as i32);
    pub const J: Self = Self(b'j' as i32);
    pub const K: Self = Self(b'k' as i32);
    pub const L: Self = Self(b'l' as i32);
    pub const M: Self = Self(b'm' as i32);
    pub const N: Self = Self(b'n' as i32);
    pub const O: Self = Self(b'o' as i32);
    pub const P: Self = Self(b'p' as i32);
    pub const Q: Self = Self(b'q' as i32);
    pub const R: Self = Self(b'r' as i32);
    pub const S: Self = Self(b's' as i32);
    pub const T: Self = Self(b't' as i32);
    pub const U: Self = Self(b'u' as i32);
    pub const V: Self = Self(b'v' as i32);
    pub const W: Self = Self(b'w' as i32);
    pub const X: Self = Self(b'x' as i32);
    pub const Y: Self = Self(b'y' as i32);
    pub const Z: Self = Self(b'z' as i32);
    pub const RIGHT: Self = from_scancode(Scancode::RIGHT);
    pub const LEFT: Self = from_scancode(Scancode::LEFT);
    pub const DOWN: Self = from_scancode(Scancode::DOWN);
    pub const UP: Self = from_scancode(Scancode::UP);
    pub const LCTRL: Self = from_scancode(Scancode::LCTRL);
    pub const LSHIFT: Self = from_scancode(Scancode::LSHIFT);
    pub const LALT: Self = from_scancode(Scancode::LALT);
    pub const RCTRL: Self = from_scancode(Scancode::RCTRL);
    pub const RSHIFT: Self = from_scancode(Scancode::RSHIFT);
    pub const RALT: Self = from_scancode(Scancode::RALT);
}

/// Physical key position, independent of layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Scancode(pub u32);

#[allow(missing_docs)]
impl Scancode {
    /// Size of the native keyboard state array
    pub const COUNT: usize = 512;

    pub const UNKNOWN: Self = Self(0);
    pub const A: Self = Self(4);
    pub const B: Self = Self(5);
    pub const C: Self = Self(6);
    pub const D: Self = Self(7);
    pub const E: Self = Self(8);
    pub const F: Self = Self(9);
    pub const G: Self = Self(10);
    pub const H: Self = Self(11);
    pub const I: Self = Self(12);
    pub const J: Self = Self(13);
    pub const K: Self = Self(14);
    pub const L: Self = Self(15);
    pub const M: Self = Self(16);
    pub const N: Self = Self(17);
    pub const O: Self = Self(18);
    pub const P: Self = Self(19);
    pub const Q: Self = Self(20);
    pub const R: Self = Self(21);
    pub const S: Self = Self(22);
    pub const T: Self = Self(23);
    pub const U: Self = Self(24);
    pub const V: Self = Self(25);
    pub const W: Self = Self(26);
    pub const X: Self = Self(27);
    pub const Y: Self = Self(28);
    pub const Z: Self = Self(29);
    pub const NUM_1: Self = Self(30);
    pub const NUM_2: Self = Self(31);
    pub const NUM_3: Self = Self(32);
    pub const NUM_4: Self = Self(33);
    pub const NUM_5: Self = Self(34);
    pub const NUM_6: Self = Self(35);
    pub const NUM_7: Self = Self(36);
    pub const NUM_8: Self = Self(37);
    pub const NUM_9: Self = Self(38);
    pub const NUM_0: Self = Self(39);
    pub const RETURN: Self = Self(40);
    pub const ESCAPE: Self = Self(41);
    pub const BACKSPACE: Self = Self(42);
    pub const TAB: Self = Self(43);
    pub const SPACE: Self = Self(44);
    pub const RIGHT: Self = Self(79);
    pub const LEFT: Self = Self(80);
    pub const DOWN: Self = Self(81);
    pub const UP: Self = Self(82);
    pub const LCTRL: Self = Self(224);
    pub const LSHIFT: Self = Self(225);
    pub const LALT: Self = Self(226);
    pub const RCTRL: Self = Self(228);
    pub const RSHIFT: Self = Self(229);
    pub const RALT: Self = Self(230);

    /// Index into the native keyboard state array
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}
