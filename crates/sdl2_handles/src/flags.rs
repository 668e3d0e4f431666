//! Construction flags for sessions, windows and renderers
//!
//! Bit values are the ones the native library expects, so flags pass through
//! with `bits()` and no translation table.

use bitflags::bitflags;

bitflags! {
    /// Subsystems started by session init
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
    #[serde(transparent)]
    pub struct InitFlags: u32 {
        /// Timer subsystem
        const TIMER = 0x0000_0001;
        /// Audio subsystem
        const AUDIO = 0x0000_0010;
        /// Video subsystem, implies events
        const VIDEO = 0x0000_0020;
        /// Joystick subsystem, implies events
        const JOYSTICK = 0x0000_0200;
        /// Haptic (force feedback) subsystem
        const HAPTIC = 0x0000_1000;
        /// Game controller subsystem, implies joystick
        const GAMECONTROLLER = 0x0000_2000;
        /// Event subsystem
        const EVENTS = 0x0000_4000;
        /// Sensor subsystem
        const SENSOR = 0x0000_8000;
        /// Every subsystem
        const EVERYTHING = Self::TIMER.bits()
            | Self::AUDIO.bits()
            | Self::VIDEO.bits()
            | Self::EVENTS.bits()
            | Self::JOYSTICK.bits()
            | Self::HAPTIC.bits()
            | Self::GAMECONTROLLER.bits()
            | Self::SENSOR.bits();
    }
}

bitflags! {
    /// Window creation flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
    #[serde(transparent)]
    pub struct WindowFlags: u32 {
        /// Fullscreen window
        const FULLSCREEN = 0x0000_0001;
        /// Usable with an OpenGL context
        const OPENGL = 0x0000_0002;
        /// Visible
        const SHOWN = 0x0000_0004;
        /// Not visible
        const HIDDEN = 0x0000_0008;
        /// No decoration
        const BORDERLESS = 0x0000_0010;
        /// User-resizable
        const RESIZABLE = 0x0000_0020;
        /// Minimized
        const MINIMIZED = 0x0000_0040;
        /// Maximized
        const MAXIMIZED = 0x0000_0080;
        /// Grabs mouse input
        const MOUSE_GRABBED = 0x0000_0100;
        /// Has input focus
        const INPUT_FOCUS = 0x0000_0200;
        /// Has mouse focus
        const MOUSE_FOCUS = 0x0000_0400;
        /// Fullscreen at desktop resolution
        const FULLSCREEN_DESKTOP = Self::FULLSCREEN.bits() | 0x0000_1000;
        /// High-DPI mode where supported
        const ALLOW_HIGHDPI = 0x0000_2000;
        /// Always above other windows
        const ALWAYS_ON_TOP = 0x0000_8000;
        /// Usable with Vulkan
        const VULKAN = 0x1000_0000;
        /// Usable with Metal
        const METAL = 0x2000_0000;
    }
}

bitflags! {
    /// Renderer creation flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
    #[serde(transparent)]
    pub struct RendererFlags: u32 {
        /// Software fallback
        const SOFTWARE = 0x0000_0001;
        /// Hardware accelerated
        const ACCELERATED = 0x0000_0002;
        /// Present synchronized with the refresh rate
        const PRESENTVSYNC = 0x0000_0004;
        /// Supports rendering to texture
        const TARGETTEXTURE = 0x0000_0008;
    }
}
