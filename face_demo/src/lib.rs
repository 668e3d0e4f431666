//! Face demo support
//!
//! Layout, tinting and configuration for the `face_demo` binary. None of it
//! touches the native library, so it builds and tests without the `sdl2`
//! feature.

use std::path::Path;

use sdl2_handles::prelude::*;
use sdl2_handles::ConfigError;

/// Bitmap drawn when no path is given
pub const DEFAULT_BITMAP: &str = "face_demo/assets/face.bmp";
/// Display configuration read when no path is given
pub const DEFAULT_CONFIG: &str = "face_demo/demo.toml";

/// Drawn face width
pub const FACE_W: u32 = 128;
/// Drawn face height
pub const FACE_H: u32 = 128;

/// Clear color
pub const BACKGROUND: Color = Color::rgba(30, 70, 70, 255);
/// Tint with no interaction
pub const IDLE_TINT: Color = Color::rgb(255, 255, 0);
/// Tint while the cursor is over the face
pub const HOVER_TINT: Color = Color::rgb(255, 0, 0);
/// Tint while the left button is held
pub const LEFT_TINT: Color = Color::rgb(0, 255, 0);
/// Tint while the right button is held
pub const RIGHT_TINT: Color = Color::rgb(0, 0, 255);

/// Demo failures
#[derive(thiserror::Error, Debug)]
pub enum DemoError {
    /// Native library failure
    #[error(transparent)]
    Sdl(#[from] SdlError),

    /// Unreadable configuration
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Rectangle of the face centered in a window of the given size
pub fn face_rect(window: Dimensions) -> Rect {
    let x = window.w.saturating_sub(FACE_W) / 2;
    let y = window.h.saturating_sub(FACE_H) / 2;
    Rect::new(
        i32::try_from(x).unwrap_or(0),
        i32::try_from(y).unwrap_or(0),
        FACE_W,
        FACE_H,
    )
}

/// Tint for the current mouse state; right beats left beats hover
pub fn tint_for(mouse: &Mouse, face: &Rect) -> Color {
    if mouse.right {
        RIGHT_TINT
    } else if mouse.left {
        LEFT_TINT
    } else if mouse.has_intersection(face) {
        HOVER_TINT
    } else {
        IDLE_TINT
    }
}

/// Built-in configuration: an 800x600 window
pub fn default_config() -> DisplayConfig {
    DisplayConfig {
        title: "Face Demo".to_string(),
        width: 800,
        height: 600,
        ..DisplayConfig::default()
    }
}

/// Read `path`, or fall back to [`default_config`] when it does not exist
pub fn load_config(path: impl AsRef<Path>) -> Result<DisplayConfig, ConfigError> {
    let path = path.as_ref();
    if path.exists() {
        DisplayConfig::load_from_file(path)
    } else {
        log::info!("No config at {}, using built-in defaults", path.display());
        Ok(default_config())
    }
}
