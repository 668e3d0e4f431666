//! Face demo application
//!
//! Opens a window, draws a bitmap in the middle of it and tints the bitmap by
//! mouse state: yellow by default, red while hovered, green or blue while the
//! left or right button is held. Press `q` or close the window to exit.
//!
//! Usage: `face_demo [BITMAP] [CONFIG]`, where `CONFIG` is a `.toml` or
//! `.ron` display configuration.

use face_demo::{
    face_rect, load_config, tint_for, DemoError, BACKGROUND, DEFAULT_BITMAP, DEFAULT_CONFIG,
};
use sdl2_handles::prelude::*;

fn run(bitmap: &str, config: &DisplayConfig) -> Result<(), DemoError> {
    let session = SdlSession::init(config.init_flags)?;
    let window = session.window_from_config(config)?;
    let renderer = window.renderer(config.renderer_flags)?;
    let mut event = session.event();
    let timer = session.timer();

    let texture = renderer.texture_from_bmp(bitmap)?;
    let face = face_rect(window.dimensions());
    log::info!("Drawing {bitmap} at {face:?}");

    let mut running = true;
    while running {
        while event.poll() {
            match event.event_type() {
                EventType::Quit => running = false,
                EventType::KeyDown if event.keycode() == Keycode::Q => running = false,
                _ => {}
            }
        }

        renderer.clear_with(BACKGROUND)?;
        renderer.copy(&texture, Some(face))?;
        log::debug!("Time since session start: {}", timer.ticks());
        renderer.set_color_mod(&texture, tint_for(&event.mouse(), &face))?;
        renderer.present();
    }

    log::info!("Exiting after {} ms", timer.ticks());
    Ok(())
}

fn main() {
    sdl2_handles::logging::init();

    let mut args = std::env::args().skip(1);
    let bitmap = args.next().unwrap_or_else(|| DEFAULT_BITMAP.to_string());
    let config_path = args.next().unwrap_or_else(|| DEFAULT_CONFIG.to_string());

    log::info!("Starting face demo");
    let result = load_config(&config_path)
        .map_err(DemoError::from)
        .and_then(|config| run(&bitmap, &config));

    if let Err(e) = result {
        log::error!("{e}");
        std::process::exit(1);
    }
}
