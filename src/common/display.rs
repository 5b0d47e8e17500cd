//! On-screen display of rendered charts
//!
//! Shows an RGB frame produced by [`render_overlay_histogram_rgb`] in a [`minifb`]
//! window and blocks until the window is closed.
//!
//! [`render_overlay_histogram_rgb`]: super::plots::render_overlay_histogram_rgb

use minifb::{Key, Window, WindowOptions};
use thiserror::Error;

/// Errors that can occur while showing a chart on screen
#[derive(Error, Debug)]
pub enum DisplayError {
    #[error("Failed to open window: {0}")]
    WindowCreate(String),

    #[error("Failed to update window: {0}")]
    WindowUpdate(String),

    #[error("Frame holds {actual} bytes, expected {expected} for {width}x{height} RGB")]
    FrameSize {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}

type Result<T> = core::result::Result<T, DisplayError>;

/// Packs RGB bytes into the `0RGB` words [`minifb`] expects, one per pixel.
pub fn rgb_to_0rgb(rgb: &[u8]) -> Vec<u32> {
    rgb.chunks_exact(3)
        .map(|pixel| (pixel[0] as u32) << 16 | (pixel[1] as u32) << 8 | pixel[2] as u32)
        .collect()
}

/// Show an RGB frame in a window until the viewer closes it
///
/// The window is redrawn at a fixed rate while open. Pressing Escape also closes it.
///
/// # Arguments
/// * `title` - Window title
/// * `rgb` - Frame pixels, row by row, three bytes per pixel
/// * `size` - Frame width and height in pixels
///
/// # Returns
/// * `Ok(())` - Once the window has been closed
/// * `Err(DisplayError)` - If the frame size is wrong or the window could not be
///   opened or updated
pub fn show_until_closed(title: &str, rgb: &[u8], size: (u32, u32)) -> Result<()> {
    let (width, height) = size;
    let expected = width as usize * height as usize * 3;
    if rgb.len() != expected {
        return Err(DisplayError::FrameSize {
            width,
            height,
            expected,
            actual: rgb.len(),
        });
    }

    let frame = rgb_to_0rgb(rgb);
    let mut window = Window::new(
        title,
        width as usize,
        height as usize,
        WindowOptions::default(),
    )
    .map_err(|e| DisplayError::WindowCreate(e.to_string()))?;
    window.set_target_fps(30);

    log::info!("Showing histogram; close the window to continue");
    while window.is_open() && !window.is_key_down(Key::Escape) {
        window
            .update_with_buffer(&frame, width as usize, height as usize)
            .map_err(|e| DisplayError::WindowUpdate(e.to_string()))?;
    }

    Ok(())
}
