use sdl2::pixels::{Color, PixelFormatEnum};
use sdl2::render::WindowCanvas;

use emu8_core::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use emu8_core::FrameBuffer;

/// Colour of lit pixels.
pub const FOREGROUND: Color = Color::RGB(0x33, 0xCC, 0x33);
/// Colour of unlit pixels.
pub const BACKGROUND: Color = Color::RGB(0x00, 0x00, 0x00);

/// # Display
/// The Chip-8 display is composed of 64x32 pixels which are each either on or off.
/// The on/off state of these pixels is encoded as 1/0 respectively in a 2d array of 64x32 bytes.
/// The display only gets a call to `render` when the Chip-8 FrameBuffer is updated.
pub struct Display {
    canvas: WindowCanvas,
    foreground: Color,
    background: Color,
}

impl Display {
    /// Creates a new display object bound to an sdl2 context.
    ///
    /// # Arguments
    /// * `sdl` an sdl2 context with which to draw
    /// * `scale` the size multiplier for each pixel
    pub fn new(sdl: &sdl2::Sdl, scale: u32) -> Result<Self, String> {
        let video_subsystem = sdl.video()?;
        let window = video_subsystem
            .window(
                "Emu-8",
                DISPLAY_WIDTH as u32 * scale,
                DISPLAY_HEIGHT as u32 * scale,
            )
            .position_centered()
            .opengl()
            .build()
            .map_err(|e| e.to_string())?;
        let mut canvas = window
            .into_canvas()
            .build()
            .map_err(|e| e.to_string())?;

        canvas.set_draw_color(BACKGROUND);
        canvas.clear();
        canvas.present();

        Ok(Display {
            canvas,
            foreground: FOREGROUND,
            background: BACKGROUND,
        })
    }

    /// Formats the Chip-8 FrameBuffer as an SDL2 RGB24 texture and renders it.
    ///
    /// # Arguments
    /// * `frame` a Chip-8 FrameBuffer
    pub fn render(&mut self, frame: &FrameBuffer) -> Result<(), String> {
        let texture_creator = self.canvas.texture_creator();

        let mut texture = texture_creator
            .create_texture_streaming(
                PixelFormatEnum::RGB24,
                DISPLAY_WIDTH as u32,
                DISPLAY_HEIGHT as u32,
            )
            .map_err(|e| e.to_string())?;

        let pixels = frame_to_rgb24(frame, self.foreground, self.background);
        texture.with_lock(None, |buffer: &mut [u8], pitch: usize| {
            for (row, line) in pixels.chunks(DISPLAY_WIDTH * 3).enumerate() {
                buffer[row * pitch..row * pitch + line.len()].copy_from_slice(line);
            }
        })?;

        self.canvas.copy(&texture, None, None)?;
        self.canvas.present();
        Ok(())
    }
}

/// Formats a Chip-8 FrameBuffer for rendering as an SDL2 texture.
///
/// An RGB24 texture is a 1D array of bytes that represent concatenated rows of RGB pixels,
/// so the rows of the frame are concatenated and each pixel becomes three bytes of
/// either `on` or `off`.
///
/// # Arguments
/// * `frame` a Chip-8 FrameBuffer
/// * `on` colour of lit pixels
/// * `off` colour of unlit pixels
pub fn frame_to_rgb24(frame: &FrameBuffer, on: Color, off: Color) -> Vec<u8> {
    frame
        .iter()
        .flat_map(|row| row.iter())
        .flat_map(|&pixel| {
            let Color { r, g, b, .. } = if pixel != 0 { on } else { off };
            [r, g, b]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_to_rgb24() {
        let mut frame: FrameBuffer = [[0; 64]; 32];
        frame[0][0..2].copy_from_slice(&[0, 1]);
        frame[1][0..2].copy_from_slice(&[1, 0]);
        let white = Color::RGB(255, 255, 255);
        let black = Color::RGB(0, 0, 0);
        let texture = frame_to_rgb24(&frame, white, black);

        let mut expected: Vec<u8> = vec![0; 6144];
        expected[0..6].copy_from_slice(&[0, 0, 0, 255, 255, 255]);
        expected[192..198].copy_from_slice(&[255, 255, 255, 0, 0, 0]);

        assert_eq!(texture, expected);
    }

    #[test]
    fn test_frame_to_rgb24_uses_palette() {
        let mut frame: FrameBuffer = [[0; 64]; 32];
        frame[31][63] = 1;
        let texture = frame_to_rgb24(&frame, FOREGROUND, BACKGROUND);

        assert_eq!(texture.len(), 64 * 32 * 3);
        assert_eq!(texture[6141..], [0x33, 0xCC, 0x33]);
        assert!(texture[..6141].iter().all(|&b| b == 0));
    }
}
