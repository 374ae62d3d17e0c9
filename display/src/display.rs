use sdl2::pixels::PixelFormatEnum;

use schip_core::constants::{VIDEO_HEIGHT, VIDEO_WIDTH};
use schip_core::state::VideoBuffer;

/// Presents the machine's 64x32 monochrome buffer in an SDL2 window.
///
/// Pixels arrive as 32-bit fully-on/fully-off words, so the buffer maps
/// straight onto an RGBA8888 streaming texture; the only conversion is the
/// word-to-byte split.
pub struct Display {
    canvas: sdl2::render::WindowCanvas,
}

impl Display {
    /// Open a window scaled up from the native resolution by `scale`.
    pub fn new(sdl: &sdl2::Sdl, scale: u32) -> Self {
        let video_subsystem = sdl.video().unwrap();
        let window = video_subsystem
            .window(
                "schip",
                VIDEO_WIDTH as u32 * scale,
                VIDEO_HEIGHT as u32 * scale,
            )
            .position_centered()
            .opengl()
            .build()
            .unwrap();
        let canvas = window.into_canvas().build().unwrap();

        Display { canvas }
    }

    /// Split each 32-bit pixel word into texture bytes, row-major.
    fn frame_to_texture_bytes(frame: &VideoBuffer) -> Vec<u8> {
        frame.iter().flat_map(|px| px.to_be_bytes()).collect()
    }

    /// Stream the frame into a native-resolution texture and stretch it
    /// over the whole window.
    pub fn render(&mut self, frame: &VideoBuffer) {
        let texture_creator = self.canvas.texture_creator();
        let mut texture = texture_creator
            .create_texture_streaming(
                PixelFormatEnum::RGBA8888,
                VIDEO_WIDTH as u32,
                VIDEO_HEIGHT as u32,
            )
            .unwrap();

        texture
            .update(None, &Self::frame_to_texture_bytes(frame), VIDEO_WIDTH * 4)
            .unwrap();

        self.canvas.clear();
        self.canvas.copy(&texture, None, None).unwrap();
        self.canvas.present();
    }
}
