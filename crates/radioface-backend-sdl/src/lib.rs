//! SDL2 backend for radioface.
//!
//! Desktop simulator for the appliance panel: an integer-scaled window whose
//! logical surface matches the panel resolution, with the host mouse standing
//! in for the touch controller. Strips arrive as packed RGB565, go through
//! the shared conversion scratch and land in a streaming ARGB8888 texture.

use sdl2::EventPump;
use sdl2::event::Event;
use sdl2::pixels::PixelFormatEnum;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::video::{Window, WindowContext};

use radioface_screen::{ConvertScratch, DisplayBackend};
use radioface_types::config::RadioConfig;
use radioface_types::error::{RadioError, Result};
use radioface_types::geom::Region;
use radioface_types::input::PointerSample;

/// SDL2 window, renderer and event pump.
///
/// # Safety
///
/// `texture` is declared before `texture_creator` so that Rust's drop order
/// (declaration order) destroys the texture before the creator it borrows
/// from. The `Texture<'static>` lifetime is erased via transmute in `new()`;
/// this is sound because the `TextureCreator` always outlives the texture.
pub struct SdlBackend {
    canvas: Canvas<Window>,
    event_pump: EventPump,
    texture: Texture<'static>,
    #[allow(dead_code)]
    texture_creator: TextureCreator<WindowContext>,
    scratch: ConvertScratch,
    width: u32,
    pointer: PointerSample,
    quit: bool,
}

impl SdlBackend {
    /// Create the simulator window at `window_scale` times the panel size.
    pub fn new(config: &RadioConfig) -> Result<Self> {
        let scale = config.window_scale.max(1);
        let sdl = sdl2::init().map_err(RadioError::Backend)?;
        let video = sdl.video().map_err(RadioError::Backend)?;
        let window = video
            .window(
                &config.window_title,
                config.screen_width * scale,
                config.screen_height * scale,
            )
            .position_centered()
            .build()
            .map_err(|e| RadioError::Backend(e.to_string()))?;
        let mut canvas = window
            .into_canvas()
            .accelerated()
            .present_vsync()
            .build()
            .map_err(|e| RadioError::Backend(e.to_string()))?;
        canvas
            .set_logical_size(config.screen_width, config.screen_height)
            .map_err(|e| RadioError::Backend(e.to_string()))?;
        let texture_creator = canvas.texture_creator();
        let texture = texture_creator
            .create_texture_streaming(
                PixelFormatEnum::ARGB8888,
                config.screen_width,
                config.screen_height,
            )
            .map_err(|e| RadioError::Backend(e.to_string()))?;

        // SAFETY: the texture borrows from self.texture_creator which lives in
        // the same struct. `texture` is declared before `texture_creator`, so
        // Rust drops the texture first. The erased lifetime is therefore
        // always valid.
        let texture: Texture<'static> = unsafe { std::mem::transmute(texture) };

        let event_pump = sdl.event_pump().map_err(RadioError::Backend)?;

        log::info!(
            "SDL2 backend initialized: {}x{} at {scale}x scale",
            config.screen_width,
            config.screen_height
        );

        Ok(Self {
            canvas,
            event_pump,
            texture,
            texture_creator,
            scratch: ConvertScratch::new(),
            width: config.screen_width,
            pointer: PointerSample::default(),
            quit: false,
        })
    }
}

impl DisplayBackend for SdlBackend {
    fn init(&mut self) -> Result<()> {
        Ok(())
    }

    fn present(&mut self, region: Region, pixels: &[u16]) -> Result<()> {
        let w = region.width();
        let h = region.height();
        if w == 0 || h == 0 || region.x1 < 0 || region.y1 < 0 {
            return Ok(());
        }
        if region.x1 as u32 + w > self.width {
            return Err(RadioError::Backend(format!(
                "region {region:?} exceeds surface width {}",
                self.width
            )));
        }

        let argb = self.scratch.convert(pixels)?;
        let rect = Rect::new(region.x1, region.y1, w, h);
        self.texture
            .with_lock(Some(rect), |buffer: &mut [u8], pitch: usize| {
                for row in 0..h as usize {
                    let src = &argb[row * w as usize..(row + 1) * w as usize];
                    let dst = &mut buffer[row * pitch..row * pitch + w as usize * 4];
                    for (chunk, &px) in dst.chunks_exact_mut(4).zip(src) {
                        chunk.copy_from_slice(&px.to_le_bytes());
                    }
                }
            })
            .map_err(RadioError::Backend)?;

        // The texture retains everything already flushed; repaint the whole
        // window so vsync'd presents never show a stale frame.
        self.canvas
            .copy(&self.texture, None, None)
            .map_err(RadioError::Backend)?;
        self.canvas.present();
        Ok(())
    }

    fn poll_pointer(&mut self) -> PointerSample {
        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => self.quit = true,
                Event::MouseMotion { x, y, .. } => {
                    self.pointer.x = x;
                    self.pointer.y = y;
                }
                Event::MouseButtonDown { x, y, .. } => {
                    self.pointer = PointerSample::pressed_at(x, y);
                }
                Event::MouseButtonUp { x, y, .. } => {
                    self.pointer = PointerSample::released_at(x, y);
                }
                _ => {}
            }
        }
        self.pointer
    }

    fn take_quit_request(&mut self) -> bool {
        std::mem::take(&mut self.quit)
    }

    fn shutdown(&mut self) -> Result<()> {
        log::info!("SDL2 backend shut down");
        Ok(())
    }
}
