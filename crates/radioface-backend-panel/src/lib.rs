//! Hardware panel backend.
//!
//! The panel controller speaks RGB565 natively, so strips go straight onto
//! the bus with no pixel conversion: set the target window, push the pixels,
//! end the transaction. Touch is a polled controller that reports a contact
//! point or nothing; release samples keep the last known coordinates.

use radioface_screen::DisplayBackend;
use radioface_types::error::Result;
use radioface_types::geom::Region;
use radioface_types::input::PointerSample;

/// Write path of a panel controller (ILI9341-class, SPI or parallel).
pub trait PanelBus {
    /// Assert chip select and enter pixel-write mode.
    fn begin_write(&mut self) -> Result<()>;

    /// Address the rectangular window the next pixels fill, row-major.
    fn set_window(&mut self, x: i32, y: i32, w: u32, h: u32) -> Result<()>;

    /// Stream packed RGB565 pixels into the current window.
    fn push_pixels(&mut self, pixels: &[u16]) -> Result<()>;

    /// Deassert chip select.
    fn end_write(&mut self) -> Result<()>;
}

/// Polled touch controller.
pub trait TouchProbe {
    /// Current contact point in panel coordinates, `None` when untouched.
    fn read_touch(&mut self) -> Option<(i32, i32)>;
}

/// Panel backend over a bus and a touch probe.
pub struct PanelBackend<B, T> {
    bus: B,
    touch: T,
    pointer: PointerSample,
}

impl<B: PanelBus, T: TouchProbe> PanelBackend<B, T> {
    pub fn new(bus: B, touch: T) -> Self {
        Self {
            bus,
            touch,
            pointer: PointerSample::default(),
        }
    }

    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }
}

impl<B: PanelBus, T: TouchProbe> DisplayBackend for PanelBackend<B, T> {
    fn init(&mut self) -> Result<()> {
        log::info!("panel backend initialized");
        Ok(())
    }

    fn present(&mut self, region: Region, pixels: &[u16]) -> Result<()> {
        let w = region.width();
        let h = region.height();
        if w == 0 || h == 0 {
            return Ok(());
        }
        self.bus.begin_write()?;
        let result = self
            .bus
            .set_window(region.x1, region.y1, w, h)
            .and_then(|()| self.bus.push_pixels(pixels));
        // Deassert even when the write failed, or the bus wedges.
        let ended = self.bus.end_write();
        result?;
        ended
    }

    fn poll_pointer(&mut self) -> PointerSample {
        match self.touch.read_touch() {
            Some((x, y)) => self.pointer = PointerSample::pressed_at(x, y),
            None => self.pointer.pressed = false,
        }
        self.pointer
    }
}
