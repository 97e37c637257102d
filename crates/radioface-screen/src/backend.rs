//! Display backend trait.
//!
//! One trait, two implementations: the SDL2 software simulator and the
//! hardware panel. The core never calls platform APIs directly; every pixel
//! and every pointer sample crosses this boundary.

use radioface_types::error::Result;
use radioface_types::geom::Region;
use radioface_types::input::PointerSample;

/// A pixel-output target plus its pointer/touch device.
///
/// All methods are synchronous and called from the cooperative refresh loop;
/// a slow `present` stalls the whole UI, by contract.
pub trait DisplayBackend {
    /// One-time bring-up after construction. Failure here is fatal: the
    /// caller must not enter the render loop.
    fn init(&mut self) -> Result<()>;

    /// Push one dirty region of packed RGB565 pixels (`region.area()` of
    /// them, row-major) to the output. Called by the flush bridge only.
    fn present(&mut self, region: Region, pixels: &[u16]) -> Result<()>;

    /// Latest pointer state, without blocking. Called once per tick.
    fn poll_pointer(&mut self) -> PointerSample;

    /// True once when the host asked the process to quit (window close).
    /// Hardware panels never do.
    fn take_quit_request(&mut self) -> bool {
        false
    }

    /// Release backend resources.
    fn shutdown(&mut self) -> Result<()> {
        Ok(())
    }
}
