//! Display flush bridge.
//!
//! Routes each rasterized strip from the composer to the active backend and
//! enforces the one invariant the whole render loop hangs on: the flush
//! token is completed exactly once per invocation, on every path. Once the
//! loop is running, backend failures are logged and swallowed; the
//! alternative is a stalled double-buffer and a frozen UI.

use radioface_compose::{FlushSink, FlushToken};
use radioface_types::geom::Region;

use crate::backend::DisplayBackend;

/// Bridges the composition engine to a [`DisplayBackend`].
pub struct FlushBridge<B> {
    backend: B,
}

impl<B: DisplayBackend> FlushBridge<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn into_inner(self) -> B {
        self.backend
    }
}

impl<B: DisplayBackend> FlushSink for FlushBridge<B> {
    fn flush(&mut self, region: Region, pixels: &[u16], token: FlushToken<'_>) {
        let area = region.area();
        if area > 0 && pixels.len() >= area {
            if let Err(e) = self.backend.present(region, &pixels[..area]) {
                log::warn!("present failed for {region:?}: {e}");
            }
        }
        // Acknowledge unconditionally: zero-area regions, short buffers and
        // backend errors all still free the strip for reuse.
        token.complete();
    }
}
