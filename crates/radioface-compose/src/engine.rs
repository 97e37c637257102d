//! Strip renderer.
//!
//! The composer drains a scene's dirty region in horizontal strips of at most
//! `strip_rows` rows, rasterizing each strip into one of two alternating
//! RGB565 buffers and handing it to the [`FlushSink`]. The sink owns the
//! backend hand-off and must consume its [`FlushToken`] before returning:
//! a strip buffer is only reusable once the sink has acknowledged it, and a
//! missed acknowledgment would deadlock the refresh loop, so the composer
//! treats it as a hard error instead of continuing.

use radioface_types::error::{RadioError, Result};
use radioface_types::geom::Region;

use crate::raster;
use crate::scene::Scene;

/// Completion token for one flush. Consuming it marks the strip buffer free.
#[must_use = "a flush must be acknowledged"]
pub struct FlushToken<'a> {
    acked: &'a mut bool,
}

impl<'a> FlushToken<'a> {
    /// Mint a token backed by an external flag. The composer does this for
    /// every strip; sink implementations use it to test their flush paths.
    pub fn new(acked: &'a mut bool) -> Self {
        Self { acked }
    }

    /// Signal that the pixel buffer may be reused.
    pub fn complete(self) {
        *self.acked = true;
    }
}

/// Receives rasterized strips. Implemented by the display flush bridge.
pub trait FlushSink {
    /// Deliver one dirty strip. `pixels` holds exactly `region.area()` packed
    /// RGB565 pixels, row-major at the region's width, and is only valid for
    /// the duration of the call. The token must be completed before
    /// returning, whatever the outcome.
    fn flush(&mut self, region: Region, pixels: &[u16], token: FlushToken<'_>);
}

/// Rasterizes dirty scene regions into alternating strip buffers.
pub struct Composer {
    width: u32,
    height: u32,
    strip_rows: u32,
    strips: [Vec<u16>; 2],
    active: usize,
}

impl Composer {
    /// Allocate the two offscreen strip buffers.
    pub fn new(width: u32, height: u32, strip_rows: u32) -> Result<Self> {
        if width == 0 || height == 0 || strip_rows == 0 {
            return Err(RadioError::Compose(format!(
                "bad surface geometry {width}x{height}/{strip_rows}"
            )));
        }
        let pixels = width as usize * strip_rows as usize;
        log::debug!("composer: 2 strip buffers of {pixels} px");
        Ok(Self {
            width,
            height,
            strip_rows,
            strips: [vec![0; pixels], vec![0; pixels]],
            active: 0,
        })
    }

    /// Render and flush everything the scene has invalidated since the last
    /// refresh. Returns without touching the sink when nothing is dirty.
    pub fn refresh(&mut self, scene: &mut Scene, sink: &mut dyn FlushSink) -> Result<()> {
        let Some(dirty) = scene.take_dirty() else {
            return Ok(());
        };
        let Some(dirty) = dirty.intersect(&Region::screen(self.width, self.height)) else {
            return Ok(());
        };

        let mut y = dirty.y1;
        while y <= dirty.y2 {
            let y2 = (y + self.strip_rows as i32 - 1).min(dirty.y2);
            let region = Region::new(dirty.x1, y, dirty.x2, y2);
            let area = region.area();

            let buf = &mut self.strips[self.active];
            raster::render_region(scene, region, buf);

            let mut acked = false;
            sink.flush(region, &buf[..area], FlushToken { acked: &mut acked });
            if !acked {
                return Err(RadioError::Compose(format!(
                    "flush for {region:?} not acknowledged"
                )));
            }

            self.active ^= 1;
            y = y2 + 1;
        }
        Ok(())
    }

    /// Queue a full repaint on the next refresh.
    pub fn invalidate_all(&self, scene: &mut Scene) {
        scene.invalidate(Region::screen(self.width, self.height));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use radioface_types::color::Color;

    /// Records flushed regions; optionally refuses to acknowledge.
    struct RecordingSink {
        regions: Vec<Region>,
        pixel_counts: Vec<usize>,
        ack: bool,
    }

    impl RecordingSink {
        fn new() -> Self {
            Self {
                regions: Vec::new(),
                pixel_counts: Vec::new(),
                ack: true,
            }
        }
    }

    impl FlushSink for RecordingSink {
        fn flush(&mut self, region: Region, pixels: &[u16], token: FlushToken<'_>) {
            self.regions.push(region);
            self.pixel_counts.push(pixels.len());
            if self.ack {
                token.complete();
            } else {
                // Simulate a stalled bridge by dropping the token unconsumed.
                let FlushToken { .. } = token;
            }
        }
    }

    #[test]
    fn full_screen_refresh_splits_into_strips() {
        let mut scene = Scene::new(320, 240, Color::BLACK);
        let mut composer = Composer::new(320, 240, 40).unwrap();
        let mut sink = RecordingSink::new();
        composer.refresh(&mut scene, &mut sink).unwrap();

        assert_eq!(sink.regions.len(), 6);
        assert_eq!(sink.regions[0], Region::new(0, 0, 319, 39));
        assert_eq!(sink.regions[5], Region::new(0, 200, 319, 239));
        assert!(sink.pixel_counts.iter().all(|&n| n == 320 * 40));
    }

    #[test]
    fn short_final_strip_has_fewer_pixels() {
        let mut scene = Scene::new(100, 50, Color::BLACK);
        let mut composer = Composer::new(100, 50, 40).unwrap();
        let mut sink = RecordingSink::new();
        composer.refresh(&mut scene, &mut sink).unwrap();

        assert_eq!(sink.regions.len(), 2);
        assert_eq!(sink.pixel_counts, vec![100 * 40, 100 * 10]);
    }

    #[test]
    fn clean_scene_flushes_nothing() {
        let mut scene = Scene::new(100, 50, Color::BLACK);
        scene.take_dirty();
        let mut composer = Composer::new(100, 50, 40).unwrap();
        let mut sink = RecordingSink::new();
        composer.refresh(&mut scene, &mut sink).unwrap();
        assert!(sink.regions.is_empty());
    }

    #[test]
    fn narrow_dirty_region_flushes_narrow_strip() {
        let mut scene = Scene::new(320, 240, Color::BLACK);
        scene.take_dirty();
        scene.invalidate(Region::new(10, 100, 19, 104));
        let mut composer = Composer::new(320, 240, 40).unwrap();
        let mut sink = RecordingSink::new();
        composer.refresh(&mut scene, &mut sink).unwrap();

        assert_eq!(sink.regions, vec![Region::new(10, 100, 19, 104)]);
        assert_eq!(sink.pixel_counts, vec![50]);
    }

    #[test]
    fn unacknowledged_flush_is_an_error() {
        let mut scene = Scene::new(100, 50, Color::BLACK);
        let mut composer = Composer::new(100, 50, 40).unwrap();
        let mut sink = RecordingSink::new();
        sink.ack = false;
        let err = composer.refresh(&mut scene, &mut sink).unwrap_err();
        assert!(format!("{err}").contains("not acknowledged"));
    }

    #[test]
    fn zero_geometry_is_rejected() {
        assert!(Composer::new(0, 240, 40).is_err());
        assert!(Composer::new(320, 240, 0).is_err());
    }
}
