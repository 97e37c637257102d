//! Owned render context.
//!
//! One [`UiContext`] owns the whole display stack: scene, composer, flush
//! bridge with its backend, the now-playing screen and the station
//! directory. Everything runs on the caller's thread from a cooperative
//! `pump` loop; no globals, no interior mutability.

use std::path::Path;

use radioface_compose::{Composer, Scene};
use radioface_types::color::Color;
use radioface_types::config::RadioConfig;
use radioface_types::error::Result;
use radioface_types::input::PointerSample;

use crate::backend::DisplayBackend;
use crate::bridge::FlushBridge;
use crate::directory::{StationDirectory, StationRecord};
use crate::now_playing::NowPlayingScreen;

pub struct UiContext<B: DisplayBackend> {
    scene: Scene,
    composer: Composer,
    bridge: FlushBridge<B>,
    screen: NowPlayingScreen,
    directory: StationDirectory,
    pointer: PointerSample,
}

impl<B: DisplayBackend> UiContext<B> {
    /// Bring up the backend and build the initial scene. A backend that
    /// fails `init` aborts construction; there is nothing to draw on.
    pub fn new(config: &RadioConfig, mut backend: B) -> Result<Self> {
        backend.init()?;
        let mut scene = Scene::new(config.screen_width, config.screen_height, Color::BLACK);
        let composer = Composer::new(config.screen_width, config.screen_height, config.strip_rows)?;
        let screen = NowPlayingScreen::build(&mut scene);
        log::info!(
            "ui context up: {}x{} in {}-row strips",
            config.screen_width,
            config.screen_height,
            config.strip_rows
        );
        Ok(Self {
            scene,
            composer,
            bridge: FlushBridge::new(backend),
            screen,
            directory: StationDirectory::with_defaults(),
            pointer: PointerSample::default(),
        })
    }

    /// One cooperative tick: sample the pointer, flush whatever is dirty.
    /// Returns `false` once the backend wants the process to quit.
    pub fn pump(&mut self) -> Result<bool> {
        self.pointer = self.bridge.backend_mut().poll_pointer();
        self.composer.refresh(&mut self.scene, &mut self.bridge)?;
        Ok(!self.bridge.backend_mut().take_quit_request())
    }

    /// Latest pointer sample from the last pump.
    pub fn pointer(&self) -> PointerSample {
        self.pointer
    }

    pub fn update_now_playing(&mut self, track: &str, artist: &str, album: &str) {
        self.screen
            .set_track_info(&mut self.scene, track, artist, album);
    }

    pub fn update_genre(&mut self, label: &str) {
        self.screen.set_genre(&mut self.scene, label);
    }

    /// Load a station file, keeping the current table on any failure.
    /// Returns whether the table was replaced.
    pub fn load_station_directory(&mut self, path: &Path) -> bool {
        match self.directory.load(path) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("keeping current station table: {e}");
                false
            }
        }
    }

    pub fn stations(&self) -> &StationDirectory {
        &self.directory
    }

    pub fn station(&self, index: usize) -> Option<&StationRecord> {
        self.directory.get(index)
    }

    /// Repaint everything on the next pump.
    pub fn invalidate_all(&mut self) {
        self.composer.invalidate_all(&mut self.scene);
    }

    pub fn shutdown(mut self) -> Result<()> {
        self.bridge.backend_mut().shutdown()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use radioface_types::error::RadioError;
    use radioface_types::geom::Region;

    struct MockBackend {
        fail_init: bool,
        presented: Vec<Region>,
        pointer: PointerSample,
        quit: bool,
    }

    impl MockBackend {
        fn new() -> Self {
            Self {
                fail_init: false,
                presented: Vec::new(),
                pointer: PointerSample::default(),
                quit: false,
            }
        }
    }

    impl DisplayBackend for MockBackend {
        fn init(&mut self) -> Result<()> {
            if self.fail_init {
                return Err(RadioError::Backend("no display".into()));
            }
            Ok(())
        }

        fn present(&mut self, region: Region, _pixels: &[u16]) -> Result<()> {
            self.presented.push(region);
            Ok(())
        }

        fn poll_pointer(&mut self) -> PointerSample {
            self.pointer
        }

        fn take_quit_request(&mut self) -> bool {
            std::mem::take(&mut self.quit)
        }
    }

    fn context() -> UiContext<MockBackend> {
        UiContext::new(&RadioConfig::default(), MockBackend::new()).unwrap()
    }

    #[test]
    fn failed_backend_init_aborts_construction() {
        let mut backend = MockBackend::new();
        backend.fail_init = true;
        assert!(UiContext::new(&RadioConfig::default(), backend).is_err());
    }

    #[test]
    fn first_pump_paints_the_full_screen() {
        let mut ctx = context();
        assert!(ctx.pump().unwrap());
        // 240 rows in 40-row strips.
        assert_eq!(ctx.bridge.backend_mut().presented.len(), 6);
    }

    #[test]
    fn steady_state_pump_presents_nothing() {
        let mut ctx = context();
        ctx.pump().unwrap();
        ctx.bridge.backend_mut().presented.clear();
        ctx.pump().unwrap();
        assert!(ctx.bridge.backend_mut().presented.is_empty());
    }

    #[test]
    fn metadata_change_repaints_only_its_region() {
        let mut ctx = context();
        ctx.pump().unwrap();
        ctx.bridge.backend_mut().presented.clear();

        ctx.update_now_playing("Sledgehammer", "Peter Gabriel", "So");
        ctx.pump().unwrap();
        let presented = &ctx.bridge.backend_mut().presented;
        assert!(!presented.is_empty());
        // Label rows live in the track panel, not the whole screen.
        assert!(presented.iter().all(|r| r.y1 >= 98 && r.y2 < 240));
    }

    #[test]
    fn repeated_metadata_is_a_no_op() {
        let mut ctx = context();
        ctx.update_now_playing("Sledgehammer", "Peter Gabriel", "So");
        ctx.pump().unwrap();
        ctx.bridge.backend_mut().presented.clear();
        ctx.update_now_playing("Sledgehammer", "Peter Gabriel", "So");
        ctx.pump().unwrap();
        assert!(ctx.bridge.backend_mut().presented.is_empty());
    }

    #[test]
    fn quit_request_stops_the_pump() {
        let mut ctx = context();
        assert!(ctx.pump().unwrap());
        ctx.bridge.backend_mut().quit = true;
        assert!(!ctx.pump().unwrap());
        // Consumed; the next pump runs again.
        assert!(ctx.pump().unwrap());
    }

    #[test]
    fn pointer_sample_is_refreshed_each_pump() {
        let mut ctx = context();
        ctx.bridge.backend_mut().pointer = PointerSample::pressed_at(15, 115);
        ctx.pump().unwrap();
        assert!(ctx.pointer().pressed);
        assert_eq!((ctx.pointer().x, ctx.pointer().y), (15, 115));
    }

    #[test]
    fn failed_directory_load_keeps_defaults() {
        let mut ctx = context();
        let before = ctx.station(0).copied().unwrap();
        assert!(!ctx.load_station_directory(Path::new("/nonexistent.xml")));
        assert_eq!(ctx.station(0).copied().unwrap(), before);
    }

    #[test]
    fn invalidate_all_forces_a_full_repaint() {
        let mut ctx = context();
        ctx.pump().unwrap();
        ctx.bridge.backend_mut().presented.clear();
        ctx.invalidate_all();
        ctx.pump().unwrap();
        assert_eq!(ctx.bridge.backend_mut().presented.len(), 6);
    }
}
