//! radioface desktop simulator.
//!
//! Runs the display head against the SDL2 backend: now-playing screen with
//! seeded demo metadata, station directory loaded from the configured file,
//! cooperative refresh loop until the window closes.

use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use anyhow::Result;

use radioface_backend_sdl::SdlBackend;
use radioface_screen::UiContext;
use radioface_types::config::RadioConfig;

const TICK: Duration = Duration::from_millis(5);

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Config from CLI arg, RADIOFACE_CONFIG env var, or defaults.
    let config_path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("RADIOFACE_CONFIG").ok())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("radioface.toml"));
    let config = RadioConfig::load_or_default(&config_path)?;
    log::info!(
        "Starting radioface ({}x{})",
        config.screen_width,
        config.screen_height,
    );

    let backend = SdlBackend::new(&config)?;
    let mut ctx = UiContext::new(&config, backend)?;

    if ctx.load_station_directory(&config.station_file) {
        log::info!("{} stations loaded", ctx.stations().len());
    } else {
        log::info!("using built-in station table");
    }

    // Demo metadata until a stream feeds real ICY titles.
    ctx.update_now_playing("Sledgehammer", "Peter Gabriel", "So");
    ctx.update_genre("Rock");

    while ctx.pump()? {
        thread::sleep(TICK);
    }

    log::info!("window closed, shutting down");
    ctx.shutdown()?;
    Ok(())
}
