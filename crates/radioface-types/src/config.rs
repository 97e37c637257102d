//! Runtime configuration.
//!
//! A small TOML file selects screen geometry, the simulator window scale and
//! the station directory path. Every field has a compiled-in default so the
//! appliance boots with no config present.

use std::path::PathBuf;

use serde::Deserialize;

use crate::error::Result;

/// Display-head configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RadioConfig {
    /// Horizontal resolution of the panel / simulator surface.
    pub screen_width: u32,
    /// Vertical resolution of the panel / simulator surface.
    pub screen_height: u32,
    /// Rows per offscreen render strip. Two strip buffers of
    /// `screen_width * strip_rows` pixels alternate during refresh.
    pub strip_rows: u32,
    /// Integer window scale for the desktop simulator.
    pub window_scale: u32,
    /// Simulator window title.
    pub window_title: String,
    /// Station directory file.
    pub station_file: PathBuf,
}

impl Default for RadioConfig {
    fn default() -> Self {
        Self {
            screen_width: 320,
            screen_height: 240,
            strip_rows: 40,
            window_scale: 2,
            window_title: "radioface simulator".to_string(),
            station_file: PathBuf::from("stations.xml"),
        }
    }
}

impl RadioConfig {
    /// Parse a config from TOML text. Missing fields keep their defaults.
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: RadioConfig = toml::from_str(text)?;
        Ok(config)
    }

    /// Load from a file if it exists, otherwise return the defaults.
    pub fn load_or_default(path: &std::path::Path) -> Result<Self> {
        if !path.is_file() {
            log::info!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    /// Pixels in one render strip buffer.
    pub fn strip_pixels(&self) -> usize {
        self.screen_width as usize * self.strip_rows as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_panel_geometry() {
        let c = RadioConfig::default();
        assert_eq!((c.screen_width, c.screen_height), (320, 240));
        assert_eq!(c.strip_rows, 40);
        assert_eq!(c.strip_pixels(), 320 * 40);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let c = RadioConfig::from_toml("screen_width = 480").unwrap();
        assert_eq!(c.screen_width, 480);
        assert_eq!(c.screen_height, 240);
        assert_eq!(c.window_scale, 2);
    }

    #[test]
    fn full_toml_overrides() {
        let c = RadioConfig::from_toml(
            r#"
            screen_width = 240
            screen_height = 320
            strip_rows = 20
            window_scale = 1
            window_title = "bench rig"
            station_file = "/data/stations.xml"
            "#,
        )
        .unwrap();
        assert_eq!(c.strip_pixels(), 240 * 20);
        assert_eq!(c.window_title, "bench rig");
        assert_eq!(c.station_file, PathBuf::from("/data/stations.xml"));
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(RadioConfig::from_toml("screen_width = [").is_err());
    }

    #[test]
    fn missing_file_yields_defaults() {
        let c = RadioConfig::load_or_default(std::path::Path::new("/nonexistent/radioface.toml"))
            .unwrap();
        assert_eq!(c.screen_width, 320);
    }
}
