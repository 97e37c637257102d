//! Presentation core of the radioface display head.
//!
//! Everything between the retained composition substrate and a concrete
//! pixel backend lives here: the backend trait, the RGB565 to ARGB8888
//! buffer converter, the flush bridge with its always-acknowledge rule, the
//! genre classifier and procedural glyph geometry, the station directory
//! loader, and the [`UiContext`](context::UiContext) tying them together.

pub mod backend;
pub mod bridge;
pub mod context;
pub mod convert;
pub mod directory;
pub mod genre;
pub mod icon;
pub mod now_playing;

pub use backend::DisplayBackend;
pub use bridge::FlushBridge;
pub use context::UiContext;
pub use convert::ConvertScratch;
pub use directory::{STATION_CAPACITY, StationDirectory, StationRecord};
pub use genre::{GenreIcon, GenreStyle, classify_icon, classify_style};
