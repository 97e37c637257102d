//! Retained-mode composition substrate for radioface.
//!
//! A [`Scene`](scene::Scene) keeps a persistent list of drawable nodes and a
//! dirty region. The [`Composer`](engine::Composer) rasterizes the dirty
//! region into packed RGB565 strip buffers and hands each strip to a
//! [`FlushSink`](engine::FlushSink), which must acknowledge every flush via
//! its completion token before the next strip is rendered.

pub mod engine;
pub mod font;
pub mod raster;
pub mod scene;

pub use engine::{Composer, FlushSink, FlushToken};
pub use scene::{GlyphRect, Node, NodeId, Scene};
