//! Retained scene graph.
//!
//! Nodes are painted in insertion order. Mutating a node through the scene
//! API invalidates its bounds; the accumulated dirty region is drained by the
//! composer on the next refresh. Nothing outside the dirty region is
//! re-rasterized or re-transmitted.

use radioface_types::color::Color;
use radioface_types::geom::Region;

use crate::font;

/// One rounded rectangle of a procedural glyph, in canvas-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
    pub radius: i32,
}

/// A drawable scene node.
#[derive(Debug, Clone)]
pub enum Node {
    /// Container with background, border and rounded corners.
    Panel {
        region: Region,
        background: Color,
        border: Color,
        border_width: u32,
        radius: u32,
    },
    /// Single line of 8x8 bitmap text, clipped to `max_width`.
    Label {
        x: i32,
        y: i32,
        max_width: u32,
        text: String,
        color: Color,
    },
    /// Square canvas of procedural glyph rectangles.
    Glyph {
        region: Region,
        color: Color,
        rects: Vec<GlyphRect>,
    },
}

impl Node {
    /// Bounds used for invalidation.
    fn bounds(&self) -> Region {
        match self {
            Node::Panel { region, .. } | Node::Glyph { region, .. } => *region,
            Node::Label {
                x, y, max_width, ..
            } => Region::new(
                *x,
                *y,
                *x + *max_width as i32 - 1,
                *y + font::GLYPH_HEIGHT as i32 - 1,
            ),
        }
    }
}

/// Handle to a scene node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeId(usize);

/// A retained scene: background, ordered nodes, accumulated dirty region.
pub struct Scene {
    width: u32,
    height: u32,
    background: Color,
    nodes: Vec<Node>,
    dirty: Option<Region>,
}

impl Scene {
    /// Create an empty scene. The whole screen starts dirty so the first
    /// refresh paints the background everywhere.
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        Self {
            width,
            height,
            background,
            nodes: Vec::new(),
            dirty: Some(Region::screen(width, height)),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn add(&mut self, node: Node) -> NodeId {
        self.invalidate(node.bounds());
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Replace a label's text.
    ///
    /// No-op when the text is unchanged, so steady-state metadata polling
    /// does not cause repaints.
    pub fn set_label_text(&mut self, id: NodeId, text: &str) {
        let bounds = self.nodes[id.0].bounds();
        let changed = match &mut self.nodes[id.0] {
            Node::Label { text: current, .. } if current.as_str() != text => {
                current.clear();
                current.push_str(text);
                true
            }
            _ => false,
        };
        if changed {
            self.invalidate(bounds);
        }
    }

    /// Recolor a panel's background and border.
    pub fn set_panel_style(&mut self, id: NodeId, background: Color, border: Color) {
        let bounds = self.nodes[id.0].bounds();
        let changed = match &mut self.nodes[id.0] {
            Node::Panel {
                background: bg,
                border: bd,
                ..
            } => {
                *bg = background;
                *bd = border;
                true
            }
            _ => false,
        };
        if changed {
            self.invalidate(bounds);
        }
    }

    /// Replace a glyph canvas' primitives wholesale (clear-and-rebuild).
    pub fn set_glyph(&mut self, id: NodeId, color: Color, rects: Vec<GlyphRect>) {
        let bounds = self.nodes[id.0].bounds();
        let changed = match &mut self.nodes[id.0] {
            Node::Glyph {
                color: c,
                rects: r,
                ..
            } => {
                *c = color;
                *r = rects;
                true
            }
            _ => false,
        };
        if changed {
            self.invalidate(bounds);
        }
    }

    /// Mark a region as needing repaint.
    pub fn invalidate(&mut self, region: Region) {
        let Some(region) = region.intersect(&Region::screen(self.width, self.height)) else {
            return;
        };
        self.dirty = Some(match self.dirty {
            Some(d) => d.union(&region),
            None => region,
        });
    }

    /// Drain the accumulated dirty region.
    pub fn take_dirty(&mut self) -> Option<Region> {
        self.dirty.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene() -> Scene {
        let mut s = Scene::new(320, 240, Color::BLACK);
        // Drain the initial full-screen dirt.
        s.take_dirty();
        s
    }

    #[test]
    fn new_scene_is_fully_dirty() {
        let mut s = Scene::new(320, 240, Color::BLACK);
        assert_eq!(s.take_dirty(), Some(Region::screen(320, 240)));
        assert_eq!(s.take_dirty(), None);
    }

    #[test]
    fn adding_a_node_dirties_its_bounds() {
        let mut s = scene();
        s.add(Node::Panel {
            region: Region::new(10, 20, 40, 60),
            background: Color::BLACK,
            border: Color::WHITE,
            border_width: 2,
            radius: 8,
        });
        assert_eq!(s.take_dirty(), Some(Region::new(10, 20, 40, 60)));
    }

    #[test]
    fn dirty_regions_accumulate_by_union() {
        let mut s = scene();
        s.invalidate(Region::new(0, 0, 4, 4));
        s.invalidate(Region::new(100, 100, 110, 110));
        assert_eq!(s.take_dirty(), Some(Region::new(0, 0, 110, 110)));
    }

    #[test]
    fn invalidate_clips_to_screen() {
        let mut s = scene();
        s.invalidate(Region::new(-10, -10, 5, 5));
        assert_eq!(s.take_dirty(), Some(Region::new(0, 0, 5, 5)));
        s.invalidate(Region::new(400, 400, 500, 500));
        assert_eq!(s.take_dirty(), None);
    }

    #[test]
    fn unchanged_label_text_does_not_dirty() {
        let mut s = scene();
        let id = s.add(Node::Label {
            x: 8,
            y: 8,
            max_width: 100,
            text: "-".to_string(),
            color: Color::WHITE,
        });
        s.take_dirty();
        s.set_label_text(id, "-");
        assert_eq!(s.take_dirty(), None);
        s.set_label_text(id, "So");
        assert!(s.take_dirty().is_some());
    }

    #[test]
    fn label_bounds_span_max_width_and_font_height() {
        let mut s = scene();
        s.add(Node::Label {
            x: 8,
            y: 16,
            max_width: 120,
            text: "x".to_string(),
            color: Color::WHITE,
        });
        assert_eq!(s.take_dirty(), Some(Region::new(8, 16, 127, 23)));
    }
}
