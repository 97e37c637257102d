//! Now-playing screen.
//!
//! Builds the fixed 320x240 layout once and then only mutates node content:
//! three metadata labels in the track panel on the left, and the genre box
//! with its procedural glyph on the right. All geometry is baked constants;
//! the scene's no-op detection keeps steady-state metadata polls from
//! repainting.

use radioface_compose::{Node, NodeId, Scene};
use radioface_types::color::Color;
use radioface_types::geom::Region;

use crate::genre::{classify_icon, classify_style};
use crate::icon;

const MARGIN: i32 = 6;
const PANEL_Y: i32 = 98;
const PANEL_H: i32 = 82;
const PANEL_GAP: i32 = 6;

const GENRE_BOX: i32 = 82;
const ICON_PAD: i32 = 10;

const TRACK_PAD: i32 = 8;
const LINE_SPACING: i32 = 20;

const PANEL_BG: Color = Color::hex(0x101010);
const PANEL_BORDER: Color = Color::hex(0x00AA66);
const TRACK_COLOR: Color = Color::hex(0x00FF66);
const ARTIST_COLOR: Color = Color::hex(0xFFFFFF);
const ALBUM_COLOR: Color = Color::hex(0xB0B0B0);
const GENRE_BG: Color = Color::hex(0x202020);
const GENRE_ACCENT: Color = Color::hex(0xE0E0E0);

/// Node handles for the now-playing layout.
pub struct NowPlayingScreen {
    track: NodeId,
    artist: NodeId,
    album: NodeId,
    genre_box: NodeId,
    genre_glyph: NodeId,
    glyph_size: i32,
}

impl NowPlayingScreen {
    /// Add the layout to an empty scene.
    pub fn build(scene: &mut Scene) -> Self {
        let width = scene.width() as i32;

        let genre_x = width - MARGIN - GENRE_BOX;
        let track_w = genre_x - PANEL_GAP - MARGIN;

        let track_panel = Region::new(MARGIN, PANEL_Y, MARGIN + track_w - 1, PANEL_Y + PANEL_H - 1);
        scene.add(Node::Panel {
            region: track_panel,
            background: PANEL_BG,
            border: PANEL_BORDER,
            border_width: 1,
            radius: 6,
        });

        let text_x = MARGIN + TRACK_PAD;
        let text_w = (track_w - 2 * TRACK_PAD) as u32;
        let mut line_y = PANEL_Y + TRACK_PAD;
        let track = scene.add(label(text_x, line_y, text_w, TRACK_COLOR));
        line_y += LINE_SPACING;
        let artist = scene.add(label(text_x, line_y, text_w, ARTIST_COLOR));
        line_y += LINE_SPACING;
        let album = scene.add(label(text_x, line_y, text_w, ALBUM_COLOR));

        let box_region = Region::new(genre_x, PANEL_Y, genre_x + GENRE_BOX - 1, PANEL_Y + GENRE_BOX - 1);
        let genre_box = scene.add(Node::Panel {
            region: box_region,
            background: GENRE_BG,
            border: GENRE_ACCENT,
            border_width: 1,
            radius: 6,
        });

        let glyph_size = GENRE_BOX - 2 * ICON_PAD;
        let canvas = Region::new(
            genre_x + ICON_PAD,
            PANEL_Y + ICON_PAD,
            genre_x + ICON_PAD + glyph_size - 1,
            PANEL_Y + ICON_PAD + glyph_size - 1,
        );
        let genre_glyph = scene.add(Node::Glyph {
            region: canvas,
            color: GENRE_ACCENT,
            rects: Vec::new(),
        });

        Self {
            track,
            artist,
            album,
            genre_box,
            genre_glyph,
            glyph_size,
        }
    }

    /// Update the three metadata lines. Empty fields show as "-".
    pub fn set_track_info(&self, scene: &mut Scene, track: &str, artist: &str, album: &str) {
        scene.set_label_text(self.track, placeholder(track));
        scene.set_label_text(self.artist, placeholder(artist));
        scene.set_label_text(self.album, placeholder(album));
    }

    /// Restyle the genre box and glyph from a free-text genre label.
    pub fn set_genre(&self, scene: &mut Scene, label: &str) {
        let style = classify_style(label);
        let glyph = classify_icon(label);
        log::debug!("genre {label:?} -> {} / {glyph:?}", style.caption);
        scene.set_panel_style(self.genre_box, style.background, style.accent);
        scene.set_glyph(
            self.genre_glyph,
            style.accent,
            icon::glyph_rects(glyph, self.glyph_size),
        );
    }
}

fn label(x: i32, y: i32, max_width: u32, color: Color) -> Node {
    Node::Label {
        x,
        y,
        max_width,
        text: "-".to_string(),
        color,
    }
}

fn placeholder(s: &str) -> &str {
    if s.trim().is_empty() { "-" } else { s }
}
