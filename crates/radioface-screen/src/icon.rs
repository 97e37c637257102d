//! Procedural genre glyphs.
//!
//! Every glyph is a handful of rounded rectangles sized as integer
//! percentages of a square canvas, so the same shapes draw at 62 px in the
//! now-playing box or smaller in a list row. Coordinates are canvas-local;
//! placement happens in the scene node.

use radioface_compose::GlyphRect;

use crate::genre::GenreIcon;

/// Build the rectangle list for `icon` on a `size` x `size` canvas.
///
/// Degenerate rectangles that would round to zero width or height at small
/// sizes are dropped rather than drawn as artifacts.
pub fn glyph_rects(icon: GenreIcon, size: i32) -> Vec<GlyphRect> {
    let mut rects = Vec::new();
    if size <= 0 {
        return rects;
    }
    match icon {
        GenreIcon::Guitar => guitar(size, false, &mut rects),
        GenreIcon::DistortedGuitar => guitar(size, true, &mut rects),
        GenreIcon::Violin => violin(size, &mut rects),
        GenreIcon::Microphone => microphone(size, &mut rects),
        GenreIcon::Note => note(size, &mut rects),
    }
    rects
}

fn push(rects: &mut Vec<GlyphRect>, x: i32, y: i32, w: i32, h: i32, radius: i32) {
    if w > 0 && h > 0 {
        rects.push(GlyphRect { x, y, w, h, radius });
    }
}

fn pct(size: i32, p: i32) -> i32 {
    size * p / 100
}

/// Body low and left, neck rising to a headstock at the top. The spiky
/// variant flanks the headstock with two unrounded spikes.
fn guitar(size: i32, spiky: bool, rects: &mut Vec<GlyphRect>) {
    let body = pct(size, 48);
    let body_x = pct(size, 12);
    let body_y = size - body - pct(size, 8);
    push(rects, body_x, body_y, body, body, body / 2);

    let neck_w = pct(size, 10);
    let neck_h = pct(size, 45);
    let neck_x = body_x + body - neck_w / 2;
    let neck_y = body_y - neck_h + neck_w;
    push(rects, neck_x, neck_y.max(0), neck_w, neck_h, neck_w / 2);

    let head_w = pct(size, 18);
    let head_h = pct(size, 10);
    let head_x = neck_x + neck_w / 2 - head_w / 2;
    let head_y = (neck_y - head_h / 2).max(0);
    push(rects, head_x, head_y, head_w, head_h, head_h / 2);

    if spiky {
        let spike_w = if head_w < 6 { head_w } else { head_w / 3 };
        let spike_h = if head_h < 4 { head_h } else { head_h / 2 };
        push(rects, head_x - spike_w, head_y, spike_w, spike_h, 0);
        push(rects, head_x + head_w, head_y, spike_w, spike_h, 0);
    }
}

/// Centered body, neck above, scroll on top.
fn violin(size: i32, rects: &mut Vec<GlyphRect>) {
    let body_w = pct(size, 40);
    let body_h = pct(size, 65);
    let body_x = (size - body_w) / 2;
    let body_y = size - body_h - pct(size, 5);
    push(rects, body_x, body_y, body_w, body_h, body_w / 2);

    let neck_w = pct(size, 10);
    let neck_h = pct(size, 30);
    let neck_x = (size - neck_w) / 2;
    let neck_y = (body_y - neck_h).max(0);
    push(rects, neck_x, neck_y, neck_w, neck_h, neck_w / 2);

    let scroll = neck_w + 4;
    let scroll_x = (size - scroll) / 2;
    let scroll_y = (neck_y - scroll / 2).max(0);
    push(rects, scroll_x, scroll_y, scroll, scroll, scroll / 2);
}

/// Round head over a tapered handle and a base bar.
fn microphone(size: i32, rects: &mut Vec<GlyphRect>) {
    let head = pct(size, 40);
    let head_x = (size - head) / 2;
    let head_y = pct(size, 10);
    push(rects, head_x, head_y, head, head, head / 2);

    let handle_w = pct(size, 20);
    let handle_h = pct(size, 35);
    let handle_x = (size - handle_w) / 2;
    let handle_y = head_y + head;
    push(rects, handle_x, handle_y, handle_w, handle_h, handle_w / 2);

    let base_w = pct(size, 30);
    let base_h = pct(size, 8);
    let base_x = (size - base_w) / 2;
    let base_y = handle_y + handle_h;
    push(rects, base_x, base_y, base_w, base_h, base_h / 2);
}

/// Eighth note: round head, stem, flag off the stem top.
fn note(size: i32, rects: &mut Vec<GlyphRect>) {
    let head = pct(size, 28);
    let head_x = pct(size, 20);
    let head_y = size - head - pct(size, 10);
    push(rects, head_x, head_y, head, head, head / 2);

    let stem_w = (head / 5).max(2);
    let stem_h = pct(size, 55);
    let stem_x = head_x + head - stem_w;
    let stem_y = (head_y + head / 2 - stem_h).max(0);
    push(rects, stem_x, stem_y, stem_w, stem_h, stem_w / 2);

    let flag_w = pct(size, 35);
    let flag_h = pct(size, 12);
    push(rects, stem_x + stem_w, stem_y, flag_w, flag_h, flag_h / 2);
}
