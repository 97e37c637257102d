//! Software RGB565 rasterizer.
//!
//! Renders the portion of a scene covered by one strip region into a packed
//! RGB565 buffer. Rounded rectangles are filled scanline by scanline with a
//! per-row corner inset derived from the midpoint circle, the same shape the
//! glyph renderer and panels rely on.

use radioface_types::geom::Region;

use crate::font;
use crate::scene::{Node, Scene};

/// Rasterize `region` of the scene into `buf`.
///
/// `buf` must hold at least `region.area()` pixels; it is filled row-major at
/// the region's width. Nodes are painted in scene order over the background.
pub fn render_region(scene: &Scene, region: Region, buf: &mut [u16]) {
    let area = region.area();
    debug_assert!(buf.len() >= area);

    let bg = scene.background().to_rgb565();
    for px in buf[..area].iter_mut() {
        *px = bg;
    }

    for node in scene.nodes() {
        match node {
            Node::Panel {
                region: r,
                background,
                border,
                border_width,
                radius,
            } => {
                let bw = *border_width as i32;
                let rad = *radius as i32;
                if bw > 0 {
                    fill_rounded(
                        buf,
                        region,
                        region,
                        r.x1,
                        r.y1,
                        r.width() as i32,
                        r.height() as i32,
                        rad,
                        border.to_rgb565(),
                    );
                }
                fill_rounded(
                    buf,
                    region,
                    region,
                    r.x1 + bw,
                    r.y1 + bw,
                    r.width() as i32 - 2 * bw,
                    r.height() as i32 - 2 * bw,
                    (rad - bw).max(0),
                    background.to_rgb565(),
                );
            }
            Node::Label {
                x,
                y,
                max_width,
                text,
                color,
            } => {
                draw_text(buf, region, *x, *y, *max_width, text, color.to_rgb565());
            }
            Node::Glyph {
                region: r,
                color,
                rects,
            } => {
                // Glyph primitives are clipped to their canvas.
                let Some(clip) = r.intersect(&region) else {
                    continue;
                };
                let c = color.to_rgb565();
                for rect in rects {
                    fill_rounded(
                        buf,
                        region,
                        clip,
                        r.x1 + rect.x,
                        r.y1 + rect.y,
                        rect.w,
                        rect.h,
                        rect.radius,
                        c,
                    );
                }
            }
        }
    }
}

/// Fill one horizontal span, clipped to `clip`, into the strip buffer.
fn hspan(buf: &mut [u16], strip: Region, clip: Region, x1: i32, x2: i32, y: i32, c: u16) {
    if y < clip.y1 || y > clip.y2 || y < strip.y1 || y > strip.y2 {
        return;
    }
    let x1 = x1.max(clip.x1).max(strip.x1);
    let x2 = x2.min(clip.x2).min(strip.x2);
    if x1 > x2 {
        return;
    }
    let row = (y - strip.y1) as usize * strip.width() as usize;
    let start = row + (x1 - strip.x1) as usize;
    let end = row + (x2 - strip.x1) as usize;
    for px in &mut buf[start..=end] {
        *px = c;
    }
}

/// Fill a rounded rectangle scanline by scanline.
#[allow(clippy::too_many_arguments)]
fn fill_rounded(
    buf: &mut [u16],
    strip: Region,
    clip: Region,
    x: i32,
    y: i32,
    w: i32,
    h: i32,
    radius: i32,
    c: u16,
) {
    if w <= 0 || h <= 0 {
        return;
    }
    let r = radius.clamp(0, w / 2).min(h / 2);
    for dy in 0..h {
        let inset = if dy < r {
            let ry = r - dy;
            r - isqrt((r * r - ry * ry).max(0))
        } else if dy >= h - r {
            let ry = dy - (h - 1 - r);
            r - isqrt((r * r - ry * ry).max(0))
        } else {
            0
        };
        hspan(buf, strip, clip, x + inset, x + w - 1 - inset, y + dy, c);
    }
}

/// Draw one line of 8x8 bitmap text, clipped to `max_width`.
fn draw_text(buf: &mut [u16], strip: Region, x: i32, y: i32, max_width: u32, text: &str, c: u16) {
    let mut cx = x;
    let limit = x + max_width as i32;
    for ch in text.chars() {
        if cx + font::GLYPH_WIDTH as i32 > limit {
            break;
        }
        let rows = font::glyph(ch);
        for (row, bits) in rows.iter().enumerate() {
            for col in 0..8 {
                if bits & (0x80 >> col) != 0 {
                    hspan(
                        buf,
                        strip,
                        strip,
                        cx + col,
                        cx + col,
                        y + row as i32,
                        c,
                    );
                }
            }
        }
        cx += font::GLYPH_WIDTH as i32;
    }
}

/// Integer square root (floor).
fn isqrt(n: i32) -> i32 {
    if n <= 0 {
        return 0;
    }
    let mut x = (n as f32).sqrt() as i32;
    while x * x > n {
        x -= 1;
    }
    while (x + 1) * (x + 1) <= n {
        x += 1;
    }
    x
}
