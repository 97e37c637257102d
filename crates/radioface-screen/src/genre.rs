//! Genre classification.
//!
//! Stream metadata carries free-text genre labels ("Classic Hard Rock 70s",
//! "smooth jazz", ...). Two independent ordered rule sets map a label to a
//! visual style and to a glyph category. Order matters: the first matching
//! entry wins, duplicate substrings across aliases are deliberate, and the
//! trailing wildcard style guarantees classification never fails. Do not
//! replace the lists with a keyed lookup.

use radioface_types::color::Color;

/// Glyph drawn in the genre box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenreIcon {
    Note,
    Guitar,
    DistortedGuitar,
    Violin,
    Microphone,
}

/// One style rule: substring key (or wildcard), caption and colors.
#[derive(Debug)]
pub struct GenreStyle {
    /// Lowercase substring to search for; `None` is the wildcard that
    /// matches every label, including the empty one.
    pub key: Option<&'static str>,
    /// Short caption for logs and compact layouts.
    pub caption: &'static str,
    /// Genre box background.
    pub background: Color,
    /// Accent used for the box border and the glyph.
    pub accent: Color,
}

/// Ordered style rules. The wildcard entry is last and must stay last.
pub const STYLES: [GenreStyle; 14] = [
    style(Some("hard rock"), "METAL", 0x4A0000, 0xFF2A2A),
    style(Some("heavy metal"), "METAL", 0x4A0000, 0xFF2A2A),
    style(Some("metal"), "METAL", 0x4A0000, 0xFF2A2A),
    style(Some("rock"), "ROCK", 0x8B0000, 0xFF4C4C),
    style(Some("classical"), "CLASS", 0x123B7A, 0xCFE3FF),
    style(Some("jazz"), "JAZZ", 0x7A4B00, 0xFFE2B8),
    style(Some("blues"), "BLUES", 0x1A3D6D, 0xCFE1FF),
    style(Some("pop"), "POP", 0x8C4B00, 0xFFE0B3),
    style(Some("country"), "CNTRY", 0x4A2D12, 0xF5D7B0),
    style(Some("news"), "NEWS", 0x303030, 0xE0E0E0),
    style(Some("talk"), "TALK", 0x303030, 0xE0E0E0),
    style(Some("ambient"), "AMBIENT", 0x1C3F4A, 0xCFEFF7),
    style(Some("chill"), "CHILL", 0x1C3F4A, 0xCFEFF7),
    style(None, "GEN", 0x202020, 0xE0E0E0),
];

const fn style(key: Option<&'static str>, caption: &'static str, bg: u32, fg: u32) -> GenreStyle {
    GenreStyle {
        key,
        caption,
        background: Color::hex(bg),
        accent: Color::hex(fg),
    }
}

/// Matching window. Labels longer than this are truncated before matching;
/// a key beyond the first 64 bytes of a label is intentionally not found.
const LOWER_CAP: usize = 64;

/// Fixed-size lowercase copy of a label. Bounded, no heap.
struct LowerBuf {
    bytes: [u8; LOWER_CAP],
    len: usize,
}

impl LowerBuf {
    fn from_label(label: &str) -> Self {
        let mut bytes = [0u8; LOWER_CAP];
        let mut len = 0;
        for &b in label.as_bytes() {
            if len == LOWER_CAP {
                break;
            }
            bytes[len] = b.to_ascii_lowercase();
            len += 1;
        }
        Self { bytes, len }
    }

    fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    fn contains(&self, needle: &str) -> bool {
        let hay = self.as_bytes();
        let needle = needle.as_bytes();
        !needle.is_empty()
            && hay.len() >= needle.len()
            && hay.windows(needle.len()).any(|w| w == needle)
    }
}

/// Select the visual style for a genre label. Never fails: the wildcard
/// entry matches everything, including the empty label. Pure function.
pub fn classify_style(label: &str) -> &'static GenreStyle {
    let lower = LowerBuf::from_label(label);
    for entry in &STYLES {
        match entry.key {
            None => return entry,
            Some(key) if lower.contains(key) => return entry,
            Some(_) => {}
        }
    }
    &STYLES[STYLES.len() - 1]
}

/// Select the glyph for a genre label.
///
/// Deliberately decoupled from the style rules; the overlapping substrings
/// are re-tested here in their own order.
pub fn classify_icon(label: &str) -> GenreIcon {
    let lower = LowerBuf::from_label(label);
    if lower.contains("hard rock") || lower.contains("heavy metal") || lower.contains("metal") {
        return GenreIcon::DistortedGuitar;
    }
    if lower.contains("rock") {
        return GenreIcon::Guitar;
    }
    if lower.contains("classical") {
        return GenreIcon::Violin;
    }
    if lower.contains("news") || lower.contains("talk") {
        return GenreIcon::Microphone;
    }
    GenreIcon::Note
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wildcard_entry_is_last() {
        assert!(STYLES[STYLES.len() - 1].key.is_none());
        assert!(STYLES[..STYLES.len() - 1].iter().all(|s| s.key.is_some()));
    }

    #[test]
    fn metal_aliases_share_style_and_icon() {
        for label in [
            "Heavy Metal",
            "HARD ROCK",
            "metal",
            "Finnish Power Metal",
            "classic hard rock hits",
        ] {
            assert_eq!(classify_style(label).caption, "METAL", "{label}");
            assert_eq!(classify_icon(label), GenreIcon::DistortedGuitar, "{label}");
        }
    }

    #[test]
    fn plain_rock_is_not_metal() {
        assert_eq!(classify_style("Rock").caption, "ROCK");
        assert_eq!(classify_icon("Soft Rock"), GenreIcon::Guitar);
    }

    #[test]
    fn style_and_icon_rules_are_decoupled() {
        // "talk" has a style of its own but no dedicated glyph rule order
        // overlap with "news"; both land on the microphone.
        assert_eq!(classify_style("Talk").caption, "TALK");
        assert_eq!(classify_style("World News").caption, "NEWS");
        assert_eq!(classify_icon("Talk"), GenreIcon::Microphone);
        assert_eq!(classify_icon("World News"), GenreIcon::Microphone);
        // "classical" styles CLASS and draws the violin.
        assert_eq!(classify_style("Classical").caption, "CLASS");
        assert_eq!(classify_icon("Classical"), GenreIcon::Violin);
    }

    #[test]
    fn empty_label_gets_wildcard_and_note() {
        assert_eq!(classify_style("").caption, "GEN");
        assert_eq!(classify_icon(""), GenreIcon::Note);
    }

    #[test]
    fn unknown_label_gets_wildcard_and_note() {
        assert_eq!(classify_style("Polka Madness").caption, "GEN");
        assert_eq!(classify_icon("Polka Madness"), GenreIcon::Note);
    }

    #[test]
    fn classification_is_idempotent() {
        for label in ["Heavy Metal", "", "jazz fusion", "x"] {
            let s1 = classify_style(label) as *const GenreStyle;
            let s2 = classify_style(label) as *const GenreStyle;
            assert_eq!(s1, s2);
            assert_eq!(classify_icon(label), classify_icon(label));
        }
    }

    #[test]
    fn declaration_order_breaks_ties() {
        // "hard rock" also contains "rock"; the earlier METAL entry wins.
        assert_eq!(classify_style("hard rock").caption, "METAL");
        // "chillout ambient" matches "ambient" before "chill".
        assert_eq!(classify_style("chillout ambient").caption, "AMBIENT");
    }

    #[test]
    fn label_is_truncated_at_the_matching_window() {
        // Key entirely beyond the 64-byte window is not seen.
        let padded = format!("{}metal", "x".repeat(LOWER_CAP));
        assert_eq!(classify_style(&padded).caption, "GEN");
        assert_eq!(classify_icon(&padded), GenreIcon::Note);
        // Key inside the window is.
        let fits = format!("{}metal", "x".repeat(LOWER_CAP - 5));
        assert_eq!(classify_style(&fits).caption, "METAL");
    }

    #[test]
    fn non_ascii_labels_do_not_panic() {
        // Bytewise truncation may split a multi-byte character; matching is
        // byte-oriented so this is harmless.
        let label = "m\u{00FC}nchner volksmusik \u{1F3B5}";
        assert_eq!(classify_style(label).caption, "GEN");
    }
}
