//! Station directory.
//!
//! A fixed table of [`STATION_CAPACITY`] stream descriptors, loadable from a
//! flat XML-ish file with one `<station .../>` element per line. Loading is
//! all or nothing: the file must yield exactly the full table or the current
//! table stays in service untouched. Two boxed tables are kept so a reload
//! swaps pointers instead of reallocating record storage.

use std::fmt;
use std::fs;
use std::mem;
use std::path::Path;

use radioface_types::error::{RadioError, Result};

/// Number of station slots. The loader accepts exactly this many lines.
pub const STATION_CAPACITY: usize = 16;

const DEFAULT_NAME: &str = "Station";
const DEFAULT_GENRE: &str = "Unknown";
const DEFAULT_PORT: u16 = 80;

/// Inline string with a fixed byte capacity. Overlong input is truncated at
/// a character boundary.
#[derive(Clone, Copy)]
pub struct FixedStr<const N: usize> {
    bytes: [u8; N],
    len: usize,
}

impl<const N: usize> FixedStr<N> {
    pub const fn empty() -> Self {
        Self {
            bytes: [0; N],
            len: 0,
        }
    }

    pub fn set(&mut self, s: &str) {
        let mut end = s.len().min(N);
        while end > 0 && !s.is_char_boundary(end) {
            end -= 1;
        }
        self.bytes[..end].copy_from_slice(&s.as_bytes()[..end]);
        self.len = end;
    }

    pub fn as_str(&self) -> &str {
        // set() only ever stores prefixes ending on a char boundary.
        std::str::from_utf8(&self.bytes[..self.len]).unwrap_or("")
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<const N: usize> Default for FixedStr<N> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<const N: usize> fmt::Debug for FixedStr<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl<const N: usize> fmt::Display for FixedStr<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<const N: usize> PartialEq for FixedStr<N> {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl<const N: usize> Eq for FixedStr<N> {}

/// One stream endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StationRecord {
    pub host: FixedStr<63>,
    pub path: FixedStr<127>,
    pub port: u16,
    pub friendly_name: FixedStr<63>,
    pub use_metadata: bool,
    pub genre: FixedStr<31>,
}

/// The active station table plus a spare for atomic reloads.
pub struct StationDirectory {
    active: Box<[StationRecord; STATION_CAPACITY]>,
    scratch: Option<Box<[StationRecord; STATION_CAPACITY]>>,
}

impl StationDirectory {
    /// Directory preloaded with the built-in station table.
    pub fn with_defaults() -> Self {
        let mut active = Box::new([StationRecord::default(); STATION_CAPACITY]);
        for (slot, d) in active.iter_mut().zip(DEFAULTS) {
            slot.host.set(d.0);
            slot.path.set(d.1);
            slot.port = d.2;
            slot.friendly_name.set(d.3);
            slot.use_metadata = d.4;
            slot.genre.set(d.5);
        }
        Self {
            active,
            scratch: None,
        }
    }

    pub fn len(&self) -> usize {
        STATION_CAPACITY
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn get(&self, index: usize) -> Option<&StationRecord> {
        self.active.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &StationRecord> {
        self.active.iter()
    }

    /// Replace the table from a station file.
    ///
    /// Parses into the spare table and swaps it in only when the file yields
    /// exactly [`STATION_CAPACITY`] valid stations. On any failure the active
    /// table is untouched.
    pub fn load(&mut self, path: &Path) -> Result<()> {
        let text = fs::read_to_string(path)?;

        let mut scratch = self
            .scratch
            .take()
            .unwrap_or_else(|| Box::new([StationRecord::default(); STATION_CAPACITY]));
        scratch.fill(StationRecord::default());

        let mut count = 0;
        for (lineno, raw) in text.lines().enumerate() {
            let line = raw.trim();
            // Permissive line scan: anything that is not a station entry
            // (container tags, declarations, comments, stray text) is
            // skipped, not rejected.
            if !line.starts_with("<station") || line.starts_with("<stations") {
                continue;
            }
            match parse_station_line(line) {
                Some(record) => {
                    if count == STATION_CAPACITY {
                        self.scratch = Some(scratch);
                        return Err(RadioError::Directory(format!(
                            "more than {STATION_CAPACITY} stations"
                        )));
                    }
                    scratch[count] = record;
                    count += 1;
                }
                // Hostless entries are skipped without consuming a slot.
                None => log::warn!("line {}: station has no host, skipped", lineno + 1),
            }
        }

        if count != STATION_CAPACITY {
            self.scratch = Some(scratch);
            return Err(RadioError::Directory(format!(
                "parsed {count} of {STATION_CAPACITY} stations"
            )));
        }

        let previous = mem::replace(&mut self.active, scratch);
        self.scratch = Some(previous);
        log::info!("station directory loaded from {}", path.display());
        Ok(())
    }
}

/// Parse one `<station .../>` line. `None` when the host attribute is
/// missing or empty; every other attribute has a default.
fn parse_station_line(line: &str) -> Option<StationRecord> {
    let host = extract_attr(line, "host").map(decode_entities)?;
    if host.is_empty() {
        return None;
    }

    let mut record = StationRecord::default();
    record.host.set(&host);

    let path = extract_attr(line, "path")
        .map(decode_entities)
        .unwrap_or_default();
    record.path.set(if path.is_empty() { "/" } else { &path });

    record.port = parse_int_attr(line, "port", DEFAULT_PORT);

    // friendlyName wins over name; both absent or empty falls back.
    let name = extract_attr(line, "friendlyName")
        .map(decode_entities)
        .filter(|s| !s.is_empty())
        .or_else(|| {
            extract_attr(line, "name")
                .map(decode_entities)
                .filter(|s| !s.is_empty())
        });
    record
        .friendly_name
        .set(name.as_deref().unwrap_or(DEFAULT_NAME));

    record.use_metadata = parse_int_attr(line, "useMetaData", 0) != 0;

    let genre = extract_attr(line, "genre")
        .map(decode_entities)
        .filter(|s| !s.is_empty());
    record.genre.set(genre.as_deref().unwrap_or(DEFAULT_GENRE));

    Some(record)
}

/// Value of `key="..."` in `line`. Naive scan, good enough for the flat
/// one-element-per-line file format; no quoting inside values beyond
/// entities.
fn extract_attr(line: &str, key: &str) -> Option<String> {
    let mut from = 0;
    loop {
        let rel = line[from..].find(key)?;
        let at = from + rel;
        let after = at + key.len();
        // Reject substring hits like "name" inside "friendlyName".
        let boundary = at == 0
            || !line.as_bytes()[at - 1].is_ascii_alphanumeric();
        let rest = line[after..].trim_start();
        if boundary && rest.starts_with('=') {
            let rest = rest[1..].trim_start();
            let value = rest.strip_prefix('"')?;
            let end = value.find('"')?;
            return Some(value[..end].to_string());
        }
        from = after;
    }
}

fn parse_int_attr(line: &str, key: &str, fallback: u16) -> u16 {
    extract_attr(line, key)
        .and_then(|v| v.trim().parse::<u16>().ok())
        .unwrap_or(fallback)
}

/// Decode the five predefined XML entities. Unknown entities pass through.
fn decode_entities(s: String) -> String {
    if !s.contains('&') {
        return s;
    }
    let mut out = String::with_capacity(s.len());
    let mut rest = s.as_str();
    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];
        let mut matched = false;
        for (entity, ch) in [
            ("&amp;", '&'),
            ("&quot;", '"'),
            ("&apos;", '\''),
            ("&lt;", '<'),
            ("&gt;", '>'),
        ] {
            if let Some(tail) = rest.strip_prefix(entity) {
                out.push(ch);
                rest = tail;
                matched = true;
                break;
            }
        }
        if !matched {
            out.push('&');
            rest = &rest[1..];
        }
    }
    out.push_str(rest);
    out
}

/// Built-in table used until a station file is loaded.
const DEFAULTS: [(&str, &str, u16, &str, bool, &str); STATION_CAPACITY] = [
    ("ice1.somafm.com", "/groovesalad-128-mp3", 80, "Groove Salad", true, "Ambient"),
    ("ice1.somafm.com", "/dronezone-128-mp3", 80, "Drone Zone", true, "Ambient"),
    ("ice1.somafm.com", "/metal-128-mp3", 80, "Metal Detector", true, "Heavy Metal"),
    ("ice1.somafm.com", "/bagel-128-mp3", 80, "BAGeL Radio", true, "Rock"),
    ("ice1.somafm.com", "/u80s-128-mp3", 80, "Underground 80s", true, "Pop"),
    ("ice1.somafm.com", "/sonicuniverse-128-mp3", 80, "Sonic Universe", true, "Jazz"),
    ("ice1.somafm.com", "/bootliquor-128-mp3", 80, "Boot Liquor", true, "Country"),
    ("ice1.somafm.com", "/thetrip-128-mp3", 80, "The Trip", true, "Chill"),
    ("live.str3am.com", "/classical1", 80, "Concert Hall", false, "Classical"),
    ("stream.wqxr.org", "/wqxr", 80, "WQXR", true, "Classical"),
    ("icecast.vrtcdn.be", "/stubru-high.mp3", 80, "Studio Brussel", true, "Rock"),
    ("direct.fipradio.fr", "/live/fip-midfi.mp3", 80, "FIP", true, "Jazz"),
    ("stream.srg-ssr.ch", "/m/rsj/mp3_128", 80, "Swiss Jazz", true, "Jazz"),
    ("icecast.radiofrance.fr", "/franceinfo-midfi.mp3", 80, "franceinfo", false, "News"),
    ("stream.live.vc.bbcmedia.co.uk", "/bbc_world_service", 80, "BBC World Service", false, "Talk"),
    ("ice2.somafm.com", "/blues-128-mp3", 80, "Blues Kitchen", true, "Blues"),
];
