//! Pixel regions.
//!
//! A [`Region`] is an inclusive rectangle `(x1, y1)..=(x2, y2)`, the shape
//! the composition engine hands to the flush bridge for every dirty strip.

/// An inclusive pixel rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl Region {
    pub const fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Region covering a `w x h` screen at the origin.
    pub const fn screen(w: u32, h: u32) -> Self {
        Self::new(0, 0, w as i32 - 1, h as i32 - 1)
    }

    pub const fn width(&self) -> u32 {
        (self.x2 - self.x1 + 1) as u32
    }

    pub const fn height(&self) -> u32 {
        (self.y2 - self.y1 + 1) as u32
    }

    /// Pixel count. Zero for degenerate regions.
    pub fn area(&self) -> usize {
        if self.x2 < self.x1 || self.y2 < self.y1 {
            return 0;
        }
        self.width() as usize * self.height() as usize
    }

    /// Intersection with another region, or `None` when disjoint.
    pub fn intersect(&self, other: &Region) -> Option<Region> {
        let r = Region::new(
            self.x1.max(other.x1),
            self.y1.max(other.y1),
            self.x2.min(other.x2),
            self.y2.min(other.y2),
        );
        (r.x1 <= r.x2 && r.y1 <= r.y2).then_some(r)
    }

    /// Smallest region covering both. Used for dirty accumulation.
    pub fn union(&self, other: &Region) -> Region {
        Region::new(
            self.x1.min(other.x1),
            self.y1.min(other.y1),
            self.x2.max(other.x2),
            self.y2.max(other.y2),
        )
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x1 && x <= self.x2 && y >= self.y1 && y <= self.y2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screen_region_dimensions() {
        let r = Region::screen(320, 240);
        assert_eq!(r.width(), 320);
        assert_eq!(r.height(), 240);
        assert_eq!(r.area(), 320 * 240);
    }

    #[test]
    fn single_pixel_region() {
        let r = Region::new(5, 5, 5, 5);
        assert_eq!(r.area(), 1);
    }

    #[test]
    fn degenerate_region_has_zero_area() {
        let r = Region::new(10, 10, 9, 10);
        assert_eq!(r.area(), 0);
    }

    #[test]
    fn intersect_overlapping() {
        let a = Region::new(0, 0, 10, 10);
        let b = Region::new(5, 5, 20, 20);
        assert_eq!(a.intersect(&b), Some(Region::new(5, 5, 10, 10)));
    }

    #[test]
    fn intersect_disjoint_is_none() {
        let a = Region::new(0, 0, 4, 4);
        let b = Region::new(10, 10, 12, 12);
        assert_eq!(a.intersect(&b), None);
    }

    #[test]
    fn union_covers_both() {
        let a = Region::new(2, 3, 4, 5);
        let b = Region::new(0, 8, 1, 9);
        assert_eq!(a.union(&b), Region::new(0, 3, 4, 9));
    }

    #[test]
    fn contains_edges() {
        let r = Region::new(0, 0, 9, 9);
        assert!(r.contains(0, 0));
        assert!(r.contains(9, 9));
        assert!(!r.contains(10, 9));
    }
}
