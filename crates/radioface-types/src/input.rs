//! Platform-agnostic pointer input.
//!
//! Every backend maps its native input (host mouse, panel touch controller)
//! to a [`PointerSample`]. The composition loop polls one sample per tick;
//! interpretation (press edges, hit testing) belongs to higher layers.

/// One pointer/touch observation: latest known position and contact state.
///
/// When `pressed` is false the coordinates are the last known position and
/// may be stale; consumers must not treat them as a fresh contact point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerSample {
    pub x: i32,
    pub y: i32,
    pub pressed: bool,
}

impl PointerSample {
    pub const fn pressed_at(x: i32, y: i32) -> Self {
        Self { x, y, pressed: true }
    }

    pub const fn released_at(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            pressed: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_released_at_origin() {
        let s = PointerSample::default();
        assert_eq!(s, PointerSample::released_at(0, 0));
    }

    #[test]
    fn pressed_differs_from_released() {
        assert_ne!(
            PointerSample::pressed_at(3, 4),
            PointerSample::released_at(3, 4)
        );
    }
}
