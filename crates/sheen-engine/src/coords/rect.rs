use super::Vec2;

/// Axis-aligned rectangle (top-left origin).
///
/// Bounding boxes handed over by native bridges usually arrive as
/// left/top/right/bottom; use [`Rect::from_ltrb`] for those.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Bridge form. `right < left` or `bottom < top` yields a negative size;
    /// see [`Rect::normalized`].
    #[inline]
    pub fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Rect::new(left, top, right - left, bottom - top)
    }

    #[inline]
    pub fn left(self) -> f32 {
        self.origin.x
    }

    #[inline]
    pub fn top(self) -> f32 {
        self.origin.y
    }

    #[inline]
    pub fn width(self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(self) -> f32 {
        self.size.y
    }

    /// Same size, moved to `origin`.
    #[inline]
    pub fn with_origin(self, origin: Vec2) -> Self {
        Self { origin, size: self.size }
    }

    /// Moves the origin to the min corner so width/height are non-negative.
    pub fn normalized(self) -> Self {
        let mut x = self.origin.x;
        let mut y = self.origin.y;
        let mut w = self.size.x;
        let mut h = self.size.y;

        if w < 0.0 {
            x += w;
            w = -w;
        }
        if h < 0.0 {
            y += h;
            h = -h;
        }

        Rect::new(x, y, w, h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect { Rect::new(x, y, w, h) }

    // ── from_ltrb ─────────────────────────────────────────────────────────

    #[test]
    fn from_ltrb_computes_size() {
        assert_eq!(Rect::from_ltrb(10.0, 20.0, 110.0, 70.0), r(10.0, 20.0, 100.0, 50.0));
    }

    #[test]
    fn accessors_match_fields() {
        let rect = r(3.0, 4.0, 5.0, 6.0);
        assert_eq!((rect.left(), rect.top()), (3.0, 4.0));
        assert_eq!((rect.width(), rect.height()), (5.0, 6.0));
    }

    // ── with_origin ───────────────────────────────────────────────────────

    #[test]
    fn with_origin_keeps_size() {
        let moved = r(40.0, 50.0, 300.0, 200.0).with_origin(Vec2::zero());
        assert_eq!(moved, r(0.0, 0.0, 300.0, 200.0));
    }

    // ── normalized ────────────────────────────────────────────────────────

    #[test]
    fn normalized_upright_is_unchanged() {
        let rect = r(1.0, 2.0, 10.0, 20.0);
        assert_eq!(rect.normalized(), rect);
    }

    #[test]
    fn normalized_flipped_ltrb() {
        // right < left, bottom < top
        let n = Rect::from_ltrb(10.0, 10.0, 6.0, 7.0).normalized();
        assert_eq!(n, r(6.0, 7.0, 4.0, 3.0));
    }
}
