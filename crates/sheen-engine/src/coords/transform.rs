use super::Vec2;

/// 2D affine transform.
///
/// Maps `(x, y)` to `(sx·x + kx·y + tx, ky·x + sy·y + ty)`, the same layout
/// native shader local matrices use.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    pub sx: f32,
    pub ky: f32,
    pub kx: f32,
    pub sy: f32,
    pub tx: f32,
    pub ty: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    #[inline]
    pub const fn identity() -> Self {
        Self { sx: 1.0, ky: 0.0, kx: 0.0, sy: 1.0, tx: 0.0, ty: 0.0 }
    }

    #[inline]
    pub const fn from_scale(sx: f32, sy: f32) -> Self {
        Self { sx, ky: 0.0, kx: 0.0, sy, tx: 0.0, ty: 0.0 }
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }

    pub fn is_finite(&self) -> bool {
        [self.sx, self.ky, self.kx, self.sy, self.tx, self.ty]
            .iter()
            .all(|v| v.is_finite())
    }

    #[inline]
    pub fn map_point(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            self.sx * p.x + self.kx * p.y + self.tx,
            self.ky * p.x + self.sy * p.y + self.ty,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_identity() {
        assert!(Transform::default().is_identity());
        assert!(Transform::from_scale(1.0, 1.0).is_identity());
    }

    #[test]
    fn map_point_applies_translation() {
        let t = Transform { tx: 5.0, ty: 7.0, ..Transform::from_scale(2.0, 2.0) };
        assert_eq!(t.map_point(Vec2::new(1.0, 1.0)), Vec2::new(7.0, 9.0));
    }

    #[test]
    fn map_point_scales_y_only() {
        let t = Transform::from_scale(1.0, 0.5);
        assert_eq!(t.map_point(Vec2::new(50.0, 100.0)), Vec2::new(50.0, 50.0));
    }

    #[test]
    fn non_finite_detected() {
        assert!(!Transform::from_scale(1.0, f32::INFINITY).is_finite());
    }
}
