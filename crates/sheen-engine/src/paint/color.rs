/// Straight-alpha 8-bit RGBA color.
///
/// This is the packed form native gradient shaders take for their stop colors.
/// Alpha is not premultiplied into RGB; use [`Rgba8::to_premul_f32`] when a
/// premultiplied float color is required (GPU uniforms).
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Maps a unit channel value to `0..=255`, rounding to nearest.
///
/// Out-of-range input is clamped; NaN maps to 0.
#[inline]
fn unit_to_u8(v: f32) -> u8 {
    // `as` saturates and sends NaN to 0.
    (v * 255.0).round() as u8
}

impl Rgba8 {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a color from straight `f32` channels in `[0, 1]`.
    #[inline]
    pub fn from_unit(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self::new(unit_to_u8(r), unit_to_u8(g), unit_to_u8(b), unit_to_u8(a))
    }

    /// Packs as `0xAARRGGBB`, the platform integer color layout.
    #[inline]
    pub const fn to_argb_u32(self) -> u32 {
        (self.a as u32) << 24 | (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    #[inline]
    pub fn is_opaque(self) -> bool {
        self.a == u8::MAX
    }

    /// Premultiplied `[r, g, b, a]` in `[0, 1]`.
    pub fn to_premul_f32(self) -> [f32; 4] {
        let a = self.a as f32 / 255.0;
        [
            self.r as f32 / 255.0 * a,
            self.g as f32 / 255.0 * a,
            self.b as f32 / 255.0 * a,
            a,
        ]
    }
}
