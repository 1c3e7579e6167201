//! Paint model and brush resolution.
//!
//! Scope:
//! - stop colors (straight-alpha 8-bit, see [`Rgba8`])
//! - stop-table decoding from flat streams ([`stops`])
//! - length / percentage operands ([`length`])
//! - SVG gradient brushes and their resolution into [`Paint`] ([`brush`])
//!
//! Geometry types remain in `coords`.

pub mod brush;
pub mod color;
pub mod error;
pub mod gradient;
pub mod length;
pub mod stops;

pub use brush::{Brush, BrushKind, BrushResolver, BrushUnits};
pub use color::Rgba8;
pub use error::GradientError;
pub use gradient::{ColorStop, LinearGradient, RadialGradient, SpreadMode};
pub use length::{Length, from_percentage_to_float};
pub use stops::{StopTable, build_stop_table};

/// Which native shader a [`Paint`] maps onto.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShaderKind {
    Linear,
    Radial,
    None,
}

/// Resolved paint description, ready for a native gradient shader.
///
/// `None` is a no-op fill: the brush kind has no shader (patterns).
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    None,
    LinearGradient(LinearGradient),
    RadialGradient(RadialGradient),
}

impl Paint {
    #[inline]
    pub fn kind(&self) -> ShaderKind {
        match self {
            Paint::None => ShaderKind::None,
            Paint::LinearGradient(_) => ShaderKind::Linear,
            Paint::RadialGradient(_) => ShaderKind::Radial,
        }
    }

    #[inline]
    pub fn stops(&self) -> &[ColorStop] {
        match self {
            Paint::None => &[],
            Paint::LinearGradient(g) => &g.stops,
            Paint::RadialGradient(g) => &g.stops,
        }
    }

    /// True when every stop is fully opaque. A no-op fill is never opaque.
    #[inline]
    pub fn is_opaque(&self) -> bool {
        match self {
            Paint::None => false,
            _ => self.stops().iter().all(|s| s.color.is_opaque()),
        }
    }

    pub fn is_finite(&self) -> bool {
        match self {
            Paint::None => true,
            Paint::LinearGradient(g) => g.is_finite(),
            Paint::RadialGradient(g) => g.is_finite(),
        }
    }
}
