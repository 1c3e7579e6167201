use crate::coords::{Transform, Vec2};

use super::Rgba8;

/// Gradient spread behavior outside the [0, 1] range.
///
/// Resolved brushes always use [`SpreadMode::Pad`]; the other modes exist for
/// renderers that share this model.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum SpreadMode {
    /// Clamp to edge stops.
    #[default]
    Pad,
    /// Repeat the gradient pattern.
    Repeat,
    /// Mirror-repeat the gradient pattern.
    Reflect,
}

/// A single gradient stop.
///
/// `t` is expected in [0, 1] but is not enforced; stop order is kept as
/// declared.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub t: f32,
    pub color: Rgba8,
}

impl ColorStop {
    #[inline]
    pub const fn new(t: f32, color: Rgba8) -> Self {
        Self { t, color }
    }
}

/// Linear gradient in device space.
///
/// `start` and `end` are the axis endpoints, in the same coordinate space as
/// the filled geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: Vec2,
    pub end: Vec2,
    pub stops: Vec<ColorStop>,
    pub spread: SpreadMode,
}

impl LinearGradient {
    pub fn new(start: Vec2, end: Vec2, stops: Vec<ColorStop>, spread: SpreadMode) -> Self {
        Self {
            start,
            end,
            stops,
            spread,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.start.is_finite() && self.end.is_finite() && stops_finite(&self.stops)
    }

    /// True when start and end coincide (e.g. a zero-area bounding box).
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }
}

/// Radial gradient in device space.
///
/// Native radial shaders only take one radius, so an ellipse is expressed as a
/// circle of `radius` at `center` plus a local `transform` that scales Y by
/// `ry / rx`. `center.y` is already divided by that factor, so mapping it
/// through `transform` gives the ellipse's visible center
/// (see [`RadialGradient::device_center`]).
///
/// `transform` is `None` for circular gradients.
#[derive(Debug, Clone, PartialEq)]
pub struct RadialGradient {
    pub center: Vec2,
    pub radius: f32,
    pub transform: Option<Transform>,
    pub stops: Vec<ColorStop>,
    pub spread: SpreadMode,
}

impl RadialGradient {
    /// Local matrix to hand to the shader; identity when none is attached.
    #[inline]
    pub fn local_transform(&self) -> Transform {
        self.transform.unwrap_or_default()
    }

    /// `center` after the anisotropic correction.
    pub fn device_center(&self) -> Vec2 {
        self.local_transform().map_point(self.center)
    }

    pub fn is_finite(&self) -> bool {
        self.center.is_finite()
            && self.radius.is_finite()
            && self.transform.is_none_or(|t| t.is_finite())
            && stops_finite(&self.stops)
    }
}

fn stops_finite(stops: &[ColorStop]) -> bool {
    stops.iter().all(|s| s.t.is_finite())
}
