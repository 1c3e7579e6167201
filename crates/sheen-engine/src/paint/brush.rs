//! SVG gradient brushes.
//!
//! A [`Brush`] is declared once per fill (kind, control-point tokens, units,
//! stop stream) and resolved into a [`Paint`] on every render pass against the
//! current shape bounding box, render scale and opacity.
//!
//! Control-point layout by kind:
//!
//! | Kind | Operands |
//! |------|----------|
//! | linear | `x1 y1 x2 y2` |
//! | radial | `fx fy rx ry cx cy` (radii come before the center) |
//!
//! The focal point of radial gradients is accepted but not used yet; radial
//! gradients are always centered.

use crate::coords::{Rect, Transform, Vec2};

use super::length::from_percentage_to_float;
use super::stops::build_stop_table;
use super::{ColorStop, GradientError, LinearGradient, Paint, RadialGradient, SpreadMode};

const LINEAR_OPERANDS: usize = 4;
const RADIAL_OPERANDS: usize = 6;

/// Brush kind, as sent by the native bridge.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum BrushKind {
    LinearGradient,
    RadialGradient,
    /// Tiled bitmap fill. Not implemented; resolves to [`Paint::None`].
    Pattern,
}

impl TryFrom<i32> for BrushKind {
    type Error = GradientError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(BrushKind::LinearGradient),
            1 => Ok(BrushKind::RadialGradient),
            2 => Ok(BrushKind::Pattern),
            _ => Err(GradientError::invalid(format!("unknown brush type {code}"))),
        }
    }
}

/// Coordinate system of the control-point operands.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum BrushUnits {
    /// Operands are fractions/percentages of the filled shape's bounding box.
    #[default]
    ObjectBoundingBox,
    /// Operands are absolute lengths in an externally supplied rectangle.
    UserSpaceOnUse,
}

impl TryFrom<i32> for BrushUnits {
    type Error = GradientError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(BrushUnits::ObjectBoundingBox),
            1 => Ok(BrushUnits::UserSpaceOnUse),
            _ => Err(GradientError::invalid(format!("unknown brush units {code}"))),
        }
    }
}

/// Resolves a fill declaration into a device-space paint.
pub trait BrushResolver {
    /// `path_bbox` is the filled shape's bounding box in device pixels,
    /// `scale` the device scale applied to bare-number operands and `opacity`
    /// the multiplier applied to every stop's alpha.
    fn resolve(&self, path_bbox: Rect, scale: f32, opacity: f32) -> Result<Paint, GradientError>;
}

/// A gradient fill declaration.
///
/// Configure it during the declaration phase (setters / `with_*`), then treat
/// it as read-only: [`BrushResolver::resolve`] takes `&self` and may run
/// concurrently from several threads.
#[derive(Debug, Clone, PartialEq)]
pub struct Brush {
    kind: BrushKind,
    points: Vec<String>,
    units: BrushUnits,
    user_space_bbox: Option<Rect>,
    colors: Vec<f32>,
}

impl Brush {
    pub fn new<I, S>(kind: BrushKind, points: I, units: BrushUnits) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            kind,
            points: points.into_iter().map(Into::into).collect(),
            units,
            user_space_bbox: None,
            colors: Vec::new(),
        }
    }

    /// Reference rectangle for [`BrushUnits::UserSpaceOnUse`].
    pub fn set_user_space_bounding_box(&mut self, rect: Rect) {
        self.user_space_bbox = Some(rect);
    }

    /// Flat stop stream; see [`crate::paint::stops`] for the layout.
    pub fn set_gradient_colors(&mut self, colors: impl Into<Vec<f32>>) {
        self.colors = colors.into();
    }

    pub fn with_user_space_bounding_box(mut self, rect: Rect) -> Self {
        self.set_user_space_bounding_box(rect);
        self
    }

    pub fn with_gradient_colors(mut self, colors: impl Into<Vec<f32>>) -> Self {
        self.set_gradient_colors(colors);
        self
    }

    #[inline]
    pub fn kind(&self) -> BrushKind {
        self.kind
    }

    #[inline]
    pub fn units(&self) -> BrushUnits {
        self.units
    }

    #[inline]
    pub fn points(&self) -> &[String] {
        &self.points
    }

    #[inline]
    pub fn user_space_bounding_box(&self) -> Option<Rect> {
        self.user_space_bbox
    }

    #[inline]
    pub fn gradient_colors(&self) -> &[f32] {
        &self.colors
    }

    /// Selects the rectangle operands are resolved against.
    ///
    /// Object-bounding-box brushes use `path_bbox`. User-space brushes use the
    /// configured rectangle's size with the origin pinned to (0, 0); its
    /// offset is intentionally ignored. Either rectangle is normalized first,
    /// so a flipped left/top/right/bottom box resolves like its upright form.
    pub fn paint_rect(&self, path_bbox: Rect) -> Result<Rect, GradientError> {
        match self.units {
            BrushUnits::ObjectBoundingBox => Ok(path_bbox.normalized()),
            BrushUnits::UserSpaceOnUse => self
                .user_space_bbox
                .map(|r| r.normalized().with_origin(Vec2::zero()))
                .ok_or_else(|| {
                    GradientError::invalid("userSpaceOnUse brush has no user-space bounding box")
                }),
        }
    }

    fn operand(&self, index: usize) -> &str {
        // Counts are checked before dispatch.
        &self.points[index]
    }

    fn require_operands(&self, needed: usize) -> Result<(), GradientError> {
        if self.points.len() < needed {
            return Err(GradientError::invalid(format!(
                "{:?} brush needs {needed} operands, got {}",
                self.kind,
                self.points.len()
            )));
        }
        Ok(())
    }

    /// Resolves operand `index`; results outside the `f32` range are rejected.
    fn coordinate(
        &self,
        index: usize,
        extent: f32,
        offset: f32,
        scale: f32,
    ) -> Result<f32, GradientError> {
        let token = self.operand(index);
        let v = from_percentage_to_float(token, extent, offset, scale)?;
        if !v.is_finite() {
            return Err(GradientError::invalid(format!(
                "operand {index} ({token:?}) resolves to {v}"
            )));
        }
        Ok(v)
    }

    fn resolve_linear(
        &self,
        rect: Rect,
        scale: f32,
        stops: Vec<ColorStop>,
    ) -> Result<Paint, GradientError> {
        self.require_operands(LINEAR_OPERANDS)?;
        let (w, h) = (rect.width(), rect.height());
        let (ox, oy) = (rect.left(), rect.top());

        let x1 = self.coordinate(0, w, ox, scale)?;
        let y1 = self.coordinate(1, h, oy, scale)?;
        let x2 = self.coordinate(2, w, ox, scale)?;
        let y2 = self.coordinate(3, h, oy, scale)?;

        log::trace!("linear gradient ({x1}, {y1}) -> ({x2}, {y2}), {} stops", stops.len());

        Ok(Paint::LinearGradient(LinearGradient::new(
            Vec2::new(x1, y1),
            Vec2::new(x2, y2),
            stops,
            SpreadMode::Pad,
        )))
    }

    fn resolve_radial(
        &self,
        rect: Rect,
        scale: f32,
        stops: Vec<ColorStop>,
    ) -> Result<Paint, GradientError> {
        self.require_operands(RADIAL_OPERANDS)?;
        let (w, h) = (rect.width(), rect.height());
        let (ox, oy) = (rect.left(), rect.top());

        // Radii never take the rect offset.
        let rx = self.coordinate(2, w, 0.0, scale)?;
        let ry = self.coordinate(3, h, 0.0, scale)?;
        let cx = self.coordinate(4, w, ox, scale)?;
        let cy = self.coordinate(5, h, oy, scale)?;

        // The local matrix scales Y by `ratio`; pre-divide so the center
        // lands back on `cy` after the transform. A ratio that is zero or
        // overflows cannot be represented by the shader.
        let ratio = ry / rx;
        let center = Vec2::new(cx, cy / ratio);
        if rx == 0.0 || ratio == 0.0 || !ratio.is_finite() || !center.is_finite() {
            return Err(GradientError::DegenerateRadius { rx, ry });
        }
        let transform = (rx != ry).then(|| Transform::from_scale(1.0, ratio));

        log::trace!("radial gradient c=({cx}, {cy}) rx={rx} ry={ry}, {} stops", stops.len());

        Ok(Paint::RadialGradient(RadialGradient {
            center,
            radius: rx,
            transform,
            stops,
            spread: SpreadMode::Pad,
        }))
    }
}

impl BrushResolver for Brush {
    fn resolve(&self, path_bbox: Rect, scale: f32, opacity: f32) -> Result<Paint, GradientError> {
        let rect = self.paint_rect(path_bbox)?;
        let stops = build_stop_table(&self.colors, opacity)?.into_stops();

        match self.kind {
            BrushKind::LinearGradient => self.resolve_linear(rect, scale, stops),
            BrushKind::RadialGradient => self.resolve_radial(rect, scale, stops),
            BrushKind::Pattern => {
                log::debug!("pattern brushes are not supported; skipping fill");
                Ok(Paint::None)
            }
        }
    }
}
