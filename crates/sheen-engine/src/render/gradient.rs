use bytemuck::{Pod, Zeroable};

use crate::paint::{Paint, ShaderKind};

/// Stops beyond this count are dropped when packing a uniform.
pub const MAX_GRADIENT_STOPS: usize = 8;

const KIND_NONE: u32 = 0;
const KIND_LINEAR: u32 = 1;
const KIND_RADIAL: u32 = 2;

/// Gradient parameters in a shader-uniform layout.
///
/// - linear: `p0` = start, `p1` = end
/// - radial: `p0` = center (pre-divided Y), `radius`, `y_scale` = local Y scale;
///   `p1` is reserved for the focal point and stays zeroed
///
/// Colors are premultiplied. Only the first `stop_count` entries of `colors`
/// and `offsets` are meaningful.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct GradientUniform {
    pub kind: u32,
    pub stop_count: u32,
    pub p0: [f32; 2],
    pub p1: [f32; 2],
    pub radius: f32,
    pub y_scale: f32,
    pub colors: [[f32; 4]; MAX_GRADIENT_STOPS],
    pub offsets: [f32; MAX_GRADIENT_STOPS],
}

impl GradientUniform {
    /// Packs a resolved paint. `Paint::None` packs as an empty uniform
    /// (`kind == 0`, no stops).
    pub fn from_paint(paint: &Paint) -> Self {
        let mut u = Self::zeroed();

        match paint {
            Paint::None => return u,
            Paint::LinearGradient(g) => {
                u.p0 = g.start.to_array();
                u.p1 = g.end.to_array();
                u.y_scale = 1.0;
            }
            Paint::RadialGradient(g) => {
                u.p0 = g.center.to_array();
                u.radius = g.radius;
                u.y_scale = g.local_transform().sy;
            }
        }
        u.kind = match paint.kind() {
            ShaderKind::None => KIND_NONE,
            ShaderKind::Linear => KIND_LINEAR,
            ShaderKind::Radial => KIND_RADIAL,
        };

        let stops = paint.stops();
        if stops.len() > MAX_GRADIENT_STOPS {
            log::warn!(
                "gradient has {} stops; only the first {MAX_GRADIENT_STOPS} are uploaded",
                stops.len()
            );
        }

        for (i, stop) in stops.iter().take(MAX_GRADIENT_STOPS).enumerate() {
            u.colors[i] = stop.color.to_premul_f32();
            u.offsets[i] = stop.t;
            u.stop_count += 1;
        }

        u
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}
