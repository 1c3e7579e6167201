//! GPU-facing packing of resolved paints.
//!
//! Renderers upload [`GradientUniform`] as-is; everything here is plain data.

mod gradient;

pub use gradient::{GradientUniform, MAX_GRADIENT_STOPS};
