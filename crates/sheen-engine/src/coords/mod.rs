//! Geometry types used by brush resolution.
//!
//! Canonical space:
//! - Device pixels (the render scale is already applied)
//! - Origin top-left
//! - +X right, +Y down

mod rect;
mod transform;
mod vec2;

pub use rect::Rect;
pub use transform::Transform;
pub use vec2::Vec2;
