//! Sheen engine crate.
//!
//! Resolves SVG gradient brushes (linear, radial) into device-space paint
//! descriptions that a native gradient shader can consume directly.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`coords`] | `Vec2`, `Rect`, `Transform` |
//! | [`paint`] | `Brush`, `Paint`, stop tables, length operands |
//! | [`render`] | `GradientUniform` GPU packing |
//! | [`logging`] | `init_logging` |
//!
//! # Quick start
//!
//! ```rust
//! use sheen_engine::coords::Rect;
//! use sheen_engine::paint::{Brush, BrushKind, BrushResolver, BrushUnits, Paint};
//!
//! let brush = Brush::new(
//!     BrushKind::LinearGradient,
//!     ["0%", "0%", "100%", "0%"],
//!     BrushUnits::ObjectBoundingBox,
//! )
//! .with_gradient_colors([1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 0.0, 1.0]);
//!
//! let paint = brush.resolve(Rect::new(10.0, 20.0, 100.0, 50.0), 1.0, 1.0).unwrap();
//! let Paint::LinearGradient(g) = paint else { unreachable!() };
//! assert_eq!((g.end.x, g.end.y), (110.0, 20.0));
//! ```

pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;
