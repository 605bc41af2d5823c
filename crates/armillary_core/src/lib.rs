//! Armillary Core
//!
//! Foundational primitives for the Armillary widget set:
//!
//! - **Geometry**: points, sizes, rects, and the pure radial math shared by
//!   the gauge and radar chart
//! - **Scalar Ranges**: `[low, high]` intervals with clamped and unclamped
//!   normalization
//! - **Draw Model**: paths, strokes, brushes, and the [`DrawContext`] trait
//!   with a command-recording implementation
//! - **Measured Boxes**: the capability widgets use to read live-resolved
//!   element bounds without owning toolkit nodes
//!
//! # Example
//!
//! ```rust
//! use armillary_core::{Color, DrawContext, Point, RecordingContext, Size, Stroke};
//!
//! let mut ctx = RecordingContext::new(Size::new(200.0, 100.0));
//! ctx.stroke_segment(
//!     Point::new(100.0, 100.0),
//!     Point::new(100.0, 10.0),
//!     &Stroke::new(2.0),
//!     Color::BLACK.into(),
//! );
//! assert_eq!(ctx.commands().len(), 1);
//! ```

pub mod color;
pub mod draw;
pub mod geometry;
pub mod measure;
pub mod range;

pub use color::{Brush, Color, Gradient, GradientStop};
pub use draw::{DrawCommand, DrawContext, LineCap, Path, PathCommand, RecordingContext, Stroke};
pub use geometry::{
    clamp01, gauge_direction, needle_angle, radial_directions, Point, Rect, Size, Vec2,
};
pub use measure::MeasuredBox;
pub use range::{RangeError, ScalarRange};
