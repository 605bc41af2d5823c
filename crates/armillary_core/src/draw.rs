//! Draw commands and the drawable-surface abstraction
//!
//! Widgets never talk to a concrete toolkit painter. They paint through the
//! [`DrawContext`] trait, and hosts either forward the calls to their own
//! immediate-mode painter or record them with [`RecordingContext`] and replay
//! the command list. Recording also makes paint output assertable in tests.
//!
//! Arc angles are in degrees. The sweep runs counter-clockwise in the y-down
//! coordinate system, so 180° to 360° draws the upper semicircle.

use crate::color::Brush;
use crate::geometry::{Point, Size};

// ─────────────────────────────────────────────────────────────────────────────
// Stroke Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Line cap style
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineCap {
    /// Flat cap at the endpoint
    #[default]
    Butt,
    /// Rounded cap extending past the endpoint
    Round,
    /// Square cap extending past the endpoint
    Square,
}

/// Stroke style configuration
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    /// Line width
    pub width: f32,
    /// Line cap style
    pub cap: LineCap,
}

impl Default for Stroke {
    fn default() -> Self {
        Self {
            width: 1.0,
            cap: LineCap::Butt,
        }
    }
}

impl Stroke {
    /// Create a new stroke with the given width
    pub fn new(width: f32) -> Self {
        Self {
            width,
            ..Default::default()
        }
    }

    /// Set line cap style
    pub fn with_cap(mut self, cap: LineCap) -> Self {
        self.cap = cap;
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Paths
// ─────────────────────────────────────────────────────────────────────────────

/// Path command for building vector paths
#[derive(Clone, Debug, PartialEq)]
pub enum PathCommand {
    /// Move to a point
    MoveTo(Point),
    /// Line to a point
    LineTo(Point),
    /// Circular arc around a center, angles in degrees
    Arc {
        center: Point,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
    },
    /// Close the current subpath
    Close,
}

/// A vector path
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    /// Create a new empty path
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Move to a point
    pub fn move_to(mut self, point: Point) -> Self {
        self.commands.push(PathCommand::MoveTo(point));
        self
    }

    /// Line to a point
    pub fn line_to(mut self, point: Point) -> Self {
        self.commands.push(PathCommand::LineTo(point));
        self
    }

    /// Circular arc around `center`, angles in degrees
    pub fn arc(mut self, center: Point, radius: f32, start_angle: f32, end_angle: f32) -> Self {
        self.commands.push(PathCommand::Arc {
            center,
            radius,
            start_angle,
            end_angle,
        });
        self
    }

    /// Full circle around `center`
    pub fn circle(center: Point, radius: f32) -> Self {
        Self::new().arc(center, radius, 0.0, 360.0)
    }

    /// Close the path
    pub fn close(mut self) -> Self {
        self.commands.push(PathCommand::Close);
        self
    }

    /// The recorded commands
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Draw Context
// ─────────────────────────────────────────────────────────────────────────────

/// A recorded draw operation
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// Fill a path with a brush
    FillPath { path: Path, brush: Brush },
    /// Stroke a path with a stroke style and brush
    StrokePath {
        path: Path,
        stroke: Stroke,
        brush: Brush,
    },
}

/// The drawable surface a widget paints through
pub trait DrawContext {
    fn fill_path(&mut self, path: &Path, brush: Brush);

    fn stroke_path(&mut self, path: &Path, stroke: &Stroke, brush: Brush);

    /// Fill a full circle
    fn fill_circle(&mut self, center: Point, radius: f32, brush: Brush) {
        self.fill_path(&Path::circle(center, radius), brush);
    }

    /// Stroke a full circle
    fn stroke_circle(&mut self, center: Point, radius: f32, stroke: &Stroke, brush: Brush) {
        self.stroke_path(&Path::circle(center, radius), stroke, brush);
    }

    /// Stroke a single segment between two points
    fn stroke_segment(&mut self, from: Point, to: Point, stroke: &Stroke, brush: Brush) {
        self.stroke_path(&Path::new().move_to(from).line_to(to), stroke, brush);
    }

    /// Size of the surface being painted
    fn viewport_size(&self) -> Size;
}

/// A draw context that records commands for inspection or replay
#[derive(Debug, Default)]
pub struct RecordingContext {
    viewport: Size,
    commands: Vec<DrawCommand>,
}

impl RecordingContext {
    /// Create a recording context with the given viewport size
    pub fn new(viewport: Size) -> Self {
        Self {
            viewport,
            commands: Vec::new(),
        }
    }

    /// Get all recorded commands
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take ownership of recorded commands
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl DrawContext for RecordingContext {
    fn fill_path(&mut self, path: &Path, brush: Brush) {
        self.commands.push(DrawCommand::FillPath {
            path: path.clone(),
            brush,
        });
    }

    fn stroke_path(&mut self, path: &Path, stroke: &Stroke, brush: Brush) {
        self.commands.push(DrawCommand::StrokePath {
            path: path.clone(),
            stroke: *stroke,
            brush,
        });
    }

    fn viewport_size(&self) -> Size {
        self.viewport
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    #[test]
    fn test_records_in_issue_order() {
        let mut ctx = RecordingContext::new(Size::new(100.0, 100.0));
        ctx.fill_circle(Point::ZERO, 5.0, Color::RED.into());
        ctx.stroke_segment(
            Point::ZERO,
            Point::new(10.0, 0.0),
            &Stroke::new(2.0),
            Color::BLACK.into(),
        );
        let commands = ctx.commands();
        assert_eq!(commands.len(), 2);
        assert!(matches!(commands[0], DrawCommand::FillPath { .. }));
        assert!(matches!(commands[1], DrawCommand::StrokePath { .. }));
    }

    #[test]
    fn test_circle_is_full_arc() {
        let path = Path::circle(Point::new(1.0, 2.0), 3.0);
        assert_eq!(
            path.commands(),
            &[PathCommand::Arc {
                center: Point::new(1.0, 2.0),
                radius: 3.0,
                start_angle: 0.0,
                end_angle: 360.0,
            }]
        );
    }

    #[test]
    fn test_take_commands_drains() {
        let mut ctx = RecordingContext::new(Size::new(10.0, 10.0));
        ctx.fill_circle(Point::ZERO, 1.0, Color::BLUE.into());
        assert_eq!(ctx.take_commands().len(), 1);
        assert!(ctx.commands().is_empty());
    }

    #[test]
    fn test_implements_draw_context() {
        fn paint(ctx: &mut dyn DrawContext) {
            ctx.fill_circle(Point::ZERO, 1.0, Color::GREEN.into());
        }
        let mut ctx = RecordingContext::new(Size::new(10.0, 10.0));
        paint(&mut ctx);
        assert_eq!(ctx.commands().len(), 1);
    }
}
