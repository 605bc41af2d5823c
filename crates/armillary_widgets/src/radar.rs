//! Radar (spider) chart
//!
//! Draws N named scalar values as a regular N-gon: spokes, four concentric
//! grid rings, and a translucent filled polygon. Axis labels are host
//! elements; the chart computes a placement for each so no label leaves the
//! container, and the whole grid is uniformly scaled to the tightest-fitting
//! axis.
//!
//! Per-vertex radii use the unclamped normalization: values outside
//! `[low, high]` legitimately extend past or fall short of the grid.

use std::cell::RefCell;
use std::rc::Rc;

use armillary_core::{
    radial_directions, Color, DrawContext, MeasuredBox, Path, Point, RangeError, Size, Stroke,
    Vec2,
};
use armillary_scheduler::{Scheduler, TaskBuilder};
use indexmap::IndexMap;
use smallvec::SmallVec;

/// A polygon needs at least this many axes
const MIN_AXES: usize = 3;

/// Direction components smaller than this are treated as axis-aligned when
/// fitting labels
const AXIS_EPSILON: f32 = 0.01;

/// Whether an element participates in pointer hit-testing
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PickingMode {
    /// Hit-testable at its position
    #[default]
    Position,
    /// Transparent to pointer events
    Ignore,
}

/// Alignment of a label inside its container, per axis
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LabelAlign {
    Start,
    #[default]
    Center,
    End,
}

/// Style write for one axis label, produced on each repaint
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LabelPlacement {
    /// Top-left corner of the label container (the spoke endpoint)
    pub position: Point,
    /// Horizontal alignment inside the container
    pub horizontal: LabelAlign,
    /// Vertical alignment inside the container
    pub vertical: LabelAlign,
    /// Hit-testing mode the host should apply to the label
    pub picking: PickingMode,
}

/// Radar chart colors
#[derive(Clone, Debug)]
pub struct RadarStyle {
    /// Spoke, ring, and polygon outline color
    pub line_color: Color,
    /// Center dot color
    pub dot_color: Color,
    /// Translucent fill of the outer grid ring
    pub ring_fill: Color,
    /// Translucent fill of the data polygon
    pub polygon_fill: Color,
}

impl Default for RadarStyle {
    fn default() -> Self {
        Self {
            line_color: Color::BLACK,
            dot_color: Color::BLACK,
            ring_fill: Color::rgba(0.2, 0.2, 0.2, 0.2),
            polygon_fill: Color::rgba(0.2, 0.53, 0.94, 0.6),
        }
    }
}

struct Axis<L> {
    value: f32,
    label: L,
    placement: LabelPlacement,
}

struct RadarInner<L> {
    values: IndexMap<String, Axis<L>>,
    low: f32,
    high: f32,
    picking: PickingMode,
    style: RadarStyle,
    dirty: bool,
    /// Armed until the first geometry notification has been consumed
    geometry_armed: bool,
}

/// Radar chart widget
///
/// `L` is the host's label element for an axis, read for its resolved size
/// when fitting the grid. Cheap to clone; clones share state, which is how
/// the deferred first-layout repaint reaches back into the chart.
pub struct RadarChart<L> {
    inner: Rc<RefCell<RadarInner<L>>>,
}

impl<L> Clone for RadarChart<L> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<L: MeasuredBox + 'static> RadarChart<L> {
    /// Create an empty chart over the unit range
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(RadarInner {
                values: IndexMap::new(),
                low: 0.0,
                high: 1.0,
                picking: PickingMode::default(),
                style: RadarStyle::default(),
                dirty: false,
                geometry_armed: true,
            })),
        }
    }

    /// Replace the chart colors
    pub fn set_style(&self, style: RadarStyle) {
        self.inner.borrow_mut().style = style;
    }

    /// Replace the value range used for per-axis scaling.
    ///
    /// Fails when `low >= high`.
    pub fn set_range(&self, low: f32, high: f32) -> Result<(), RangeError> {
        if low >= high {
            return Err(RangeError::EmptyInterval { low, high });
        }
        let mut inner = self.inner.borrow_mut();
        inner.low = low;
        inner.high = high;
        inner.dirty = true;
        Ok(())
    }

    /// Set the hit-testing mode applied to every axis label
    pub fn set_picking_mode(&self, picking: PickingMode) {
        let mut inner = self.inner.borrow_mut();
        inner.picking = picking;
        for axis in inner.values.values_mut() {
            axis.placement.picking = picking;
        }
    }

    pub fn picking_mode(&self) -> PickingMode {
        self.inner.borrow().picking
    }

    /// Add a named value with its label element.
    ///
    /// A key that is already present is silently ignored: the first writer
    /// wins and the stored value is unchanged.
    pub fn add_value(&self, key: impl Into<String>, value: f32, label: L) {
        let key = key.into();
        let mut inner = self.inner.borrow_mut();
        if inner.values.contains_key(&key) {
            tracing::trace!(key = %key, "duplicate radar key ignored");
            return;
        }
        let picking = inner.picking;
        inner.values.insert(
            key,
            Axis {
                value,
                label,
                placement: LabelPlacement {
                    picking,
                    ..LabelPlacement::default()
                },
            },
        );
        inner.dirty = true;
    }

    /// Remove a named value; unknown keys are ignored
    pub fn remove_key(&self, key: &str) {
        let mut inner = self.inner.borrow_mut();
        if inner.values.shift_remove(key).is_some() {
            inner.dirty = true;
        }
    }

    /// Change an existing value in place; unknown keys are ignored.
    ///
    /// Does not schedule a repaint on its own, matching the add/remove-driven
    /// repaint policy; pair with an add/remove or a host-driven repaint.
    pub fn change_value(&self, key: &str, value: f32) {
        if let Some(axis) = self.inner.borrow_mut().values.get_mut(key) {
            axis.value = value;
        }
    }

    /// Stored value for a key
    pub fn value(&self, key: &str) -> Option<f32> {
        self.inner.borrow().values.get(key).map(|axis| axis.value)
    }

    /// Number of axes
    pub fn len(&self) -> usize {
        self.inner.borrow().values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().values.is_empty()
    }

    /// Current label placements in axis order
    pub fn placements(&self) -> Vec<(String, LabelPlacement)> {
        self.inner
            .borrow()
            .values
            .iter()
            .map(|(key, axis)| (key.clone(), axis.placement))
            .collect()
    }

    /// Notification that the container geometry resolved.
    ///
    /// Bounds are only valid after the first layout pass, so the first call
    /// defers a repaint to the next scheduler tick. The notification then
    /// disarms itself: later resizes are not tracked and the host must
    /// repaint explicitly if it resizes the chart.
    pub fn on_geometry_changed(&self, scheduler: &mut Scheduler) {
        let mut inner = self.inner.borrow_mut();
        if !inner.geometry_armed {
            return;
        }
        inner.geometry_armed = false;
        drop(inner);

        let chart = self.clone();
        scheduler.schedule(TaskBuilder::new(move || {
            chart.inner.borrow_mut().dirty = true;
        }));
    }

    /// Whether the chart needs a repaint
    pub fn needs_repaint(&self) -> bool {
        self.inner.borrow().dirty
    }

    /// Force a repaint on the next paint call
    pub fn mark_dirty(&self) {
        self.inner.borrow_mut().dirty = true;
    }

    /// Paint the chart onto the context's full viewport, inset by the
    /// host-resolved border width.
    ///
    /// Fewer than three axes cannot form a polygon; the pass is skipped
    /// silently.
    pub fn paint(&self, ctx: &mut dyn DrawContext, border_width: f32) {
        let mut inner = self.inner.borrow_mut();
        inner.dirty = false;

        let n = inner.values.len();
        if n < MIN_AXES {
            tracing::trace!(axes = n, "radar chart needs at least 3 axes, skipping draw");
            return;
        }

        let bounds = ctx.viewport_size();
        let max_width = bounds.width - 2.0 * border_width;
        let max_height = bounds.height - 2.0 * border_width;
        let smaller_side = if max_width >= max_height {
            max_height
        } else {
            max_width
        };

        let midpoint = Point::new(
            border_width + max_width / 2.0,
            border_width + max_height / 2.0,
        );
        let mut max_radius = smaller_side / 2.0;

        // The grid is uniformly scaled to the tightest-fitting axis: every
        // label must stay fully inside the container.
        let directions: SmallVec<[Vec2; 8]> = radial_directions(n).collect();
        for (direction, axis) in directions.iter().zip(inner.values.values_mut()) {
            let label_size = axis.label.resolved_size();
            let (radius, horizontal, vertical) =
                label_fit(midpoint, *direction, bounds, label_size);
            axis.placement.horizontal = horizontal;
            axis.placement.vertical = vertical;
            max_radius = max_radius.min(radius);
        }

        for (direction, axis) in directions.iter().zip(inner.values.values_mut()) {
            axis.placement.position = midpoint.along(*direction, max_radius);
        }

        max_radius *= 0.99;
        let line_width = max_radius / 40.0;
        let style = inner.style.clone();

        // Spokes.
        let spoke_stroke = Stroke::new(line_width / 2.0);
        for direction in &directions {
            ctx.stroke_segment(
                midpoint,
                midpoint.along(*direction, max_radius),
                &spoke_stroke,
                style.line_color.into(),
            );
        }

        max_radius *= 0.9;

        // Center dot and grid rings; the outer ring gets a translucent fill.
        ctx.fill_circle(midpoint, line_width, style.dot_color.into());
        for quarter in 1..=4 {
            ctx.stroke_circle(
                midpoint,
                max_radius * quarter as f32 / 4.0,
                &spoke_stroke,
                style.line_color.into(),
            );
        }
        ctx.fill_circle(midpoint, max_radius, style.ring_fill.into());

        // Data polygon, stroked then filled.
        let low = inner.low;
        let high = inner.high;
        let mut polygon = Path::new();
        for (i, (direction, axis)) in directions.iter().zip(inner.values.values()).enumerate() {
            let normalized = (axis.value - low) / (high - low);
            let vertex = midpoint.along(*direction, max_radius * normalized);
            polygon = if i == 0 {
                polygon.move_to(vertex)
            } else {
                polygon.line_to(vertex)
            };
        }
        let polygon = polygon.close();
        ctx.stroke_path(&polygon, &Stroke::new(line_width), style.line_color.into());
        ctx.fill_path(&polygon, style.polygon_fill.into());
    }
}

impl<L: MeasuredBox + 'static> Default for RadarChart<L> {
    fn default() -> Self {
        Self::new()
    }
}

/// Largest radius along `direction` that keeps a label of `label_size`
/// fully inside `bounds`, and the alignment flanking the spoke endpoint.
///
/// Components below [`AXIS_EPSILON`] don't constrain that axis and center
/// the label instead.
fn label_fit(
    midpoint: Point,
    direction: Vec2,
    bounds: Size,
    label_size: Size,
) -> (f32, LabelAlign, LabelAlign) {
    let mut radius = f32::MAX;

    let horizontal = if direction.x.abs() > AXIS_EPSILON {
        let is_left = direction.x < 0.0;
        let x = if is_left {
            label_size.width
        } else {
            bounds.width - label_size.width
        };
        let t = (x - midpoint.x) / direction.x;
        radius = radius.min(direction.scaled(t).length());
        if is_left {
            LabelAlign::End
        } else {
            LabelAlign::Start
        }
    } else {
        LabelAlign::Center
    };

    let vertical = if direction.y.abs() > AXIS_EPSILON {
        let is_up = direction.y < 0.0;
        let y = if is_up {
            label_size.height
        } else {
            bounds.height - label_size.height
        };
        let t = (y - midpoint.y) / direction.y;
        radius = radius.min(direction.scaled(t).length());
        if is_up {
            LabelAlign::End
        } else {
            LabelAlign::Start
        }
    } else {
        LabelAlign::Center
    };

    (radius, horizontal, vertical)
}

#[cfg(test)]
mod tests {
    use super::*;
    use armillary_core::{DrawCommand, PathCommand, RecordingContext};
    use std::time::Duration;

    fn label() -> Size {
        Size::new(30.0, 10.0)
    }

    fn chart_with(n: usize, value: f32) -> RadarChart<Size> {
        let chart = RadarChart::new();
        for i in 0..n {
            chart.add_value(format!("axis-{i}"), value, label());
        }
        chart
    }

    fn polygon_vertices(commands: &[DrawCommand]) -> Vec<Point> {
        // The stroked polygon is the second-to-last command.
        let DrawCommand::StrokePath { path, .. } = &commands[commands.len() - 2] else {
            panic!("expected stroked polygon");
        };
        path.commands()
            .iter()
            .filter_map(|cmd| match cmd {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => Some(*p),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_duplicate_key_keeps_first_value() {
        let chart: RadarChart<Size> = RadarChart::new();
        chart.add_value("strength", 0.8, label());
        chart.add_value("strength", 0.1, label());
        assert_eq!(chart.len(), 1);
        assert_eq!(chart.value("strength"), Some(0.8));
    }

    #[test]
    fn test_fewer_than_three_axes_draws_nothing() {
        let chart = chart_with(2, 0.5);
        let mut ctx = RecordingContext::new(Size::new(200.0, 200.0));
        chart.paint(&mut ctx, 0.0);
        assert!(ctx.commands().is_empty());
    }

    #[test]
    fn test_equal_values_at_high_form_regular_ngon() {
        let n = 5;
        let chart = chart_with(n, 1.0);
        let mut ctx = RecordingContext::new(Size::new(400.0, 400.0));
        chart.paint(&mut ctx, 0.0);

        let vertices = polygon_vertices(ctx.commands());
        assert_eq!(vertices.len(), n);

        // All vertices sit on the outer grid ring.
        let center = Point::new(200.0, 200.0);
        let radii: Vec<f32> = vertices
            .iter()
            .map(|v| Vec2::new(v.x - center.x, v.y - center.y).length())
            .collect();
        for radius in &radii {
            assert!((radius - radii[0]).abs() < 1e-3);
        }

        // And the side lengths are equal (regular polygon).
        let side = |a: Point, b: Point| Vec2::new(b.x - a.x, b.y - a.y).length();
        let first = side(vertices[0], vertices[1]);
        for i in 1..n {
            let s = side(vertices[i], vertices[(i + 1) % n]);
            assert!((s - first).abs() < 1e-3);
        }
    }

    #[test]
    fn test_out_of_range_value_extends_past_grid() {
        let chart = chart_with(3, 1.0);
        chart.change_value("axis-0", 2.0);
        let mut ctx = RecordingContext::new(Size::new(400.0, 400.0));
        chart.paint(&mut ctx, 0.0);

        let vertices = polygon_vertices(ctx.commands());
        let center = Point::new(200.0, 200.0);
        let r0 = Vec2::new(vertices[0].x - center.x, vertices[0].y - center.y).length();
        let r1 = Vec2::new(vertices[1].x - center.x, vertices[1].y - center.y).length();
        assert!((r0 - 2.0 * r1).abs() < 1e-3);
    }

    #[test]
    fn test_draw_order_spokes_rings_polygon() {
        let n = 3;
        let chart = chart_with(n, 0.5);
        let mut ctx = RecordingContext::new(Size::new(400.0, 400.0));
        chart.paint(&mut ctx, 0.0);

        let commands = ctx.commands();
        // n spokes, dot fill, 4 ring strokes, ring fill, polygon stroke, polygon fill.
        assert_eq!(commands.len(), n + 1 + 4 + 1 + 2);
        assert!(matches!(commands[n], DrawCommand::FillPath { .. }));
        assert!(matches!(
            commands[commands.len() - 1],
            DrawCommand::FillPath { .. }
        ));
    }

    #[test]
    fn test_labels_get_flanking_alignment() {
        let chart = chart_with(4, 0.5);
        let mut ctx = RecordingContext::new(Size::new(400.0, 400.0));
        chart.paint(&mut ctx, 0.0);

        let placements = chart.placements();
        // Axis 0 points up: horizontally centered, vertically end-aligned.
        assert_eq!(placements[0].1.horizontal, LabelAlign::Center);
        assert_eq!(placements[0].1.vertical, LabelAlign::End);
        // Axis 1 points right: start-aligned horizontally.
        assert_eq!(placements[1].1.horizontal, LabelAlign::Start);
        // Axis 3 points left: end-aligned horizontally.
        assert_eq!(placements[3].1.horizontal, LabelAlign::End);
    }

    #[test]
    fn test_labels_stay_inside_bounds() {
        let bounds = Size::new(200.0, 120.0);
        let chart = chart_with(6, 0.5);
        let mut ctx = RecordingContext::new(bounds);
        chart.paint(&mut ctx, 0.0);

        for (_, placement) in chart.placements() {
            assert!(placement.position.x >= 0.0);
            assert!(placement.position.x <= bounds.width);
            assert!(placement.position.y >= 0.0);
            assert!(placement.position.y <= bounds.height);
        }
    }

    #[test]
    fn test_geometry_listener_disarms_after_first_layout() {
        let chart = chart_with(3, 0.5);
        let mut scheduler = Scheduler::new();

        chart.on_geometry_changed(&mut scheduler);
        assert_eq!(scheduler.len(), 1);
        scheduler.tick(Duration::from_millis(1));
        assert!(chart.needs_repaint());

        let mut ctx = RecordingContext::new(Size::new(200.0, 200.0));
        chart.paint(&mut ctx, 0.0);
        assert!(!chart.needs_repaint());

        // Second notification schedules nothing.
        chart.on_geometry_changed(&mut scheduler);
        assert!(scheduler.is_idle());
    }

    #[test]
    fn test_picking_mode_propagates_to_placements() {
        let chart = chart_with(3, 0.5);
        chart.set_picking_mode(PickingMode::Ignore);
        for (_, placement) in chart.placements() {
            assert_eq!(placement.picking, PickingMode::Ignore);
        }
        // New axes inherit the mode.
        chart.add_value("late", 0.5, label());
        assert_eq!(chart.placements()[3].1.picking, PickingMode::Ignore);
    }

    #[test]
    fn test_remove_key_shrinks_polygon() {
        let chart = chart_with(4, 0.5);
        chart.remove_key("axis-1");
        assert_eq!(chart.len(), 3);
        assert!(chart.needs_repaint());
        chart.remove_key("missing");
        assert_eq!(chart.len(), 3);
    }
}
