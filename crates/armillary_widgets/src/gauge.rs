//! Semicircular gauge
//!
//! Maps a scalar value to a semicircular dial: a full gradient arc for the
//! track, the unfilled remainder painted over it as a "gap" arc, a needle,
//! and a percentage label.
//!
//! The gap arc is deliberately drawn on top of the full gradient arc rather
//! than as a second independent arc; the visible value arc is whatever the
//! gap leaves uncovered. Hosts replaying the command list must keep the
//! recorded order.

use armillary_core::{
    gauge_direction, needle_angle, Color, DrawContext, Gradient, GradientStop, LineCap,
    MeasuredBox, Path, Point, RangeError, ScalarRange, Size, Stroke,
};

/// Gauge colors
#[derive(Clone, Debug)]
pub struct GaugeStyle {
    /// Track gradient stops, low to high
    pub track_stops: [GradientStop; 3],
    /// Color of the unfilled remainder arc
    pub gap_color: Color,
    /// Needle color
    pub needle_color: Color,
}

impl Default for GaugeStyle {
    fn default() -> Self {
        Self {
            track_stops: [
                GradientStop::new(0.0, Color::RED),
                GradientStop::new(0.5, Color::YELLOW),
                GradientStop::new(1.0, Color::GREEN),
            ],
            gap_color: Color::rgba(0.2, 0.2, 0.2, 0.8),
            needle_color: Color::BLACK,
        }
    }
}

/// Geometry derived from the container size for one repaint
///
/// The fit is asymmetric: when the container is wide enough to hold a full
/// semicircle at its height (`width × 0.5 >= height`) the radius is derived
/// from the height, otherwise from the width. The stroke takes a third of
/// the limiting dimension.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GaugeMetrics {
    pub line_width: f32,
    pub usable_width: f32,
    pub usable_height: f32,
    pub center: Point,
    pub radius: f32,
}

impl GaugeMetrics {
    /// Fit a semicircle into `size`, with the arc center pushed below the
    /// container by the label's height.
    pub fn fit(size: Size, label_height: f32) -> Self {
        let line_width;
        let usable_width;
        let usable_height;

        if size.width * 0.5 >= size.height {
            line_width = size.height / 3.0;
            usable_height = size.height - line_width / 2.0;
            usable_width = 2.0 * usable_height;
        } else {
            line_width = (size.width / 2.0) / 3.0;
            usable_width = size.width - line_width;
            usable_height = usable_width / 2.0;
        }

        let horizontal_padding = (size.width - usable_width) / 2.0;
        let center = Point::new(
            horizontal_padding + usable_width / 2.0,
            size.height + label_height,
        );

        Self {
            line_width,
            usable_width,
            usable_height,
            center,
            radius: usable_height,
        }
    }
}

/// Semicircular gauge widget
///
/// `L` is the host's percentage label, read for its resolved height when
/// placing the arc center. The label's text is owned here and pushed to the
/// host after value changes.
#[derive(Debug)]
pub struct Gauge<L> {
    range: ScalarRange,
    label: L,
    label_text: String,
    style: GaugeStyle,
    attached: bool,
    dirty: bool,
}

impl<L: MeasuredBox> Gauge<L> {
    /// Create a gauge over the unit range with the initial value 0.3
    pub fn new(label: L) -> Self {
        Self {
            range: ScalarRange::unit(0.3),
            label,
            label_text: String::new(),
            style: GaugeStyle::default(),
            attached: false,
            dirty: true,
        }
    }

    /// Replace the gauge colors
    pub fn with_style(mut self, style: GaugeStyle) -> Self {
        self.style = style;
        self
    }

    /// Replace the value range, clamping the current value into it
    pub fn set_range(&mut self, low: f32, high: f32) -> Result<(), RangeError> {
        self.range = ScalarRange::new(low, high, self.range.value())?;
        self.refresh_label();
        self.dirty = true;
        Ok(())
    }

    /// Set the value, clamped to the range; refreshes the label text
    pub fn set_value(&mut self, value: f32) {
        self.range.set_value(value);
        self.refresh_label();
        self.dirty = true;
    }

    pub fn value(&self) -> f32 {
        self.range.value()
    }

    /// The current value mapped to `[0, 1]`
    pub fn normalized(&self) -> f32 {
        self.range.normalized()
    }

    /// Needle angle in degrees: 180° at the low end, 0° at the high end
    pub fn needle_angle(&self) -> f32 {
        needle_angle(self.normalized())
    }

    /// Label text the host should display, e.g. `"30%"`. Empty until the
    /// first attach or value change.
    pub fn label_text(&self) -> &str {
        &self.label_text
    }

    /// The host's label element
    pub fn label(&self) -> &L {
        &self.label
    }

    /// Notification that the widget entered the visual tree. Only the first
    /// call has an effect; it refreshes the label now that the host can lay
    /// it out.
    pub fn on_attach(&mut self) {
        if self.attached {
            return;
        }
        self.attached = true;
        self.refresh_label();
        self.dirty = true;
    }

    /// Whether the gauge needs a repaint
    pub fn needs_repaint(&self) -> bool {
        self.dirty
    }

    fn refresh_label(&mut self) {
        self.label_text = format!("{}%", (self.normalized() * 100.0).round());
    }

    /// Paint the gauge onto the context's full viewport.
    ///
    /// Skipped silently while the container has no resolved size; the next
    /// repaint trigger retries.
    pub fn paint(&mut self, ctx: &mut dyn DrawContext) {
        let size = ctx.viewport_size();
        if size.is_degenerate() {
            tracing::trace!(?size, "gauge not laid out yet, skipping draw");
            return;
        }
        self.dirty = false;

        let label_height = self.label.resolved_size().height;
        let metrics = GaugeMetrics::fit(size, label_height);
        let center = metrics.center;
        let radius = metrics.radius;
        let normalized = self.normalized();

        let stroke = Stroke::new(metrics.line_width);

        // Full track arc, stroked with the low-to-high gradient.
        let gradient = Gradient::linear_with_stops(
            Point::new(center.x - radius, center.y),
            Point::new(center.x + radius, center.y),
            self.style.track_stops.to_vec(),
        );
        ctx.stroke_path(
            &Path::new().arc(center, radius, 180.0, 360.0),
            &stroke,
            gradient.into(),
        );

        // The unfilled remainder, painted over the track.
        ctx.stroke_path(
            &Path::new().arc(center, radius, 180.0 + 180.0 * normalized, 360.0),
            &stroke,
            self.style.gap_color.into(),
        );

        // Needle.
        let needle_stroke = Stroke::new(metrics.line_width / 8.0).with_cap(LineCap::Round);
        let direction = gauge_direction(self.needle_angle().to_radians());
        let needle_end = center.along(direction, radius * 0.9);
        ctx.stroke_segment(center, needle_end, &needle_stroke, self.style.needle_color.into());
    }
}
