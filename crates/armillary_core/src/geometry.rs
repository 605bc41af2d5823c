//! Core geometry types and radial math
//!
//! The coordinate system is y-down, matching retained UI toolkits: angle 0
//! points right and positive angles sweep counter-clockwise on screen once
//! the y component is negated (see [`gauge_direction`]).

// ─────────────────────────────────────────────────────────────────────────────
// Geometry Types
// ─────────────────────────────────────────────────────────────────────────────

/// 2D point
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Offset the point by a direction scaled to a length
    pub fn along(self, direction: Vec2, distance: f32) -> Point {
        Point::new(
            self.x + direction.x * distance,
            self.y + direction.y * distance,
        )
    }
}

/// 2D size
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True when either dimension is zero or negative (not laid out yet)
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// 2D rectangle
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const ZERO: Rect = Rect {
        origin: Point::ZERO,
        size: Size::ZERO,
    };

    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    pub fn x(&self) -> f32 {
        self.origin.x
    }

    pub fn y(&self) -> f32 {
        self.origin.y
    }

    pub fn width(&self) -> f32 {
        self.size.width
    }

    pub fn height(&self) -> f32 {
        self.size.height
    }

    pub fn center(&self) -> Point {
        Point::new(
            self.origin.x + self.size.width / 2.0,
            self.origin.y + self.size.height / 2.0,
        )
    }

    /// Inset the rect by a delta (shrink from all sides)
    pub fn inset(&self, dx: f32, dy: f32) -> Self {
        Rect {
            origin: Point::new(self.origin.x + dx, self.origin.y + dy),
            size: Size::new(
                (self.size.width - 2.0 * dx).max(0.0),
                (self.size.height - 2.0 * dy).max(0.0),
            ),
        }
    }
}

/// 2D vector
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len > 0.0 {
            Self::new(self.x / len, self.y / len)
        } else {
            Self::ZERO
        }
    }

    pub fn scaled(&self, factor: f32) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Radial Math
// ─────────────────────────────────────────────────────────────────────────────

/// Clamp a value to the unit interval
pub fn clamp01(v: f32) -> f32 {
    v.clamp(0.0, 1.0)
}

/// Unit directions for `n` evenly spaced axes, index 0 at the top,
/// proceeding clockwise in a y-down coordinate system.
///
/// Axis `i` sits at angle `2π/n × i − π/2`.
pub fn radial_directions(n: usize) -> impl Iterator<Item = Vec2> {
    let step = 2.0 * std::f32::consts::PI / n as f32;
    (0..n).map(move |i| {
        let angle = step * i as f32 - std::f32::consts::FRAC_PI_2;
        Vec2::new(angle.cos(), angle.sin())
    })
}

/// Direction of a gauge needle at `angle` radians.
///
/// The y component is negated so that angle 0 points right and π points
/// left with the arc opening upward on a y-down screen.
pub fn gauge_direction(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), -angle.sin())
}

/// Needle angle in degrees for a normalized value in `[0, 1]`.
///
/// 0 maps to 180° (needle left), 1 maps to 0° (needle right).
pub fn needle_angle(normalized: f32) -> f32 {
    180.0 * (1.0 - normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn test_needle_angle_endpoints() {
        assert_eq!(needle_angle(0.0), 180.0);
        assert_eq!(needle_angle(1.0), 0.0);
        assert_eq!(needle_angle(0.5), 90.0);
    }

    #[test]
    fn test_radial_directions_start_at_top() {
        let dirs: Vec<Vec2> = radial_directions(4).collect();
        assert_eq!(dirs.len(), 4);
        // Index 0 points up (negative y in screen space)
        assert!(dirs[0].x.abs() < EPS);
        assert!((dirs[0].y + 1.0).abs() < EPS);
        // Index 1 is a quarter turn clockwise: pointing right
        assert!((dirs[1].x - 1.0).abs() < EPS);
        assert!(dirs[1].y.abs() < EPS);
    }

    #[test]
    fn test_radial_directions_are_unit_length() {
        for dir in radial_directions(7) {
            assert!((dir.length() - 1.0).abs() < EPS);
        }
    }

    #[test]
    fn test_gauge_direction_inverts_y() {
        let up = gauge_direction(std::f32::consts::FRAC_PI_2);
        assert!(up.x.abs() < EPS);
        assert!((up.y + 1.0).abs() < EPS);
    }

    #[test]
    fn test_clamp01() {
        assert_eq!(clamp01(-0.5), 0.0);
        assert_eq!(clamp01(0.25), 0.25);
        assert_eq!(clamp01(1.5), 1.0);
    }

    #[test]
    fn test_rect_center_and_inset() {
        let rect = Rect::new(10.0, 20.0, 100.0, 60.0);
        assert_eq!(rect.center(), Point::new(60.0, 50.0));
        let inner = rect.inset(5.0, 5.0);
        assert_eq!(inner, Rect::new(15.0, 25.0, 90.0, 50.0));
    }

    #[test]
    fn test_point_along() {
        let p = Point::new(1.0, 1.0).along(Vec2::new(0.0, 1.0), 3.0);
        assert_eq!(p, Point::new(1.0, 4.0));
    }
}
