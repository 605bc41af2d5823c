//! Scalar value ranges
//!
//! A `ScalarRange` holds a value inside a `[low, high]` interval and maps it
//! to the unit interval. Widgets clamp on write, so the stored value is
//! always in range; the radar chart uses the unclamped mapping instead,
//! where out-of-range values legitimately extend past the grid.

use thiserror::Error;

/// Errors from range construction
#[derive(Error, Debug, PartialEq)]
pub enum RangeError {
    /// The bounds are inverted or empty
    #[error("invalid range: low ({low}) must be less than high ({high})")]
    EmptyInterval { low: f32, high: f32 },
}

/// A scalar value constrained to a `[low, high]` interval
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScalarRange {
    low: f32,
    high: f32,
    value: f32,
}

impl ScalarRange {
    /// Create a range with the value clamped to the bounds.
    ///
    /// Fails when `low >= high`.
    pub fn new(low: f32, high: f32, value: f32) -> Result<Self, RangeError> {
        if low >= high {
            return Err(RangeError::EmptyInterval { low, high });
        }
        Ok(Self {
            low,
            high,
            value: value.clamp(low, high),
        })
    }

    /// The unit range `[0, 1]` with the given initial value
    pub fn unit(value: f32) -> Self {
        Self {
            low: 0.0,
            high: 1.0,
            value: value.clamp(0.0, 1.0),
        }
    }

    pub fn low(&self) -> f32 {
        self.low
    }

    pub fn high(&self) -> f32 {
        self.high
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    /// Set the value, clamping to the bounds
    pub fn set_value(&mut self, value: f32) {
        self.value = value.clamp(self.low, self.high);
    }

    /// The current value mapped to `[0, 1]`
    pub fn normalized(&self) -> f32 {
        (self.value - self.low) / (self.high - self.low)
    }

    /// Map an arbitrary value through this range without clamping
    pub fn normalize(&self, value: f32) -> f32 {
        (value - self.low) / (self.high - self.low)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_interval() {
        assert!(matches!(
            ScalarRange::new(1.0, 1.0, 0.5),
            Err(RangeError::EmptyInterval { .. })
        ));
        assert!(ScalarRange::new(2.0, 1.0, 0.5).is_err());
    }

    #[test]
    fn test_clamps_on_construction_and_write() {
        let mut range = ScalarRange::new(0.0, 10.0, 25.0).unwrap();
        assert_eq!(range.value(), 10.0);
        range.set_value(-3.0);
        assert_eq!(range.value(), 0.0);
        range.set_value(7.5);
        assert_eq!(range.normalized(), 0.75);
    }

    #[test]
    fn test_unclamped_normalize() {
        let range = ScalarRange::new(0.0, 4.0, 0.0).unwrap();
        assert_eq!(range.normalize(6.0), 1.5);
        assert_eq!(range.normalize(-2.0), -0.5);
    }

    #[test]
    fn test_offset_range() {
        let range = ScalarRange::new(-1.0, 1.0, 0.0).unwrap();
        assert_eq!(range.normalized(), 0.5);
    }
}
