//! Slider with a fill indicator
//!
//! An integer-range slider whose track carries a filled bar growing with the
//! value. The widget only owns the value state and the fill math; the host
//! applies [`FilledSlider::fill_percent`] as the filled tracker's width.

use armillary_core::{RangeError, Size};

/// Integer slider state with a filled-tracker indicator
#[derive(Clone, Debug)]
pub struct FilledSlider {
    low: i32,
    high: i32,
    value: i32,
}

impl FilledSlider {
    /// Create a slider over `[low, high]`, starting at `low`.
    ///
    /// Fails when `low >= high`.
    pub fn new(low: i32, high: i32) -> Result<Self, RangeError> {
        if low >= high {
            return Err(RangeError::EmptyInterval {
                low: low as f32,
                high: high as f32,
            });
        }
        Ok(Self {
            low,
            high,
            value: low,
        })
    }

    pub fn low(&self) -> i32 {
        self.low
    }

    pub fn high(&self) -> i32 {
        self.high
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    /// Set the value, clamping to the bounds. Returns true when the stored
    /// value changed, so the host can skip redundant style writes.
    pub fn set_value(&mut self, value: i32) -> bool {
        let clamped = value.clamp(self.low, self.high);
        if clamped == self.value {
            return false;
        }
        self.value = clamped;
        true
    }

    /// Width of the filled tracker as a percentage of the track:
    /// `value / high × 100`.
    pub fn fill_percent(&self) -> f32 {
        self.value as f32 / self.high as f32 * 100.0
    }

    /// Filled tracker size for a track of the given width
    pub fn fill_size(&self, track: Size) -> Size {
        Size::new(track.width * self.fill_percent() / 100.0, track.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_range() {
        assert!(FilledSlider::new(5, 5).is_err());
        assert!(FilledSlider::new(10, 0).is_err());
    }

    #[test]
    fn test_fill_percent_tracks_value() {
        let mut slider = FilledSlider::new(0, 10).unwrap();
        assert_eq!(slider.fill_percent(), 0.0);
        assert!(slider.set_value(4));
        assert_eq!(slider.fill_percent(), 40.0);
        assert!(slider.set_value(10));
        assert_eq!(slider.fill_percent(), 100.0);
    }

    #[test]
    fn test_clamps_and_reports_change() {
        let mut slider = FilledSlider::new(0, 10).unwrap();
        assert!(slider.set_value(25));
        assert_eq!(slider.value(), 10);
        // Clamped to the same stored value: not a change.
        assert!(!slider.set_value(99));
        assert!(slider.set_value(-3));
        assert_eq!(slider.value(), 0);
    }

    #[test]
    fn test_fill_size() {
        let mut slider = FilledSlider::new(0, 4).unwrap();
        slider.set_value(1);
        let fill = slider.fill_size(Size::new(200.0, 8.0));
        assert_eq!(fill, Size::new(50.0, 8.0));
    }
}
