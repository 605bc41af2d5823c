//! Measured-box capability
//!
//! Widgets position and size themselves around live-measured element bounds
//! they do not own: a carousel item's height, a chart label's extent. The
//! host exposes those through [`MeasuredBox`] instead of handing widgets a
//! concrete visual-tree node.

use crate::geometry::Size;

/// Read access to an element's resolved size.
///
/// Resolved sizes are only valid after the host's layout pass; before that
/// implementations return [`Size::ZERO`]. Widgets that depend on measurement
/// defer their first layout until the host has had a chance to resolve
/// bounds (see the carousel's content-set path).
pub trait MeasuredBox {
    /// The element's size after the most recent layout pass
    fn resolved_size(&self) -> Size;
}

impl MeasuredBox for Size {
    fn resolved_size(&self) -> Size {
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_measures_itself() {
        let size = Size::new(40.0, 16.0);
        assert_eq!(size.resolved_size(), size);
    }
}
