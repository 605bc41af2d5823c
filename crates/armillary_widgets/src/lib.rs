//! Armillary widgets
//!
//! Host-agnostic widget logic: each widget owns its value state, geometry,
//! and painting, and talks to the embedding UI through the small seams in
//! `armillary_core` (a [`DrawContext`](armillary_core::DrawContext) to paint
//! into, [`MeasuredBox`](armillary_core::MeasuredBox) for elements whose
//! resolved size feeds a layout) plus plain style-write structs the host
//! applies to its own tree.
//!
//! # Example
//!
//! ```ignore
//! use armillary_widgets::prelude::*;
//!
//! let mut gauge = Gauge::new(label_element);
//! gauge.on_attach();
//! gauge.set_value(0.72);
//! gauge.paint(&mut canvas);
//! ```

pub mod carousel;
pub mod gauge;
pub mod radar;
pub mod slider;

pub use carousel::{Carousel, CarouselConfig, DotVisual, EventOutcome, ItemVisual};
pub use gauge::{Gauge, GaugeMetrics, GaugeStyle};
pub use radar::{LabelAlign, LabelPlacement, PickingMode, RadarChart, RadarStyle};
pub use slider::FilledSlider;

/// Common imports for hosts embedding the widgets
pub mod prelude {
    pub use crate::carousel::{Carousel, CarouselConfig, DotVisual, EventOutcome, ItemVisual};
    pub use crate::gauge::{Gauge, GaugeStyle};
    pub use crate::radar::{LabelAlign, LabelPlacement, PickingMode, RadarChart, RadarStyle};
    pub use crate::slider::FilledSlider;
    pub use armillary_core::{
        Brush, Color, DrawContext, Gradient, MeasuredBox, Point, Rect, ScalarRange, Size,
    };
    pub use armillary_scheduler::{Scheduler, TaskBuilder, TaskId};
}
