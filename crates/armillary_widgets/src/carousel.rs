//! Centered carousel picker
//!
//! A vertical list of arbitrary-height items laid out around the selected
//! index: the selection sits centered, neighbors stack outward with their
//! travel compressed and their opacity/scale falling off by distance. A row
//! of indicator dots mirrors the item count; clicking a dot auto-steps the
//! selection toward it on a fixed interval.
//!
//! The carousel owns selection state and the falloff layout; the host owns
//! the item nodes. After every recompute the host reads the per-item and
//! per-dot style writes and applies them to its visual tree.
//!
//! Item heights are only valid after the host's layout pass, so content
//! replacement hides the widget, defers measurement by one scheduler beat,
//! and fades back in once the first layout is computed from real heights.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use armillary_core::{clamp01, MeasuredBox};
use armillary_scheduler::{Scheduler, TaskBuilder, TaskId};

/// Outcome of feeding an input event to a widget
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventOutcome {
    /// The widget handled the event; the host must stop propagation
    Consumed,
    /// The event did not apply
    Ignored,
}

/// Carousel tuning
#[derive(Clone, Debug)]
pub struct CarouselConfig {
    /// Vertical gap between items before compression
    pub spacing: f32,
    /// Per-step travel compression toward the edges
    pub compression: f32,
    /// Opacity/scale lost per step of distance from the selection
    pub falloff: f32,
    /// Interval between auto-steps when a dot is clicked
    pub step_interval: Duration,
    /// Delay before the deferred measure pass after a content change
    pub measure_delay: Duration,
    /// Size of the pre-allocated indicator dot pool
    pub dot_capacity: usize,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            spacing: 10.0,
            compression: 0.8,
            falloff: 0.3,
            step_interval: Duration::from_millis(75),
            measure_delay: Duration::from_millis(10),
            dot_capacity: 50,
        }
    }
}

/// Style write for one carousel item
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ItemVisual {
    /// Top offset inside the container
    pub top: f32,
    /// Opacity, `clamp01(1 - falloff × distance)`
    pub opacity: f32,
    /// Uniform scale, equal to the opacity
    pub scale: f32,
    /// True for the selected item; the host brings it to the front
    pub selected: bool,
}

/// Style write for one indicator dot
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DotVisual {
    pub visible: bool,
    pub selected: bool,
}

/// An item with the height captured by the deferred measure pass
struct MeasuredItem<T> {
    content: T,
    height: f32,
}

struct CarouselInner<T> {
    items: Vec<MeasuredItem<T>>,
    visuals: Vec<ItemVisual>,
    dots: Vec<DotVisual>,
    selected: usize,
    viewport_height: f32,
    opacity: f32,
    transitions_enabled: bool,
    chosen: Option<Rc<dyn Fn(usize)>>,
    config: CarouselConfig,
}

impl<T: MeasuredBox> CarouselInner<T> {
    fn step_forward(&mut self) {
        if self.selected + 1 < self.items.len() {
            self.selected += 1;
            self.update_visuals();
        }
    }

    fn step_backward(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
            self.update_visuals();
        }
    }

    fn refresh_heights(&mut self) {
        for item in &mut self.items {
            item.height = item.content.resolved_size().height;
        }
    }

    fn update_visuals(&mut self) {
        for dot in &mut self.dots {
            dot.selected = false;
        }
        if self.items.is_empty() {
            return;
        }
        if let Some(dot) = self.dots.get_mut(self.selected) {
            dot.selected = true;
        }

        let spacing = self.config.spacing;
        let compression = self.config.compression;
        let center = self.viewport_height / 2.0;
        let selected = self.selected;
        let selected_top = center - self.items[selected].height * 0.5;

        self.visuals[selected] = ItemVisual {
            top: selected_top,
            opacity: 1.0,
            scale: 1.0,
            selected: true,
        };

        // Items above the selection, walking outward.
        let mut last_position = selected_top;
        for i in (0..selected).rev() {
            last_position -= (self.items[i].height + spacing) * compression;
            self.visuals[i] = self.falloff_visual(i, last_position);
        }

        // Items below; each step advances by the height of the item before it.
        let mut last_position = selected_top;
        for i in selected + 1..self.items.len() {
            last_position += (self.items[i - 1].height + spacing) * compression;
            self.visuals[i] = self.falloff_visual(i, last_position);
        }
    }

    fn falloff_visual(&self, index: usize, top: f32) -> ItemVisual {
        let distance = index.abs_diff(self.selected) as f32;
        let alpha = clamp01(1.0 - self.config.falloff * distance);
        ItemVisual {
            top,
            opacity: alpha,
            scale: alpha,
            selected: false,
        }
    }
}

/// Centered carousel picker widget
///
/// `T` is the host's item node, read for its resolved height in the deferred
/// measure pass. Cheap to clone; clones share state, which is how scheduled
/// steps reach back into the carousel.
pub struct Carousel<T> {
    inner: Rc<RefCell<CarouselInner<T>>>,
}

impl<T> Clone for Carousel<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: MeasuredBox + 'static> Carousel<T> {
    pub fn new() -> Self {
        Self::with_config(CarouselConfig::default())
    }

    pub fn with_config(config: CarouselConfig) -> Self {
        let dots = vec![DotVisual::default(); config.dot_capacity];
        Self {
            inner: Rc::new(RefCell::new(CarouselInner {
                items: Vec::new(),
                visuals: Vec::new(),
                dots,
                selected: 0,
                viewport_height: 0.0,
                opacity: 1.0,
                transitions_enabled: true,
                chosen: None,
                config,
            })),
        }
    }

    /// Subscribe to the "choice confirmed" notification, fired when the
    /// already-selected item is clicked again
    pub fn on_chosen(&self, callback: impl Fn(usize) + 'static) {
        self.inner.borrow_mut().chosen = Some(Rc::new(callback));
    }

    /// The container height used for centering; set from the host's
    /// geometry callback
    pub fn set_viewport_height(&self, height: f32) {
        let mut inner = self.inner.borrow_mut();
        inner.viewport_height = height;
        inner.update_visuals();
    }

    pub fn selected_index(&self) -> usize {
        self.inner.borrow().selected
    }

    pub fn item_count(&self) -> usize {
        self.inner.borrow().items.len()
    }

    /// Widget opacity: zero while waiting for the deferred measure pass
    pub fn opacity(&self) -> f32 {
        self.inner.borrow().opacity
    }

    /// Whether the host should let item style changes animate. Disabled
    /// while the initial layout settles so items don't slide in from stale
    /// positions.
    pub fn transitions_enabled(&self) -> bool {
        self.inner.borrow().transitions_enabled
    }

    /// Per-item style writes, in item order
    pub fn item_visuals(&self) -> Vec<ItemVisual> {
        self.inner.borrow().visuals.clone()
    }

    /// Per-dot style writes for the whole dot pool
    pub fn dot_visuals(&self) -> Vec<DotVisual> {
        self.inner.borrow().dots.clone()
    }

    /// Replace the carousel content.
    ///
    /// Selection resets to the middle item. The widget hides and disables
    /// transitions until the deferred pass has measured the new items and
    /// computed the first layout from real heights, then fades back in.
    pub fn set_choices(&self, items: Vec<T>, scheduler: &mut Scheduler) {
        let mut inner = self.inner.borrow_mut();
        let count = items.len();
        tracing::debug!(count, "carousel content replaced");

        for (i, dot) in inner.dots.iter_mut().enumerate() {
            dot.visible = i < count;
            dot.selected = false;
        }

        inner.items = items
            .into_iter()
            .map(|content| MeasuredItem {
                content,
                height: 0.0,
            })
            .collect();
        inner.visuals = vec![ItemVisual::default(); count];
        inner.selected = count / 2;
        inner.opacity = 0.0;
        inner.transitions_enabled = false;
        let delay = inner.config.measure_delay;
        drop(inner);

        let carousel = self.clone();
        scheduler.schedule(
            TaskBuilder::new(move || {
                let mut inner = carousel.inner.borrow_mut();
                inner.refresh_heights();
                inner.update_visuals();
                inner.opacity = 1.0;
                inner.transitions_enabled = true;
            })
            .starting_in(delay),
        );
    }

    /// Step the selection down the list; no-op at the last item
    pub fn next(&self) {
        self.inner.borrow_mut().step_forward();
    }

    /// Step the selection up the list; no-op at the first item
    pub fn previous(&self) {
        self.inner.borrow_mut().step_backward();
    }

    /// Pointer-down on item `index`: selects it, or confirms the choice if
    /// it is already selected
    pub fn pointer_down_item(&self, index: usize) {
        let chosen = {
            let mut inner = self.inner.borrow_mut();
            if index >= inner.items.len() {
                return;
            }
            if index != inner.selected {
                inner.selected = index;
                inner.update_visuals();
                return;
            }
            inner.chosen.clone()
        };
        // No borrow held here: the handler may call back into the carousel,
        // e.g. to replace the content with the next picker level.
        if let Some(chosen) = chosen {
            chosen(index);
        }
    }

    /// Pointer-down on indicator dot `index`: auto-steps the selection
    /// toward it, first on the next tick and then every `step_interval`,
    /// until it arrives.
    ///
    /// Returns the task handle; the stepper only stops by reaching its
    /// target, so a host reacting to new input has to cancel it explicitly.
    pub fn pointer_down_dot(&self, index: usize, scheduler: &mut Scheduler) -> TaskId {
        let inner = self.inner.borrow();
        let interval = inner.config.step_interval;
        let forward = inner.selected < index;
        drop(inner);
        tracing::trace!(index, forward, "carousel dot auto-step started");

        let step = self.clone();
        let reached = self.clone();
        // The zero delay overrides the interval-sized default so the first
        // step lands on the very next tick instead of one interval late.
        if forward {
            scheduler.schedule(
                TaskBuilder::new(move || step.inner.borrow_mut().step_forward())
                    .every(interval)
                    .starting_in(Duration::ZERO)
                    .until(move || index <= reached.inner.borrow().selected),
            )
        } else {
            scheduler.schedule(
                TaskBuilder::new(move || step.inner.borrow_mut().step_backward())
                    .every(interval)
                    .starting_in(Duration::ZERO)
                    .until(move || index >= reached.inner.borrow().selected),
            )
        }
    }

    /// Wheel input: one step per event, direction from the vertical delta.
    /// Consumed so the event does not scroll an ancestor; ignored while the
    /// carousel has no content.
    pub fn wheel(&self, delta_y: f32) -> EventOutcome {
        let mut inner = self.inner.borrow_mut();
        if inner.items.is_empty() {
            return EventOutcome::Ignored;
        }
        if delta_y > 0.0 {
            inner.step_forward();
        } else {
            inner.step_backward();
        }
        EventOutcome::Consumed
    }
}

impl<T: MeasuredBox + 'static> Default for Carousel<T> {
    fn default() -> Self {
        Self::new()
    }
}
