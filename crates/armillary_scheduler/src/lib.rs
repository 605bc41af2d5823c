//! Armillary Scheduler
//!
//! A single-threaded cooperative scheduler for UI work. Widgets never block:
//! everything that must wait for the next layout pass (height measurement,
//! fade-in) or repeat on an interval (multi-step carousel scrolling) is
//! expressed as a scheduled task. The host drives the scheduler by calling
//! [`Scheduler::tick`] once per frame with the elapsed time.
//!
//! Repeating tasks carry a stop predicate: the predicate is evaluated before
//! each run, and once it returns true the task is removed without running
//! again. This is how the carousel's dot auto-step cancels itself on
//! reaching its target.
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use armillary_scheduler::{Scheduler, TaskBuilder};
//!
//! let mut sched = Scheduler::new();
//! sched.schedule(TaskBuilder::new(|| println!("deferred")).starting_in(Duration::from_millis(10)));
//! sched.tick(Duration::from_millis(16));
//! assert!(sched.is_idle());
//! ```

use std::time::Duration;

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Handle to a scheduled task
    pub struct TaskId;
}

/// Configuration for a task before it is handed to the scheduler
pub struct TaskBuilder {
    callback: Box<dyn FnMut()>,
    delay: Duration,
    interval: Option<Duration>,
    until: Option<Box<dyn FnMut() -> bool>>,
}

impl TaskBuilder {
    /// A task running `callback` once, immediately on the next tick
    pub fn new(callback: impl FnMut() + 'static) -> Self {
        Self {
            callback: Box::new(callback),
            delay: Duration::ZERO,
            interval: None,
            until: None,
        }
    }

    /// Delay the first run
    pub fn starting_in(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Repeat on an interval instead of running once.
    ///
    /// The first run happens one interval after scheduling unless
    /// `starting_in` was also set.
    pub fn every(mut self, interval: Duration) -> Self {
        if self.delay.is_zero() {
            self.delay = interval;
        }
        self.interval = Some(interval);
        self
    }

    /// Stop a repeating task once the predicate returns true.
    ///
    /// The predicate is checked before each run; when it fires the task is
    /// removed without running again.
    pub fn until(mut self, predicate: impl FnMut() -> bool + 'static) -> Self {
        self.until = Some(Box::new(predicate));
        self
    }
}

struct Task {
    callback: Box<dyn FnMut()>,
    due: Duration,
    interval: Option<Duration>,
    until: Option<Box<dyn FnMut() -> bool>>,
}

/// The cooperative task scheduler
///
/// All tasks run on the caller's thread from inside [`tick`](Self::tick);
/// there is no parallelism and no locking. A repeating task runs at most
/// once per tick and is re-armed relative to the current time, so a long
/// frame does not produce a burst of catch-up steps.
#[derive(Default)]
pub struct Scheduler {
    tasks: SlotMap<TaskId, Task>,
    now: Duration,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time accumulated over all ticks so far
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of live tasks
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// True when no tasks are pending
    pub fn is_idle(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Add a task; it first becomes runnable after its configured delay
    pub fn schedule(&mut self, builder: TaskBuilder) -> TaskId {
        let repeating = builder.interval.is_some();
        let id = self.tasks.insert(Task {
            callback: builder.callback,
            due: self.now + builder.delay,
            interval: builder.interval,
            until: builder.until,
        });
        tracing::trace!(?id, repeating, "task scheduled");
        id
    }

    /// Remove a task before it completes. Removing an already-finished task
    /// is a no-op.
    pub fn cancel(&mut self, id: TaskId) {
        if self.tasks.remove(id).is_some() {
            tracing::trace!(?id, "task cancelled");
        }
    }

    /// Advance the clock and run every due task. Returns the number of
    /// callbacks invoked.
    pub fn tick(&mut self, dt: Duration) -> usize {
        self.now += dt;
        let now = self.now;

        let due: Vec<TaskId> = self
            .tasks
            .iter()
            .filter(|(_, task)| task.due <= now)
            .map(|(id, _)| id)
            .collect();

        let mut ran = 0;
        for id in due {
            let Some(task) = self.tasks.get_mut(id) else {
                continue;
            };

            if let Some(until) = task.until.as_mut() {
                if until() {
                    self.tasks.remove(id);
                    tracing::trace!(?id, "task finished (predicate met)");
                    continue;
                }
            }

            (task.callback)();
            ran += 1;

            match task.interval {
                Some(interval) => task.due = now + interval,
                None => {
                    self.tasks.remove(id);
                }
            }
        }
        ran
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counter() -> (Rc<Cell<u32>>, impl FnMut()) {
        let count = Rc::new(Cell::new(0));
        let inner = Rc::clone(&count);
        (count, move || inner.set(inner.get() + 1))
    }

    #[test]
    fn test_one_shot_runs_once() {
        let mut sched = Scheduler::new();
        let (count, bump) = counter();
        sched.schedule(TaskBuilder::new(bump));
        sched.tick(Duration::from_millis(1));
        sched.tick(Duration::from_millis(1));
        assert_eq!(count.get(), 1);
        assert!(sched.is_idle());
    }

    #[test]
    fn test_starting_in_delays_first_run() {
        let mut sched = Scheduler::new();
        let (count, bump) = counter();
        sched.schedule(TaskBuilder::new(bump).starting_in(Duration::from_millis(10)));
        sched.tick(Duration::from_millis(5));
        assert_eq!(count.get(), 0);
        sched.tick(Duration::from_millis(5));
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_repeating_rearms() {
        let mut sched = Scheduler::new();
        let (count, bump) = counter();
        sched.schedule(TaskBuilder::new(bump).every(Duration::from_millis(75)));
        sched.tick(Duration::from_millis(75));
        sched.tick(Duration::from_millis(75));
        sched.tick(Duration::from_millis(75));
        assert_eq!(count.get(), 3);
        assert_eq!(sched.len(), 1);
    }

    #[test]
    fn test_repeating_runs_once_per_tick() {
        // A long frame must not produce a catch-up burst.
        let mut sched = Scheduler::new();
        let (count, bump) = counter();
        sched.schedule(TaskBuilder::new(bump).every(Duration::from_millis(10)));
        sched.tick(Duration::from_millis(500));
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_until_removes_without_final_run() {
        let mut sched = Scheduler::new();
        let (count, bump) = counter();
        let stop = Rc::clone(&count);
        sched.schedule(
            TaskBuilder::new(bump)
                .every(Duration::from_millis(10))
                .until(move || stop.get() >= 2),
        );
        for _ in 0..5 {
            sched.tick(Duration::from_millis(10));
        }
        assert_eq!(count.get(), 2);
        assert!(sched.is_idle());
    }

    #[test]
    fn test_cancel_removes_task() {
        let mut sched = Scheduler::new();
        let (count, bump) = counter();
        let id = sched.schedule(TaskBuilder::new(bump).every(Duration::from_millis(10)));
        sched.tick(Duration::from_millis(10));
        sched.cancel(id);
        sched.tick(Duration::from_millis(10));
        assert_eq!(count.get(), 1);
        assert!(sched.is_idle());
    }

    #[test]
    fn test_independent_due_times() {
        let mut sched = Scheduler::new();
        let (count, bump) = counter();
        let follow_up = Rc::new(Cell::new(false));

        let flag = Rc::clone(&follow_up);
        sched.schedule(TaskBuilder::new(move || flag.set(true)));
        sched.schedule(TaskBuilder::new(bump).starting_in(Duration::from_millis(20)));

        sched.tick(Duration::from_millis(10));
        assert!(follow_up.get());
        assert_eq!(count.get(), 0);
        sched.tick(Duration::from_millis(10));
        assert_eq!(count.get(), 1);
    }
}
