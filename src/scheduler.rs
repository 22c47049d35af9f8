//! One-shot timers.
//!
//! Everything time-driven in the splash goes through [`Scheduler`], so the
//! browser's `setTimeout` can be swapped for [`ManualScheduler`], a virtual
//! clock that tests advance by hand.

use std::cell::{Cell, RefCell};
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::rc::Rc;

pub type Task = Box<dyn FnOnce()>;

pub trait Scheduler {
    /// Run `task` once, `delay_ms` from now. Negative delays mean "as soon as
    /// possible".
    fn schedule(&self, delay_ms: f64, task: Task);
}

/// Trailing-edge debounce: of a burst of calls less than `wait_ms` apart,
/// only the last one runs, `wait_ms` after it was made.
///
/// Superseded timers still fire but find their generation stale.
#[derive(Clone)]
pub struct Debounce<S> {
    scheduler: S,
    wait_ms: f64,
    generation: Rc<Cell<u64>>,
}

impl<S: Scheduler> Debounce<S> {
    pub fn new(scheduler: S, wait_ms: f64) -> Self {
        Self {
            scheduler,
            wait_ms,
            generation: Rc::default(),
        }
    }

    pub fn call(&self, f: impl FnOnce() + 'static) {
        let generation = self.generation.get().wrapping_add(1);
        self.generation.set(generation);
        let current = self.generation.clone();
        self.scheduler.schedule(
            self.wait_ms,
            Box::new(move || {
                if current.get() == generation {
                    f();
                }
            }),
        );
    }
}

struct Timer {
    due: f64,
    seq: u64,
    task: Task,
}

impl PartialEq for Timer {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Timer {}

impl PartialOrd for Timer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Timer {
    // BinaryHeap is a max-heap: invert so the earliest (then oldest) pops first.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .due
            .total_cmp(&self.due)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

#[derive(Default)]
struct Clock {
    now: f64,
    next_seq: u64,
    fired: usize,
    timers: BinaryHeap<Timer>,
}

/// Deterministic virtual clock.
///
/// Timers with equal due times fire in scheduling order, like browsers do.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Rc<RefCell<Clock>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time in milliseconds.
    pub fn now(&self) -> f64 {
        self.clock.borrow().now
    }

    /// Timers still waiting.
    pub fn pending(&self) -> usize {
        self.clock.borrow().timers.len()
    }

    /// Timers fired so far.
    pub fn fired(&self) -> usize {
        self.clock.borrow().fired
    }

    /// Move the clock forward by `ms`, firing every timer that falls due,
    /// including ones scheduled by timers fired along the way.
    pub fn advance(&self, ms: f64) {
        let target = self.now() + ms;
        self.advance_to(target);
    }

    pub fn advance_to(&self, target: f64) {
        loop {
            let task = {
                let mut clock = self.clock.borrow_mut();
                match clock.timers.peek().map(|t| t.due) {
                    Some(due) if due <= target => {}
                    _ => break,
                }
                let Some(timer) = clock.timers.pop() else {
                    break;
                };
                clock.now = clock.now.max(timer.due);
                clock.fired += 1;
                timer.task
            };
            // borrow released: the task may schedule more timers
            task();
        }
        let mut clock = self.clock.borrow_mut();
        clock.now = clock.now.max(target);
    }

    /// Fire everything, however far in the future.
    pub fn run_until_idle(&self) {
        while let Some(due) = self.next_due() {
            self.advance_to(due);
        }
    }

    fn next_due(&self) -> Option<f64> {
        self.clock.borrow().timers.peek().map(|t| t.due)
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay_ms: f64, task: Task) {
        let mut clock = self.clock.borrow_mut();
        let due = clock.now + delay_ms.max(0.0);
        let seq = clock.next_seq;
        clock.next_seq += 1;
        clock.timers.push(Timer { due, seq, task });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_in_due_order_then_fifo() {
        let scheduler = ManualScheduler::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        for (delay, name) in [(20.0, "b"), (10.0, "a"), (20.0, "c")] {
            let log = log.clone();
            scheduler.schedule(delay, Box::new(move || log.borrow_mut().push(name)));
        }
        scheduler.advance(15.0);
        assert_eq!(*log.borrow(), ["a"]);
        assert_eq!(scheduler.now(), 15.0);
        scheduler.advance(5.0);
        assert_eq!(*log.borrow(), ["a", "b", "c"]);
        assert_eq!(scheduler.fired(), 3);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn nested_timers_are_relative_to_their_parent() {
        let scheduler = ManualScheduler::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let inner = scheduler.clone();
        let seen_outer = seen.clone();
        scheduler.schedule(
            100.0,
            Box::new(move || {
                let seen = seen_outer.clone();
                let clock = inner.clone();
                inner.schedule(50.0, Box::new(move || seen.borrow_mut().push(clock.now())));
            }),
        );
        scheduler.advance(149.0);
        assert!(seen.borrow().is_empty());
        scheduler.advance(1.0);
        assert_eq!(*seen.borrow(), [150.0]);
    }

    #[test]
    fn debounce_runs_only_the_last_call_of_a_burst() {
        let scheduler = ManualScheduler::new();
        let debounce = Debounce::new(scheduler.clone(), 250.0);
        let runs = Rc::new(RefCell::new(Vec::new()));
        let call = |label: &'static str| {
            let runs = runs.clone();
            let clock = scheduler.clone();
            debounce.call(move || runs.borrow_mut().push((label, clock.now())));
        };

        call("first");
        scheduler.advance(100.0);
        call("second");
        scheduler.advance(249.0);
        assert!(runs.borrow().is_empty());
        scheduler.advance(1.0);
        assert_eq!(*runs.borrow(), [("second", 350.0)]);

        // a call after the window has settled runs on its own
        scheduler.advance(1000.0);
        call("third");
        scheduler.run_until_idle();
        assert_eq!(*runs.borrow(), [("second", 350.0), ("third", 1600.0)]);
    }

    #[test]
    fn negative_delay_fires_immediately_on_advance() {
        let scheduler = ManualScheduler::new();
        let hit = Rc::new(RefCell::new(false));
        let flag = hit.clone();
        scheduler.schedule(-5.0, Box::new(move || *flag.borrow_mut() = true));
        scheduler.advance(0.0);
        assert!(*hit.borrow());
    }
}
