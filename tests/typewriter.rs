use std::cell::{Cell, RefCell};
use std::rc::Rc;

use fastrand::Rng;
use splash_wasm::scheduler::ManualScheduler;
use splash_wasm::typewriter::{Typewriter, TypewriterRun};

struct Output {
    text: Rc<RefCell<String>>,
    writes: Rc<Cell<usize>>,
    completions: Rc<Cell<usize>>,
}

fn type_text(clock: &ManualScheduler, text: &str, seed: u64) -> Output {
    let out = Output {
        text: Rc::default(),
        writes: Rc::default(),
        completions: Rc::default(),
    };
    let (text_sink, writes, completions) = (out.text.clone(), out.writes.clone(), out.completions.clone());
    TypewriterRun::new(Typewriter::new(text, 75.0, Rng::with_seed(seed)), move |visible| {
        *text_sink.borrow_mut() = visible.to_string();
        writes.set(writes.get() + 1);
    })
    .on_complete(move || completions.set(completions.get() + 1))
    .start(clock.clone());
    out
}

#[test]
fn one_timer_per_character() {
    let clock = ManualScheduler::new();
    let out = type_text(&clock, "Neural link", 3);
    // first character is synchronous
    assert_eq!(out.text.borrow().as_str(), "N");
    assert_eq!(clock.fired(), 0);

    clock.run_until_idle();
    assert_eq!(out.text.borrow().as_str(), "Neural link");
    assert_eq!(clock.fired(), "Neural link".chars().count());
    assert_eq!(out.completions.get(), 1);
}

#[test]
fn completion_waits_for_the_last_timer() {
    let clock = ManualScheduler::new();
    let out = type_text(&clock, "ab", 8);
    assert_eq!(out.completions.get(), 0);
    while clock.pending() > 0 {
        assert_eq!(out.completions.get(), 0);
        clock.run_until_idle();
    }
    assert_eq!(out.completions.get(), 1);
    assert_eq!(out.writes.get(), 3);
}

#[test]
fn empty_text_completes_immediately() {
    let clock = ManualScheduler::new();
    let out = type_text(&clock, "", 1);
    assert_eq!(out.completions.get(), 1);
    assert_eq!(clock.pending(), 0);
    assert_eq!(out.text.borrow().as_str(), "");
}

#[test]
fn concurrent_runs_do_not_interfere() {
    let clock = ManualScheduler::new();
    let first = type_text(&clock, "alpha", 1);
    let second = type_text(&clock, "omega-13", 2);
    clock.run_until_idle();
    assert_eq!(first.text.borrow().as_str(), "alpha");
    assert_eq!(second.text.borrow().as_str(), "omega-13");
    assert_eq!(first.completions.get() + second.completions.get(), 2);
    assert_eq!(clock.fired(), 5 + 8);
}

#[test]
fn typing_time_is_bounded_by_the_delay_range() {
    let clock = ManualScheduler::new();
    let out = type_text(&clock, "0123456789", 11);
    clock.run_until_idle();
    assert_eq!(out.completions.get(), 1);
    // ten gaps, each between 0.75× and 3× the 75ms base
    assert!(clock.now() >= 10.0 * 75.0 * 0.75);
    assert!(clock.now() <= 10.0 * 75.0 * 3.0);
}
