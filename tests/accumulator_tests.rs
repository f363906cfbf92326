use chrono::Duration;
use proptest::prelude::*;
use rpunchclock::core::calculator::accumulator::{compute, compute_until, segments};
use rpunchclock::models::punch::PunchEvent;
use rpunchclock::models::punch_kind::PunchKind::{self, *};

mod common;
use common::{at, punch};

fn hm(h: i64, m: i64) -> Duration {
    Duration::hours(h) + Duration::minutes(m)
}

#[test]
fn full_day_without_lunch() {
    let punches = vec![punch(ClockIn, 8, 0), punch(ClockOut, 17, 0)];
    assert_eq!(compute(&punches), hm(9, 0));
}

#[test]
fn lunch_break_is_not_worked() {
    let punches = vec![
        punch(ClockIn, 8, 0),
        punch(LunchOut, 12, 0),
        punch(LunchIn, 13, 0),
        punch(ClockOut, 17, 0),
    ];
    assert_eq!(compute(&punches), hm(8, 0));
}

#[test]
fn several_breaks_in_one_day() {
    let punches = vec![
        punch(ClockIn, 8, 0),
        punch(LunchOut, 10, 0),
        punch(LunchIn, 10, 30),
        punch(LunchOut, 12, 0),
        punch(LunchIn, 13, 0),
        punch(ClockOut, 17, 0),
    ];
    assert_eq!(compute(&punches), hm(7, 30));
}

#[test]
fn open_segment_counts_nothing() {
    assert_eq!(compute(&[punch(ClockIn, 8, 0)]), Duration::zero());
}

#[test]
fn dangling_close_counts_nothing() {
    assert_eq!(compute(&[punch(ClockOut, 17, 0)]), Duration::zero());
}

#[test]
fn empty_day_is_zero() {
    assert_eq!(compute(&[]), Duration::zero());
}

#[test]
fn unsorted_input_is_normalized() {
    let punches = vec![
        punch(ClockOut, 17, 0),
        punch(LunchIn, 13, 0),
        punch(ClockIn, 8, 0),
        punch(LunchOut, 12, 0),
    ];
    assert_eq!(compute(&punches), hm(8, 0));
}

#[test]
fn repeated_opening_restarts_the_segment() {
    // the second clock-in overwrites the first marker
    let punches = vec![
        punch(ClockIn, 8, 0),
        punch(ClockIn, 9, 0),
        punch(ClockOut, 12, 0),
    ];
    assert_eq!(compute(&punches), hm(3, 0));
}

#[test]
fn segments_lists_closed_spans_in_order() {
    let punches = vec![
        punch(LunchIn, 13, 0),
        punch(ClockIn, 8, 0),
        punch(LunchOut, 12, 0),
    ];
    let segs = segments(&punches);

    assert_eq!(segs.len(), 1);
    assert_eq!(segs[0].start, at(8, 0));
    assert_eq!(segs[0].end, at(12, 0));
}

#[test]
fn compute_until_adds_the_running_segment() {
    let punches = vec![
        punch(ClockIn, 8, 0),
        punch(LunchOut, 12, 0),
        punch(LunchIn, 13, 0),
    ];
    assert_eq!(compute_until(&punches, at(15, 30)), hm(6, 30));
    assert_eq!(compute(&punches), hm(4, 0));
}

fn kind_strategy() -> impl Strategy<Value = PunchKind> {
    prop_oneof![Just(ClockIn), Just(LunchOut), Just(LunchIn), Just(ClockOut)]
}

/// Punches on distinct minutes of the test day, in a random order.
fn shuffled_day() -> impl Strategy<Value = (Vec<PunchEvent>, Vec<PunchEvent>)> {
    prop::collection::btree_map(0u32..1440, kind_strategy(), 0..16).prop_flat_map(|by_minute| {
        let ordered: Vec<PunchEvent> = by_minute
            .into_iter()
            .map(|(minute, kind)| PunchEvent::new(at(minute / 60, minute % 60), kind))
            .collect();
        (Just(ordered.clone()), Just(ordered).prop_shuffle())
    })
}

proptest! {
    #[test]
    fn compute_ignores_input_order((ordered, shuffled) in shuffled_day()) {
        prop_assert_eq!(compute(&ordered), compute(&shuffled));
    }

    #[test]
    fn compute_never_negative((ordered, _) in shuffled_day()) {
        prop_assert!(compute(&ordered) >= Duration::zero());
    }
}
