//! Worked-time accounting for a single day of punches.
//!
//! Punches are walked in timestamp order with one open-segment marker:
//! opening punches (clock-in, lunch-in) set it, closing punches (lunch-out,
//! clock-out) close it. Closing with no open marker and a trailing open
//! marker both contribute nothing.

use crate::models::punch::{PunchEvent, WorkSegment};
use crate::models::punch_kind::PunchKind;
use chrono::{DateTime, Duration, Local};

/// Sort punches chronologically. Stable: ties keep their input order.
pub fn sorted(punches: &[PunchEvent]) -> Vec<PunchEvent> {
    let mut sorted = punches.to_vec();
    sorted.sort_by_key(|p| p.timestamp);
    sorted
}

/// Closed worked segments, in chronological order.
pub fn segments(punches: &[PunchEvent]) -> Vec<WorkSegment> {
    let mut out = Vec::new();
    let mut open: Option<DateTime<Local>> = None;

    for punch in sorted(punches) {
        match punch.kind {
            PunchKind::ClockIn | PunchKind::LunchIn => {
                open = Some(punch.timestamp);
            }
            PunchKind::LunchOut | PunchKind::ClockOut => {
                if let Some(start) = open.take() {
                    out.push(WorkSegment {
                        start,
                        end: punch.timestamp,
                    });
                }
            }
        }
    }

    out
}

/// Total worked duration of the given punches.
pub fn compute(punches: &[PunchEvent]) -> Duration {
    segments(punches)
        .iter()
        .fold(Duration::zero(), |acc, s| acc + s.duration())
}

/// Worked time up to `now`, counting a still-open segment as running.
pub fn compute_until(punches: &[PunchEvent], now: DateTime<Local>) -> Duration {
    let closed = compute(punches);

    let open_since = sorted(punches)
        .iter()
        .fold(None, |_open, p| p.kind.opens_segment().then_some(p.timestamp));

    match open_since {
        Some(start) if now > start => closed + (now - start),
        _ => closed,
    }
}
