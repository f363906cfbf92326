use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum PunchKind {
    ClockIn,
    LunchOut,
    LunchIn,
    ClockOut,
}

impl PunchKind {
    pub const ALL: [PunchKind; 4] = [
        PunchKind::ClockIn,
        PunchKind::LunchOut,
        PunchKind::LunchIn,
        PunchKind::ClockOut,
    ];

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            PunchKind::ClockIn => "clock_in",
            PunchKind::LunchOut => "lunch_out",
            PunchKind::LunchIn => "lunch_in",
            PunchKind::ClockOut => "clock_out",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "clock_in" => Some(PunchKind::ClockIn),
            "lunch_out" => Some(PunchKind::LunchOut),
            "lunch_in" => Some(PunchKind::LunchIn),
            "clock_out" => Some(PunchKind::ClockOut),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PunchKind::ClockIn => "clock-in",
            PunchKind::LunchOut => "lunch-out",
            PunchKind::LunchIn => "lunch-in",
            PunchKind::ClockOut => "clock-out",
        }
    }

    /// Opening punches start a worked segment.
    pub fn opens_segment(&self) -> bool {
        matches!(self, PunchKind::ClockIn | PunchKind::LunchIn)
    }

    /// Whether `self` may be recorded when `last` is the latest punch of the day.
    pub fn can_follow(&self, last: Option<PunchKind>) -> bool {
        match (self, last) {
            (PunchKind::ClockIn, None) => true,
            (PunchKind::ClockIn, Some(prev)) => {
                !matches!(prev, PunchKind::ClockIn | PunchKind::LunchIn)
            }
            (_, None) => false,
            (PunchKind::LunchOut, Some(prev)) => {
                !matches!(prev, PunchKind::LunchOut | PunchKind::ClockOut)
            }
            (PunchKind::LunchIn, Some(prev)) => {
                !matches!(prev, PunchKind::LunchIn | PunchKind::ClockIn)
            }
            (PunchKind::ClockOut, Some(prev)) => prev != PunchKind::ClockOut,
        }
    }
}

impl fmt::Display for PunchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
