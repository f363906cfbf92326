pub mod date_range;
pub mod day_total;
pub mod punch;
pub mod punch_kind;
pub mod reminder;
