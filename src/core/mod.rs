pub mod calculator;
pub mod clock;
pub mod punch;
pub mod reminders;
pub mod report;
pub mod source;
