pub mod accumulator;
pub mod period;
