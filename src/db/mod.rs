pub mod initialize;
pub mod log;
pub mod migrate;
pub mod pool;
pub mod punch_source;
pub mod queries;
pub mod sent_log;
pub mod shared;
