//! Shared utilities: count parsing and timestamps.

pub mod count;
pub mod timestamp;

pub use count::{parse_count, CountError};
pub use timestamp::{file_timestamp, local_file_timestamp, time_seed};
