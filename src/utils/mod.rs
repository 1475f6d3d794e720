//! Small shared helpers.

mod time;

pub use time::{current_time_millis, duration_until_next_day};
