use chrono::{Days, Local, NaiveTime};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Returns the current time in milliseconds since UNIX epoch
pub fn current_time_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}

/// Duration from now until the next local midnight. Used by the expiration
/// scheduler to time its good-for-day pruning wakeups.
pub fn duration_until_next_day() -> Duration {
    let now = Local::now().naive_local();
    let next_midnight = (now.date() + Days::new(1)).and_time(NaiveTime::MIN);
    (next_midnight - now).to_std().unwrap_or(Duration::ZERO)
}
