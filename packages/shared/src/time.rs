//! Time-related utilities with clock abstraction for testability.

use chrono::{DateTime, FixedOffset, Local, TimeZone};

/// Format used for the wall-clock time attached to chat messages (e.g. `3:04:05 PM`).
pub const WALL_CLOCK_FORMAT: &str = "%-I:%M:%S %p";

/// Clock trait for dependency injection and testing
pub trait Clock: Send + Sync {
    /// Current wall-clock time, carrying the offset it should be displayed in
    fn now(&self) -> DateTime<FixedOffset>;
}

/// System clock implementation (uses the server's local time zone)
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// Fixed clock implementation for testing (returns a fixed time)
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    fixed_time: DateTime<FixedOffset>,
}

impl FixedClock {
    /// Create a new fixed clock with the given time
    pub fn new(fixed_time: DateTime<FixedOffset>) -> Self {
        Self { fixed_time }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.fixed_time
    }
}

/// Format a point in time as a 12-hour wall-clock string
pub fn format_wall_clock<Tz>(time: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    time.format(WALL_CLOCK_FORMAT).to_string()
}
