//! In-game shift clock
//!
//! Maps real elapsed milliseconds onto the hours of a shift. A shift whose
//! end hour is not after its start hour wraps past midnight.

use crate::scene::Millis;

use super::game_state::{DEFAULT_SHIFT_DURATION_MS, DEFAULT_SHIFT_END_HOUR, DEFAULT_SHIFT_START_HOUR};

pub const MS_PER_HOUR: f64 = 3_600_000.0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionClock {
    start_hour: u32,
    end_hour: u32,
    /// Real time mapped onto the whole shift
    real_duration_ms: u64,
    /// `None` while the clock is not running
    started_at: Option<Millis>,
}

impl Default for SessionClock {
    fn default() -> Self {
        Self::new(
            DEFAULT_SHIFT_START_HOUR,
            DEFAULT_SHIFT_END_HOUR,
            DEFAULT_SHIFT_DURATION_MS,
        )
    }
}

impl SessionClock {
    /// Hours are 0-23; a zero duration is treated as 1 ms
    pub fn new(start_hour: u32, end_hour: u32, real_duration_ms: u64) -> Self {
        Self {
            start_hour: start_hour % 24,
            end_hour: end_hour % 24,
            real_duration_ms: real_duration_ms.max(1),
            started_at: None,
        }
    }

    pub fn start_hour(&self) -> u32 {
        self.start_hour
    }

    pub fn end_hour(&self) -> u32 {
        self.end_hour
    }

    pub fn real_duration_ms(&self) -> u64 {
        self.real_duration_ms
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn start(&mut self, now: Millis) {
        self.started_at = Some(now);
    }

    pub fn reset(&mut self) {
        self.started_at = None;
    }

    /// Length of the shift in in-game hours
    pub fn shift_span_hours(&self) -> u32 {
        let wrap = if self.end_hour <= self.start_hour { 24 } else { 0 };
        self.end_hour + wrap - self.start_hour
    }

    /// End hour on the same scale as [`current_hour`](Self::current_hour)
    pub fn adjusted_end_hour(&self) -> u32 {
        if self.end_hour > self.start_hour {
            self.end_hour
        } else {
            self.end_hour + 24
        }
    }

    /// Fractional in-game hour, or `None` if the clock is not running
    ///
    /// Not reduced modulo 24: a shift wrapping past midnight reports hours
    /// above 23 until it ends.
    pub fn current_hour(&self, now: Millis) -> Option<f64> {
        let started_at = self.started_at?;
        let elapsed_ms = now.since(started_at) as f64;
        let shift_span_ms = self.shift_span_hours() as f64 * MS_PER_HOUR;
        let game_ms = elapsed_ms * (shift_span_ms / self.real_duration_ms as f64);
        Some(self.start_hour as f64 + game_ms / MS_PER_HOUR)
    }

    /// Current hour as "9 AM", "4 PM", ...
    pub fn standard_time(&self, now: Millis) -> Option<String> {
        self.current_hour(now).map(military_to_standard_time)
    }
}

/// Format a 24-hour value on a 12-hour clock
///
/// The value is floored first. Anything at or past 24 is reduced modulo 24
/// and always labelled "AM", so 24 reads "0 AM" and 37 reads "13 AM".
pub fn military_to_standard_time(hour: f64) -> String {
    let hour = hour.max(0.0).floor() as u64;
    if hour >= 24 {
        return format!("{} AM", hour % 24);
    }
    match hour {
        0 => "12 AM".to_string(),
        1..=11 => format!("{hour} AM"),
        12 => "12 PM".to_string(),
        _ => format!("{} PM", hour - 12),
    }
}
