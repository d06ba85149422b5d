//! Minute-resolution clock shown in the page header.

use chrono::{DateTime, Timelike};
use chrono_tz::Tz;
use serde::Serialize;
use std::time::Duration;
use utoipa::ToSchema;

pub const REFRESH_INTERVAL: Duration = Duration::from_secs(60);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClockState {
    pub time: String,
    pub date: String,
    pub time_zone: String,
    /// Seconds until the label can next change.
    pub refresh_in_secs: u64,
}

impl ClockState {
    pub fn at(now: DateTime<Tz>) -> Self {
        Self {
            time: now.format("%H:%M").to_string(),
            date: now.format("%A, %B %-d, %Y").to_string(),
            time_zone: now.timezone().name().to_string(),
            refresh_in_secs: until_next_minute(now).as_secs(),
        }
    }
}

/// Advances the clock; the state only changes when the minute does.
pub fn tick(state: ClockState, now: DateTime<Tz>) -> ClockState {
    let next = ClockState::at(now);
    if next.time == state.time && next.date == state.date {
        ClockState {
            refresh_in_secs: next.refresh_in_secs,
            ..state
        }
    } else {
        next
    }
}

pub fn until_next_minute(now: DateTime<Tz>) -> Duration {
    let remaining = 60 - u64::from(now.second());
    Duration::from_secs(remaining.clamp(1, REFRESH_INTERVAL.as_secs()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(h: u32, m: u32, s: u32) -> DateTime<Tz> {
        chrono_tz::Asia::Jakarta
            .with_ymd_and_hms(2024, 5, 6, h, m, s)
            .single()
            .expect("valid time")
    }

    #[test]
    fn label_has_minute_resolution() {
        let clock = ClockState::at(at(9, 5, 42));
        assert_eq!(clock.time, "09:05");
        assert_eq!(clock.date, "Monday, May 6, 2024");
        assert_eq!(clock.time_zone, "Asia/Jakarta");
        assert_eq!(clock.refresh_in_secs, 18);
    }

    #[test]
    fn tick_within_the_same_minute_keeps_the_label() {
        let clock = ClockState::at(at(9, 5, 0));
        let ticked = tick(clock.clone(), at(9, 5, 59));
        assert_eq!(ticked.time, clock.time);
        assert_eq!(ticked.refresh_in_secs, 1);
    }

    #[test]
    fn tick_across_a_minute_updates_the_label() {
        let clock = ClockState::at(at(9, 5, 59));
        assert_eq!(tick(clock, at(9, 6, 0)).time, "09:06");
    }
}
