//! Wall-clock time for clock hands and a fixed-cadence update gate

use std::time::Duration;

use chrono::{Local, Timelike};

/// Time of day, 24-hour
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClockTime {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub millisecond: u32,
}

impl ClockTime {
    pub const fn new(hour: u32, minute: u32, second: u32, millisecond: u32) -> Self {
        Self {
            hour,
            minute,
            second,
            millisecond,
        }
    }

    /// Time of day of any chrono time or date-time
    ///
    /// A leap second is folded into the last millisecond of its minute.
    pub fn from_time(time: &impl Timelike) -> Self {
        Self {
            hour: time.hour(),
            minute: time.minute(),
            second: time.second(),
            millisecond: (time.nanosecond() / 1_000_000).min(999),
        }
    }

    /// Current local time of day
    pub fn now_local() -> Self {
        Self::from_time(&Local::now())
    }

    /// Hour hand position in turns from 12 o'clock, clockwise
    pub fn hour_turns(&self) -> f32 {
        (self.hour % 12) as f32 / 12.0 + self.minute as f32 / 720.0
    }

    pub fn minute_turns(&self) -> f32 {
        self.minute as f32 / 60.0 + self.second as f32 / 3600.0
    }

    pub fn second_turns(&self) -> f32 {
        self.second as f32 / 60.0 + self.millisecond as f32 / 60000.0
    }

    /// Between 18:00 and 06:00
    pub fn is_night(&self) -> bool {
        self.hour >= 18 || self.hour < 6
    }
}

/// Convert clockwise turns-from-12 into the counter-clockwise-from-+x
/// convention radial lines use
pub fn hand_angle_turns(clock_turns: f32) -> f32 {
    0.25 - clock_turns
}

/// Lets an update through at most once per interval
#[derive(Clone, Copy, Debug)]
pub struct UpdateThrottle {
    interval: Duration,
    next: Option<Duration>,
}

impl UpdateThrottle {
    /// 50 ms, about 20 updates per second
    pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(50);

    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// True if an update is due at `now`; schedules the next one
    pub fn ready(&mut self, now: Duration) -> bool {
        match self.next {
            Some(next) if now < next => false,
            _ => {
                self.next = Some(now + self.interval);
                true
            }
        }
    }
}

impl Default for UpdateThrottle {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INTERVAL)
    }
}
