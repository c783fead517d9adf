//! Wall-clock sampling: calendar time in the device's current zone.

use core::fmt::Write;
use heapless::String;

/// Day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Weekday {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Weekday {
    /// Three-letter label used on the date line.
    pub const fn label(self) -> &'static str {
        match self {
            Weekday::Mon => "MON",
            Weekday::Tue => "TUE",
            Weekday::Wed => "WED",
            Weekday::Thu => "THU",
            Weekday::Fri => "FRI",
            Weekday::Sat => "SAT",
            Weekday::Sun => "SUN",
        }
    }
}

/// Immutable snapshot of the local wall-clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockSample {
    /// Hour of day, 0-23.
    pub hour: u8,
    /// Minute of hour, 0-59.
    pub minute: u8,
    /// Second of minute, 0-59.
    pub second: u8,
    /// Sub-second phase, 0-999. Drives the drift-free tick schedule.
    pub millis_of_second: u16,
    /// Day of the week.
    pub weekday: Weekday,
    /// Day of the month, 1-31.
    pub day_of_month: u8,
}

impl ClockSample {
    /// Big-endian HH:MM digits: tens-of-hour, ones-of-hour, tens-of-minute,
    /// ones-of-minute.
    pub const fn hhmm_digits(&self) -> [u8; 4] {
        [
            self.hour / 10,
            self.hour % 10,
            self.minute / 10,
            self.minute % 10,
        ]
    }

    /// Date line, e.g. `"MON 04"`.
    pub fn date_text(&self) -> String<8> {
        let mut text = String::new();
        let _ = write!(text, "{} {:02}", self.weekday.label(), self.day_of_month);
        text
    }
}

/// Trait for reading calendar time.
///
/// Implementations must resolve the device's current time zone on every call
/// rather than caching it, so a zone change takes effect at the next sample.
pub trait WallClock {
    /// Returns a snapshot of the current local time.
    fn sample(&self) -> ClockSample;
}

#[cfg(feature = "std")]
mod system {
    use super::{ClockSample, WallClock, Weekday};
    use chrono::{DateTime, Datelike, Local, TimeZone, Timelike, Utc};

    /// [`WallClock`] backed by the system clock and zone database.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct SystemClock;

    impl SystemClock {
        /// Resolves an explicit timestamp (milliseconds since the Unix
        /// epoch) in the current local zone. Timestamps the zone database
        /// cannot place fall back to UTC; this never panics.
        pub fn sample_at(&self, epoch_millis: i64) -> ClockSample {
            match Local.timestamp_millis_opt(epoch_millis).earliest() {
                Some(local) => snapshot(&local),
                None => {
                    let utc = Utc
                        .timestamp_millis_opt(epoch_millis)
                        .earliest()
                        .unwrap_or_default();
                    snapshot(&utc)
                }
            }
        }
    }

    impl WallClock for SystemClock {
        fn sample(&self) -> ClockSample {
            snapshot(&Local::now())
        }
    }

    fn snapshot<Tz: TimeZone>(at: &DateTime<Tz>) -> ClockSample {
        ClockSample {
            hour: at.hour() as u8,
            minute: at.minute() as u8,
            second: at.second() as u8,
            // A leap second surfaces as an oversized subsecond; clamp it.
            millis_of_second: at.timestamp_subsec_millis().min(999) as u16,
            weekday: weekday(at.weekday()),
            day_of_month: at.day() as u8,
        }
    }

    fn weekday(day: chrono::Weekday) -> Weekday {
        match day {
            chrono::Weekday::Mon => Weekday::Mon,
            chrono::Weekday::Tue => Weekday::Tue,
            chrono::Weekday::Wed => Weekday::Wed,
            chrono::Weekday::Thu => Weekday::Thu,
            chrono::Weekday::Fri => Weekday::Fri,
            chrono::Weekday::Sat => Weekday::Sat,
            chrono::Weekday::Sun => Weekday::Sun,
        }
    }
}

#[cfg(feature = "std")]
pub use system::SystemClock;
