//! 12-hour clock times used to order schedules within a day.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::constants::{minutes, DEFAULT_MINUTE_STEP, HOURS, MERIDIEMS};
use crate::error::{DaygridError, DaygridResult};

const MINUTES_PER_HOUR: u32 = 60;
const NOON: u32 = 12 * MINUTES_PER_HOUR;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Meridiem {
    #[serde(rename = "AM")]
    Am,
    #[serde(rename = "PM")]
    Pm,
}

impl Meridiem {
    pub fn as_str(&self) -> &'static str {
        match self {
            Meridiem::Am => MERIDIEMS[0],
            Meridiem::Pm => MERIDIEMS[1],
        }
    }
}

impl FromStr for Meridiem {
    type Err = DaygridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AM" => Ok(Meridiem::Am),
            "PM" => Ok(Meridiem::Pm),
            other => Err(DaygridError::InvalidTime(format!(
                "'{}' is not AM or PM",
                other
            ))),
        }
    }
}

impl fmt::Display for Meridiem {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A time of day on a 12-hour clock.
///
/// Ordering follows the 24-hour clock: 12 AM is midnight and sorts first,
/// 12 PM is noon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TimeValue {
    hour: u8,
    minute: u8,
    meridiem: Meridiem,
}

impl TimeValue {
    /// Build a time from numeric parts. Hour must be 1..=12, minute 0..=59.
    pub fn new(hour: u8, minute: u8, meridiem: Meridiem) -> DaygridResult<Self> {
        if !(1..=12).contains(&hour) {
            return Err(DaygridError::InvalidTime(format!(
                "hour {} is outside 1..12",
                hour
            )));
        }
        if u32::from(minute) >= MINUTES_PER_HOUR {
            return Err(DaygridError::InvalidTime(format!(
                "minute {} is outside 0..59",
                minute
            )));
        }
        Ok(TimeValue {
            hour,
            minute,
            meridiem,
        })
    }

    /// Parse select labels using the default minute step.
    pub fn parse(hour: &str, minute: &str, meridiem: &str) -> DaygridResult<Self> {
        Self::parse_with_step(hour, minute, meridiem, DEFAULT_MINUTE_STEP)
    }

    /// Parse select labels: hour must be one of "1".."12", minute one of the
    /// labels produced by [`minutes`] for `step`, meridiem "AM" or "PM".
    pub fn parse_with_step(
        hour: &str,
        minute: &str,
        meridiem: &str,
        step: u32,
    ) -> DaygridResult<Self> {
        let hour_idx = HOURS
            .iter()
            .position(|h| *h == hour)
            .ok_or_else(|| DaygridError::InvalidTime(format!("unknown hour '{}'", hour)))?;

        if !minutes(step).iter().any(|m| m == minute) {
            return Err(DaygridError::InvalidTime(format!(
                "unknown minute '{}'",
                minute
            )));
        }
        let minute: u8 = minute
            .parse()
            .map_err(|_| DaygridError::InvalidTime(format!("unknown minute '{}'", minute)))?;

        let meridiem = meridiem.parse()?;

        Self::new(hour_idx as u8 + 1, minute, meridiem)
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn meridiem(&self) -> Meridiem {
        self.meridiem
    }

    /// Minutes since midnight.
    pub fn minute_of_day(&self) -> u32 {
        let hour = u32::from(self.hour) % 12;
        let base = match self.meridiem {
            Meridiem::Am => 0,
            Meridiem::Pm => NOON,
        };
        base + hour * MINUTES_PER_HOUR + u32::from(self.minute)
    }

    /// Hour label as shown in the hour select.
    pub fn hour_label(&self) -> String {
        self.hour.to_string()
    }

    /// Minute label as shown in the minute select.
    pub fn minute_label(&self) -> String {
        format!("{:02}", self.minute)
    }
}

/// Chronological comparison of two times.
pub fn compare(a: &TimeValue, b: &TimeValue) -> Ordering {
    a.cmp(b)
}

impl Ord for TimeValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.minute_of_day().cmp(&other.minute_of_day())
    }
}

impl PartialOrd for TimeValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for TimeValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{:02} {}", self.hour, self.minute, self.meridiem)
    }
}
