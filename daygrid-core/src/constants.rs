//! Fixed vocabularies shared by the grid and the time selects.

/// Weekday names indexed by days from Sunday.
pub const WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Month names indexed by zero-based month.
pub const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Hour labels in select order.
pub const HOURS: [&str; 12] = [
    "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12",
];

/// Meridiem labels in select order.
pub const MERIDIEMS: [&str; 2] = ["AM", "PM"];

/// Minute step used when no configuration overrides it.
pub const DEFAULT_MINUTE_STEP: u32 = 5;

/// Minute labels ("00", "05", ...) for the given step.
///
/// A step of zero is treated as one.
pub fn minutes(step: u32) -> Vec<String> {
    let step = step.max(1) as usize;
    (0..60).step_by(step).map(|m| format!("{:02}", m)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minutes_default_step() {
        let labels = minutes(DEFAULT_MINUTE_STEP);
        assert_eq!(labels.len(), 12);
        assert_eq!(labels.first().map(String::as_str), Some("00"));
        assert_eq!(labels.last().map(String::as_str), Some("55"));
    }

    #[test]
    fn test_minutes_fine_step() {
        let labels = minutes(1);
        assert_eq!(labels.len(), 60);
        assert_eq!(labels[7], "07");
    }

    #[test]
    fn test_minutes_zero_step_is_one() {
        assert_eq!(minutes(0).len(), 60);
    }
}
