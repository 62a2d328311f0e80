//! # Date and Slot Validation
//!
//! Strict structural checks for the `YYYY-MM-DD` dates and `HH:MM` times that
//! clients send. Calendar arithmetic is done by hand so that only the exact
//! zero-padded layout is accepted; lenient parsers would let `2024-1-5` through.

/// First bookable hour of the day
pub const OPENING_HOUR: u32 = 9;

/// Last bookable hour of the day (the slot starting at 16:00 is still open)
pub const LAST_SLOT_HOUR: u32 = 16;

/// Earliest year accepted in a booking date
pub const MIN_YEAR: u32 = 1900;

/// Latest year accepted in a booking date
pub const MAX_YEAR: u32 = 2100;

const DAYS_IN_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Gregorian leap-year rule
pub fn is_leap_year(year: u32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` (1-based) of `year`, or `None` for an invalid month
pub fn days_in_month(year: u32, month: u32) -> Option<u32> {
    if !(1..=12).contains(&month) {
        return None;
    }
    if month == 2 && is_leap_year(year) {
        return Some(29);
    }
    Some(DAYS_IN_MONTH[(month - 1) as usize])
}

/// Parses a run of ASCII digits; anything else (signs, spaces, non-ASCII digits) fails
fn parse_digits(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Splits `s` into exactly three fields of the given widths around `separator`
fn split_fixed<'a>(s: &'a str, separator: char, widths: &[usize]) -> Option<Vec<&'a str>> {
    let parts: Vec<&str> = s.split(separator).collect();
    if parts.len() != widths.len() {
        return None;
    }
    parts
        .iter()
        .zip(widths)
        .all(|(part, width)| part.len() == *width)
        .then_some(parts)
}

/// Checks that `s` is a real calendar date written as `YYYY-MM-DD`
///
/// The year must lie in [`MIN_YEAR`, `MAX_YEAR`] and the day must exist in the
/// month, so `2023-02-29` and `2024-04-31` are rejected.
pub fn is_valid_date(s: &str) -> bool {
    let Some(parts) = split_fixed(s, '-', &[4, 2, 2]) else {
        return false;
    };
    let (Some(year), Some(month), Some(day)) = (
        parse_digits(parts[0]),
        parse_digits(parts[1]),
        parse_digits(parts[2]),
    ) else {
        return false;
    };

    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return false;
    }

    match days_in_month(year, month) {
        Some(last_day) => (1..=last_day).contains(&day),
        None => false,
    }
}

/// Checks that `s` is a bookable slot: `HH:00` with the hour inside business hours
pub fn is_valid_time_slot(s: &str) -> bool {
    let Some(parts) = split_fixed(s, ':', &[2, 2]) else {
        return false;
    };
    let (Some(hour), Some(minute)) = (parse_digits(parts[0]), parse_digits(parts[1])) else {
        return false;
    };

    if hour > 23 || minute > 59 {
        return false;
    }

    minute == 0 && (OPENING_HOUR..=LAST_SLOT_HOUR).contains(&hour)
}

/// Every slot of a business day, in ascending order
pub fn generate_all_slots() -> Vec<String> {
    (OPENING_HOUR..=LAST_SLOT_HOUR)
        .map(|hour| format!("{hour:02}:00"))
        .collect()
}
