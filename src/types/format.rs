use std::fmt::Write;

use chrono::{ DateTime, FixedOffset, NaiveDate, Offset, Utc };

use crate::types::Locale;

impl Locale {
    /// the configured offset, UTC when the minutes are out of range
    pub fn offset(&self) -> FixedOffset {
        match FixedOffset::east_opt(self.utc_offset_minutes.saturating_mul(60)) {
            Some(offset) => offset,
            None => {
                log::warn!("utc offset of {} minutes is out of range, using UTC", self.utc_offset_minutes);
                Utc.fix()
            }
        }
    }
}

/// Compensated (Neumaier) summation: the result is the correctly rounded sum for any
/// realistic number of note entries, independent of their order.
pub fn exact_sum<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>
{
    let mut sum = 0.0_f64;
    let mut compensation = 0.0_f64;

    for value in values {
        let next = sum + value;

        if sum.abs() >= value.abs() {
            compensation += (sum - next) + value;
        } else {
            compensation += (value - next) + sum;
        }

        sum = next;
    }

    if !sum.is_finite() {
        return sum;
    }

    sum + compensation
}

/// Formats a number the way `Number.toLocaleString` does: grouped integer digits, at most
/// `max_fraction_digits` decimals with trailing zeros dropped, no sign on zero.
pub fn format_number(value: f64, locale: &Locale) -> String {
    if value.is_nan() {
        return "NaN".into();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞".into() } else { "-∞".into() };
    }

    let fixed = format!("{:.*}", locale.max_fraction_digits, value.abs());
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');
    let is_zero = fraction.is_empty() && integer.bytes().all(|b| b == b'0');

    let mut out = String::with_capacity(fixed.len() + integer.len() / 3 + 1);

    if value.is_sign_negative() && !is_zero {
        out.push('-');
    }

    let digits = integer.len();
    for (index, digit) in integer.chars().enumerate() {
        if index > 0 && (digits - index) % 3 == 0 {
            out.push_str(&locale.grouping_separator);
        }
        out.push(digit);
    }

    if !fraction.is_empty() {
        out.push_str(&locale.decimal_separator);
        out.push_str(fraction);
    }

    out
}

/// Renders a timestamp in the locale's offset; an unusable format falls back to RFC 3339.
pub fn format_timestamp(timestamp: &DateTime<Utc>, format: &str, locale: &Locale) -> String {
    let local = timestamp.with_timezone(&locale.offset());
    let mut out = String::new();

    if write!(out, "{}", local.format(format)).is_err() {
        log::warn!("invalid date format {format:?}, falling back to RFC 3339");
        return local.to_rfc3339();
    }

    out
}

/// Renders a calendar date; an unusable format falls back to ISO 8601.
pub fn format_date(date: &NaiveDate, format: &str) -> String {
    let mut out = String::new();

    if write!(out, "{}", date.format(format)).is_err() {
        log::warn!("invalid date format {format:?}, falling back to ISO 8601");
        return date.to_string();
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn groups_thousands() {
        let locale = Locale::default();
        assert_eq!(format_number(0.0, &locale), "0");
        assert_eq!(format_number(6.0, &locale), "6");
        assert_eq!(format_number(1234.0, &locale), "1,234");
        assert_eq!(format_number(-1234567.5, &locale), "-1,234,567.5");
        assert_eq!(format_number(100.0, &locale), "100");
        assert_eq!(format_number(999999.0, &locale), "999,999");
    }

    #[test]
    fn rounds_to_max_fraction_digits() {
        let locale = Locale::default();
        assert_eq!(format_number(1.23456, &locale), "1.235");
        assert_eq!(format_number(2.5, &locale), "2.5");
        assert_eq!(format_number(-0.0001, &locale), "0");
        assert_eq!(format_number(-0.0, &locale), "0");
    }

    #[test]
    fn honours_separators() {
        let locale = Locale {
            grouping_separator: ".".into(),
            decimal_separator: ",".into(),
            ..Locale::default()
        };
        assert_eq!(format_number(1234.5, &locale), "1.234,5");
    }

    #[test]
    fn sums_exactly() {
        assert_eq!(exact_sum([3.0, -1.0, 4.0]), 6.0);
        assert_eq!(exact_sum(Vec::new()), 0.0);
        assert_eq!(exact_sum([1e16, 1.0, -1e16]), 1.0);
        assert_eq!(exact_sum([0.1; 10]), 1.0);
    }

    #[test]
    fn overflowing_sums_stay_infinite() {
        let locale = Locale::default();

        assert_eq!(exact_sum([1e308, 1e308]), f64::INFINITY);
        assert_eq!(exact_sum([-1e308, -1e308]), f64::NEG_INFINITY);
        assert_eq!(format_number(exact_sum([1e308, 1e308]), &locale), "∞");
    }

    #[test]
    fn formats_in_offset() {
        let timestamp = Utc.with_ymd_and_hms(2024, 3, 5, 14, 7, 9).unwrap();
        let locale = Locale { utc_offset_minutes: 60, ..Locale::default() };

        assert_eq!(format_timestamp(&timestamp, &locale.date_time_format, &locale), "3/5/2024, 3:07:09 PM");
        assert_eq!(format_timestamp(&timestamp, &locale.time_format, &locale), "03:07 PM");
    }

    #[test]
    fn bad_formats_fall_back() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(format_date(&date, "%-m/%-d/%Y"), "3/5/2024");
        assert_eq!(format_date(&date, "%Q"), "2024-03-05");
    }

    #[test]
    fn out_of_range_offset_falls_back_to_utc() {
        let locale = Locale { utc_offset_minutes: 100_000, ..Locale::default() };
        assert_eq!(locale.offset().local_minus_utc(), 0);
    }
}
