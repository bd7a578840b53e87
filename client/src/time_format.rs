use std::fmt::Write;

/// Format a run duration in seconds as `MM:SS:mmm`. Minutes keep counting past
/// the hour so long runs stay sortable by eye.
pub fn format_run_time(seconds: f64) -> String {
    let mut out = String::with_capacity(9);
    write_run_time(&mut out, seconds);
    out
}

pub fn write_run_time(buf: &mut String, seconds: f64) {
    buf.clear();
    let total_ms = if seconds.is_finite() && seconds > 0.0 {
        (seconds * 1000.0).round() as i64
    } else {
        0
    };
    let minutes = total_ms / 60_000;
    let secs = (total_ms % 60_000) / 1000;
    let millis = total_ms % 1000;
    let _ = write!(buf, "{minutes:02}:{secs:02}:{millis:03}");
}

/// Calendar date of a unix timestamp, empty when out of range.
pub fn format_date(unix_secs: i64) -> String {
    chrono::DateTime::from_timestamp(unix_secs, 0)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

pub fn format_datetime(unix_secs: i64) -> String {
    chrono::DateTime::from_timestamp(unix_secs, 0)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_default()
}

/// Group digits in thousands (`1234567` -> `1,234,567`).
pub fn format_count(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_zero() {
        assert_eq!(format_run_time(0.0), "00:00:000");
    }

    #[test]
    fn formats_sub_minute() {
        assert_eq!(format_run_time(5.5), "00:05:500");
    }

    #[test]
    fn formats_minutes_seconds_millis() {
        assert_eq!(format_run_time(65.123), "01:05:123");
    }

    #[test]
    fn minutes_accumulate_past_the_hour() {
        assert_eq!(format_run_time(3_725.004), "62:05:004");
    }

    #[test]
    fn clamps_negative_and_nan() {
        assert_eq!(format_run_time(-3.0), "00:00:000");
        assert_eq!(format_run_time(f64::NAN), "00:00:000");
    }

    #[test]
    fn formats_dates_in_utc() {
        assert_eq!(format_date(0), "1970-01-01");
        assert_eq!(format_date(1_700_000_000), "2023-11-14");
        assert_eq!(format_datetime(1_700_000_000), "2023-11-14 22:13");
        assert_eq!(format_date(i64::MAX), "");
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1,000");
        assert_eq!(format_count(1_234_567), "1,234,567");
        assert_eq!(format_count(-45_000), "-45,000");
    }
}
