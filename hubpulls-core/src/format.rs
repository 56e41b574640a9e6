//! Timestamp and interval formatting for store file names.

use chrono::{Local, NaiveDateTime, SubsecRound, TimeDelta};

/// Timestamp layout embedded in every file name.
///
/// Zero-padded, so lexicographic order matches chronological order.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// Current local wall-clock time truncated to whole seconds.
pub fn now_seconds() -> NaiveDateTime {
    Local::now().naive_local().trunc_subsecs(0)
}

/// Format a timestamp for use in a file name (e.g. `2024-11-10_12-32-42`).
pub fn format_timestamp(ts: NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// Parse a timestamp produced by [`format_timestamp`].
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT).ok()
}

/// Render an elapsed span as a clock, with a day prefix when needed.
///
/// `1:00:00`, `2 days, 3:04:05`, and for negative spans `-1 day, 23:59:59`
/// (days are floored, the clock part is always positive). Sub-second
/// precision is dropped.
pub fn format_interval(elapsed: TimeDelta) -> String {
    let total = elapsed.num_seconds();
    let days = total.div_euclid(86_400);
    let rest = total.rem_euclid(86_400);
    let clock = format!("{}:{:02}:{:02}", rest / 3600, rest % 3600 / 60, rest % 60);

    if days == 0 {
        clock
    } else {
        let plural = if days.abs() == 1 { "" } else { "s" };
        format!("{days} day{plural}, {clock}")
    }
}

/// [`format_interval`] with `:` replaced so the result is file-name safe.
pub fn format_interval_for_filename(elapsed: TimeDelta) -> String {
    format_interval(elapsed).replace(':', "-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ts(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    #[test]
    fn test_timestamp_roundtrip() {
        let t = ts(2024, 11, 10, 12, 32, 42);
        assert_eq!(format_timestamp(t), "2024-11-10_12-32-42");
        assert_eq!(parse_timestamp("2024-11-10_12-32-42"), Some(t));
    }

    #[test]
    fn test_parse_timestamp_rejects_other_layouts() {
        assert!(parse_timestamp("2024-11-10 12:32:42").is_none());
        assert!(parse_timestamp("latest").is_none());
    }

    #[test]
    fn test_timestamps_sort_chronologically() {
        let earlier = format_timestamp(ts(2024, 9, 30, 23, 59, 59));
        let later = format_timestamp(ts(2024, 10, 1, 0, 0, 0));
        assert!(earlier < later);
    }

    #[test]
    fn test_now_has_no_subseconds() {
        use chrono::Timelike;
        assert_eq!(now_seconds().nanosecond(), 0);
    }

    #[test]
    fn test_format_interval() {
        assert_eq!(format_interval(TimeDelta::zero()), "0:00:00");
        assert_eq!(format_interval(TimeDelta::seconds(3600)), "1:00:00");
        assert_eq!(format_interval(TimeDelta::seconds(59 * 60 + 7)), "0:59:07");
        assert_eq!(format_interval(TimeDelta::days(1)), "1 day, 0:00:00");
        assert_eq!(
            format_interval(TimeDelta::seconds(2 * 86_400 + 3 * 3600 + 4 * 60 + 5)),
            "2 days, 3:04:05"
        );
        assert_eq!(format_interval(TimeDelta::seconds(-1)), "-1 day, 23:59:59");
    }

    #[test]
    fn test_format_interval_for_filename() {
        assert_eq!(
            format_interval_for_filename(TimeDelta::seconds(86_400 + 3600)),
            "1 day, 1-00-00"
        );
    }
}
