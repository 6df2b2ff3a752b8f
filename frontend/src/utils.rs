use chrono::{DateTime, Utc};

/// Compacts a large count for stat badges (e.g. 5130 -> "5.1K").
///
/// One decimal of precision, rounded half-away-from-zero, with a trailing
/// ".0" dropped so round numbers stay round ("2K", not "2.0K").
pub fn format_count(count: u64) -> String {
    if count >= 1_000_000 {
        compact(count, 1_000_000, "M", true)
    } else if count >= 1_000 {
        compact(count, 1_000, "K", true)
    } else {
        count.to_string()
    }
}

/// View-count label for video cards. Same tiers as [`format_count`], but the
/// ".0" is kept ("1.0M views") and the " views" suffix is appended.
pub fn format_views(views: u64) -> String {
    if views >= 1_000_000 {
        format!("{} views", compact(views, 1_000_000, "M", false))
    } else if views >= 1_000 {
        format!("{} views", compact(views, 1_000, "K", false))
    } else {
        format!("{views} views")
    }
}

// Integer arithmetic keeps the rounding exact: tenths of a unit, half up.
fn compact(count: u64, unit: u64, suffix: &str, strip_zero: bool) -> String {
    let tenths = (count * 10 + unit / 2) / unit;
    let (whole, frac) = (tenths / 10, tenths % 10);
    if frac == 0 && strip_zero {
        format!("{whole}{suffix}")
    } else {
        format!("{whole}.{frac}{suffix}")
    }
}

/// Relative publish time (e.g. "2 days ago") against the current wall clock.
pub fn format_relative_time(iso_date: &str) -> String {
    match iso_date.parse::<DateTime<Utc>>() {
        Ok(date) => relative_time_since(date, Utc::now()),
        Err(_) => iso_date.to_string(),
    }
}

/// Tiering: whole hours under a day, whole days under a week, whole weeks
/// under four, then whole months (days / 30). There is deliberately no
/// "just now" tier; anything under an hour reads "0 hours ago".
pub fn relative_time_since(date: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(date);
    let hours = elapsed.num_hours();
    let days = elapsed.num_days();
    let weeks = days / 7;
    let months = days / 30;

    if hours < 24 {
        ago(hours, "hour")
    } else if days < 7 {
        ago(days, "day")
    } else if weeks < 4 {
        ago(weeks, "week")
    } else {
        ago(months, "month")
    }
}

fn ago(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{n} {unit}s ago")
    }
}

// Formats each x1000 step
pub fn format_number(number: i64) -> String {
    let num_str = number.to_string();
    let mut result = String::new();
    let len = num_str.len();

    for (i, c) in num_str.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

/// Caps a card title at `max_chars` characters, appending an ellipsis only
/// when something was actually cut.
pub fn truncate_title(title: &str, max_chars: usize) -> String {
    if title.chars().count() <= max_chars {
        title.to_string()
    } else {
        let mut cut: String = title.chars().take(max_chars).collect();
        cut.push_str("...");
        cut
    }
}

/// Word count for the submission form: whitespace-separated tokens of the
/// trimmed text, zero for an empty or all-whitespace story.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_count_small_values_verbatim() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(42), "42");
        assert_eq!(format_count(999), "999");
    }

    #[test]
    fn test_format_count_thousands() {
        assert_eq!(format_count(1_000), "1K");
        assert_eq!(format_count(1_500), "1.5K");
        assert_eq!(format_count(2_000), "2K");
        assert_eq!(format_count(5_130), "5.1K");
        // stays in the K tier right up to the M boundary
        assert_eq!(format_count(999_949), "999.9K");
    }

    #[test]
    fn test_format_count_millions_rounding() {
        assert_eq!(format_count(1_000_000), "1M");
        assert_eq!(format_count(1_250_000), "1.3M");
        assert_eq!(format_count(1_249_999), "1.2M");
    }

    #[test]
    fn test_format_views_keeps_trailing_zero() {
        assert_eq!(format_views(812), "812 views");
        assert_eq!(format_views(1_000), "1.0K views");
        assert_eq!(format_views(1_500), "1.5K views");
        assert_eq!(format_views(1_000_000), "1.0M views");
    }

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
    }

    #[test]
    fn test_relative_time_hours() {
        let now = at(2026, 3, 10, 12, 0);
        assert_eq!(relative_time_since(at(2026, 3, 10, 11, 30), now), "0 hours ago");
        assert_eq!(relative_time_since(at(2026, 3, 10, 11, 0), now), "1 hour ago");
        assert_eq!(relative_time_since(at(2026, 3, 9, 13, 0), now), "23 hours ago");
    }

    #[test]
    fn test_relative_time_days_weeks_months() {
        let now = at(2026, 3, 31, 12, 0);
        assert_eq!(relative_time_since(at(2026, 3, 30, 12, 0), now), "1 day ago");
        assert_eq!(relative_time_since(at(2026, 3, 25, 12, 0), now), "6 days ago");
        assert_eq!(relative_time_since(at(2026, 3, 24, 12, 0), now), "1 week ago");
        assert_eq!(relative_time_since(at(2026, 3, 4, 12, 0), now), "3 weeks ago");
        // 28 days is 4 whole weeks, which tips into the month tier at 28/30 = 0
        // months; the original behaves the same way.
        assert_eq!(relative_time_since(at(2026, 3, 3, 12, 0), now), "0 months ago");
        assert_eq!(relative_time_since(at(2026, 2, 14, 12, 0), now), "1 month ago");
        assert_eq!(relative_time_since(at(2025, 12, 1, 12, 0), now), "4 months ago");
    }

    #[test]
    fn test_format_relative_time_passes_through_unparsable_input() {
        assert_eq!(format_relative_time("not a date"), "not a date");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(5_130), "5,130");
        assert_eq!(format_number(1_234_567), "1,234,567");
    }

    #[test]
    fn test_truncate_title() {
        let exactly_50 = "a".repeat(50);
        assert_eq!(truncate_title(&exactly_50, 50), exactly_50);

        let longer = "b".repeat(53);
        let truncated = truncate_title(&longer, 50);
        assert_eq!(truncated.len(), 53);
        assert!(truncated.starts_with(&"b".repeat(50)));
        assert!(truncated.ends_with("..."));

        assert_eq!(truncate_title("short", 50), "short");
    }

    #[test]
    fn test_count_words() {
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words("   \n\t "), 0);
        assert_eq!(count_words("one"), 1);
        assert_eq!(count_words("  once upon\na time  "), 4);
    }
}
