// Relative time formatting.
// Renders timestamps as "3 days ago" style strings for the projects section.

use chrono::{DateTime, Utc};

use crate::error::{FolioError, Result};

const MINUTES_IN_HOUR: u64 = 60;
const MINUTES_IN_DAY: u64 = 1440;
const MINUTES_IN_ALMOST_TWO_DAYS: u64 = 2520;
const MINUTES_IN_MONTH: u64 = 43200;
const MINUTES_IN_TWO_MONTHS: u64 = 86400;

/// Format an ISO-8601 timestamp relative to now, e.g. "about 2 hours ago".
pub fn format_updated_at(date: &str) -> Result<String> {
    format_updated_at_from(date, Utc::now())
}

/// Same as [`format_updated_at`] against an explicit reference time.
pub fn format_updated_at_from(date: &str, now: DateTime<Utc>) -> Result<String> {
    let then = DateTime::parse_from_rfc3339(date)
        .map_err(|e| FolioError::InvalidTimestamp(format!("{date}: {e}")))?
        .with_timezone(&Utc);
    Ok(format_distance(then, now))
}

/// Distance between two instants in words, with an "ago"/"in" suffix.
pub fn format_distance(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = now.signed_duration_since(then).num_seconds();
    let words = distance_in_words(seconds.unsigned_abs());

    if seconds < 0 {
        format!("in {}", words)
    } else {
        format!("{} ago", words)
    }
}

/// Coarse bucketed distance. Months are 30 days.
fn distance_in_words(seconds: u64) -> String {
    let minutes = (seconds + 30) / 60;

    if minutes == 0 {
        return "less than a minute".to_string();
    }
    if minutes < 2 {
        return "1 minute".to_string();
    }
    if minutes < 45 {
        return format!("{} minutes", minutes);
    }
    if minutes < 90 {
        return "about 1 hour".to_string();
    }
    if minutes < MINUTES_IN_DAY {
        let hours = (minutes + MINUTES_IN_HOUR / 2) / MINUTES_IN_HOUR;
        return format!("about {} hours", hours);
    }
    if minutes < MINUTES_IN_ALMOST_TWO_DAYS {
        return "1 day".to_string();
    }
    if minutes < MINUTES_IN_MONTH {
        let days = (minutes + MINUTES_IN_DAY / 2) / MINUTES_IN_DAY;
        return format!("{} days", days);
    }

    let nearest_month = (minutes + MINUTES_IN_MONTH / 2) / MINUTES_IN_MONTH;
    if minutes < MINUTES_IN_TWO_MONTHS {
        return format!("about {}", plural(nearest_month, "month"));
    }

    let months = minutes / MINUTES_IN_MONTH;
    if months < 12 {
        return format!("{} months", nearest_month);
    }

    let years = months / 12;
    match months % 12 {
        0..3 => format!("about {}", plural(years, "year")),
        3..9 => format!("over {}", plural(years, "year")),
        _ => format!("almost {} years", years + 1),
    }
}

fn plural(count: u64, unit: &str) -> String {
    if count == 1 {
        format!("1 {}", unit)
    } else {
        format!("{} {}s", count, unit)
    }
}
