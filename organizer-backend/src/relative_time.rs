//! Human-readable "last edited" labels.

use chrono::NaiveDateTime;

/// Render a whole number of elapsed days.
///
/// Future timestamps (negative days) are treated as edited today.
pub fn format_days_ago(days: i64) -> String {
    match days {
        i64::MIN..=0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        2..=6 => format!("{} days ago", days),
        _ => {
            let weeks = days / 7;
            format!("{} week{} ago", weeks, if weeks > 1 { "s" } else { "" })
        }
    }
}

/// Label for a stored last-edited timestamp relative to `now`.
pub fn format_last_edited(last_edited: NaiveDateTime, now: NaiveDateTime) -> String {
    format_days_ago((now - last_edited).num_days())
}
