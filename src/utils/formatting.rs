//! Formatting utilities for display

use chrono::NaiveDate;

/// Format a `YYYY-MM-DD` date for display, e.g. "Sep 15, 2024".
/// Falls back to the raw string if it does not parse.
pub fn format_display_date(value: &str) -> String {
    use chrono::Datelike;
    match NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d") {
        Ok(date) => format!("{} {}, {}", date.format("%b"), date.day(), date.year()),
        Err(_) => value.to_string(),
    }
}

/// Format a display price with a dollar sign; "Custom" passes through.
pub fn format_price(value: &str) -> String {
    if value.chars().next().map(|c| c.is_ascii_digit()).unwrap_or(false) {
        format!("${}", value)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_display_date() {
        assert_eq!(format_display_date("2024-09-15"), "Sep 15, 2024");
        assert_eq!(format_display_date("2024-01-05"), "Jan 5, 2024");
    }

    #[test]
    fn test_format_display_date_passthrough() {
        assert_eq!(format_display_date("not a date"), "not a date");
        assert_eq!(format_display_date(""), "");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price("3,500"), "$3,500");
        assert_eq!(format_price("Custom"), "Custom");
    }
}
