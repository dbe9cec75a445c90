//! Date normalization to ISO `YYYY-MM-DD`.

use chrono::{DateTime, Datelike, NaiveDate};

const ISO_FORMAT: &str = "%Y-%m-%d";

/// Normalize a portal date string.
///
/// Slash dates are day-first when the first part has two digits
/// ("15/03/2022") and month-first otherwise ("3/15/2022"). Dashed dates may
/// be ISO or day-first, and RFC 3339 timestamps keep their date part.
/// Text that does not parse is returned trimmed but otherwise verbatim.
pub fn normalize_date(text: &str) -> String {
    let text = text.trim();
    parse_date(text)
        .map(|d| d.format(ISO_FORMAT).to_string())
        .unwrap_or_else(|| text.to_string())
}

/// Parse a portal date string, if it is in a recognized shape.
/// Only four-digit years are accepted.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    parse_any(text.trim()).filter(|d| (0..=9999).contains(&d.year()))
}

fn parse_any(text: &str) -> Option<NaiveDate> {
    if text.contains('/') {
        let parts: Vec<&str> = text.split('/').map(str::trim).collect();
        if parts.len() != 3 {
            return None;
        }
        let nums: Vec<u32> = parts.iter().map(|p| p.parse().ok()).collect::<Option<_>>()?;
        let (day, month) = if parts[0].len() == 2 {
            (nums[0], nums[1])
        } else {
            (nums[1], nums[0])
        };
        let year = i32::try_from(nums[2]).ok()?;
        return NaiveDate::from_ymd_opt(year, month, day);
    }

    if text.contains('-') {
        return NaiveDate::parse_from_str(text, ISO_FORMAT)
            .or_else(|_| NaiveDate::parse_from_str(text, "%d-%m-%Y"))
            .ok()
            .or_else(|| DateTime::parse_from_rfc3339(text).ok().map(|dt| dt.date_naive()));
    }

    None
}
