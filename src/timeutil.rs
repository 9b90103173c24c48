use chrono::NaiveDate;

use crate::model::Minutes;

/// Malformed `HH:MM` input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeFormatError(pub String);

impl std::fmt::Display for TimeFormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid time: {}", self.0)
    }
}

impl std::error::Error for TimeFormatError {}

/// Parse a zero-padded 24h `HH:MM` string into a minute-of-day offset.
pub fn time_to_minutes(t: &str) -> Result<Minutes, TimeFormatError> {
    let malformed = || TimeFormatError(format!("expected HH:MM, got {t:?}"));
    let (h, m) = t.split_once(':').ok_or_else(malformed)?;
    if h.len() != 2 || m.len() != 2 {
        return Err(malformed());
    }
    let h: u32 = h.parse().map_err(|_| malformed())?;
    let m: u32 = m.parse().map_err(|_| malformed())?;
    if h > 23 || m > 59 {
        return Err(TimeFormatError(format!("out of range: {t:?}")));
    }
    Ok((h * 60 + m) as Minutes)
}

/// Format a minute-of-day offset as zero-padded `HH:MM`.
/// Defined for `0 <= minutes < 1440`; callers clamp first.
pub fn minutes_to_time(minutes: Minutes) -> String {
    debug_assert!((0..1440).contains(&minutes), "minute offset out of range");
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// `YYYY-MM-DD`, the storage and query key format.
pub fn to_iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// `DD/MM/YYYY`, the human-facing header format.
pub fn format_display_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}
