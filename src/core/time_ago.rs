use crate::domain::ports::{RelativeTimeFormatter, TimeUnit};
use crate::utils::error::{MapPropsError, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Division {
    /// How many of `unit` make up the next coarser unit.
    pub amount: f64,
    pub unit: TimeUnit,
}

/// Cascading unit table, finest first. 4.34524 is the average number of weeks
/// per month.
pub const DIVISIONS: &[Division] = &[
    Division { amount: 60.0, unit: TimeUnit::Second },
    Division { amount: 60.0, unit: TimeUnit::Minute },
    Division { amount: 24.0, unit: TimeUnit::Hour },
    Division { amount: 7.0, unit: TimeUnit::Day },
    Division { amount: 4.34524, unit: TimeUnit::Week },
    Division { amount: 12.0, unit: TimeUnit::Month },
    Division { amount: f64::INFINITY, unit: TimeUnit::Year },
];

/// Phrase the distance between `date` and `now`, e.g. "3 days ago".
///
/// Returns `None` only when the duration is not finite, which cannot happen
/// for two valid `DateTime`s.
pub fn format_time_ago<F>(date: DateTime<Utc>, now: DateTime<Utc>, formatter: &F) -> Option<String>
where
    F: RelativeTimeFormatter + ?Sized,
{
    let seconds = (date - now).num_milliseconds() as f64 / 1000.0;
    format_duration(seconds, formatter)
}

/// Walk `DIVISIONS` until the signed duration fits under a unit's threshold.
pub fn format_duration<F>(seconds: f64, formatter: &F) -> Option<String>
where
    F: RelativeTimeFormatter + ?Sized,
{
    let mut duration = seconds;
    for division in DIVISIONS {
        if duration.abs() < division.amount {
            tracing::trace!(duration, unit = %division.unit, "relative time bucket selected");
            return Some(formatter.format(round_half_up(duration), division.unit));
        }
        duration /= division.amount;
    }
    None
}

/// Nearest integer, halves toward positive infinity (-1.5 -> -1, 1.5 -> 2).
fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Accepts the ISO-8601 forms browsers do: RFC 3339, date-times without
/// seconds or without an offset (read as UTC), and reduced dates
/// (`YYYY-MM-DD`, `YYYY-MM`, `YYYY`) at midnight UTC.
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>> {
    let trimmed = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M%#z") {
        return Ok(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(naive.and_utc());
        }
    }
    if let Some(date) = parse_reduced_date(trimmed) {
        if let Some(naive) = date.and_hms_opt(0, 0, 0) {
            return Ok(naive.and_utc());
        }
    }

    Err(MapPropsError::MalformedTimestamp {
        value: value.to_string(),
    })
}

fn parse_reduced_date(value: &str) -> Option<NaiveDate> {
    let is_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());

    match value.len() {
        10 => NaiveDate::parse_from_str(value, "%Y-%m-%d").ok(),
        7 if value.get(..4).is_some_and(is_digits) && value.get(5..).is_some_and(is_digits) => {
            NaiveDate::parse_from_str(&format!("{}-01", value), "%Y-%m-%d").ok()
        }
        4 if is_digits(value) => {
            NaiveDate::parse_from_str(&format!("{}-01-01", value), "%Y-%m-%d").ok()
        }
        _ => None,
    }
}
