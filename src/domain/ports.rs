use chrono::{DateTime, Utc};
use std::fmt;

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl TimeUnit {
    pub fn singular(&self) -> &'static str {
        match self {
            TimeUnit::Second => "second",
            TimeUnit::Minute => "minute",
            TimeUnit::Hour => "hour",
            TimeUnit::Day => "day",
            TimeUnit::Week => "week",
            TimeUnit::Month => "month",
            TimeUnit::Year => "year",
        }
    }

    pub fn plural(&self) -> &'static str {
        match self {
            TimeUnit::Second => "seconds",
            TimeUnit::Minute => "minutes",
            TimeUnit::Hour => "hours",
            TimeUnit::Day => "days",
            TimeUnit::Week => "weeks",
            TimeUnit::Month => "months",
            TimeUnit::Year => "years",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.plural())
    }
}

/// Turns a signed, already rounded offset in `unit` into a phrase such as
/// "in 3 days" or "2 hours ago". Negative values lie in the past.
pub trait RelativeTimeFormatter: Send + Sync {
    fn format(&self, value: f64, unit: TimeUnit) -> String;
}

/// Base URLs the deep links are built from.
pub trait LinkConfig: Send + Sync {
    fn annotations_base(&self) -> &str;
    fn viewer_base(&self) -> &str;
    fn editor_base(&self) -> &str;
}
