use crate::core::number_format::format_decimal;
use crate::domain::ports::{RelativeTimeFormatter, TimeUnit};

/// English phrasing with named references ("yesterday", "next week") for the
/// offsets that have one and numeric phrases for everything else.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishRelativeTime;

impl EnglishRelativeTime {
    fn named(value: f64, unit: TimeUnit) -> Option<String> {
        if value.fract() != 0.0 || value.abs() > 1.0 {
            return None;
        }

        let offset = value as i8;
        let named = match (unit, offset) {
            (TimeUnit::Second, 0) => "now".to_string(),
            (TimeUnit::Minute, 0) => "this minute".to_string(),
            (TimeUnit::Hour, 0) => "this hour".to_string(),
            (TimeUnit::Day, -1) => "yesterday".to_string(),
            (TimeUnit::Day, 0) => "today".to_string(),
            (TimeUnit::Day, 1) => "tomorrow".to_string(),
            (TimeUnit::Week | TimeUnit::Month | TimeUnit::Year, -1) => {
                format!("last {}", unit.singular())
            }
            (TimeUnit::Week | TimeUnit::Month | TimeUnit::Year, 0) => {
                format!("this {}", unit.singular())
            }
            (TimeUnit::Week | TimeUnit::Month | TimeUnit::Year, 1) => {
                format!("next {}", unit.singular())
            }
            _ => return None,
        };
        Some(named)
    }
}

impl RelativeTimeFormatter for EnglishRelativeTime {
    fn format(&self, value: f64, unit: TimeUnit) -> String {
        // -0 and 0 read the same
        let value = if value == 0.0 { 0.0 } else { value };

        if let Some(named) = Self::named(value, unit) {
            return named;
        }

        let label = if value.abs() == 1.0 {
            unit.singular()
        } else {
            unit.plural()
        };
        let amount = format_decimal(value.abs(), 3);

        if value < 0.0 {
            format!("{} {} ago", amount, label)
        } else {
            format!("in {} {}", amount, label)
        }
    }
}
