use super::{DateResolver, Locale, NumericOrder};
use crate::consts::NBSP;
use chrono::{Datelike, Local, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;
use strum::IntoEnumIterator;

static ISO_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4})-(\d{1,2})-(\d{1,2})$").expect("valid regex"));

// 10/1/24, 10-01-2024, 10.1
static NUMERIC_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,2})[/.\-](\d{1,2})(?:[/.\-](\d{4}|\d{2}))?$").expect("valid regex")
});

// enero 10, March 3rd, mayo 2 de 2024, june 5, 2024
static MONTH_FIRST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\p{L}+)\.?\s+(\d{1,2})(?:st|nd|rd|th|º|°)?(?:,?\s+(?:de\s+)?(\d{4}))?$")
        .expect("valid regex")
});

// 10 de enero, 3rd of march, 5 june 2024
static DAY_FIRST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,2})(?:st|nd|rd|th|º|°)?\s+(?:de\s+|of\s+)?(\p{L}+)\.?(?:,?\s+(?:de\s+)?(\d{4}))?$")
        .expect("valid regex")
});

/// Deterministic resolver for the two chat date conventions:
/// month-name phrases and numeric `d/m/y` stamps.
///
/// Phrases without a year land in `default_year`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarResolver {
    default_year: i32,
}

impl Default for CalendarResolver {
    fn default() -> Self {
        Self::current_year()
    }
}

impl CalendarResolver {
    pub fn new(default_year: i32) -> Self {
        Self { default_year }
    }

    pub fn current_year() -> Self {
        Self::new(Local::now().year())
    }

    pub fn default_year(&self) -> i32 {
        self.default_year
    }

    fn year_or_default(&self, raw: Option<&str>) -> Option<i32> {
        match raw {
            None => Some(self.default_year),
            Some(s) => {
                let y: i32 = s.parse().ok()?;
                if s.len() == 2 {
                    Some(2000 + y)
                } else {
                    Some(y)
                }
            }
        }
    }

    fn resolve_numeric(&self, text: &str, locales: &[Locale]) -> Option<NaiveDate> {
        let caps = NUMERIC_DATE.captures(text)?;
        let a: u32 = caps.get(1)?.as_str().parse().ok()?;
        let b: u32 = caps.get(2)?.as_str().parse().ok()?;
        let year = self.year_or_default(caps.get(3).map(|m| m.as_str()))?;

        locales.iter().find_map(|locale| {
            let (day, month) = match locale.numeric_order() {
                NumericOrder::DayFirst => (a, b),
                NumericOrder::MonthFirst => (b, a),
            };
            NaiveDate::from_ymd_opt(year, month, day)
        })
    }

    fn resolve_named(&self, text: &str, locales: &[Locale]) -> Option<NaiveDate> {
        let (month_name, day, year) = if let Some(caps) = MONTH_FIRST.captures(text) {
            (
                caps.get(1)?.as_str(),
                caps.get(2)?.as_str(),
                caps.get(3).map(|m| m.as_str()),
            )
        } else if let Some(caps) = DAY_FIRST.captures(text) {
            (
                caps.get(2)?.as_str(),
                caps.get(1)?.as_str(),
                caps.get(3).map(|m| m.as_str()),
            )
        } else {
            return None;
        };

        let day: u32 = day.parse().ok()?;
        let year = self.year_or_default(year)?;
        let month = locales.iter().find_map(|l| l.month_number(month_name))?;
        NaiveDate::from_ymd_opt(year, month, day)
    }
}

impl DateResolver for CalendarResolver {
    fn resolve(&self, text: &str, locales: &[Locale]) -> Option<NaiveDate> {
        let all: Vec<Locale>;
        let locales = if locales.is_empty() {
            all = Locale::iter().collect();
            &all[..]
        } else {
            locales
        };

        let text = text.replace(NBSP, " ").trim().to_lowercase();
        if text.is_empty() {
            return None;
        }

        if let Some(caps) = ISO_DATE.captures(&text) {
            let y: i32 = caps[1].parse().ok()?;
            let m: u32 = caps[2].parse().ok()?;
            let d: u32 = caps[3].parse().ok()?;
            return NaiveDate::from_ymd_opt(y, m, d);
        }

        if NUMERIC_DATE.is_match(&text) {
            return self.resolve_numeric(&text, locales);
        }

        self.resolve_named(&text, locales)
    }
}
