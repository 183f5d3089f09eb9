pub mod calendar;

pub use calendar::CalendarResolver;

use crate::error::{ChatScoreError, CsResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// Turns a short date phrase ("enero 10", "10/1/24") into a calendar date.
///
/// Locales are given in precedence order; the first locale under which the
/// phrase forms a valid date wins. Implementations return `None` instead of
/// guessing when nothing fits.
pub trait DateResolver {
    fn resolve(&self, text: &str, locales: &[Locale]) -> Option<NaiveDate>;
}

/// Closures work as resolvers, which keeps test stubs one line long.
impl<F> DateResolver for F
where
    F: Fn(&str, &[Locale]) -> Option<NaiveDate>,
{
    fn resolve(&self, text: &str, locales: &[Locale]) -> Option<NaiveDate> {
        self(text, locales)
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    Es,
    En,
}

/// Field order of an all-numeric date such as `3/4/24`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericOrder {
    DayFirst,
    MonthFirst,
}

const MONTHS_ES: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

const MONTHS_EN: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

impl Locale {
    pub fn month_names(&self) -> &'static [&'static str; 12] {
        match self {
            Locale::Es => &MONTHS_ES,
            Locale::En => &MONTHS_EN,
        }
    }

    /// 1-based month number for a lower-case month name.
    pub fn month_number(&self, name: &str) -> Option<u32> {
        if *self == Locale::Es && name == "setiembre" {
            return Some(9);
        }
        self.month_names()
            .iter()
            .position(|m| *m == name)
            .map(|i| i as u32 + 1)
    }

    pub fn numeric_order(&self) -> NumericOrder {
        match self {
            Locale::Es => NumericOrder::DayFirst,
            Locale::En => NumericOrder::MonthFirst,
        }
    }
}

/// Parses a precedence list such as `"es,en"`.
pub fn parse_locales(s: &str) -> CsResult<Vec<Locale>> {
    let mut out = Vec::new();
    for part in s.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        let locale: Locale = part
            .parse()
            .map_err(|_| ChatScoreError::Config(format!("Unknown locale '{}'", part)))?;
        if !out.contains(&locale) {
            out.push(locale);
        }
    }
    if out.is_empty() {
        return Err(ChatScoreError::Config(
            "At least one locale is required".to_string(),
        ));
    }
    Ok(out)
}

/// Every month name of every supported locale, for building line patterns.
pub fn all_month_names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = Locale::iter()
        .flat_map(|l| l.month_names().iter().copied())
        .collect();
    names.push("setiembre");
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_locales_keeps_order_and_dedups() {
        let l = parse_locales(" EN , es,en").unwrap();
        assert_eq!(l, vec![Locale::En, Locale::Es]);
    }

    #[test]
    fn test_parse_locales_rejects_unknown() {
        assert!(parse_locales("es,fr").is_err());
        assert!(parse_locales(" , ").is_err());
    }

    #[test]
    fn test_month_lookup() {
        assert_eq!(Locale::Es.month_number("enero"), Some(1));
        assert_eq!(Locale::Es.month_number("setiembre"), Some(9));
        assert_eq!(Locale::En.month_number("enero"), None);
        assert_eq!(Locale::En.month_number("december"), Some(12));
    }
}
