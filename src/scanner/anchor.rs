use crate::consts::{DEFAULT_NAMED_DATE_WINDOW, DEFAULT_TIMESTAMP_WINDOW, NBSP};
use crate::dates::{all_month_names, DateResolver, Locale};
use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;
use tracing::trace;

static NAMED_DATE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    let months = all_month_names().join("|");
    Regex::new(&format!(r"(?i)^(?:{})\s+\d{{1,2}}(?:st|nd|rd|th)?$", months))
        .expect("valid regex")
});

// WhatsApp export prefix: "[10/1/24, 21:04:11] Pepo: ..."
static TIMESTAMP_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[(\d{1,2}/\d{1,2}/\d{2,4})[,\s\]]").expect("valid regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorSource {
    NamedDate,
    Timestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateAnchor {
    pub date: NaiveDate,
    pub line: usize,
    pub source: AnchorSource,
}

/// Backward search for the date a scoreboard belongs to.
pub struct AnchorSearch<'r> {
    resolver: &'r dyn DateResolver,
    locales: Vec<Locale>,
    named_date_window: usize,
    timestamp_window: usize,
}

impl<'r> AnchorSearch<'r> {
    pub fn new(resolver: &'r dyn DateResolver, locales: Vec<Locale>) -> Self {
        Self {
            resolver,
            locales,
            named_date_window: DEFAULT_NAMED_DATE_WINDOW,
            timestamp_window: DEFAULT_TIMESTAMP_WINDOW,
        }
    }

    pub fn with_windows(mut self, named_date: usize, timestamp: usize) -> Self {
        self.named_date_window = named_date;
        self.timestamp_window = timestamp;
        self
    }

    /// Named-date lines first, then chat timestamps. Within each strategy the
    /// closest line that resolves wins.
    pub fn find<S: AsRef<str>>(&self, lines: &[S], block_start: usize) -> Option<DateAnchor> {
        self.named_date(lines, block_start)
            .or_else(|| self.timestamp(lines, block_start))
    }

    fn named_date<S: AsRef<str>>(&self, lines: &[S], block_start: usize) -> Option<DateAnchor> {
        preceding(lines, block_start, self.named_date_window).find_map(|(idx, text)| {
            if !NAMED_DATE_LINE.is_match(&text) {
                return None;
            }
            let date = self.resolver.resolve(&text, &self.locales);
            if date.is_none() {
                trace!("line {}: '{}' looks like a date but did not resolve", idx, text);
            }
            date.map(|date| DateAnchor {
                date,
                line: idx,
                source: AnchorSource::NamedDate,
            })
        })
    }

    fn timestamp<S: AsRef<str>>(&self, lines: &[S], block_start: usize) -> Option<DateAnchor> {
        preceding(lines, block_start, self.timestamp_window).find_map(|(idx, text)| {
            let caps = TIMESTAMP_LINE.captures(&text)?;
            let date = self.resolver.resolve(&caps[1], &self.locales)?;
            Some(DateAnchor {
                date,
                line: idx,
                source: AnchorSource::Timestamp,
            })
        })
    }
}

/// Up to `window` lines above `block_start`, nearest first, NBSP-normalized
/// and trimmed.
fn preceding<S: AsRef<str>>(
    lines: &[S],
    block_start: usize,
    window: usize,
) -> impl Iterator<Item = (usize, String)> + '_ {
    let lowest = block_start.saturating_sub(window);
    (lowest..block_start.min(lines.len()))
        .rev()
        .map(move |idx| (idx, lines[idx].as_ref().replace(NBSP, " ").trim().to_string()))
}

/// One-shot anchor lookup with the default windows.
pub fn find_anchor<S: AsRef<str>>(
    lines: &[S],
    block_start: usize,
    resolver: &dyn DateResolver,
    locales: &[Locale],
) -> Option<DateAnchor> {
    AnchorSearch::new(resolver, locales.to_vec()).find(lines, block_start)
}
