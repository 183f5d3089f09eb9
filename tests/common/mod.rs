#![allow(dead_code)]

use chatscore::assembler::ScoreboardRecord;
use chatscore::config::ExtractionParams;
use chatscore::dates::{CalendarResolver, Locale};
use chatscore::players::Player;
use chrono::NaiveDate;
use std::collections::BTreeMap;

pub const YEAR: i32 = 2024;

pub fn resolver() -> CalendarResolver {
    CalendarResolver::new(YEAR)
}

pub fn locales() -> Vec<Locale> {
    vec![Locale::Es, Locale::En]
}

pub fn params() -> ExtractionParams {
    ExtractionParams {
        default_year: Some(YEAR),
        ..Default::default()
    }
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

/// The four score lines of a scoreboard, in Pepo, Pocho, Josh, Mene order.
pub fn block(scores: [i64; 4]) -> Vec<String> {
    vec![
        format!("Pepo: {}", scores[0]),
        format!("Pocho: {}", scores[1]),
        format!("Josh: {}", scores[2]),
        format!("Mene: {}", scores[3]),
    ]
}

pub fn scores(values: [i64; 4]) -> BTreeMap<Player, i64> {
    Player::all().into_iter().zip(values).collect()
}

pub fn record(d: &str, values: [i64; 4]) -> ScoreboardRecord {
    ScoreboardRecord::new(date(d), scores(values))
}

/// A record that only mentions some players.
pub fn partial(d: &str, values: &[(Player, i64)]) -> ScoreboardRecord {
    ScoreboardRecord::new(date(d), values.iter().copied().collect())
}

pub fn transcript(parts: &[Vec<String>]) -> String {
    parts.concat().join("\n")
}

pub fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
