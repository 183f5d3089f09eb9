pub mod anomaly;

pub use anomaly::detect;

use crate::assembler::ScoreboardRecord;
use crate::error::{ChatScoreError, CsResult};
use crate::players::Player;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use strum::IntoEnumIterator;
use tracing::debug;

/// One date of the reconciled series. Every player has a value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesRow {
    pub date: NaiveDate,
    pub scores: BTreeMap<Player, i64>,
    /// Players whose value was carried forward from an earlier date.
    pub filled: BTreeSet<Player>,
    pub anomalies: BTreeMap<Player, bool>,
}

impl SeriesRow {
    pub fn score(&self, player: Player) -> i64 {
        self.scores.get(&player).copied().unwrap_or_default()
    }

    pub fn is_anomaly(&self, player: Player) -> bool {
        self.anomalies.get(&player).copied().unwrap_or(false)
    }
}

/// Chronological, duplicate-free, player-complete score table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSeries {
    pub rows: Vec<SeriesRow>,
}

impl ScoreSeries {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        self.rows.iter().map(|r| r.date).collect()
    }

    pub fn column(&self, player: Player) -> Vec<i64> {
        self.rows.iter().map(|r| r.score(player)).collect()
    }

    pub fn anomaly_count(&self) -> usize {
        self.rows
            .iter()
            .map(|r| r.anomalies.values().filter(|&&a| a).count())
            .sum()
    }

    /// Observed values only; forward-filled cells are left out so the
    /// records reconcile back into the same series.
    pub fn to_records(&self) -> Vec<ScoreboardRecord> {
        self.rows
            .iter()
            .map(|row| {
                let scores = row
                    .scores
                    .iter()
                    .filter(|(p, _)| !row.filled.contains(p))
                    .map(|(p, v)| (*p, *v))
                    .collect();
                ScoreboardRecord::new(row.date, scores)
            })
            .collect()
    }
}

/// Builds the series: date order, last record per date wins, missing
/// players carried forward. A player with no value on or before a date is
/// an error rather than a silent zero.
pub fn reconcile(records: &[ScoreboardRecord]) -> CsResult<ScoreSeries> {
    let mut ordered: Vec<&ScoreboardRecord> = records.iter().collect();
    ordered.sort_by_key(|r| r.date);

    let mut latest: Vec<&ScoreboardRecord> = Vec::with_capacity(ordered.len());
    for record in ordered {
        match latest.last_mut() {
            Some(last) if last.date == record.date => *last = record,
            _ => latest.push(record),
        }
    }

    if latest.len() < records.len() {
        debug!(
            "Collapsed {} duplicate-date scoreboards",
            records.len() - latest.len()
        );
    }

    let mut carried: BTreeMap<Player, i64> = BTreeMap::new();
    let mut rows = Vec::with_capacity(latest.len());

    for record in latest {
        let mut scores = BTreeMap::new();
        let mut filled = BTreeSet::new();

        for player in Player::iter() {
            let value = match record.scores.get(&player) {
                Some(v) => *v,
                None => {
                    let v = carried.get(&player).copied().ok_or(
                        ChatScoreError::IncompleteSeries {
                            date: record.date,
                            player,
                        },
                    )?;
                    filled.insert(player);
                    v
                }
            };
            carried.insert(player, value);
            scores.insert(player, value);
        }

        rows.push(SeriesRow {
            date: record.date,
            scores,
            filled,
            anomalies: Player::iter().map(|p| (p, false)).collect(),
        });
    }

    Ok(ScoreSeries { rows })
}

/// Evenly spaced row positions for a thinned view, always ending on the
/// last row. `max == 0` or a short series keeps everything.
pub fn sample_indices(len: usize, max: usize) -> Vec<usize> {
    if max == 0 || len <= max {
        return (0..len).collect();
    }
    let step = (len / max.saturating_sub(1).max(1)).max(1);
    let mut picks: Vec<usize> = (0..len).step_by(step).collect();
    if picks.last() != Some(&(len - 1)) {
        picks.push(len - 1);
    }
    picks
}
