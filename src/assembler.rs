use crate::config::ExtractionParams;
use crate::dates::DateResolver;
use crate::error::CsResult;
use crate::players::Player;
use crate::scanner::{AnchorSearch, BlockScanner, CandidateBlock, DateAnchor};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum::EnumCount;
use tracing::debug;

/// One dated scoreboard as it appeared in the chat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreboardRecord {
    pub date: NaiveDate,
    pub scores: BTreeMap<Player, i64>,
}

impl ScoreboardRecord {
    pub fn new(date: NaiveDate, scores: BTreeMap<Player, i64>) -> Self {
        Self { date, scores }
    }

    pub fn iso_date(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn is_complete(&self) -> bool {
        self.scores.len() == Player::COUNT
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ExtractionStats {
    pub lines: usize,
    pub runs: usize,
    pub rejected: usize,
    pub undated: usize,
    pub records: usize,
}

/// Pairs an accepted block with its date. Invalid blocks and missing
/// anchors yield nothing.
pub fn assemble(block: &CandidateBlock, anchor: Option<DateAnchor>) -> Option<ScoreboardRecord> {
    let anchor = anchor?;
    if !block.is_valid() {
        return None;
    }
    let scores = block.player_scores();
    if scores.len() != Player::COUNT {
        return None;
    }
    Some(ScoreboardRecord::new(anchor.date, scores))
}

/// Runs scanner, anchor search and assembler over a whole transcript.
pub fn extract_scoreboards(
    text: &str,
    resolver: &dyn DateResolver,
    params: &ExtractionParams,
) -> CsResult<(Vec<ScoreboardRecord>, ExtractionStats)> {
    let lines: Vec<&str> = text.lines().collect();
    let search = AnchorSearch::new(resolver, params.get_locales()?)
        .with_windows(params.named_date_window, params.timestamp_window);

    let mut stats = ExtractionStats {
        lines: lines.len(),
        ..Default::default()
    };
    let mut records = Vec::new();

    for block in BlockScanner::new(&lines) {
        stats.runs += 1;
        if let Err(reason) = block.verdict() {
            // Single stray "x: 1" lines are everywhere in a chat; not worth a log line.
            if block.count > 1 {
                debug!("Discarding block at line {}: {}", block.start_line + 1, reason);
            }
            stats.rejected += 1;
            continue;
        }

        let anchor = search.find(&lines, block.start_line);
        match assemble(&block, anchor) {
            Some(record) => {
                debug!(
                    "Scoreboard at line {} dated {}",
                    block.start_line + 1,
                    record.iso_date()
                );
                records.push(record);
            }
            None => {
                debug!("Discarding block at line {}: no date found", block.start_line + 1);
                stats.undated += 1;
            }
        }
    }

    stats.records = records.len();
    Ok((records, stats))
}
