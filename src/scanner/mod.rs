//! Locates scoreboard blocks in a chat transcript.
//!
//! A block is a run of consecutive `Name: 12` lines. The scanner walks the
//! transcript once with a cursor and hands out each run as an immutable
//! [`CandidateBlock`]; consumed lines are never revisited.

pub mod anchor;

pub use anchor::{find_anchor, AnchorSearch, AnchorSource, DateAnchor};

use crate::consts::NBSP;
use crate::players::{canonical_key, Player};
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;
use strum::EnumCount;

static SCORE_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([\p{L} ]+?)\s*:\s*([0-9.]+)$").expect("valid regex"));

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScoreValue {
    Whole(i64),
    Fraction(f64),
}

/// One `name: number` line, name already folded to its lookup key.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreLine {
    pub key: String,
    pub value: ScoreValue,
}

/// Parses a single transcript line. Returns `None` for anything that is not
/// a well-formed `name: number` pair.
pub fn parse_score_line(line: &str) -> Option<ScoreLine> {
    let line = line.replace(NBSP, " ");
    let caps = SCORE_LINE.captures(line.trim())?;
    let key = canonical_key(&caps[1]);
    if key.is_empty() {
        return None;
    }
    let value = parse_score(&caps[2])?;
    Some(ScoreLine { key, value })
}

fn parse_score(raw: &str) -> Option<ScoreValue> {
    if !raw.contains('.') {
        return raw.parse::<i64>().ok().map(ScoreValue::Whole);
    }
    if raw.matches('.').count() > 1 {
        return None;
    }
    let v: f64 = raw.parse().ok()?;
    if !v.is_finite() {
        return None;
    }
    if v.fract() != 0.0 {
        return Some(ScoreValue::Fraction(v));
    }
    if v < i64::MIN as f64 || v >= i64::MAX as f64 {
        return None;
    }
    Some(ScoreValue::Whole(v as i64))
}

/// Why a run of score lines is not a usable scoreboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockRejection {
    Fraction,
    WrongLineCount(usize),
    DuplicatePlayer,
    UnknownPlayer(String),
}

impl fmt::Display for BlockRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fraction => write!(f, "fractional score"),
            Self::WrongLineCount(n) => write!(f, "{} score lines, expected {}", n, Player::COUNT),
            Self::DuplicatePlayer => write!(f, "player listed twice"),
            Self::UnknownPlayer(k) => write!(f, "unknown player '{}'", k),
        }
    }
}

/// A maximal run of consecutive score lines.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateBlock {
    pub start_line: usize,
    /// Lines consumed by the run, including a trailing fractional line.
    pub count: usize,
    pub scores_by_key: BTreeMap<String, i64>,
    pub has_fraction: bool,
}

impl CandidateBlock {
    pub fn end_line(&self) -> usize {
        self.start_line + self.count
    }

    pub fn verdict(&self) -> Result<(), BlockRejection> {
        if self.has_fraction {
            return Err(BlockRejection::Fraction);
        }
        if let Some(k) = self
            .scores_by_key
            .keys()
            .find(|k| Player::from_key(k).is_none())
        {
            return Err(BlockRejection::UnknownPlayer(k.clone()));
        }
        if self.scores_by_key.len() < self.count {
            return Err(BlockRejection::DuplicatePlayer);
        }
        if self.count != Player::COUNT {
            return Err(BlockRejection::WrongLineCount(self.count));
        }
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.verdict().is_ok()
    }

    /// Scores keyed by roster player. Unknown keys are skipped.
    pub fn player_scores(&self) -> BTreeMap<Player, i64> {
        self.scores_by_key
            .iter()
            .filter_map(|(k, v)| Player::from_key(k).map(|p| (p, *v)))
            .collect()
    }
}

/// Cursor over a transcript that yields every run of score lines,
/// valid or not.
pub struct BlockScanner<'a, S: AsRef<str>> {
    lines: &'a [S],
    cursor: usize,
}

impl<'a, S: AsRef<str>> BlockScanner<'a, S> {
    pub fn new(lines: &'a [S]) -> Self {
        Self { lines, cursor: 0 }
    }

    fn take_run(&self, start: usize) -> Option<CandidateBlock> {
        let mut block = CandidateBlock {
            start_line: start,
            count: 0,
            scores_by_key: BTreeMap::new(),
            has_fraction: false,
        };

        for line in &self.lines[start..] {
            let Some(score) = parse_score_line(line.as_ref()) else {
                break;
            };
            block.count += 1;
            match score.value {
                ScoreValue::Whole(v) => {
                    block.scores_by_key.insert(score.key, v);
                }
                ScoreValue::Fraction(_) => {
                    block.has_fraction = true;
                    break;
                }
            }
        }

        (block.count > 0).then_some(block)
    }
}

impl<S: AsRef<str>> Iterator for BlockScanner<'_, S> {
    type Item = CandidateBlock;

    fn next(&mut self) -> Option<Self::Item> {
        while self.cursor < self.lines.len() {
            match self.take_run(self.cursor) {
                Some(block) => {
                    self.cursor = block.end_line();
                    return Some(block);
                }
                None => self.cursor += 1,
            }
        }
        None
    }
}

/// Accepted blocks only, in transcript order.
pub fn scan<S: AsRef<str>>(lines: &[S]) -> Vec<CandidateBlock> {
    BlockScanner::new(lines).filter(|b| b.is_valid()).collect()
}
