use crate::players::Player;
use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChatScoreError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Export Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    /// A series row still lacks a player after forward fill.
    #[error("Incomplete series: no score for {player} on or before {date}")]
    IncompleteSeries { date: NaiveDate, player: Player },
}

pub type CsResult<T> = Result<T, ChatScoreError>;
