mod common;

use chatscore::assembler::{assemble, extract_scoreboards};
use chatscore::config::ExtractionParams;
use chatscore::players::Player;
use chatscore::scanner::{scan, AnchorSource, DateAnchor};
use common::{block, date, lines, params, resolver, scores, transcript};

#[test]
fn test_scoreboard_dated_by_named_line() {
    let text = transcript(&[
        lines(&[
            "enero 10",
            "[10/1/24, 21:00:00] Josh: bueno",
            "vamos",
            "que tal",
            "aqui va",
        ]),
        block([3, 5, 2, 1]),
    ]);

    let (records, stats) = extract_scoreboards(&text, &resolver(), &params()).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].iso_date(), "2024-01-10");
    assert_eq!(records[0].scores, scores([3, 5, 2, 1]));
    assert!(records[0].is_complete());

    assert_eq!(stats.runs, 1);
    assert_eq!(stats.records, 1);
    assert_eq!(stats.rejected, 0);
    assert_eq!(stats.undated, 0);
}

#[test]
fn test_three_player_block_never_emitted() {
    let text = transcript(&[
        lines(&["enero 10"]),
        lines(&["Pepo: 1", "Pocho: 2", "Josh: 3"]),
    ]);
    let (records, stats) = extract_scoreboards(&text, &resolver(), &params()).unwrap();
    assert!(records.is_empty());
    assert_eq!(stats.rejected, 1);
}

#[test]
fn test_undated_block_is_dropped() {
    let text = transcript(&[lines(&["sin fecha"]), block([1, 1, 1, 1])]);
    let (records, stats) = extract_scoreboards(&text, &resolver(), &params()).unwrap();
    assert!(records.is_empty());
    assert_eq!(stats.undated, 1);
}

#[test]
fn test_records_keep_transcript_order() {
    let text = transcript(&[
        lines(&["febrero 2"]),
        block([4, 4, 4, 4]),
        lines(&["", "enero 5"]),
        block([1, 1, 1, 1]),
    ]);
    let (records, _) = extract_scoreboards(&text, &resolver(), &params()).unwrap();
    let dates: Vec<_> = records.iter().map(|r| r.iso_date()).collect();
    assert_eq!(dates, vec!["2024-02-02", "2024-01-05"]);
}

#[test]
fn test_windows_follow_params() {
    let text = transcript(&[
        lines(&["enero 10", "a", "b", "c"]),
        block([1, 2, 3, 4]),
    ]);
    let narrow = ExtractionParams {
        named_date_window: 2,
        ..params()
    };
    let (records, _) = extract_scoreboards(&text, &resolver(), &narrow).unwrap();
    assert!(records.is_empty());
}

#[test]
fn test_invalid_locales_are_a_config_error() {
    let bad = ExtractionParams {
        locales: "klingon".to_string(),
        ..params()
    };
    assert!(extract_scoreboards("", &resolver(), &bad).is_err());
}

#[test]
fn test_crlf_transcript() {
    let text = transcript(&[lines(&["enero 10"]), block([3, 5, 2, 1])]).replace('\n', "\r\n");
    let (records, _) = extract_scoreboards(&text, &resolver(), &params()).unwrap();
    assert_eq!(records.len(), 1);
}

#[test]
fn test_assemble_requires_anchor() {
    let input = block([9, 8, 7, 6]);
    let blocks = scan(&input);
    assert_eq!(blocks.len(), 1);

    assert!(assemble(&blocks[0], None).is_none());

    let anchor = DateAnchor {
        date: date("2024-05-01"),
        line: 0,
        source: AnchorSource::NamedDate,
    };
    let rec = assemble(&blocks[0], Some(anchor)).unwrap();
    assert_eq!(rec.date, date("2024-05-01"));
    assert_eq!(rec.scores[&Player::Pepo], 9);
    assert_eq!(rec.scores[&Player::Mene], 6);
}
