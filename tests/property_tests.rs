mod common;

use chatscore::assembler::{extract_scoreboards, ScoreboardRecord};
use chatscore::players::Player;
use chatscore::series::{detect, reconcile};
use chrono::{Duration, NaiveDate};
use common::{params, resolver};
use proptest::prelude::*;
use std::collections::BTreeMap;

// --- STRATEGIES ---

prop_compose! {
    fn arb_record()(
        day_offset in 0i64..60,
        values in proptest::collection::vec(0i64..50, 4)
    ) -> ScoreboardRecord {
        let base = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let scores: BTreeMap<Player, i64> = Player::all().into_iter().zip(values).collect();
        ScoreboardRecord::new(base + Duration::days(day_offset), scores)
    }
}

fn arb_chat_line() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("enero 10".to_string()),
        Just("febrero 3".to_string()),
        Just("March 4th".to_string()),
        Just("[12/2/24, 20:15:00] Pepo: jaja".to_string()),
        Just("".to_string()),
        Just("buenas noches".to_string()),
        Just("Pepo: 1.5".to_string()),
        Just("Pepo: 7".to_string()),
        Just("Pocho: 3".to_string()),
        Just("Josh: 11".to_string()),
        Just("Mené: 2".to_string()),
        Just("Tito: 4".to_string()),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn test_reconciled_dates_strictly_increase(records in proptest::collection::vec(arb_record(), 0..30)) {
        let series = reconcile(&records).unwrap();
        let dates = series.dates();
        prop_assert!(dates.windows(2).all(|w| w[0] < w[1]));
        for row in &series.rows {
            prop_assert_eq!(row.scores.len(), 4);
        }
    }

    #[test]
    fn test_corrected_columns_never_drop(records in proptest::collection::vec(arb_record(), 0..30)) {
        let series = detect(&reconcile(&records).unwrap(), true);
        for player in Player::all() {
            let column = series.column(player);
            prop_assert!(column.windows(2).all(|w| w[0] <= w[1]));
        }
    }

    #[test]
    fn test_flag_only_keeps_values(records in proptest::collection::vec(arb_record(), 0..30)) {
        let series = reconcile(&records).unwrap();
        let flagged = detect(&series, false);
        for player in Player::all() {
            prop_assert_eq!(series.column(player), flagged.column(player));
        }
    }

    #[test]
    fn test_reconcile_round_trips_through_records(records in proptest::collection::vec(arb_record(), 0..30)) {
        let first = reconcile(&records).unwrap();
        let second = reconcile(&first.to_records()).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_random_chat_only_yields_complete_boards(lines in proptest::collection::vec(arb_chat_line(), 0..80)) {
        let text = lines.join("\n");
        let (records, stats) = extract_scoreboards(&text, &resolver(), &params()).unwrap();
        prop_assert_eq!(stats.records, records.len());
        prop_assert_eq!(stats.runs, stats.rejected + stats.undated + stats.records);
        for record in &records {
            prop_assert!(record.is_complete());
        }
    }
}
