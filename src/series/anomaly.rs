use super::ScoreSeries;
use crate::players::Player;
use strum::IntoEnumIterator;
use tracing::debug;

/// Flags every score that drops below the previous date's value.
///
/// With `autocorrect` the dropped value is replaced by the previous one and
/// the next comparison runs against the corrected value, so each column comes
/// out non-decreasing. Flags are kept either way. The input is not modified.
pub fn detect(series: &ScoreSeries, autocorrect: bool) -> ScoreSeries {
    let mut out = series.clone();

    for player in Player::iter() {
        let mut prev: Option<i64> = None;
        for row in out.rows.iter_mut() {
            // A missing cell stays missing and the baseline carries over it.
            let Some(&value) = row.scores.get(&player) else {
                row.anomalies.insert(player, false);
                continue;
            };
            let dropped = prev.is_some_and(|p| value < p);
            row.anomalies.insert(player, dropped);

            let kept = match prev {
                Some(p) if dropped && autocorrect => {
                    debug!("{} {}: {} -> {} (corrected)", row.date, player, value, p);
                    row.scores.insert(player, p);
                    p
                }
                _ => value,
            };
            prev = Some(kept);
        }
    }

    out
}
