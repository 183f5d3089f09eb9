use crate::error::CsResult;
use crate::players::Player;
use crate::series::ScoreSeries;
use std::io::Write;
use strum::IntoEnumIterator;

/// Wide CSV: `date`, one score column per player, then one
/// `<Player>_anomaly` column per player.
pub fn write_series_csv<W: Write>(series: &ScoreSeries, writer: W) -> CsResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    let mut header = vec!["date".to_string()];
    header.extend(Player::iter().map(|p| p.to_string()));
    header.extend(Player::iter().map(|p| format!("{}_anomaly", p)));
    wtr.write_record(&header)?;

    for row in &series.rows {
        let mut rec = vec![row.date.format("%Y-%m-%d").to_string()];
        rec.extend(Player::iter().map(|p| row.score(p).to_string()));
        rec.extend(Player::iter().map(|p| row.is_anomaly(p).to_string()));
        wtr.write_record(&rec)?;
    }

    wtr.flush()?;
    Ok(())
}

pub fn write_series_json<W: Write>(series: &ScoreSeries, mut writer: W) -> CsResult<()> {
    serde_json::to_writer_pretty(&mut writer, series)?;
    writer.flush()?;
    Ok(())
}
