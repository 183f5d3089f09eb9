use chatscore::assembler::{ExtractionStats, ScoreboardRecord};
use chatscore::players::Player;
use chatscore::series::{sample_indices, ScoreSeries};
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use strum::IntoEnumIterator;

fn header_row() -> Vec<Cell> {
    let mut header = vec![Cell::new("Date").add_attribute(Attribute::Bold)];
    header.extend(Player::iter().map(|p| Cell::new(p.to_string()).add_attribute(Attribute::Bold)));
    header
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header_row());

    for i in 1..=Player::iter().count() {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
    table
}

pub fn print_records(records: &[ScoreboardRecord]) {
    if records.is_empty() {
        println!("No scoreboards found.");
        return;
    }

    let mut table = new_table();
    for record in records {
        let mut row = vec![Cell::new(record.iso_date())];
        row.extend(Player::iter().map(|p| match record.scores.get(&p) {
            Some(v) => Cell::new(v),
            None => Cell::new("-").fg(Color::DarkGrey),
        }));
        table.add_row(row);
    }
    println!("\n{}", table);
}

/// Score progression table. Drops are marked with `!` (red), carried-forward
/// values are greyed. Long series are thinned to evenly spaced dates.
pub fn print_series_table(series: &ScoreSeries, max_rows: usize) {
    if series.is_empty() {
        println!("No scoreboards found.");
        return;
    }

    let mut table = new_table();
    let picks = sample_indices(series.len(), max_rows);

    for &i in &picks {
        let row = &series.rows[i];
        let mut cells = vec![Cell::new(row.date.format("%Y-%m-%d"))];
        for p in Player::iter() {
            let v = row.score(p);
            let cell = if row.is_anomaly(p) {
                Cell::new(format!("{} !", v))
                    .fg(Color::Red)
                    .add_attribute(Attribute::Bold)
            } else if row.filled.contains(&p) {
                Cell::new(v).fg(Color::DarkGrey)
            } else {
                Cell::new(v)
            };
            cells.push(cell);
        }
        table.add_row(cells);
    }

    println!("\n📊 Score Progression Over Time");
    println!("{}", table);
    if picks.len() < series.len() {
        println!("   (showing {} of {} dates)", picks.len(), series.len());
    }
}

pub fn print_extraction_stats(stats: &ExtractionStats) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.add_row(vec![Cell::new("Lines scanned"), Cell::new(stats.lines)]);
    table.add_row(vec![Cell::new("Score runs"), Cell::new(stats.runs)]);
    table.add_row(vec![
        Cell::new("Rejected runs"),
        Cell::new(stats.rejected).fg(Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Undated blocks"),
        Cell::new(stats.undated).fg(Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Scoreboards").add_attribute(Attribute::Bold),
        Cell::new(stats.records).fg(Color::Green),
    ]);
    if let Some(col) = table.column_mut(1) {
        col.set_cell_alignment(CellAlignment::Right);
    }
    println!("\n{}", table);
}
