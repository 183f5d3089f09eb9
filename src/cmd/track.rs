use crate::reports;
use chatscore::config::Config;
use chatscore::consts::DEFAULT_REPORT_ROWS;
use chatscore::error::CsResult;
use chatscore::export::{write_series_csv, write_series_json};
use chatscore::loader::load_transcript;
use chatscore::pipeline;
use clap::Args;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct TrackArgs {
    #[command(flatten)]
    pub config: Config,

    /// Chat export to scan
    pub transcript: PathBuf,

    /// Dates shown in the table (0 = all)
    #[arg(long, default_value_t = DEFAULT_REPORT_ROWS)]
    pub max_rows: usize,

    /// Write the full series as CSV
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Write the full series as JSON
    #[arg(long)]
    pub json: Option<PathBuf>,
}

pub fn run(args: &TrackArgs, config: &Config) -> CsResult<()> {
    let text = load_transcript(&args.transcript)?;
    let out = pipeline::run_with_config(&text, config)?;

    reports::print_series_table(&out.series, args.max_rows);
    reports::print_extraction_stats(&out.stats);

    if let Some(path) = &args.csv {
        write_series_csv(&out.series, BufWriter::new(File::create(path)?))?;
        info!("💾 Wrote {}", path.display());
    }
    if let Some(path) = &args.json {
        write_series_json(&out.series, BufWriter::new(File::create(path)?))?;
        info!("💾 Wrote {}", path.display());
    }
    Ok(())
}
