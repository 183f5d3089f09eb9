use crate::reports;
use chatscore::assembler::extract_scoreboards;
use chatscore::config::Config;
use chatscore::error::CsResult;
use chatscore::loader::load_transcript;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct ExtractArgs {
    #[command(flatten)]
    pub config: Config,

    /// Chat export to scan
    pub transcript: PathBuf,

    /// Print the records as JSON instead of a table
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: &ExtractArgs, config: &Config) -> CsResult<()> {
    let text = load_transcript(&args.transcript)?;
    let resolver = config.extraction.resolver();
    let (records, stats) = extract_scoreboards(&text, &resolver, &config.extraction)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    println!("\n🗒️  === SCOREBOARDS: {} === ", args.transcript.display());
    reports::print_records(&records);
    reports::print_extraction_stats(&stats);
    Ok(())
}
