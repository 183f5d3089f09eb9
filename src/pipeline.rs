use crate::assembler::{extract_scoreboards, ExtractionStats, ScoreboardRecord};
use crate::config::Config;
use crate::dates::DateResolver;
use crate::error::CsResult;
use crate::series::{detect, reconcile, ScoreSeries};
use tracing::info;

#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub records: Vec<ScoreboardRecord>,
    pub series: ScoreSeries,
    pub stats: ExtractionStats,
}

/// Transcript text to cleaned series: extract, reconcile, then flag (and
/// per config, correct) score drops.
pub fn run(text: &str, resolver: &dyn DateResolver, config: &Config) -> CsResult<PipelineOutput> {
    let (records, stats) = extract_scoreboards(text, resolver, &config.extraction)?;
    info!("🔎 Found {} scoreboard blocks.", records.len());

    let series = reconcile(&records)?;
    info!("📈 {} dated rows after reconciliation.", series.len());

    let series = detect(&series, config.cleaning.autocorrect);
    let flagged = series.anomaly_count();
    if flagged > 0 {
        info!(
            "⚠️  {} score drops flagged{}.",
            flagged,
            if config.cleaning.autocorrect {
                " and corrected"
            } else {
                ""
            }
        );
    }

    Ok(PipelineOutput {
        records,
        series,
        stats,
    })
}

/// Same as [`run`] with the calendar resolver described by the config.
pub fn run_with_config(text: &str, config: &Config) -> CsResult<PipelineOutput> {
    let resolver = config.extraction.resolver();
    run(text, &resolver, config)
}
