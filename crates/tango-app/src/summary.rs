use tango_lang_japanese::JlptLevel;
use tango_types::{CategoryStats, EnrichmentResult};

/// End-of-run counts per category, then totals
pub fn log_summary(result: &EnrichmentResult) {
    tracing::info!("Words per level:");
    for stats in &result.stats {
        log_line(&label(&stats.category), stats);
    }
    log_line("Total", &result.totals());
}

fn label(category: &str) -> String {
    category
        .parse::<JlptLevel>()
        .map(|level| level.description().to_string())
        .unwrap_or_else(|_| category.to_string())
}

fn log_line(label: &str, stats: &CategoryStats) {
    tracing::info!(
        "  {}: {}/{} (lookup failed: {}, dropped: {})",
        label,
        stats.succeeded,
        stats.attempted,
        stats.lookup_failed,
        stats.dropped
    );
}
