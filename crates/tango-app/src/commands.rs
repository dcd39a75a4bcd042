use std::io::Write;

use anyhow::Context;
use tango_config::output::OutputConfig;
use tango_core::{dedupe_records, write_records, write_records_to_path};
use tango_types::EnrichmentResult;

use crate::summary::log_summary;

pub mod import_csv;
pub mod scrape;

pub use import_csv::handle_import_csv;
pub use scrape::{handle_scrape, scrape_with};

/// Shared tail of every command: optional dedupe, one write, summary
pub fn finish(
    result: EnrichmentResult,
    output: &OutputConfig,
    dedupe: bool,
) -> anyhow::Result<EnrichmentResult> {
    finish_with(result, output, dedupe, std::io::stdout().lock())
}

/// [`finish`] with `stdout` standing in for the process stdout when the
/// output path is `-`
pub fn finish_with<W: Write>(
    mut result: EnrichmentResult,
    output: &OutputConfig,
    dedupe: bool,
    stdout: W,
) -> anyhow::Result<EnrichmentResult> {
    if dedupe {
        let removed = dedupe_records(&mut result.records);
        tracing::info!("Removed {} duplicate records", removed);
    }

    if output.is_stdout() {
        write_records(&result.records, stdout, output.pretty)
            .context("Failed to write records to stdout")?;
    } else {
        write_records_to_path(&result.records, &output.path, output.pretty)
            .with_context(|| format!("Failed to write {}", output.path.display()))?;
    }

    log_summary(&result);
    Ok(result)
}
