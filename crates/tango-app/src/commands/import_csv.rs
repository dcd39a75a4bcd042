use std::path::Path;

use anyhow::Context;
use tango_config::output::OutputConfig;
use tango_core::import_dir;
use tango_lang_japanese::JlptLevel;
use tango_types::{Category, EnrichmentResult};

use super::finish;

/// Convert `<dir>/n5.csv` .. `<dir>/n1.csv` into the dataset
pub fn handle_import_csv(
    dir: &Path,
    levels: &[JlptLevel],
    output: &OutputConfig,
    dedupe: bool,
) -> anyhow::Result<EnrichmentResult> {
    tracing::info!("Importing word lists from {}", dir.display());
    let categories: Vec<Category> = levels.iter().map(|l| l.as_str().to_string()).collect();

    let result = import_dir(dir, &categories)
        .with_context(|| format!("Failed to import CSV files from {}", dir.display()))?;

    finish(result, output, dedupe)
}
