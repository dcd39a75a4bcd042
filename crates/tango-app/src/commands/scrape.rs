use anyhow::Context;
use tango_config::Config;
use tango_config::output::OutputConfig;
use tango_core::{Enricher, FixedDelay, Pacer};
use tango_lang_japanese::{JishoClient, JishoParser};
use tango_lookup::Lookup;
use tango_types::{EnrichmentResult, SeedGroup};

use super::finish;

/// Enrich `groups` through Jisho and write the dataset
pub async fn handle_scrape(
    config: &Config,
    groups: &[SeedGroup],
    dedupe: bool,
) -> anyhow::Result<EnrichmentResult> {
    let client = JishoClient::new(&config.lookup).context("Failed to build HTTP client")?;
    let pacer = FixedDelay::from_millis(config.lookup.delay_ms);

    scrape_with(client, pacer, groups, &config.output, dedupe).await
}

pub async fn scrape_with<L: Lookup, R: Pacer>(
    lookup: L,
    pacer: R,
    groups: &[SeedGroup],
    output: &OutputConfig,
    dedupe: bool,
) -> anyhow::Result<EnrichmentResult> {
    let enricher = Enricher::new(lookup, JishoParser, pacer);
    let result = enricher.run(groups).await;

    finish(result, output, dedupe)
}
