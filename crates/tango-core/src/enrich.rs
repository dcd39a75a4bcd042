use tango_lookup::Lookup;
use tango_types::{EnrichmentResult, SeedGroup};

use crate::pacer::Pacer;
use crate::parser::{ParseOutcome, RecordParser};

/// Characters of the meaning shown in progress logs
const MEANING_PREVIEW_CHARS: usize = 30;

/// Sequential lookup → parse → aggregate driver.
///
/// One lookup is in flight at a time and the pacer runs after every lookup,
/// failed or not.
pub struct Enricher<L, P, R> {
    lookup: L,
    parser: P,
    pacer: R,
}

impl<L, P, R> Enricher<L, P, R>
where
    L: Lookup,
    P: RecordParser,
    R: Pacer,
{
    pub fn new(lookup: L, parser: P, pacer: R) -> Self {
        Self {
            lookup,
            parser,
            pacer,
        }
    }

    /// Run every key of every group, in group order then key order
    pub async fn run(&self, groups: &[SeedGroup]) -> EnrichmentResult {
        let source = self.lookup.metadata();
        tracing::info!("Enriching {} groups from {} ({})", groups.len(), source.name, source.url);

        let mut result = EnrichmentResult::new();
        for group in groups {
            self.run_group(group, &mut result).await;
        }
        result
    }

    async fn run_group(&self, group: &SeedGroup, result: &mut EnrichmentResult) {
        let category = &group.category;
        let total = group.keys.len();
        tracing::info!("Starting {} ({} words)", category, total);

        // Empty groups still show up in the summary
        result.stats_mut(category);

        for (i, key) in group.keys.iter().enumerate() {
            tracing::info!("[{}/{}] {}", i + 1, total, key);

            match self.lookup.lookup(key).await {
                Ok(raw) => match self.parser.parse(&raw, category) {
                    ParseOutcome::Parsed(record) => {
                        let preview: String =
                            record.meaning().chars().take(MEANING_PREVIEW_CHARS).collect();
                        tracing::info!("  ✓ {} - {}", record.expression(), preview);
                        result.push_record(record);
                    }
                    ParseOutcome::NoMatch => {
                        tracing::debug!("  no entry for {}", key);
                        result.stats_mut(category).record_drop();
                    }
                    ParseOutcome::Rejected(reason) => {
                        tracing::debug!("  dropped {}: {}", key, reason);
                        result.stats_mut(category).record_drop();
                    }
                },
                Err(e) => {
                    tracing::warn!("  ✗ {}", e);
                    result.stats_mut(category).record_lookup_failure();
                }
            }

            self.pacer.pause().await;
        }

        if let Some(stats) = result.stats_for(category) {
            tracing::info!(
                "Finished {}: {}/{} words",
                category,
                stats.succeeded,
                stats.attempted
            );
        }
    }
}
