use serde::{Deserialize, Serialize};

/// Word (or term) handed to a lookup, exactly as supplied
pub type SeedKey = String;

/// Grouping label attached to every record of a seed group, e.g. "N5"
pub type Category = String;

/// One category with its ordered lookup keys
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedGroup {
    pub category: Category,
    #[serde(default)]
    pub keys: Vec<SeedKey>,
}

impl SeedGroup {
    pub fn new(category: impl Into<Category>, keys: Vec<SeedKey>) -> Self {
        Self {
            category: category.into(),
            keys,
        }
    }
}

/// Provenance marker carried by every record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    /// Unedited raw import
    #[default]
    Standard,
}

/// A required field was empty, so no record is produced
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("missing required field `{field}`")]
pub struct ValidationRejected {
    pub field: &'static str,
}

/// Validated vocabulary entry, the unit of the output dataset.
///
/// Only [`Record::new`] creates one, and it refuses blank `expression`,
/// `reading` or `meaning`. Accepted values are stored untrimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    expression: String,
    reading: String,
    meaning: String,
    category: Category,
    part_of_speech: String,
    tags: String,
    /// Neither input path supplies romaji; kept so both produce one schema
    romaji: String,
    kind: RecordKind,
}

impl Record {
    pub fn new(
        expression: impl Into<String>,
        reading: impl Into<String>,
        meaning: impl Into<String>,
        category: impl Into<Category>,
    ) -> Result<Self, ValidationRejected> {
        let expression = required("expression", expression.into())?;
        let reading = required("reading", reading.into())?;
        let meaning = required("meaning", meaning.into())?;

        Ok(Self {
            expression,
            reading,
            meaning,
            category: category.into(),
            part_of_speech: String::new(),
            tags: String::new(),
            romaji: String::new(),
            kind: RecordKind::Standard,
        })
    }

    pub fn with_part_of_speech(mut self, part_of_speech: impl Into<String>) -> Self {
        self.part_of_speech = part_of_speech.into();
        self
    }

    pub fn with_tags(mut self, tags: impl Into<String>) -> Self {
        self.tags = tags.into();
        self
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn reading(&self) -> &str {
        &self.reading
    }

    pub fn meaning(&self) -> &str {
        &self.meaning
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn part_of_speech(&self) -> &str {
        &self.part_of_speech
    }

    pub fn tags(&self) -> &str {
        &self.tags
    }

    pub fn romaji(&self) -> &str {
        &self.romaji
    }

    pub fn kind(&self) -> RecordKind {
        self.kind
    }
}

fn required(field: &'static str, value: String) -> Result<String, ValidationRejected> {
    if value.trim().is_empty() {
        return Err(ValidationRejected { field });
    }
    Ok(value)
}

/// Per-category counters.
///
/// `attempted == succeeded + lookup_failed + dropped` always holds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategoryStats {
    pub category: Category,
    pub attempted: usize,
    pub succeeded: usize,
    /// Lookup never returned a response
    pub lookup_failed: usize,
    /// Response or row yielded no valid record
    pub dropped: usize,
}

impl CategoryStats {
    pub fn new(category: impl Into<Category>) -> Self {
        Self {
            category: category.into(),
            ..Default::default()
        }
    }

    pub fn record_success(&mut self) {
        self.attempted += 1;
        self.succeeded += 1;
    }

    pub fn record_lookup_failure(&mut self) {
        self.attempted += 1;
        self.lookup_failed += 1;
    }

    pub fn record_drop(&mut self) {
        self.attempted += 1;
        self.dropped += 1;
    }

    fn absorb(&mut self, other: &CategoryStats) {
        self.attempted += other.attempted;
        self.succeeded += other.succeeded;
        self.lookup_failed += other.lookup_failed;
        self.dropped += other.dropped;
    }
}

/// Output of one run: records in input order plus counters per category
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnrichmentResult {
    pub records: Vec<Record>,
    /// Categories in first-seen order
    pub stats: Vec<CategoryStats>,
}

impl EnrichmentResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counters for `category`, created on first use
    pub fn stats_mut(&mut self, category: &str) -> &mut CategoryStats {
        let idx = match self.stats.iter().position(|s| s.category == category) {
            Some(idx) => idx,
            None => {
                self.stats.push(CategoryStats::new(category));
                self.stats.len() - 1
            }
        };
        &mut self.stats[idx]
    }

    pub fn stats_for(&self, category: &str) -> Option<&CategoryStats> {
        self.stats.iter().find(|s| s.category == category)
    }

    /// Append a record and count it as a success for its category
    pub fn push_record(&mut self, record: Record) {
        self.stats_mut(record.category()).record_success();
        self.records.push(record);
    }

    /// Append `other` after this result, summing counters of shared categories
    pub fn merge(&mut self, other: EnrichmentResult) {
        for stats in &other.stats {
            self.stats_mut(&stats.category).absorb(stats);
        }
        self.records.extend(other.records);
    }

    /// Sum of every category's counters, labelled "total"
    pub fn totals(&self) -> CategoryStats {
        let mut total = CategoryStats::new("total");
        for stats in &self.stats {
            total.absorb(stats);
        }
        total
    }
}
