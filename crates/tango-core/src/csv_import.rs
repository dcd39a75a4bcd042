use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tango_types::{Category, EnrichmentResult, Record};

#[derive(Debug, thiserror::Error)]
pub enum CsvImportError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unreadable CSV header: {0}")]
    Header(#[source] csv::Error),
}

/// One word-list row; category and kind come from the caller
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(default)]
    expression: String,
    #[serde(default)]
    reading: String,
    #[serde(default)]
    meaning: String,
    #[serde(default)]
    tags: String,
}

/// Convert a header-bearing CSV word list into records of `category`.
///
/// Rows with an empty required column, or rows that fail to decode, are
/// dropped and counted; only an unreadable header aborts the import.
pub fn import_reader<R: Read>(
    reader: R,
    category: &str,
) -> Result<EnrichmentResult, CsvImportError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    reader.headers().map_err(CsvImportError::Header)?;

    let mut result = EnrichmentResult::new();
    result.stats_mut(category);

    for (idx, row) in reader.deserialize::<CsvRow>().enumerate() {
        // Header is line 1
        let line = idx + 2;
        let row = match row {
            Ok(row) => row,
            Err(e) => {
                tracing::warn!("Skipping malformed row at line {}: {}", line, e);
                result.stats_mut(category).record_drop();
                continue;
            }
        };

        match Record::new(row.expression, row.reading, row.meaning, category) {
            Ok(record) => result.push_record(record.with_tags(row.tags)),
            Err(reason) => {
                tracing::debug!("Dropping row at line {}: {}", line, reason);
                result.stats_mut(category).record_drop();
            }
        }
    }

    Ok(result)
}

pub fn import_path(path: &Path, category: &str) -> Result<EnrichmentResult, CsvImportError> {
    let file = File::open(path).map_err(|source| CsvImportError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    import_reader(file, category)
}

/// Import `<dir>/<category in lowercase>.csv` for each category, in order.
///
/// A category without a file is skipped with a warning.
pub fn import_dir(dir: &Path, categories: &[Category]) -> Result<EnrichmentResult, CsvImportError> {
    let mut result = EnrichmentResult::new();

    for category in categories {
        let path = dir.join(format!("{}.csv", category.to_lowercase()));
        if !path.exists() {
            tracing::warn!("Skipping {} (no file at {})", category, path.display());
            result.stats_mut(category);
            continue;
        }

        let imported = import_path(&path, category)?;
        if let Some(stats) = imported.stats_for(category) {
            tracing::info!("Read {}: {}/{} rows", category, stats.succeeded, stats.attempted);
        }
        result.merge(imported);
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn test_row_gets_caller_category_and_empty_tags() {
        let csv = "expression,reading,meaning\n猫,ねこ,cat\n";
        let result = import_reader(csv.as_bytes(), "N5").unwrap();

        let expected = Record::new("猫", "ねこ", "cat", "N5").unwrap();
        assert_eq!(result.records, vec![expected]);
        assert_eq!(result.records[0].tags(), "");
        assert_eq!(result.records[0].romaji(), "");
    }

    #[test]
    fn test_tags_quotes_and_trimming() {
        let csv = "expression,reading,meaning,tags\n\
                   会う , あう ,\"to meet, to see\", JLPT_N5 \n";
        let result = import_reader(csv.as_bytes(), "N5").unwrap();

        let record = &result.records[0];
        assert_eq!(record.expression(), "会う");
        assert_eq!(record.reading(), "あう");
        assert_eq!(record.meaning(), "to meet, to see");
        assert_eq!(record.tags(), "JLPT_N5");
    }

    #[test]
    fn test_incomplete_rows_are_dropped() {
        let csv = "expression,reading,meaning,tags\n\
                   家,いえ,house,\n\
                   犬,いぬ,,\n\
                   \n\
                   池,いけ\n\
                   ,あお,blue,\n\
                   駅,えき,station,\n";
        let result = import_reader(csv.as_bytes(), "N5").unwrap();

        let expressions: Vec<&str> = result.records.iter().map(|r| r.expression()).collect();
        assert_eq!(expressions, vec!["家", "駅"]);

        let stats = result.stats_for("N5").unwrap();
        assert_eq!((stats.attempted, stats.succeeded, stats.dropped), (5, 2, 3));
    }

    #[test]
    fn test_missing_meaning_column_drops_everything() {
        let csv = "expression,reading\n家,いえ\n";
        let result = import_reader(csv.as_bytes(), "N5").unwrap();

        assert!(result.records.is_empty());
        assert_eq!(result.stats_for("N5").unwrap().dropped, 1);
    }

    #[test]
    fn test_import_dir_in_category_order() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("n5.csv"),
            "expression,reading,meaning\n家,いえ,house\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("n4.csv"),
            "expression,reading,meaning\n合う,あう,to match\n",
        )
        .unwrap();

        let categories: Vec<Category> = vec!["N4".into(), "N3".into(), "N5".into()];
        let result = import_dir(dir.path(), &categories).unwrap();

        let expressions: Vec<&str> = result.records.iter().map(|r| r.expression()).collect();
        assert_eq!(expressions, vec!["合う", "家"]);
        assert_eq!(result.records[0].category(), "N4");

        let order: Vec<&str> = result.stats.iter().map(|s| s.category.as_str()).collect();
        assert_eq!(order, vec!["N4", "N3", "N5"]);
        assert_eq!(result.stats_for("N3").unwrap().attempted, 0);
    }
}
