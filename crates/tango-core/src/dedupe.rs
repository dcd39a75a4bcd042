use std::collections::HashSet;

use tango_types::Record;

/// Keep the first record of every (expression, category) pair.
///
/// Returns how many records were removed. Counters are left untouched since
/// they describe lookups, not output rows.
pub fn dedupe_records(records: &mut Vec<Record>) -> usize {
    let before = records.len();
    let mut seen: HashSet<(String, String)> = HashSet::new();
    records.retain(|r| seen.insert((r.expression().to_string(), r.category().to_string())));
    before - records.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(expression: &str, meaning: &str, category: &str) -> Record {
        Record::new(expression, "よみ", meaning, category).unwrap()
    }

    #[test]
    fn test_first_occurrence_wins() {
        let mut records = vec![
            record("以下", "first", "N4"),
            record("池", "pond", "N4"),
            record("以下", "second", "N4"),
            record("以下", "other level", "N3"),
        ];

        let removed = dedupe_records(&mut records);

        assert_eq!(removed, 1);
        let meanings: Vec<&str> = records.iter().map(|r| r.meaning()).collect();
        assert_eq!(meanings, vec!["first", "pond", "other level"]);
    }
}
