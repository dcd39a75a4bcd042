use serde_json::Value;
use tango_core::{ParseOutcome, RecordParser};
use tango_lookup::RawResponse;
use tango_types::{Category, Record};

/// Glosses kept from the first sense
const MAX_DEFINITIONS: usize = 3;
/// Part-of-speech tags kept from the first sense
const MAX_PARTS_OF_SPEECH: usize = 2;

/// Reads Jisho word-search responses:
/// `{ data: [ { japanese: [ {word, reading} ], senses: [ {english_definitions, parts_of_speech} ] } ] }`
///
/// Only the first entry, its first form and its first sense are used. Any
/// missing or mistyped field reads as empty, and the record constructor then
/// decides whether the entry is usable.
#[derive(Debug, Clone, Copy, Default)]
pub struct JishoParser;

impl RecordParser for JishoParser {
    fn parse(&self, raw: &RawResponse, category: &Category) -> ParseOutcome {
        let Some(entry) = raw
            .get("data")
            .and_then(Value::as_array)
            .and_then(|data| data.first())
        else {
            return ParseOutcome::NoMatch;
        };

        let japanese = first_of(entry, "japanese");
        let sense = first_of(entry, "senses");

        let reading = text(japanese, "reading");
        // Kana-only words have no written form; a present but empty word stays empty
        let expression = match japanese.and_then(|j| j.get("word")) {
            Some(word) => word.as_str().unwrap_or_default(),
            None => reading,
        };

        let meaning = joined(sense, "english_definitions", MAX_DEFINITIONS, "; ");
        let part_of_speech = joined(sense, "parts_of_speech", MAX_PARTS_OF_SPEECH, ", ");

        Record::new(expression, reading, meaning, category.clone())
            .map(|record| record.with_part_of_speech(part_of_speech))
            .into()
    }
}

fn first_of<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    value.get(key).and_then(Value::as_array).and_then(|a| a.first())
}

fn text<'a>(value: Option<&'a Value>, key: &str) -> &'a str {
    value
        .and_then(|v| v.get(key))
        .and_then(Value::as_str)
        .unwrap_or_default()
}

fn joined(value: Option<&Value>, key: &str, limit: usize, sep: &str) -> String {
    value
        .and_then(|v| v.get(key))
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .take(limit)
                .collect::<Vec<_>>()
                .join(sep)
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use tango_types::{RecordKind, ValidationRejected};

    use super::*;

    fn parse(raw: Value) -> ParseOutcome {
        JishoParser.parse(&raw, &"N5".to_string())
    }

    fn response(japanese: Value, senses: Value) -> Value {
        json!({ "data": [ { "japanese": japanese, "senses": senses } ] })
    }

    #[test]
    fn test_house_example() {
        let raw = response(
            json!([{ "word": "家", "reading": "いえ" }]),
            json!([{ "english_definitions": ["house", "home"], "parts_of_speech": ["Noun"] }]),
        );

        let record = parse(raw).into_record().unwrap();

        let expected = Record::new("家", "いえ", "house; home", "N5")
            .unwrap()
            .with_part_of_speech("Noun");
        assert_eq!(record, expected);
        assert_eq!(record.kind(), RecordKind::Standard);
        assert_eq!(record.romaji(), "");
        assert_eq!(record.tags(), "");
    }

    #[test]
    fn test_truncates_definitions_and_parts_of_speech() {
        let raw = response(
            json!([{ "word": "上がる", "reading": "あがる" }, { "word": "揚がる", "reading": "あがる" }]),
            json!([
                {
                    "english_definitions": ["to rise", "to go up", "to come up", "to ascend"],
                    "parts_of_speech": ["Godan verb with 'ru' ending", "Intransitive verb", "Noun"]
                },
                { "english_definitions": ["to enter"], "parts_of_speech": ["Other"] }
            ]),
        );

        let record = parse(raw).into_record().unwrap();

        assert_eq!(record.expression(), "上がる");
        assert_eq!(record.meaning(), "to rise; to go up; to come up");
        assert_eq!(
            record.part_of_speech(),
            "Godan verb with 'ru' ending, Intransitive verb"
        );
    }

    #[test]
    fn test_kana_word_falls_back_to_reading() {
        let raw = response(
            json!([{ "reading": "あなた" }]),
            json!([{ "english_definitions": ["you"], "parts_of_speech": [] }]),
        );

        let record = parse(raw).into_record().unwrap();

        assert_eq!(record.expression(), "あなた");
        assert_eq!(record.reading(), "あなた");
        assert_eq!(record.part_of_speech(), "");
    }

    #[test]
    fn test_no_data_is_no_match() {
        assert_eq!(parse(Value::Null), ParseOutcome::NoMatch);
        assert_eq!(parse(json!({ "meta": { "status": 200 }, "data": [] })), ParseOutcome::NoMatch);
        assert_eq!(parse(json!({ "meta": { "status": 200 } })), ParseOutcome::NoMatch);
        assert_eq!(parse(json!({ "data": "oops" })), ParseOutcome::NoMatch);
    }

    #[test]
    fn test_missing_fields_are_rejected() {
        let no_reading = response(
            json!([{ "word": "家" }]),
            json!([{ "english_definitions": ["house"] }]),
        );
        assert_eq!(
            parse(no_reading),
            ParseOutcome::Rejected(ValidationRejected { field: "reading" })
        );

        let no_glosses = response(
            json!([{ "word": "家", "reading": "いえ" }]),
            json!([{ "english_definitions": [], "parts_of_speech": ["Noun"] }]),
        );
        assert_eq!(
            parse(no_glosses),
            ParseOutcome::Rejected(ValidationRejected { field: "meaning" })
        );

        let no_forms = json!({ "data": [{ "senses": [{ "english_definitions": ["house"] }] }] });
        assert_eq!(
            parse(no_forms),
            ParseOutcome::Rejected(ValidationRejected { field: "expression" })
        );
    }

    #[test]
    fn test_mistyped_fields_degrade_to_empty() {
        let raw = response(
            json!([{ "word": "家", "reading": "いえ" }]),
            json!([{ "english_definitions": [null, "house", 7], "parts_of_speech": "Noun" }]),
        );

        let record = parse(raw).into_record().unwrap();

        assert_eq!(record.meaning(), "house");
        assert_eq!(record.part_of_speech(), "");
    }

    #[test]
    fn test_present_but_empty_word_is_rejected() {
        let senses = json!([{ "english_definitions": ["house"] }]);

        for word in [json!(""), Value::Null, json!(42)] {
            let raw = response(json!([{ "word": word, "reading": "いえ" }]), senses.clone());
            assert_eq!(
                parse(raw),
                ParseOutcome::Rejected(ValidationRejected {
                    field: "expression"
                })
            );
        }
    }

    #[test]
    fn test_parse_is_repeatable() {
        let raw = response(
            json!([{ "word": "猫", "reading": "ねこ" }]),
            json!([{ "english_definitions": ["cat"], "parts_of_speech": ["Noun"] }]),
        );

        assert_eq!(parse(raw.clone()), parse(raw));
    }
}
