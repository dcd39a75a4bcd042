use tango_lookup::RawResponse;
use tango_types::{Category, Record, ValidationRejected};

/// Turns one source response into at most one record
pub trait RecordParser: Send + Sync {
    /// Must be pure: the same response always gives the same outcome
    fn parse(&self, raw: &RawResponse, category: &Category) -> ParseOutcome;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    Parsed(Record),
    /// The source had no entry for the key
    NoMatch,
    /// An entry was found but a required field came out empty.
    /// Dropped on purpose as a data-quality filter, never a run error.
    Rejected(ValidationRejected),
}

impl ParseOutcome {
    pub fn into_record(self) -> Option<Record> {
        match self {
            ParseOutcome::Parsed(record) => Some(record),
            ParseOutcome::NoMatch | ParseOutcome::Rejected(_) => None,
        }
    }
}

impl From<Result<Record, ValidationRejected>> for ParseOutcome {
    fn from(result: Result<Record, ValidationRejected>) -> Self {
        match result {
            Ok(record) => ParseOutcome::Parsed(record),
            Err(rejected) => ParseOutcome::Rejected(rejected),
        }
    }
}
