pub mod csv_import;
pub mod dedupe;
pub mod enrich;
pub mod output;
pub mod pacer;
pub mod parser;

pub use csv_import::{CsvImportError, import_dir, import_path, import_reader};
pub use dedupe::dedupe_records;
pub use enrich::Enricher;
pub use output::{OutputError, write_records, write_records_to_path};
pub use pacer::{FixedDelay, NoDelay, Pacer};
pub use parser::{ParseOutcome, RecordParser};
