pub mod jisho;
pub mod jlpt;
pub mod parser;
pub mod seeds;

pub use jisho::JishoClient;
pub use jlpt::{JlptLevel, UnknownLevel};
pub use parser::JishoParser;
pub use seeds::default_seed_groups;
