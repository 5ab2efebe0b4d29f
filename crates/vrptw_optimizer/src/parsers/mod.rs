pub mod flat_file;
pub mod parser;
