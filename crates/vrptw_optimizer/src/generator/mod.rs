pub mod case_type;
pub mod generate;

pub use case_type::CaseType;
pub use generate::{GeneratorParams, generate};
