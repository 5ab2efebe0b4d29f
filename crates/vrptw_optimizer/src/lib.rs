pub mod generator;
pub mod parsers;
pub mod piecewise;
pub mod problem;
pub mod report;
pub mod solver;
mod utils;

pub use solver::solver::solve;

#[cfg(test)]
pub(crate) mod test_utils;
