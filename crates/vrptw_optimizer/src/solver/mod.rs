pub mod construction;
pub mod error;
pub mod evaluated_solution;
pub mod feasibility;
pub mod ls;
pub mod objective;
pub mod penalty;
pub mod score;
pub mod solution;
#[allow(clippy::module_inception)]
pub mod solver;
pub mod solver_params;
pub mod statistics;
