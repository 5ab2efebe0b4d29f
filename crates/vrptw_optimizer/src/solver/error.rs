use thiserror::Error;

use crate::problem::customer::CustomerId;

#[derive(Error, Debug)]
pub enum SolverError {
    #[error(
        "customer {customer} has demand {demand} which exceeds the type-0 capacity {q0}, no initial solution exists"
    )]
    InfeasibleInstance {
        customer: CustomerId,
        demand: i64,
        q0: i64,
    },
    #[error("failed to build the evaluation thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
