use std::sync::Arc;

use jiff::Timestamp;
use parking_lot::Mutex;
use serde::Serialize;
use tracing::{info, instrument};

use crate::problem::instance::Instance;

use super::{
    construction::construct_solution::construct_solution,
    error::SolverError,
    evaluated_solution::EvaluatedSolution,
    ls::local_search::LocalSearch,
    solver_params::SolverParams,
    statistics::{Improvement, SearchStatistics},
};

#[derive(Clone, Debug, Serialize)]
pub struct SolveResult {
    pub initial: EvaluatedSolution,
    pub best: EvaluatedSolution,
    pub statistics: SearchStatistics,
}

type ImprovementCallback = Box<dyn FnMut(&Improvement) + Send + Sync>;

pub struct Solver {
    instance: Arc<Instance>,
    params: SolverParams,
    callbacks: Mutex<Vec<ImprovementCallback>>,
}

impl Solver {
    pub fn new(instance: Arc<Instance>, params: SolverParams) -> Self {
        Solver {
            instance,
            params,
            callbacks: Mutex::new(vec![]),
        }
    }

    /// Registers a callback run after every adopted neighbor.
    pub fn on_improvement<F>(&mut self, callback: F)
    where
        F: FnMut(&Improvement) + Send + Sync + 'static,
    {
        self.callbacks.get_mut().push(Box::new(callback));
    }

    pub fn instance(&self) -> &Instance {
        &self.instance
    }

    /// Builds the greedy initial solution and runs the local search from it.
    #[instrument(skip_all, level = "debug")]
    pub fn solve(&self) -> Result<SolveResult, SolverError> {
        let started_at = Timestamp::now();
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.params.threads.number_of_threads())
            .build()?;

        let initial = EvaluatedSolution::evaluate(
            &self.instance,
            construct_solution(&self.instance)?,
            &self.params.objective,
        );

        info!(
            routes = initial.solution.len(),
            score = %initial.score(),
            "Initial solution"
        );

        let mut statistics = SearchStatistics::default();
        let mut callbacks = self.callbacks.lock();

        let best = LocalSearch::new(&self.instance, &self.params, &pool).run(
            initial.clone(),
            &mut statistics,
            |improvement| {
                for callback in callbacks.iter_mut() {
                    callback(improvement);
                }
            },
        );

        statistics.set_elapsed(Timestamp::now().duration_since(started_at));

        info!(
            iterations = statistics.iterations(),
            routes = best.solution.len(),
            score = %best.score(),
            elapsed = ?statistics.elapsed(),
            "Local search converged"
        );

        Ok(SolveResult {
            initial,
            best,
            statistics,
        })
    }
}

/// Solves `instance` with [`SolverParams::default`].
pub fn solve(instance: &Instance) -> Result<SolveResult, SolverError> {
    Solver::new(Arc::new(instance.clone()), SolverParams::default()).solve()
}
