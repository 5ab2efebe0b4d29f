use jiff::Timestamp;
use parking_lot::Mutex;
use rayon::iter::{IndexedParallelIterator, IntoParallelRefIterator, ParallelIterator};
use tracing::{debug, info, instrument};

use crate::{
    problem::instance::Instance,
    solver::{
        evaluated_solution::EvaluatedSolution,
        feasibility::{RUN_SOLUTION_ASSERTIONS, validate},
        ls::neighborhood::{Neighbor, generate_neighbors},
        score::ScoreAnalysis,
        solver_params::{SolverParams, TieBreak},
        statistics::{Improvement, SearchStatistics},
    },
    timer_debug,
};

/// Steepest descent over the union of all neighborhoods.
///
/// Every iteration evaluates the whole neighborhood of the current solution on
/// `pool` and moves to the best neighbor if it improves the score by more than
/// `epsilon`. The search stops at the first iteration that does not.
pub struct LocalSearch<'a> {
    instance: &'a Instance,
    params: &'a SolverParams,
    pool: &'a rayon::ThreadPool,
}

impl<'a> LocalSearch<'a> {
    pub fn new(instance: &'a Instance, params: &'a SolverParams, pool: &'a rayon::ThreadPool) -> Self {
        LocalSearch {
            instance,
            params,
            pool,
        }
    }

    #[instrument(skip_all, level = "debug")]
    pub fn run<F>(
        &self,
        initial: EvaluatedSolution,
        statistics: &mut SearchStatistics,
        mut on_improvement: F,
    ) -> EvaluatedSolution
    where
        F: FnMut(&Improvement),
    {
        let mut current = initial;
        let mut iteration = 0;

        loop {
            iteration += 1;

            let mut neighbors = timer_debug!(
                "generate_neighbors",
                generate_neighbors(self.instance, &current.solution)
            );

            statistics.record_iteration(neighbors.len());

            let Some((index, score_analysis)) =
                timer_debug!("evaluate_neighbors", self.select_best(&neighbors))
            else {
                info!(iteration, "Empty neighborhood, stopping");
                break;
            };

            info!(
                iteration,
                neighbors = neighbors.len(),
                current = %current.score(),
                best_neighbor = %score_analysis.score,
                "Local search iteration"
            );

            if !score_analysis
                .score
                .improves_on(&current.score(), self.params.epsilon)
            {
                break;
            }

            let neighbor = neighbors.swap_remove(index);
            debug!("Apply {}", neighbor.operator_name());

            if RUN_SOLUTION_ASSERTIONS {
                let violations = validate(self.instance, &neighbor.solution);
                assert!(
                    violations.is_empty(),
                    "{} produced an invalid solution: {violations:?}",
                    neighbor.operator_name()
                );
            }

            let improvement = Improvement {
                iteration,
                operator: neighbor.operator_name(),
                score: score_analysis.score,
                timestamp: Timestamp::now(),
            };

            current = EvaluatedSolution {
                solution: neighbor.solution,
                score_analysis,
            };

            statistics.record_improvement(&improvement);
            on_improvement(&improvement);
        }

        current
    }

    /// Index and score of the best neighbor, `None` for an empty neighborhood.
    fn select_best(&self, neighbors: &[Neighbor]) -> Option<(usize, ScoreAnalysis)> {
        let objective = &self.params.objective;
        let evaluate = |neighbor: &Neighbor| objective.evaluate(self.instance, &neighbor.solution);

        self.pool.install(|| match self.params.tie_break {
            TieBreak::Any => {
                let best: Mutex<Option<(usize, ScoreAnalysis)>> = Mutex::new(None);

                neighbors.par_iter().enumerate().for_each(|(index, neighbor)| {
                    let score_analysis = evaluate(neighbor);

                    let mut best = best.lock();
                    if best
                        .as_ref()
                        .is_none_or(|(_, current)| score_analysis.score < current.score)
                    {
                        *best = Some((index, score_analysis));
                    }
                });

                best.into_inner()
            }
            TieBreak::LowestIndex => neighbors
                .par_iter()
                .enumerate()
                .map(|(index, neighbor)| (index, evaluate(neighbor)))
                .min_by(|(a_index, a), (b_index, b)| {
                    a.score.cmp(&b.score).then_with(|| a_index.cmp(b_index))
                }),
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        solver::{construction::construct_solution::construct_solution, solver_params::Threads},
        test_utils::{TestRoute, create_line_instance, create_test_solution},
    };

    use super::*;

    fn pool(threads: usize) -> rayon::ThreadPool {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .unwrap()
    }

    #[test]
    fn test_select_best_lowest_index_prefers_first_neighbor() {
        let instance = create_line_instance(4, vec![10, 10], 10);
        let params = SolverParams {
            tie_break: TieBreak::LowestIndex,
            threads: Threads::Multi(4),
            ..SolverParams::default()
        };
        let pool = pool(4);
        let search = LocalSearch::new(&instance, &params, &pool);

        let solution = create_test_solution(vec![TestRoute {
            vehicle_id: 1,
            customer_ids: vec![1, 2, 3, 4],
        }]);
        let neighbor = Neighbor {
            solution: solution.clone(),
            applied: generate_neighbors(&instance, &solution)[0].applied.clone(),
        };
        let neighbors = vec![neighbor.clone(), neighbor.clone(), neighbor];

        let (index, _) = search.select_best(&neighbors).unwrap();
        assert_eq!(index, 0);
        assert!(search.select_best(&[]).is_none());
    }

    #[test]
    fn test_run_improves_and_reports() {
        // Customers on a line served in the worst order.
        let instance = create_line_instance(5, vec![10], 10);
        let params = SolverParams::default();
        let pool = pool(2);
        let search = LocalSearch::new(&instance, &params, &pool);

        let initial = EvaluatedSolution::evaluate(
            &instance,
            create_test_solution(vec![TestRoute {
                vehicle_id: 1,
                customer_ids: vec![5, 1, 4, 2, 3],
            }]),
            &params.objective,
        );

        let mut statistics = SearchStatistics::default();
        let mut improvements = vec![];
        let best = search.run(initial.clone(), &mut statistics, |improvement| {
            improvements.push(improvement.score)
        });

        assert!(best.score() < initial.score());
        assert!(!improvements.is_empty());
        assert!(improvements.windows(2).all(|w| w[1] < w[0]));
        assert_eq!(statistics.total_accepted_moves(), improvements.len());
        assert_eq!(statistics.iterations(), improvements.len() + 1);
        assert!(validate(&instance, &best.solution).is_empty());
    }

    #[test]
    fn test_run_without_neighbors_returns_initial() {
        let instance = create_line_instance(1, vec![], 5);
        let params = SolverParams::default();
        let pool = pool(1);
        let search = LocalSearch::new(&instance, &params, &pool);

        let initial = EvaluatedSolution::evaluate(
            &instance,
            construct_solution(&instance).unwrap(),
            &params.objective,
        );

        let mut statistics = SearchStatistics::default();
        let best = search.run(initial.clone(), &mut statistics, |_| {});

        assert_eq!(best.solution, initial.solution);
        assert_eq!(statistics.iterations(), 1);
        assert_eq!(statistics.total_accepted_moves(), 0);
    }
}
