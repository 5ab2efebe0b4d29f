use fxhash::FxHashMap;
use jiff::{SignedDuration, Timestamp};
use serde::Serialize;

use super::score::Score;

/// One adopted neighbor.
#[derive(Debug, Clone, Serialize)]
pub struct Improvement {
    pub iteration: usize,
    pub operator: &'static str,
    pub score: Score,
    pub timestamp: Timestamp,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchStatistics {
    iterations: usize,
    neighbors_evaluated: usize,
    accepted_moves: FxHashMap<&'static str, usize>,
    score_evolution: Vec<Improvement>,
    elapsed: SignedDuration,
}

impl Default for SearchStatistics {
    fn default() -> Self {
        SearchStatistics {
            iterations: 0,
            neighbors_evaluated: 0,
            accepted_moves: FxHashMap::default(),
            score_evolution: vec![],
            elapsed: SignedDuration::ZERO,
        }
    }
}

impl SearchStatistics {
    pub fn record_iteration(&mut self, neighbors: usize) {
        self.iterations += 1;
        self.neighbors_evaluated += neighbors;
    }

    pub fn record_improvement(&mut self, improvement: &Improvement) {
        *self.accepted_moves.entry(improvement.operator).or_insert(0) += 1;
        self.score_evolution.push(improvement.clone());
    }

    pub fn set_elapsed(&mut self, elapsed: SignedDuration) {
        self.elapsed = elapsed;
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn neighbors_evaluated(&self) -> usize {
        self.neighbors_evaluated
    }

    pub fn accepted_moves(&self) -> &FxHashMap<&'static str, usize> {
        &self.accepted_moves
    }

    pub fn total_accepted_moves(&self) -> usize {
        self.accepted_moves.values().sum()
    }

    pub fn score_evolution(&self) -> &[Improvement] {
        &self.score_evolution
    }

    pub fn elapsed(&self) -> SignedDuration {
        self.elapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_improvements_per_operator() {
        let mut statistics = SearchStatistics::default();
        statistics.record_iteration(10);
        statistics.record_iteration(7);

        for (iteration, operator) in [(1, "Two-Opt"), (2, "Two-Opt"), (3, "Add-Vehicle")] {
            statistics.record_improvement(&Improvement {
                iteration,
                operator,
                score: Score::new(10.0 - iteration as f64),
                timestamp: Timestamp::now(),
            });
        }

        assert_eq!(statistics.iterations(), 2);
        assert_eq!(statistics.neighbors_evaluated(), 17);
        assert_eq!(statistics.accepted_moves().get("Two-Opt"), Some(&2));
        assert_eq!(statistics.accepted_moves().get("Add-Vehicle"), Some(&1));
        assert_eq!(statistics.total_accepted_moves(), 3);
        assert_eq!(statistics.score_evolution().len(), 3);
    }
}
