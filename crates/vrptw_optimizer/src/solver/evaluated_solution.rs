use serde::Serialize;

use crate::problem::instance::Instance;

use super::{
    objective::ObjectiveParams,
    score::{Score, ScoreAnalysis},
    solution::solution::Solution,
};

#[derive(Clone, Debug, Serialize)]
pub struct EvaluatedSolution {
    pub solution: Solution,
    pub score_analysis: ScoreAnalysis,
}

impl EvaluatedSolution {
    pub fn evaluate(instance: &Instance, solution: Solution, objective: &ObjectiveParams) -> Self {
        let score_analysis = objective.evaluate(instance, &solution);
        EvaluatedSolution {
            solution,
            score_analysis,
        }
    }

    pub fn score(&self) -> Score {
        self.score_analysis.score
    }
}
