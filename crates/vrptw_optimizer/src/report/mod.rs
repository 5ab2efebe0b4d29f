use std::fmt;

use crate::{
    problem::instance::Instance,
    solver::{evaluated_solution::EvaluatedSolution, score::ScoreAnalysis, solver::SolveResult},
};

/// Plain-text answer file: the instance summary, both route plans and the
/// objective breakdown of each.
pub struct Report<'a> {
    instance: &'a Instance,
    initial: &'a EvaluatedSolution,
    best: &'a EvaluatedSolution,
}

impl<'a> Report<'a> {
    pub fn new(instance: &'a Instance, result: &'a SolveResult) -> Self {
        Report {
            instance,
            initial: &result.initial,
            best: &result.best,
        }
    }
}

struct Details<'a>(&'a ScoreAnalysis);

impl fmt::Display for Details<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Target function value = {}", self.0.score)?;
        writeln!(f, "Total travel time = {}", self.0.distance)?;
        writeln!(f, "Total penalty = {}", self.0.penalty)?;
        writeln!(f, "Total vehicle cost = {}", self.0.vehicle_cost)
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Customers = {}, Vehicles = {}, Q0 = {}",
            self.instance.num_customers().saturating_sub(1),
            self.instance.fleet().fixed_count(),
            self.instance.q0()
        )?;
        write!(f, "Initial solution:\n{}", self.initial.solution)?;
        write!(f, "Best solution:\n{}", self.best.solution)?;
        write!(
            f,
            "Details of initial solution:\n{}",
            Details(&self.initial.score_analysis)
        )?;
        write!(
            f,
            "Details of best solution:\n{}",
            Details(&self.best.score_analysis)
        )
    }
}
