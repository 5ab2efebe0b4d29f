use serde::Serialize;

use crate::problem::instance::Instance;

use super::{
    penalty::route_penalty,
    score::{Score, ScoreAnalysis},
    solution::{route::Route, solution::Solution},
};

/// Weights of the objective
/// `travel_weight · distance + penalty_weight · penalty + travel_weight · vehicle_cost`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ObjectiveParams {
    pub travel_weight: f64,
    pub penalty_weight: f64,
    /// A type-0 route costs `q0 · type_zero_cost_factor`.
    pub type_zero_cost_factor: i64,
    /// Flat cost of one violated time window, before `penalty_weight`.
    pub time_window_penalty: i64,
}

impl Default for ObjectiveParams {
    fn default() -> Self {
        ObjectiveParams {
            travel_weight: 0.1,
            penalty_weight: 4.0,
            type_zero_cost_factor: 20,
            time_window_penalty: 1,
        }
    }
}

impl ObjectiveParams {
    pub fn vehicle_cost(&self, instance: &Instance, route: &Route) -> f64 {
        let vehicle = route.vehicle();
        if vehicle.is_type_zero() {
            (instance.q0() * self.type_zero_cost_factor) as f64
        } else {
            // Feasibility rejects unknown vehicles before anything gets scored.
            instance.vehicle_capacity(vehicle).unwrap_or_default() as f64
        }
    }

    pub fn score(&self, distance: f64, penalty: i64, vehicle_cost: f64) -> Score {
        Score::new(
            self.travel_weight * distance
                + self.penalty_weight * penalty as f64
                + self.travel_weight * vehicle_cost,
        )
    }

    pub fn evaluate(&self, instance: &Instance, solution: &Solution) -> ScoreAnalysis {
        let (distance, penalty, vehicle_cost) =
            solution
                .routes()
                .iter()
                .fold((0.0, 0, 0.0), |(distance, penalty, vehicle_cost), route| {
                    (
                        distance + route.distance(instance),
                        penalty + route_penalty(instance, route, self.time_window_penalty),
                        vehicle_cost + self.vehicle_cost(instance, route),
                    )
                });

        ScoreAnalysis {
            score: self.score(distance, penalty, vehicle_cost),
            distance,
            penalty,
            vehicle_cost,
        }
    }
}
